use chrono::{Duration, Utc};

use crate::auth;
use crate::config::Settings;
use crate::db;
use crate::tools::{valid_username, Error, Result};

pub const SESSION_COOKIE:&str = "pressbox_session";

pub async fn register(username:&str, display_name:&str, password:&str, admin:bool) -> Result<db::User>
{
	if !valid_username(username) {
		return Err(Error::InvalidUsername {username:username.into()});
	}
	let display_name = if display_name.is_empty() {username} else {display_name};
	let hash = auth::hash_secret(&auth::strong_argon2(), password)?;
	db::user::create(username, display_name, hash, admin).await
}

/// check credentials and mint a session
/// the returned string is the value for the session cookie
pub async fn login(username:&str, password:&str, settings:&Settings) -> Result<(String, db::User)>
{
	let user = db::user::get(username).await?
		.ok_or(Error::InvalidCredentials)?;
	if !auth::verify_secret(&auth::strong_argon2(), password, &user.password_hash)? {
		return Err(Error::InvalidCredentials);
	}
	db::session::purge_expired().await?;

	let key = auth::generate_key();
	let token = auth::generate_token();
	let token_hash = auth::hash_secret(&auth::weak_argon2(), &token)?;
	let ttl = Duration::minutes(settings.session.ttl_minutes as i64);
	db::session::create(&key, &user.username, token_hash, ttl).await?;
	Ok((format!("{key}.{token}"), user))
}

pub async fn logout(cookie:&str) -> Result<()>
{
	if let Some((key,_)) = cookie.split_once('.') {
		db::session::remove(key).await?;
	}
	Ok(())
}

/// resolve a session cookie to its user
/// expired sessions are deleted on sight, tampered tokens resolve to nobody
pub async fn session_user(cookie:Option<&str>) -> Result<Option<db::User>>
{
	let Some((key,token)) = cookie.and_then(|c|c.split_once('.')) else {
		return Ok(None)
	};
	let Some(session) = db::session::get(key).await? else {
		return Ok(None)
	};
	if session.expires.0 < Utc::now() {
		db::session::remove(key).await?;
		return Ok(None);
	}
	if !auth::verify_secret(&auth::weak_argon2(), token, &session.token_hash)? {
		return Ok(None);
	}
	db::user::get(&session.user).await
}
