use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use surrealdb::RecordId;

use super::DB;
use crate::tools::{Error, Result};

#[derive(Debug,Clone,Deserialize)]
pub struct Session
{
	pub id: RecordId,
	pub key: String,
	pub user: String,
	pub(crate) token_hash: String,
	pub expires: Datetime,
}

#[derive(Serialize)]
struct SessionData
{
	key: String,
	user: String,
	token_hash: String,
	expires: Datetime,
}

pub async fn create(key:&str, user:&str, token_hash:String, ttl:Duration) -> Result<Session>
{
	let created:Option<Session> = DB.create(("sessions", key))
		.content(SessionData {
			key: key.into(),
			user: user.into(),
			token_hash,
			expires: (Utc::now()+ttl).into(),
		}).await?;
	created.ok_or(Error::NotFound)
}

pub async fn get(key:&str) -> Result<Option<Session>>
{
	DB.select(("sessions", key)).await.map_err(|e|e.into())
}

pub async fn remove(key:&str) -> Result<Option<Session>>
{
	DB.delete(("sessions", key)).await.map_err(|e|e.into())
}

pub async fn purge_expired() -> Result<()>
{
	DB.query("DELETE FROM sessions WHERE expires < time::now()").await?;
	Ok(())
}
