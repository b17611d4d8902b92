use chrono::Utc;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use surrealdb::RecordId;

use super::DB;
use crate::tools::{Error, Result};

#[derive(Debug,Clone,Deserialize)]
pub struct User
{
	pub id: RecordId,
	pub username: String,
	pub display_name: String,
	pub(crate) password_hash: String,
	pub admin: bool,
	pub joined: Datetime,
}

#[derive(Serialize)]
struct UserData
{
	username: String,
	display_name: String,
	password_hash: String,
	admin: bool,
	joined: Datetime,
}

pub async fn create(username:&str, display_name:&str, password_hash:String, admin:bool) -> Result<User>
{
	if get(username).await?.is_some() {
		return Err(Error::UsernameTaken {username:username.into()});
	}
	let created:Option<User> = DB.create(("users", username))
		.content(UserData {
			username: username.into(),
			display_name: display_name.into(),
			password_hash,
			admin,
			joined: Utc::now().into(),
		}).await?;
	created.ok_or(Error::NotFound)
}

pub async fn get(username:&str) -> Result<Option<User>>
{
	DB.select(("users", username)).await.map_err(|e|e.into())
}

pub async fn list() -> Result<Vec<User>>
{
	let mut result = DB.query("SELECT * FROM users ORDER BY username").await?;
	result.take(0).map_err(|e|e.into())
}

/// delete a user along with all their sessions
pub async fn remove(username:&str) -> Result<Option<User>>
{
	DB.query("DELETE FROM sessions WHERE user = $user")
		.bind(("user", username.to_string())).await?;
	DB.delete(("users", username)).await.map_err(|e|e.into())
}
