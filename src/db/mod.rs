use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;

use crate::tools::Result;

pub mod article;
pub mod session;
pub mod user;

pub use article::{Article, RegisterResult};
pub use session::Session;
pub use user::User;

pub static DB: LazyLock<Surreal<Any>> = LazyLock::new(Surreal::init);

/// connect the global database handle
/// `addr` may be an embedded engine ("memory", "surrealkv://<path>") or a remote server url
pub async fn init(addr:&str) -> Result<()>
{
	DB.connect(addr).await?;
	if addr.starts_with("ws") || addr.starts_with("http") {
		DB.signin(Root {
			username: "root",
			password: "root",
		}).await?;
	}
	DB.use_ns("pressbox").use_db("cms").await?;
	DB.query(include_str!("init.surql")).await?;
	Ok(())
}

pub async fn version() -> Result<String>
{
	DB.version().await
		.map(|v|v.to_string())
		.map_err(|e|e.into())
}

#[derive(Deserialize)]
struct CountRow { count: usize }

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct Stats
{
	pub articles: usize,
	pub users: usize,
	pub sessions: usize,
}

pub async fn statistics() -> Result<Stats>
{
	let mut result = DB
		.query("SELECT count() AS count FROM articles GROUP ALL")
		.query("SELECT count() AS count FROM users GROUP ALL")
		.query("SELECT count() AS count FROM sessions GROUP ALL")
		.await?;
	let articles:Vec<CountRow> = result.take(0)?;
	let users:Vec<CountRow> = result.take(1)?;
	let sessions:Vec<CountRow> = result.take(2)?;
	Ok(Stats {
		articles: articles.first().map_or(0,|r|r.count),
		users: users.first().map_or(0,|r|r.count),
		sessions: sessions.first().map_or(0,|r|r.count),
	})
}
