use chrono::Utc;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use surrealdb::RecordId;

use super::DB;
use crate::tools::{slugify, Error, Result};

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct Article
{
	pub id: RecordId,
	pub slug: String,
	pub title: String,
	pub body: String,
	pub author: Option<String>,
	pub created: Datetime,
	pub updated: Option<Datetime>,
}

#[derive(Serialize)]
struct ArticleData
{
	slug: String,
	title: String,
	body: String,
	author: Option<String>,
	created: Datetime,
	updated: Option<Datetime>,
}

#[derive(Serialize)]
struct ArticlePatch
{
	title: String,
	body: String,
	updated: Datetime,
}

#[derive(Debug)]
pub enum RegisterResult
{
	Created(Article),
	Existing(Article),
}

/// register a new article under a slug derived from its title
/// an existing article with the same slug is returned untouched
pub async fn create(title:&str, body:&str, author:Option<String>) -> Result<RegisterResult>
{
	let slug = slugify(title);
	if slug.is_empty() {
		return Err(Error::UnexpectedResult {expected:"title with word characters".into(),found:title.into()});
	}
	if let Some(existing) = get(&slug).await? {
		return Ok(RegisterResult::Existing(existing));
	}
	let created:Option<Article> = DB.create(("articles", slug.as_str()))
		.content(ArticleData {
			slug: slug.clone(),
			title: title.into(),
			body: body.into(),
			author,
			created: Utc::now().into(),
			updated: None,
		}).await?;
	created.map(RegisterResult::Created).ok_or(Error::NotFound)
}

pub async fn get(slug:&str) -> Result<Option<Article>>
{
	DB.select(("articles", slug)).await.map_err(|e|e.into())
}

/// all articles, newest first
pub async fn list() -> Result<Vec<Article>>
{
	let mut result = DB.query("SELECT * FROM articles ORDER BY created DESC").await?;
	result.take(0).map_err(|e|e.into())
}

pub async fn recent(limit:usize) -> Result<Vec<Article>>
{
	let mut result = DB.query("SELECT * FROM articles ORDER BY created DESC LIMIT $limit")
		.bind(("limit", limit as i64)).await?;
	result.take(0).map_err(|e|e.into())
}

pub async fn by_author(username:&str) -> Result<Vec<Article>>
{
	let mut result = DB.query("SELECT * FROM articles WHERE author = $author ORDER BY created DESC")
		.bind(("author", username.to_string())).await?;
	result.take(0).map_err(|e|e.into())
}

pub async fn update(slug:&str, title:&str, body:&str) -> Result<Article>
{
	let updated:Option<Article> = DB.update(("articles", slug))
		.merge(ArticlePatch {
			title: title.into(),
			body: body.into(),
			updated: Utc::now().into(),
		}).await?;
	updated.ok_or(Error::IdNotFound {table:"articles".into(),id:slug.into()})
}

pub async fn remove(slug:&str) -> Result<Option<Article>>
{
	DB.delete(("articles", slug)).await.map_err(|e|e.into())
}
