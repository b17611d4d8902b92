use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::html as pages;
use super::http_error::{HttpError, IntoHttpError};
use super::AppState;
use crate::db;
use crate::db::Article;
use crate::tools::Error;

pub(super) fn router() -> Router<AppState>
{
	Router::new()
		.route("/", get(list))
		.route("/json", get(list_json))
		.route("/{slug}/", get(article))
		.route("/{slug}/json", get(article_json))
}

#[derive(Deserialize)]
struct ListingConfig
{
	filter:Option<String>,
	sort_by:Option<String>,
	#[serde(default)]
	sort_reverse:bool
}

async fn list(headers:HeaderMap, Query(config):Query<ListingConfig>) -> Result<Html<String>,HttpError>
{
	let mut articles = db::article::list().await.into_http_error(&headers)?;

	if let Some(filter) = config.filter
	{
		articles.retain(|a|a.title.contains(filter.as_str()));
	}
	if let Some(sort_by) = config.sort_by
	{
		match sort_by.as_str() {
			"title" => articles.sort_by(|a,b|a.title.cmp(&b.title)),
			"author" => articles.sort_by(|a,b|a.author.cmp(&b.author)),
			"created" => articles.sort_by(|a,b|a.created.0.cmp(&b.created.0)),
			_ => {}
		}
		if config.sort_reverse { articles.reverse(); }
	}
	Ok(Html(pages::article_list_page(&articles).to_string()))
}

async fn list_json(headers:HeaderMap) -> Result<Json<Vec<Article>>,HttpError>
{
	let articles = db::article::list().await.into_http_error(&headers)?;
	Ok(Json(articles))
}

async fn article(headers:HeaderMap, Path(slug):Path<String>) -> Result<Html<String>,HttpError>
{
	let article = db::article::get(&slug).await.into_http_error(&headers)?
		.ok_or(Error::IdNotFound {table:"articles".into(),id:slug})
		.into_http_error(&headers)?;
	Ok(Html(pages::article_page(&article).to_string()))
}

async fn article_json(headers:HeaderMap, Path(slug):Path<String>) -> Result<Response,HttpError>
{
	if let Some(article) = db::article::get(&slug).await.into_http_error(&headers)?
	{
		Ok(Json(article).into_response())
	} else {
		Ok((
			StatusCode::NOT_FOUND,
			Json(json!({"Status":"not found"}))
		).into_response())
	}
}
