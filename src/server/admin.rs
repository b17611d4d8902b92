use axum::body::{Body, Bytes};
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use super::html as pages;
use super::http_error::{HttpError, InnerHttpError, IntoHttpError};
use super::AppState;
use crate::config::Settings;
use crate::db::{self, RegisterResult, DB};
use crate::media::{self, StoreResult};
use crate::tools::account::{self, SESSION_COOKIE};
use crate::tools::import::{self, ImportResult};
use crate::tools::Error;

pub(super) fn router() -> Router<AppState>
{
	Router::new()
		.route("/", get(dashboard))
		.route("/articles/", get(articles).post(create_article))
		.route("/articles/{slug}/", post(update_article))
		.route("/articles/{slug}/edit/", get(edit_article))
		.route("/articles/{slug}/delete/", post(delete_article))
		.route("/users/", get(users))
		.route("/users/{username}/delete/", post(delete_user))
		.route("/media/", get(media_listing))
		.route("/media/{filename}", post(upload_media))
		.route("/import/", post(import_articles))
		.route("/backup", get(backup))
		.layer(middleware::from_fn(admin_gate))
}

/// only admin accounts get past this, everybody else is sent to the login form
async fn admin_gate(jar:CookieJar, request:Request, next:Next) -> Response
{
	let cookie = jar.get(SESSION_COOKIE).map(|c|c.value());
	match account::session_user(cookie).await {
		Ok(Some(user)) if user.admin => next.run(request).await,
		Ok(_) => Redirect::to("/accounts/login/").into_response(),
		Err(e) => {
			tracing::error!("session lookup failed ({e})");
			StatusCode::INTERNAL_SERVER_ERROR.into_response()
		}
	}
}

async fn session_username(jar:&CookieJar) -> crate::tools::Result<Option<String>>
{
	let cookie = jar.get(SESSION_COOKIE).map(|c|c.value());
	Ok(account::session_user(cookie).await?.map(|u|u.username))
}

async fn dashboard(State(state):State<AppState>, headers:HeaderMap) -> Result<Html<String>,HttpError>
{
	let stats = db::statistics().await.into_http_error(&headers)?;
	let (media_files, media_usage) = media::usage(&state.settings.media.root).await.into_http_error(&headers)?;
	let recent = db::article::recent(5).await.into_http_error(&headers)?;
	Ok(Html(pages::dashboard_page(&stats, media_files, media_usage, &recent).to_string()))
}

async fn articles(headers:HeaderMap) -> Result<Html<String>,HttpError>
{
	let articles = db::article::list().await.into_http_error(&headers)?;
	Ok(Html(pages::admin_articles_page(&articles).to_string()))
}

#[derive(Deserialize)]
struct ArticleForm
{
	title: String,
	body: String,
}

async fn create_article(headers:HeaderMap, jar:CookieJar, Form(form):Form<ArticleForm>) -> Result<Response,HttpError>
{
	let author = session_username(&jar).await.into_http_error(&headers)?;
	match db::article::create(&form.title,&form.body,author).await.into_http_error(&headers)? {
		RegisterResult::Created(_) => Ok(Redirect::to("/admin/articles/").into_response()),
		RegisterResult::Existing(existing) =>
			Err(HttpError::new(Error::SlugTaken {slug:existing.slug},&headers))
	}
}

async fn edit_article(headers:HeaderMap, Path(slug):Path<String>) -> Result<Html<String>,HttpError>
{
	let article = db::article::get(&slug).await.into_http_error(&headers)?
		.ok_or(Error::IdNotFound {table:"articles".into(),id:slug})
		.into_http_error(&headers)?;
	Ok(Html(pages::edit_article_page(&article).to_string()))
}

async fn update_article(headers:HeaderMap, Path(slug):Path<String>, Form(form):Form<ArticleForm>) -> Result<Redirect,HttpError>
{
	db::article::update(&slug,&form.title,&form.body).await.into_http_error(&headers)?;
	Ok(Redirect::to("/admin/articles/"))
}

async fn delete_article(headers:HeaderMap, Path(slug):Path<String>) -> Result<Redirect,HttpError>
{
	db::article::remove(&slug).await.into_http_error(&headers)?
		.ok_or(Error::IdNotFound {table:"articles".into(),id:slug})
		.into_http_error(&headers)?;
	Ok(Redirect::to("/admin/articles/"))
}

async fn users(headers:HeaderMap) -> Result<Html<String>,HttpError>
{
	let users = db::user::list().await.into_http_error(&headers)?;
	Ok(Html(pages::admin_users_page(&users).to_string()))
}

async fn delete_user(headers:HeaderMap, Path(username):Path<String>) -> Result<Redirect,HttpError>
{
	db::user::remove(&username).await.into_http_error(&headers)?
		.ok_or(Error::IdNotFound {table:"users".into(),id:username})
		.into_http_error(&headers)?;
	Ok(Redirect::to("/admin/users/"))
}

async fn media_listing(State(state):State<AppState>, headers:HeaderMap) -> Result<Html<String>,HttpError>
{
	let files = media::list(&state.settings.media.root).await.into_http_error(&headers)?;
	Ok(Html(pages::admin_media_page(&files,&state.settings.media.url).to_string()))
}

fn media_url(settings:&Settings, path:&std::path::Path) -> String
{
	match path.strip_prefix(&settings.media.root) {
		Ok(rel) => format!("{}/{}",settings.media.url,rel.display()),
		Err(_) => path.display().to_string(),
	}
}

async fn upload_media(
	State(state):State<AppState>,
	headers:HeaderMap,
	Path(filename):Path<String>,
	payload:Result<Bytes,BytesRejection>
) -> Result<Response,HttpError>
{
	let bytes = payload.map_err(|e|
		HttpError::new(InnerHttpError::BadRequest {message:format!("failed to receive data {e}")},&headers))?;
	if bytes.is_empty() {
		return Err(HttpError::new(InnerHttpError::BadRequest {message:"Ignoring empty upload".into()},&headers))
	}
	match media::store(&filename,&bytes,&state.settings).await {
		Ok(StoreResult::Stored {path,size}) => Ok((StatusCode::CREATED,
			Json(json!({
				"Status":"Success",
				"Path":path.display().to_string(),
				"Url":media_url(&state.settings,&path),
				"Size":size,
			}))
		).into_response()),
		Ok(StoreResult::AlreadyStored {path}) => Ok((StatusCode::FOUND,
			Json(json!({
				"Status":"AlreadyStored",
				"Path":path.display().to_string(),
				"Url":media_url(&state.settings,&path),
			}))
		).into_response()),
		Err(e@Error::ChecksumErr {..}) => Ok((
			StatusCode::CONFLICT,
			Json(json!({
				"Status":"ConflictingChecksum",
				"Error":e.to_string(),
			}))
		).into_response()),
		Err(e) => Err(HttpError::new(e,&headers))
	}
}

async fn import_articles(headers:HeaderMap, jar:CookieJar, pattern:String) -> Result<Json<Vec<ImportResult>>,HttpError>
{
	let author = session_username(&jar).await.into_http_error(&headers)?;
	let results = import::import_glob(pattern.trim(), author).await.into_http_error(&headers)?;
	Ok(Json(results))
}

async fn backup(headers:HeaderMap) -> Result<Response,HttpError>
{
	let export = DB.export(()).await.into_http_error(&headers)?;
	Ok(Body::from_stream(export).into_response())
}
