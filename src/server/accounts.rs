use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use super::html as pages;
use super::http_error::{HttpError, IntoHttpError};
use super::AppState;
use crate::db;
use crate::tools::account::{self, SESSION_COOKIE};
use crate::tools::Error;

pub(super) fn router() -> Router<AppState>
{
	Router::new()
		.route("/login/", get(login_form))
		.route("/auth/", post(authenticate))
		.route("/logout/", get(logout))
		.route("/loggedin/", get(logged_in))
		.route("/invalid/", get(invalid_login))
		.route("/register/", get(register_form).post(register))
		.route("/register_success/", get(register_success))
		.route("/{username}/", get(profile))
}

async fn login_form() -> Html<String>
{
	Html(pages::login_page().to_string())
}

#[derive(Deserialize)]
struct Credentials
{
	username: String,
	password: String,
}

async fn authenticate(
	State(state):State<AppState>,
	headers:HeaderMap,
	jar:CookieJar,
	Form(credentials):Form<Credentials>
) -> Result<(CookieJar,Redirect),HttpError>
{
	match account::login(&credentials.username,&credentials.password,&state.settings).await {
		Ok((value,_)) => {
			let cookie = Cookie::build((SESSION_COOKIE,value))
				.path("/").http_only(true)
				.build();
			Ok((jar.add(cookie), Redirect::to("/accounts/loggedin/")))
		}
		Err(Error::InvalidCredentials) => Ok((jar, Redirect::to("/accounts/invalid/"))),
		Err(e) => Err(HttpError::new(e,&headers))
	}
}

async fn logout(headers:HeaderMap, jar:CookieJar) -> Result<(CookieJar,Html<String>),HttpError>
{
	let jar = if let Some(cookie) = jar.get(SESSION_COOKIE) {
		account::logout(cookie.value()).await.into_http_error(&headers)?;
		jar.remove(Cookie::build((SESSION_COOKIE,"")).path("/").build())
	} else { jar };
	Ok((jar, Html(pages::logged_out_page().to_string())))
}

async fn logged_in(headers:HeaderMap, jar:CookieJar) -> Result<Response,HttpError>
{
	let cookie = jar.get(SESSION_COOKIE).map(|c|c.value());
	match account::session_user(cookie).await.into_http_error(&headers)? {
		Some(user) => Ok(Html(pages::logged_in_page(&user).to_string()).into_response()),
		None => Ok(Redirect::to("/accounts/login/").into_response())
	}
}

async fn invalid_login() -> Html<String>
{
	Html(pages::invalid_login_page().to_string())
}

async fn register_form() -> Html<String>
{
	Html(pages::register_page(None).to_string())
}

#[derive(Deserialize)]
struct Registration
{
	username: String,
	#[serde(default)]
	display_name: String,
	password: String,
}

async fn register(headers:HeaderMap, Form(registration):Form<Registration>) -> Result<Response,HttpError>
{
	match account::register(&registration.username,&registration.display_name,&registration.password,false).await {
		Ok(_) => Ok(Redirect::to("/accounts/register_success/").into_response()),
		Err(e@Error::UsernameTaken {..}) => {
			let page = pages::register_page(Some(&e.to_string()));
			Ok((StatusCode::CONFLICT, Html(page.to_string())).into_response())
		}
		Err(e@Error::InvalidUsername {..}) => {
			let page = pages::register_page(Some(&e.to_string()));
			Ok((StatusCode::BAD_REQUEST, Html(page.to_string())).into_response())
		}
		Err(e) => Err(HttpError::new(e,&headers))
	}
}

async fn register_success() -> Html<String>
{
	Html(pages::register_success_page().to_string())
}

async fn profile(headers:HeaderMap, Path(username):Path<String>) -> Result<Html<String>,HttpError>
{
	let user = db::user::get(&username).await.into_http_error(&headers)?
		.ok_or(Error::IdNotFound {table:"users".into(),id:username})
		.into_http_error(&headers)?;
	let articles = db::article::by_author(&user.username).await.into_http_error(&headers)?;
	Ok(Html(pages::profile_page(&user,&articles).to_string()))
}
