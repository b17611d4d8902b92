#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use pressbox::{config, db, server};
use tower::ServiceExt;

/// in-memory database plus a router with a throwaway media root
pub async fn init_app() -> Result<Router, Box<dyn std::error::Error>>
{
	db::init("memory").await?;
	let mut settings = config::load(None)?;
	settings.media.root = std::env::temp_dir()
		.join(format!("pressbox_test_{}",rand::random::<u32>()));
	Ok(server::app(settings).await?)
}

pub async fn request(app:&Router, request:Request<Body>) -> Response<Body>
{
	app.clone().oneshot(request).await.expect("router requests are infallible")
}

pub async fn get(app:&Router, uri:&str) -> Response<Body>
{
	request(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_authed(app:&Router, uri:&str, cookie:&str) -> Response<Body>
{
	let req = Request::get(uri)
		.header(header::COOKIE, cookie)
		.body(Body::empty()).unwrap();
	request(app, req).await
}

pub async fn post_form(app:&Router, uri:&str, form:&str, cookie:Option<&str>) -> Response<Body>
{
	let mut builder = Request::post(uri)
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	request(app, builder.body(Body::from(form.to_string())).unwrap()).await
}

/// the session cookie pair set by a login response
pub fn session_cookie<T>(response:&Response<T>) -> String
{
	response.headers().get(header::SET_COOKIE)
		.expect("response should set a session cookie")
		.to_str().unwrap()
		.split(';').next().unwrap()
		.to_string()
}

pub async fn body_string(response:Response<Body>) -> String
{
	let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body should be readable");
	String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
