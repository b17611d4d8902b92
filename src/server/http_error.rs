use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use mime::Mime;
use thiserror::Error;

use crate::tools;

#[derive(Error,Debug)]
pub enum InnerHttpError {
	#[error("internal error {0}")]
	Internal(#[source] tools::Error),
	#[error("Bad request {message}")]
	BadRequest {message:String},
}

impl<T> From<T> for InnerHttpError
where tools::Error:From<T>
{
	fn from(error: T) -> Self
	{
		InnerHttpError::Internal(error.into())
	}
}

impl InnerHttpError
{
	fn internal_status_code(error:&tools::Error) -> StatusCode
	{
		match error.root_cause() {
			tools::Error::NotFound | tools::Error::IdNotFound {..} => StatusCode::NOT_FOUND,
			tools::Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
			tools::Error::UsernameTaken {..} | tools::Error::SlugTaken {..} | tools::Error::ChecksumErr {..} => StatusCode::CONFLICT,
			tools::Error::InvalidUsername {..} => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR
		}
	}
	pub fn status_code(&self) -> StatusCode
	{
		match &self {
			InnerHttpError::Internal(e) => Self::internal_status_code(e),
			InnerHttpError::BadRequest { .. } => StatusCode::BAD_REQUEST
		}
	}
	pub fn do_trace(&self)
	{
		match self {
			InnerHttpError::Internal(e) => {
				match e.root_cause() {
					tools::Error::IdNotFound {id,..} => tracing::debug!("{id} reported as not found"),
					tools::Error::InvalidCredentials => tracing::debug!("rejected login attempt"),
					_ => tracing::error!("internal error {} reported (root cause '{}')", e, e.root_cause()),
				}
			}
			_ => tracing::error!("http error {} reported", self),
		}
	}
}

pub struct HttpError
{
	inner: InnerHttpError,
	mime: Option<Mime>
}

impl HttpError
{
	pub fn new<T>(error:T, headers:&HeaderMap<HeaderValue>)->Self where InnerHttpError:From<T>
	{
		HttpError {inner: InnerHttpError::from(error),mime:get_mime(headers)}
	}
}

pub(crate) fn get_mime(headers:&HeaderMap<HeaderValue>) -> Option<Mime>
{
	headers.get(header::ACCEPT)?.to_str().ok()?
		.split(',').next()?
		.trim().parse().ok()
}

pub(crate) fn is_json(mime:&Mime) -> bool
{
	mime.subtype() == mime::JSON || mime.suffix().is_some_and(|s|s == mime::JSON)
}

impl IntoResponse for HttpError {
	fn into_response(self) -> Response {
		self.inner.do_trace();
		let status_code = self.inner.status_code();
		if self.mime.is_some_and(|m|is_json(&m)) {
			let err = match &self.inner {
				InnerHttpError::Internal(e) => serde_json::Value::from(e),
				InnerHttpError::BadRequest {..} => serde_json::Value::String(self.inner.to_string()),
			};
			(status_code,Json(err)).into_response()
		} else {
			let sources:Vec<_> = tools::Source { current: Some( &self.inner ) }
				.map(<dyn std::error::Error>::to_string)
				.collect();
			(
				status_code,
				sources.join("\n")
			).into_response()
		}
	}
}

pub trait IntoHttpError{
	type V;
	fn into_http_error(self,headers:&HeaderMap<HeaderValue>) -> Result<Self::V, HttpError>;
}

impl<T,E> IntoHttpError for Result<T,E> where InnerHttpError:From<E>
{
	type V=T;

	fn into_http_error(self, headers: &HeaderMap<HeaderValue>) -> Result<Self::V, HttpError> {
		self.map_err(|err| HttpError::new(err, headers))
	}
}
