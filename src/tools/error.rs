use serde_json::json;
use thiserror::Error;

#[derive(Error,Debug)]
pub enum Error
{
	#[error("database error {0}")]
	DbError(#[from] surrealdb::Error),

	#[error("json error {0}")]
	JsonError(#[from] serde_json::Error),

	#[error("io error {0}")]
	IoError(#[from] std::io::Error),

	#[error("invalid configuration ({0})")]
	ConfigError(#[from] config::ConfigError),

	#[error("invalid path pattern ({0})")]
	PatternError(#[from] strfmt::FmtError),

	#[error("invalid glob pattern ({0})")]
	GlobError(#[from] glob::PatternError),

	#[error("password hashing failed ({0})")]
	HashError(String),

	#[error("{source} when {context}")]
	Context{
		source:Box<Error>,
		context:String
	},
	#[error("invalid value (expected {expected}, found {found})")]
	UnexpectedResult{
		expected: String,
		found: String,
	},
	#[error("no data found")]
	NotFound,
	#[error("no {table} entry for {id}")]
	IdNotFound{table:String,id:String},
	#[error("username {username} is already taken")]
	UsernameTaken{username:String},
	#[error("invalid username {username}")]
	InvalidUsername{username:String},
	#[error("an article {slug} already exists")]
	SlugTaken{slug:String},
	#[error("invalid username or password")]
	InvalidCredentials,
	#[error("media file {file} exists with checksum {checksum}")]
	ChecksumErr{checksum:String,file:String},
	#[error("media url {url} must be an absolute path")]
	InvalidMediaUrl{url:String},
}

impl Error {
	pub(crate) fn context<T>(self, context:T) -> Error where String:From<T>
	{
		Error::Context {source:Box::new(self),context:context.into()}
	}
	pub(crate) fn context_from<E,T>(error:E,context:T) -> Error where String:From<T>, Error:From<E>
	{
		Error::from(error).context(context)
	}
	/// innermost error this one was built from (self if there is no source chain)
	pub fn root_cause(&self) -> &Error
	{
		match self {
			Error::Context {source,..} => source.root_cause(),
			_ => self
		}
	}
	pub fn sources(&self) -> Source
	{
		Source {current:Some(self)}
	}
}

impl From<&Error> for serde_json::Value
{
	fn from(error: &Error) -> Self {
		let chain:Vec<_> = error.sources()
			.map(<dyn std::error::Error>::to_string)
			.collect();
		json!({"error":chain})
	}
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait Context{
	type V;
	fn context<C>(self,context:C) -> Result<Self::V> where String:From<C>;
}

impl<T,E> Context for std::result::Result<T,E> where Error:From<E>
{
	type V=T;

	fn context<C>(self, context: C) -> Result<Self::V> where String: From<C> {
		self.map_err(|e|Error::context_from(e,context))
	}
}

pub struct Source<'a>{
	pub current: Option<&'a (dyn std::error::Error + 'static)>
}

impl<'a> Iterator for Source<'a>
{
	type Item = &'a (dyn std::error::Error + 'static);

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.current.take();
		self.current = current.and_then(std::error::Error::source);
		current
	}
}
