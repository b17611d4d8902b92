use futures::{stream, StreamExt};
use glob::glob;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

use crate::db::{self, RegisterResult};
use crate::tools::{Context as _, Error, Result};

pub enum ImportResult
{
	Registered{filename:String, slug:String},
	Existed{filename:String, slug:String},
	Err{filename:String, error:Error},
}

impl Serialize for ImportResult
{
	fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
		match self {
			ImportResult::Registered {filename, slug} => {
				let mut s = s.serialize_struct("registered",2)?;
				s.serialize_field("filename",filename)?;
				s.serialize_field("slug",slug)?;
				s.end()
			}
			ImportResult::Existed {filename, slug} => {
				let mut s = s.serialize_struct("existed",2)?;
				s.serialize_field("filename",filename)?;
				s.serialize_field("existing slug",slug)?;
				s.end()
			}
			ImportResult::Err {filename, error} => {
				let mut s = s.serialize_struct("failed",2)?;
				s.serialize_field("filename",filename)?;
				s.serialize_field("error",&error.to_string())?;
				s.end()
			}
		}
	}
}

/// first line is the title (leading '#'s are stripped), the rest is the body
fn split_article(content:&str) -> Option<(&str,&str)>
{
	let mut lines = content.trim_start().splitn(2,'\n');
	let title = lines.next()?.trim().trim_start_matches('#').trim();
	let body = lines.next().unwrap_or("").trim();
	if title.is_empty() {None} else {Some((title,body))}
}

async fn import_file(path:PathBuf, author:Option<String>) -> Result<RegisterResult>
{
	let content = tokio::fs::read_to_string(&path).await
		.context(format!("reading {}",path.display()))?;
	let (title, body) = split_article(&content)
		.ok_or(Error::UnexpectedResult {expected:"a title line followed by a body".into(),found:path.display().to_string()})?;
	db::article::create(title, body, author).await
}

/// register articles from all files matching the given glob pattern
pub async fn import_glob(pattern:&str, author:Option<String>) -> Result<Vec<ImportResult>>
{
	let entries:Vec<_> = glob(pattern)?.collect();
	let results = stream::iter(entries)
		.map(|entry| {
			let author = author.clone();
			async move {
				let path = match entry {
					Ok(path) => path,
					Err(e) => return ImportResult::Err {
						filename: e.path().display().to_string(),
						error: Error::IoError(e.into_error())
					},
				};
				let filename = path.display().to_string();
				match import_file(path, author).await {
					Ok(RegisterResult::Created(a)) => ImportResult::Registered {filename, slug:a.slug},
					Ok(RegisterResult::Existing(a)) => ImportResult::Existed {filename, slug:a.slug},
					Err(error) => ImportResult::Err {filename, error},
				}
			}
		})
		.buffer_unordered(8)
		.collect().await;
	Ok(results)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn splitting()
	{
		let (title,body) = split_article("# First Post\n\nSome text.\nMore text.").unwrap();
		assert_eq!(title,"First Post");
		assert_eq!(body,"Some text.\nMore text.");

		assert_eq!(split_article("Bare title"),Some(("Bare title","")));
		assert!(split_article("").is_none());
		assert!(split_article("##\nbody without title").is_none());
	}
}
