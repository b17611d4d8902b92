use byte_unit::Byte;
use chrono::Utc;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use strfmt::strfmt;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::config::Settings;
use crate::tools::{Context, Error, Result};

pub enum StoreResult
{
	Stored{path:PathBuf, size:u64},
	AlreadyStored{path:PathBuf},
}

/// generate the storage path for an upload from the configured filename pattern
/// only the final component of the given name is used, relative results are completed with the media root
pub fn gen_filepath(filename:&str, settings:&Settings) -> Result<PathBuf>
{
	let filename = Path::new(filename).file_name()
		.ok_or(Error::UnexpectedResult {expected:"a filename".into(),found:filename.into()})?;
	let now = Utc::now();
	let vars = HashMap::from([
		("year".to_string(), now.format("%Y").to_string()),
		("month".to_string(), now.format("%m").to_string()),
		("day".to_string(), now.format("%d").to_string()),
		("filename".to_string(), filename.to_string_lossy().to_string()),
	]);
	let path = PathBuf::from(strfmt(&settings.media.filename_pattern, &vars)?);
	if path.is_absolute() {Ok(path)}
	else {Ok(settings.media.root.join(path))}
}

/// store an upload below the media root
/// identical bytes under the same name are reported as already stored, different bytes are refused
pub async fn store(filename:&str, data:&[u8], settings:&Settings) -> Result<StoreResult>
{
	let checksum = format!("{:x}",md5::compute(data));
	let path = gen_filepath(filename, settings)?;
	if fs::try_exists(&path).await? {
		let existing = fs::read(&path).await.context(format!("reading {}",path.display()))?;
		return if format!("{:x}",md5::compute(existing.as_slice())) == checksum {
			Ok(StoreResult::AlreadyStored {path})
		} else {
			Err(Error::ChecksumErr {checksum, file:path.display().to_string()})
		}
	}
	let parent = path.parent().expect("upload path has a parent");
	fs::create_dir_all(parent).await.context(format!("creating media path {}",parent.display()))?;
	let mut file = OpenOptions::new().write(true).create_new(true).open(&path).await
		.context(format!("creating file {}",path.display()))?;
	file.write_all(data).await.context(format!("writing to file {}",path.display()))?;
	file.flush().await?;
	Ok(StoreResult::Stored {path, size:data.len() as u64})
}

/// media files below the root with their sizes, paths relative to the root
pub async fn list(root:&Path) -> Result<Vec<(PathBuf,u64)>>
{
	let mut files = Vec::new();
	let mut dirs = vec![root.to_path_buf()];
	while let Some(dir) = dirs.pop() {
		let mut entries = fs::read_dir(&dir).await?;
		while let Some(entry) = entries.next_entry().await? {
			let meta = entry.metadata().await?;
			if meta.is_dir() {
				dirs.push(entry.path());
			} else {
				let rel = entry.path().strip_prefix(root)
					.expect("walked path starts at the root").to_path_buf();
				files.push((rel, meta.len()));
			}
		}
	}
	files.sort();
	Ok(files)
}

pub async fn usage(root:&Path) -> Result<(usize, Byte)>
{
	let files = list(root).await?;
	let total:u64 = files.iter().map(|(_,size)|size).sum();
	Ok((files.len(), Byte::from(total)))
}
