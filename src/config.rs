use byte_unit::Byte;
use config::{Config, File, FileFormat::Toml};
use serde::Deserialize;
use std::path::PathBuf;

use crate::tools::{Context, Error, Result};

static CONFIG_STR:&str = r#"
[media]
url = "/media" # url prefix media files are served under, must be absolute
root = "/tmp/pressbox/media" # will be created on server start if missing
filename_pattern = "{year}/{month}/{filename}" # placement of uploads below the media root

[limits]
upload_sizelimit = "10 MiB"

[session]
ttl_minutes = 720
"#;

#[derive(Debug,Clone,Deserialize)]
pub struct Settings
{
	pub media: Media,
	pub limits: Limits,
	pub session: Session,
}

#[derive(Debug,Clone,Deserialize)]
pub struct Media
{
	pub url: String,
	pub root: PathBuf,
	pub filename_pattern: String,
}

#[derive(Debug,Clone,Deserialize)]
pub struct Limits
{
	pub upload_sizelimit: Byte,
}

#[derive(Debug,Clone,Deserialize)]
pub struct Session
{
	pub ttl_minutes: u64,
}

/// build settings from the embedded defaults and an optional config file
pub fn load(config_file:Option<PathBuf>) -> Result<Settings>
{
	let mut builder = Config::builder()
		.add_source(File::from_str(CONFIG_STR,Toml));
	if let Some(filename) = config_file {
		let filename = filename.to_str()
			.ok_or(Error::UnexpectedResult {expected:"utf-8 filename".into(),found:filename.to_string_lossy().into()})?;
		builder=builder.add_source(File::new(filename,Toml));
	}
	let settings:Settings = builder.build()?
		.try_deserialize().context("reading configuration")?;
	if !settings.media.url.starts_with('/') {
		return Err(Error::InvalidMediaUrl {url:settings.media.url});
	}
	Ok(settings)
}

pub fn write(path:PathBuf) -> Result<()>
{
	std::fs::write(path,CONFIG_STR).map_err(|e|e.into())
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn defaults_parse()
	{
		let settings = load(None).unwrap();
		assert_eq!(settings.media.url,"/media");
		assert_eq!(settings.limits.upload_sizelimit.as_u64(), 10*1024*1024);
		assert_eq!(settings.session.ttl_minutes, 720);
	}
}
