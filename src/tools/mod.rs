pub mod account;
pub mod import;
mod error;

use itertools::Itertools;
pub use error::{Context, Error, Result, Source};

/// derive a url-safe article slug from a title
/// non-alphanumeric runs collapse into single dashes
pub fn slugify(title:&str) -> String
{
	title.chars()
		.map(|c| if c.is_ascii_alphanumeric() {c.to_ascii_lowercase()} else {'-'})
		.coalesce(|a,b| if a=='-' && b=='-' {Ok('-')} else {Err((a,b))})
		.collect::<String>()
		.trim_matches('-')
		.to_string()
}

pub fn valid_username(username:&str) -> bool
{
	(3..=32).contains(&username.len()) &&
		username.chars().all(|c|c.is_ascii_alphanumeric() || c=='-' || c=='_')
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn slugs()
	{
		assert_eq!(slugify("Hello, World!"),"hello-world");
		assert_eq!(slugify("  spaced   out  "),"spaced-out");
		assert_eq!(slugify("---"),"");
		assert_eq!(slugify("Routing & Dispatch 101"),"routing-dispatch-101");
	}

	#[test]
	fn usernames()
	{
		assert!(valid_username("jane_doe-42"));
		assert!(!valid_username("no"));
		assert!(!valid_username("has spaces"));
		assert!(!valid_username("way_too_long_to_be_a_reasonable_username"));
	}
}
