use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::distr::{Alphanumeric, SampleString};

use crate::tools::{Error, Result};

/// argon2 instance with weaker params, suitable for short-lived session tokens
pub fn weak_argon2() -> Argon2<'static>
{
	Argon2::new(
		argon2::Algorithm::Argon2id,
		argon2::Version::V0x13,
		Params::new(13 * 1024, 2, 1, Some(64)).expect("static argon2 params"),
	)
}

/// argon2 instance with strong params, suitable for passwords
pub fn strong_argon2() -> Argon2<'static>
{
	Argon2::new(
		argon2::Algorithm::Argon2id,
		argon2::Version::V0x13,
		Params::new(19 * 1024, 3, 2, Some(64)).expect("static argon2 params"),
	)
}

pub fn hash_secret(argon2:&Argon2<'_>, secret:&str) -> Result<String>
{
	let salt = SaltString::generate(&mut OsRng);
	argon2.hash_password(secret.as_bytes(), &salt)
		.map(|h|h.to_string())
		.map_err(|e|Error::HashError(e.to_string()))
}

pub fn verify_secret(argon2:&Argon2<'_>, secret:&str, hash:&str) -> Result<bool>
{
	let parsed = PasswordHash::new(hash)
		.map_err(|e|Error::HashError(e.to_string()))?;
	Ok(argon2.verify_password(secret.as_bytes(), &parsed).is_ok())
}

/// random secret for session cookies
pub fn generate_token() -> String
{
	Alphanumeric.sample_string(&mut rand::rng(), 48)
}

/// random record key for session entries
pub fn generate_key() -> String
{
	Alphanumeric.sample_string(&mut rand::rng(), 16)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn hash_and_verify()
	{
		let argon2 = weak_argon2();
		let hash = hash_secret(&argon2, "password123").unwrap();

		assert!(verify_secret(&argon2, "password123", &hash).unwrap());
		assert!(!verify_secret(&argon2, "not the password", &hash).unwrap());
		assert!(!verify_secret(&argon2, "", &hash).unwrap());
	}

	#[test]
	fn tokens_differ()
	{
		assert_ne!(generate_token(), generate_token());
		assert_eq!(generate_key().len(), 16);
	}
}
