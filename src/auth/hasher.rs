//! Password hashing.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

mod storefront_argon2 {
    use anyhow::{anyhow, Result};
    use argon2::{
        password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
        Argon2,
    };

    pub fn generate_b64_salt() -> Result<String> {
        let bytes: [u8; 16] = rand::random();
        let salt = SaltString::encode_b64(&bytes).map_err(|err| anyhow!("{}", err))?;
        Ok(salt.to_string())
    }

    pub fn hash<T: AsRef<str>>(plain: &[u8], b64_salt: T) -> Result<String> {
        let argon2 = Argon2::default();
        let salt = SaltString::from_b64(b64_salt.as_ref()).map_err(|err| anyhow!("{}", err))?;
        let hash_string = argon2
            .hash_password(plain, &salt)
            .map_err(|err| anyhow!("{}", err))?
            .to_string();
        Ok(hash_string)
    }

    pub fn verify<T: AsRef<str>>(plain_pw: &[u8], target_hash: T) -> Result<bool> {
        let argon2 = Argon2::default();
        let password_hash =
            PasswordHash::new(target_hash.as_ref()).map_err(|err| anyhow!("{}", err))?;
        Ok(argon2.verify_password(plain_pw, &password_hash).is_ok())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorefrontHasher {
    #[default]
    Argon2,
}

impl FromStr for StorefrontHasher {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "argon2" => Ok(StorefrontHasher::Argon2),
            _ => bail!("Unknown hasher {}", s),
        }
    }
}

impl fmt::Display for StorefrontHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorefrontHasher::Argon2 => write!(f, "argon2"),
        }
    }
}

impl StorefrontHasher {
    pub fn generate_b64_salt(&self) -> Result<String> {
        match self {
            StorefrontHasher::Argon2 => storefront_argon2::generate_b64_salt(),
        }
    }

    /// Returns a PHC string embedding the salt and the parameters.
    pub fn hash<T: AsRef<str>>(&self, plain: &[u8], b64_salt: T) -> Result<String> {
        match self {
            StorefrontHasher::Argon2 => storefront_argon2::hash(plain, b64_salt),
        }
    }

    /// Hash `plain` with a freshly generated salt.
    pub fn hash_new(&self, plain: &str) -> Result<String> {
        let salt = self.generate_b64_salt()?;
        self.hash(plain.as_bytes(), salt)
    }

    pub fn verify<P: AsRef<str>, H: AsRef<str>>(
        &self,
        plain_pw: P,
        target_hash: H,
    ) -> Result<bool> {
        match self {
            StorefrontHasher::Argon2 => {
                storefront_argon2::verify(plain_pw.as_ref().as_bytes(), target_hash)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argon2_hash() {
        let pw = "123mypw";
        let b64_salt = StorefrontHasher::Argon2.generate_b64_salt().unwrap();

        let hash1 = StorefrontHasher::Argon2
            .hash(pw.as_bytes(), &b64_salt)
            .unwrap();
        let hash2 = StorefrontHasher::Argon2
            .hash(b"123mypw", &b64_salt)
            .unwrap();
        assert_eq!(hash1, hash2);
        assert!(hash1.starts_with("$argon2"));

        assert!(StorefrontHasher::Argon2.verify("123mypw", &hash1).unwrap());
        assert!(!StorefrontHasher::Argon2.verify("not the pw", &hash1).unwrap());
    }

    #[test]
    fn salts_differ() {
        let hasher = StorefrontHasher::Argon2;
        assert_ne!(
            hasher.generate_b64_salt().unwrap(),
            hasher.generate_b64_salt().unwrap()
        );
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(StorefrontHasher::Argon2
            .verify("123456", "definitely not a phc string")
            .is_err());
    }

    #[test]
    fn parse_hasher_name() {
        assert_eq!(
            "argon2".parse::<StorefrontHasher>().unwrap(),
            StorefrontHasher::Argon2
        );
        assert!("md5".parse::<StorefrontHasher>().is_err());
        assert_eq!(StorefrontHasher::Argon2.to_string(), "argon2");
    }
}
