//! Login gate.
//!
//! The shell only talks to [`CredentialValidator`], so a real identity
//! service can replace the configured single account without touching the
//! screens.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

use super::hasher::StorefrontHasher;

pub const DEFAULT_LOGIN_EMAIL: &str = "admin@admin";
pub const DEFAULT_LOGIN_PASSWORD: &str = "123456";

#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Returns Ok(true) if the email/password pair is accepted.
    /// Errors mean the check itself could not run, not a wrong password.
    async fn validate(&self, email: &str, password: &str) -> Result<bool>;
}

/// A single account whose password is kept only as an argon2 hash.
pub struct ConfiguredCredentials {
    email: String,
    password_hash: String,
    hasher: StorefrontHasher,
}

impl ConfiguredCredentials {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            hasher: StorefrontHasher::Argon2,
        }
    }

    /// Hashes `password` right away; the plain text is not retained.
    pub fn from_plain(email: impl Into<String>, password: &str) -> Result<Self> {
        let hasher = StorefrontHasher::Argon2;
        let password_hash = hasher
            .hash_new(password)
            .context("Failed to hash login password")?;
        Ok(Self {
            email: email.into(),
            password_hash,
            hasher,
        })
    }

    /// The account accepted by the original storefront.
    pub fn default_account() -> Result<Self> {
        Self::from_plain(DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD)
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[async_trait]
impl CredentialValidator for ConfiguredCredentials {
    async fn validate(&self, email: &str, password: &str) -> Result<bool> {
        if email != self.email {
            warn!("Login attempt for unknown email {}", email);
            return Ok(false);
        }

        let accepted = self
            .hasher
            .verify(password, &self.password_hash)
            .context("Could not verify the password")?;
        if accepted {
            info!("User {} logged in", email);
        } else {
            warn!("Wrong password for {}", email);
        }
        Ok(accepted)
    }
}
