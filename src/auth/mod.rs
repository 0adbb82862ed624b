mod hasher;
mod validator;

pub use hasher::StorefrontHasher;
pub use validator::{
    ConfiguredCredentials, CredentialValidator, DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD,
};
