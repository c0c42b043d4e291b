//! The credential record and its lifecycle operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::CredentialConfig;
use crate::error::{CredentialError, Result};
use crate::token::{self, IssuedToken};

/// A single identity's credential material: password hash and salt plus two
/// independent token/expiry pairs (activation and password reset).
///
/// All fields are public because they are the persistence contract with the
/// external store: hash, salt, and tokens are opaque blobs, timestamps use
/// the Unix epoch as the defined zero. Uniqueness of `identity` is enforced
/// by the store, not here.
///
/// Every operation is a synchronous, single-record transformation with no
/// I/O. Password hashing is CPU-bound and can take hundreds of milliseconds
/// at production cost settings, so callers in concurrent hosts should
/// offload [`set_password`](Self::set_password) and
/// [`verify_password`](Self::verify_password) from latency-sensitive
/// threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub identity: String,

    /// bcrypt encoding of `password ‖ salt`; empty until a password is set.
    pub password_hash: Vec<u8>,
    /// Fresh random value minted on every password change, never reused.
    pub password_salt: Vec<u8>,

    pub is_active: bool,
    pub activation_token: Vec<u8>,
    pub activation_expires: DateTime<Utc>,

    pub reset_token: Vec<u8>,
    pub reset_expires: DateTime<Utc>,
}

impl CredentialRecord {
    /// An inactive record with no password and no tokens. The epoch
    /// expiries compare as already expired.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            password_hash: Vec::new(),
            password_salt: Vec::new(),
            is_active: false,
            activation_token: Vec::new(),
            activation_expires: token::epoch(),
            reset_token: Vec::new(),
            reset_expires: token::epoch(),
        }
    }

    /// Mint a new activation token valid for 7 days, overwriting (and
    /// thereby invalidating) any previous unconsumed token. Returns the raw
    /// token for the caller's delivery collaborator.
    pub fn generate_activation_token(&mut self) -> IssuedToken {
        let issued = token::issue();
        self.activation_token = issued.token.clone().into_bytes();
        self.activation_expires = issued.expires_at;
        tracing::debug!("Activation token issued for {}", self.identity);
        issued
    }

    /// Activate the record if `candidate` matches the stored activation
    /// token and the token has not expired. On success the record becomes
    /// active and the stored token is cleared, so replaying the same token
    /// fails with [`CredentialError::InvalidToken`].
    ///
    /// The equality check runs before the expiry check. When no token was
    /// ever minted the stored token is empty and the expiry is the epoch:
    /// an empty candidate then passes the (trivial) equality check and
    /// falls through to [`CredentialError::TokenExpired`], while any
    /// non-empty candidate fails with [`CredentialError::InvalidToken`].
    pub fn activate(&mut self, candidate: &[u8]) -> Result<()> {
        if candidate != self.activation_token.as_slice() {
            return Err(CredentialError::InvalidToken);
        }

        if token::is_expired(self.activation_expires) {
            return Err(CredentialError::TokenExpired);
        }

        self.is_active = true;
        self.activation_token.clear();
        tracing::info!("Credential activated for {}", self.identity);
        Ok(())
    }

    pub fn activate_str(&mut self, candidate: &str) -> Result<()> {
        self.activate(candidate.as_bytes())
    }

    /// Mint a new password reset token valid for 7 days. Same contract as
    /// [`generate_activation_token`](Self::generate_activation_token),
    /// fully independent state.
    pub fn generate_reset_token(&mut self) -> IssuedToken {
        let issued = token::issue();
        self.reset_token = issued.token.clone().into_bytes();
        self.reset_expires = issued.expires_at;
        tracing::debug!("Reset token issued for {}", self.identity);
        issued
    }

    /// Check a candidate reset token without consuming it. Ordering and
    /// edge cases match [`activate`](Self::activate): equality first, then
    /// expiry. Whether a successful check should clear the token is the
    /// surrounding system's decision; see
    /// [`clear_reset_token`](Self::clear_reset_token).
    pub fn verify_reset_token(&self, candidate: &[u8]) -> Result<()> {
        if candidate != self.reset_token.as_slice() {
            return Err(CredentialError::InvalidToken);
        }

        if token::is_expired(self.reset_expires) {
            return Err(CredentialError::TokenExpired);
        }

        Ok(())
    }

    pub fn verify_reset_token_str(&self, candidate: &str) -> Result<()> {
        self.verify_reset_token(candidate.as_bytes())
    }

    /// Empty the reset token pair, e.g. after the surrounding system has
    /// consumed it.
    pub fn clear_reset_token(&mut self) {
        self.reset_token.clear();
        self.reset_expires = token::epoch();
    }

    /// Hash and store a new password.
    ///
    /// Validation precedes any mutation: an empty password fails with
    /// [`CredentialError::EmptyPassword`] and one shorter than
    /// `config.min_password_length` bytes with
    /// [`CredentialError::TooShort`], leaving the record untouched. Once
    /// validation passes a fresh salt replaces the stored one, then bcrypt
    /// hashes `plaintext ‖ salt` at `config.hash_cost`. The hash is only
    /// stored if hashing succeeds.
    pub fn set_password(&mut self, plaintext: &[u8], config: &CredentialConfig) -> Result<()> {
        if plaintext.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }

        if plaintext.len() < config.min_password_length {
            return Err(CredentialError::TooShort {
                min: config.min_password_length,
            });
        }

        self.password_salt = Uuid::new_v4().to_string().into_bytes();

        let hash = bcrypt::hash(self.salted(plaintext), config.hash_cost).map_err(|e| {
            tracing::error!("Password hashing failed for {}: {}", self.identity, e);
            CredentialError::HashingFailed
        })?;

        self.password_hash = hash.into_bytes();
        Ok(())
    }

    pub fn set_password_str(&mut self, plaintext: &str, config: &CredentialConfig) -> Result<()> {
        self.set_password(plaintext.as_bytes(), config)
    }

    /// Verify a candidate password against the stored hash using bcrypt's
    /// constant-time comparison. Never mutates the record. All failure
    /// modes, including a corrupt or empty stored hash, report the single
    /// generic [`CredentialError::PasswordMismatch`].
    pub fn verify_password(&self, candidate: &[u8]) -> Result<()> {
        let stored = std::str::from_utf8(&self.password_hash)
            .map_err(|_| CredentialError::PasswordMismatch)?;

        match bcrypt::verify(self.salted(candidate), stored) {
            Ok(true) => Ok(()),
            Ok(false) | Err(_) => Err(CredentialError::PasswordMismatch),
        }
    }

    pub fn verify_password_str(&self, candidate: &str) -> Result<()> {
        self.verify_password(candidate.as_bytes())
    }

    /// The hash input: plaintext with the record's salt appended.
    fn salted(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut input = Vec::with_capacity(plaintext.len() + self.password_salt.len());
        input.extend_from_slice(plaintext);
        input.extend_from_slice(&self.password_salt);
        input
    }
}
