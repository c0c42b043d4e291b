//! Credential record core
//!
//! A single identity's credential material and its lifecycle operations:
//! salted adaptive password hashing and verification (bcrypt), account
//! activation via a time-limited token, and password reset via an
//! independent time-limited token.
//!
//! Persistence, transport, and token delivery are external collaborators;
//! this crate only transforms and classifies. A typical flow:
//!
//! ```
//! use credential_core::{CredentialConfig, CredentialRecord};
//!
//! let config = CredentialConfig {
//!     hash_cost: credential_core::config::MIN_HASH_COST, // test-speed cost
//!     ..CredentialConfig::default()
//! };
//!
//! let mut record = CredentialRecord::new("user@example.com");
//! record.set_password_str("correct horse", &config)?;
//!
//! let issued = record.generate_activation_token();
//! // ... deliver issued.token out of band, then:
//! record.activate_str(&issued.token)?;
//! assert!(record.is_active);
//!
//! record.verify_password_str("correct horse")?;
//! # Ok::<(), credential_core::CredentialError>(())
//! ```

pub mod config;
pub mod credential;
pub mod error;
pub mod token;

pub use config::CredentialConfig;
pub use credential::CredentialRecord;
pub use error::{CredentialError, Result};
pub use token::IssuedToken;
