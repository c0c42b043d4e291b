use thiserror::Error;

pub type Result<T> = std::result::Result<T, CredentialError>;

/// Failures surfaced by credential record operations.
///
/// All variants are terminal and locally recoverable; mapping them to
/// user-visible behavior (e.g. "resend activation email" on `TokenExpired`)
/// is the caller's responsibility.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("A password must be provided")]
    EmptyPassword,

    #[error("Passwords must be at least {min} characters long")]
    TooShort { min: usize },

    /// The underlying hash primitive failed. Deliberately opaque so that
    /// infrastructure failure is distinguishable from user input failure
    /// without leaking the cause.
    #[error("Password hashing failed")]
    HashingFailed,

    /// Wrong password and a corrupt stored hash report identically to avoid
    /// acting as an oracle.
    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}
