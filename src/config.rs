//! Credential configuration
//!
//! Hash cost and minimum password length are injected explicitly into the
//! operations that need them rather than living in process-wide state, so
//! hosts (and tests) can tune them without shared mutable globals.

use serde::{Deserialize, Serialize};

/// Lowest bcrypt cost the algorithm accepts. Tests use this to keep
/// hashing fast.
pub const MIN_HASH_COST: u32 = 4;

/// Highest bcrypt cost the algorithm accepts.
pub const MAX_HASH_COST: u32 = 31;

/// Tunables for password storage.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialConfig {
    /// bcrypt work factor. The default is deliberately high; lower it in
    /// test contexts to keep suites fast.
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,

    /// Minimum accepted password length in bytes.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_hash_cost() -> u32 {
    15
}

fn default_min_password_length() -> usize {
    8
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            hash_cost: default_hash_cost(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl CredentialConfig {
    /// Validate that the settings are within the ranges the hash primitive
    /// accepts.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.hash_cost) {
            return Err(format!(
                "hash_cost must be between {} and {}",
                MIN_HASH_COST, MAX_HASH_COST
            ));
        }

        if self.min_password_length == 0 {
            return Err("min_password_length must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CredentialConfig::default();
        assert_eq!(config.hash_cost, 15);
        assert_eq!(config.min_password_length, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: CredentialConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.hash_cost, 15);
        assert_eq!(config.min_password_length, 8);
    }

    #[test]
    fn test_validate_rejects_out_of_range_cost() {
        let mut config = CredentialConfig::default();

        config.hash_cost = MIN_HASH_COST - 1;
        assert!(config.validate().is_err());

        config.hash_cost = MAX_HASH_COST + 1;
        assert!(config.validate().is_err());

        config.hash_cost = MIN_HASH_COST;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_minimum_length() {
        let config = CredentialConfig {
            min_password_length: 0,
            ..CredentialConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
