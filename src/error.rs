//! Validation error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! bad credentials fail at construction time rather than on the first
//! request.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Provide the shop's Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Base URL override is invalid.
    #[error("Invalid base URL '{url}'. Provide a full URL with scheme (e.g. 'https://shop.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing from the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the credentials.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_shop_domain_message_names_domain() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_required_field_message() {
        let error = ConfigError::MissingRequiredField {
            field: "access_token",
        };
        let message = error.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
