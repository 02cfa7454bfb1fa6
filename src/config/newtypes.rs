//! Validated newtype wrappers for client configuration values.
//!
//! Each wrapper validates its contents on construction, so a successfully
//! built value is always usable for request construction.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Admin API access token.
///
/// The token is attached to every request as the `X-Shopify-Access-Token`
/// header. The `Debug` implementation masks the value so tokens do not leak
/// into logs.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AccessToken;
///
/// let token = AccessToken::new("shpat_abc123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_abc123");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated `*.myshopify.com` shop domain.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
///
/// # Example
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain, normalizing the short format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty,
    /// contains invalid characters, or carries a non-Shopify suffix.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();
        if domain.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        let shop_name = match domain.strip_suffix(Self::SUFFIX) {
            Some(name) => name.to_string(),
            // A dot without the myshopify.com suffix means a foreign domain.
            None if domain.contains('.') => {
                return Err(ConfigError::InvalidShopDomain { domain });
            }
            None => domain.clone(),
        };

        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        Ok(Self(format!("{shop_name}{}", Self::SUFFIX)))
    }

    /// Returns the shop name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        self.0
            .strip_suffix(Self::SUFFIX)
            .unwrap_or(self.0.as_str())
    }

    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }
        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL override.
///
/// When set on [`Credentials`](crate::Credentials), every request is sent to
/// this URL instead of `https://{shop}.myshopify.com`. Used for proxies and
/// for pointing the client at a mock server in tests.
///
/// # Example
///
/// ```rust
/// use shopify_rest::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL, trimming any trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL lacks a scheme or
    /// a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        let host = &url[scheme_end + 3..];
        if scheme.is_empty()
            || !scheme.chars().all(|c| c.is_ascii_alphabetic())
            || host.is_empty()
        {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
