//! Client configuration.
//!
//! [`Credentials`] carries everything a [`RequestExecutor`](crate::client::RequestExecutor)
//! needs to talk to one shop: the shop domain, the Admin API access token,
//! and optional overrides. Construction goes through [`CredentialsBuilder`],
//! which validates every field and fails fast on bad input.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::Credentials;
//!
//! let credentials = Credentials::builder()
//!     .shop("my-store")
//!     .access_token("shpat_abc123")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(credentials.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ShopDomain};

use crate::error::ConfigError;

/// Validated per-shop credentials and connection settings.
#[derive(Clone, Debug)]
pub struct Credentials {
    shop: ShopDomain,
    access_token: AccessToken,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl Credentials {
    /// Returns a new [`CredentialsBuilder`].
    #[must_use]
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::default()
    }

    /// The validated shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// The Admin API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// The base URL override, if one was set.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// The custom `User-Agent` prefix, if one was set.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`Credentials`].
///
/// `shop` and `access_token` are required; everything else is optional.
#[derive(Clone, Debug, Default)]
pub struct CredentialsBuilder {
    shop: Option<String>,
    access_token: Option<String>,
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl CredentialsBuilder {
    /// Sets the shop domain (required).
    ///
    /// Accepts either `shop-name` or `shop-name.myshopify.com`.
    #[must_use]
    pub fn shop(mut self, shop: impl Into<String>) -> Self {
        self.shop = Some(shop.into());
        self
    }

    /// Sets the Admin API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets a base URL override.
    ///
    /// When set, requests are sent to this URL instead of
    /// `https://{shop}.myshopify.com`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets a prefix prepended to the library `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Validates every field and builds the [`Credentials`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when `shop` or
    /// `access_token` was never set, or the field-specific validation error
    /// when a value fails its checks.
    pub fn build(self) -> Result<Credentials, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        let base_url = self.base_url.map(BaseUrl::new).transpose()?;

        Ok(Credentials {
            shop: ShopDomain::new(shop)?,
            access_token: AccessToken::new(access_token)?,
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
