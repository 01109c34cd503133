//! Request authentication.
//!
//! The API supports a single shared key carried in the `x-api-key` header,
//! matching how the hosted frontend talks to the permalink endpoints. When
//! no key is configured every request is accepted.

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Decides whether a request may use the permalink endpoints.
pub trait AuthProvider: Send + Sync {
    /// Check the presented API key. `None` means the header was absent.
    fn check(&self, presented: Option<&str>) -> bool;
}

/// Accepts every request.
pub struct AllowAllAuth;

impl AuthProvider for AllowAllAuth {
    fn check(&self, _presented: Option<&str>) -> bool {
        true
    }
}

/// Requires the configured key to match exactly.
pub struct ApiKeyAuth {
    key: String,
}

impl ApiKeyAuth {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl AuthProvider for ApiKeyAuth {
    fn check(&self, presented: Option<&str>) -> bool {
        presented == Some(self.key.as_str())
    }
}
