//! Authentication configuration

/// Configuration for JWT issuance and validation
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC signing secret
    pub jwt_secret: String,
    /// Fixed `sub` claim written into issued tokens
    pub subject: String,
    /// Optional issuer claim (validated when set)
    pub issuer: Option<String>,
    /// Optional audience claim (validated when set)
    pub audience: Option<String>,
}
