//! # Bazaar Auth
//!
//! JWT claims and token codec for the Bazaar API.
//!
//! This crate provides:
//!
//! - [`claims`]: claim structures for the two token classes
//! - [`jwt`]: token creation and verification
//!
//! # Token Classes
//!
//! - **Access Token** ([`AccessClaims`]): short-lived (15 minutes), carried
//!   on every authenticated request, never persisted server-side.
//! - **Refresh Token** ([`RefreshClaims`]): long-lived (7 days), used only
//!   to mint new access tokens, persisted in the session store.
//!
//! The two classes are signed with distinct secrets, so presenting a token
//! of one class where the other is expected fails signature verification.
//!
//! # Example
//!
//! ```ignore
//! use bazaar_auth::{create_access_token, verify_access_token};
//! use bazaar_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, &config)?;
//! let claims = verify_access_token(&token, &config)?;
//! assert_eq!(claims.sub, user_id.to_string());
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{AccessClaims, RefreshClaims};
pub use jwt::{
    create_access_token, create_refresh_token, verify_access_token, verify_refresh_token,
};
