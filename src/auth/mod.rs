//
//  echosign
//  auth/mod.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # Authentication Layer
//!
//! OAuth 2.0 credential management for the EchoSign API.
//!
//! EchoSign uses the standard three-grant OAuth 2.0 contract:
//!
//! 1. **Authorization**: send the user to the URL built by
//!    [`Credentials::authorize_url`] and receive an authorization code on the
//!    registered redirect URI.
//! 2. **Exchange**: trade the code for an access/refresh token pair via
//!    [`Credentials::get_token`].
//! 3. **Refresh / revoke**: rotate the short-lived access token with
//!    [`Credentials::refresh_access_token`], or invalidate tokens with
//!    [`Credentials::revoke_token`].
//!
//! The three operations are deliberately separate rather than folded into one
//! "ensure valid token" call, so a refresh failure is always distinguishable
//! from a failed initial exchange.
//!
//! ## Example
//!
//! ```rust,no_run
//! use echosign::auth::Credentials;
//!
//! # async fn authenticate() -> echosign::Result<()> {
//! let mut credentials = Credentials::new("client-id", "client-secret")?;
//!
//! // 1. Send the user here and collect the code from the redirect.
//! let url = credentials.authorize_url(
//!     "https://example.com/oauth/callback",
//!     "agreement_read agreement_write",
//!     None,
//! )?;
//! println!("Authorize at: {url}");
//!
//! // 2. Exchange the code.
//! let access_token =
//!     credentials.get_token("https://example.com/oauth/callback", "the-code").await?;
//! println!("Access token: {access_token}");
//! # Ok(())
//! # }
//! ```

mod credentials;

pub use credentials::{Credentials, TokenKind, OAUTH_SITE};
