//
//  echosign
//  requests/identity.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! On-behalf-of user identity for agreement, widget, and mega-sign creation.

/// Identifies the account user on whose behalf a request is made.
///
/// When neither field is set, the upstream service infers the user from the
/// access token. At most one identifying header is ever sent: `X-User-Id`
/// takes precedence over `X-User-Email` when both are present, matching the
/// upstream documented behavior.
#[derive(Debug, Clone, Default)]
pub struct UserIdentity {
    user_id: Option<String>,
    user_email: Option<String>,
}

impl UserIdentity {
    /// An identity inferred from the access token (no extra headers).
    pub fn inferred() -> Self {
        Self::default()
    }

    /// Identifies the user by account user ID.
    pub fn from_id(user_id: impl Into<String>) -> Self {
        Self { user_id: Some(user_id.into()), user_email: None }
    }

    /// Identifies the user by email address.
    pub fn from_email(user_email: impl Into<String>) -> Self {
        Self { user_id: None, user_email: Some(user_email.into()) }
    }

    /// Builds an identity from optional id and email.
    pub fn new(user_id: Option<String>, user_email: Option<String>) -> Self {
        Self { user_id, user_email }
    }

    /// The single identifying header to attach, if any.
    pub(crate) fn header(&self) -> Option<(&'static str, &str)> {
        if let Some(id) = self.user_id.as_deref() {
            Some(("X-User-Id", id))
        } else {
            self.user_email.as_deref().map(|email| ("X-User-Email", email))
        }
    }
}
