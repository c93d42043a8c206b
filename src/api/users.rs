//
//  echosign
//  api/users.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! User management operations.

use serde_json::Value;

use crate::api::{build_query, fetch_string, EchosignClient};
use crate::error::Result;
use crate::requests::User;

impl EchosignClient {
    /// Creates a user in the current application's account.
    ///
    /// Returns the new user's `userId`.
    pub async fn create_user(&self, user: &User) -> Result<String> {
        let response = self.post_json("user", "", user, None).await?;
        fetch_string(&response, "userId")
    }

    /// Gets all the users in the account that the caller has permission to
    /// access, filtered by email address.
    pub async fn get_users(&self, user_email: &str) -> Result<Value> {
        let query = build_query(&[("x-user-email", Some(user_email.to_string()))]);

        self.get_json("user", &query).await
    }

    /// Gets detailed information about a single user.
    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        self.get_json("user", &format!("/{user_id}")).await
    }
}
