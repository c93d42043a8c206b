//
//  echosign
//  requests/mod.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # Typed Request Bodies
//!
//! One struct per EchoSign request kind, each following the same
//! validate-then-serialize contract:
//!
//! 1. construct from an open [`Params`](crate::validate::Params) container,
//! 2. the constructor runs the structural checks from
//!    [`validate`](crate::validate) and fails before any network activity,
//! 3. the value is immutable afterward and implements `Serialize`, so a
//!    successfully constructed body always satisfies its key contract and no
//!    reader re-validates it.
//!
//! # Example
//!
//! ```rust
//! use echosign::requests::Recipient;
//! use echosign::validate::params;
//! use serde_json::json;
//!
//! let recipient =
//!     Recipient::new(params(json!({ "role": "SIGNER", "email": "a@b.com" })).unwrap()).unwrap();
//! assert_eq!(
//!     serde_json::to_value(&recipient).unwrap(),
//!     json!({ "recipientSetMemberInfos": { "email": "a@b.com" }, "recipientSetRole": "SIGNER" })
//! );
//! ```

mod agreement;
mod identity;
mod mega_sign;
mod user;
mod widget;

pub use agreement::{
    Agreement, FileInfo, FormFieldLocation, Recipient, RecipientSecurityOption, RecipientSet,
    RecipientSetMember, Reminder, RequestFormField,
};
pub use identity::UserIdentity;
pub use mega_sign::MegaSign;
pub use user::User;
pub use widget::{Widget, WidgetPersonalization, WidgetStatus};
