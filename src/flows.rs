//! OAuth 1.0a three-legged handshake orchestrated on top of [`Client`](crate::client::Client).
//!
//! The flow moves the shared [`AuthContext`](crate::auth::AuthContext) through
//! `Unauthenticated → RequestTokenIssued → UserAuthorized → Authenticated`. Every step that
//! touches flow state holds the client's async flow guard, so concurrent handshakes on clones of
//! one client cannot interleave their writes.

pub mod authorize;
pub mod identity;

mod access_token;
mod common;
mod request_token;

pub use authorize::*;
pub use identity::*;
