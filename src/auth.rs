//! Credentials, OAuth tokens, and the per-client auth context.

pub mod context;
pub mod credentials;
pub mod secret;
pub mod token;

pub use context::*;
pub use credentials::*;
pub use secret::*;
pub use token::*;
