//! Session login and token handling
//!
//! Thin collaborator of the deployment workflow: obtains a bearer token
//! from the sessions endpoint and resolves stored tokens for later calls.

mod client;
mod token;

pub use client::{AuthClient, AuthError, Result, Session};
pub use token::{resolve_token, store_token, TOKEN_ENV};
