//! Request middleware.
//!
//! - [`auth::require_bearer`] -- rejects `/api` requests without a valid
//!   bearer token when a JWT secret is configured.

pub mod auth;
