//! Authentication primitives.
//!
//! - [`jwt`] -- bearer-token (JWT) validation. Tokens are issued elsewhere.

pub mod jwt;
