//! Domain types and pure validation logic for the clinic records service.
//!
//! Nothing in this crate touches the database; the `db` and `api` crates
//! build on the types and rules defined here.

pub mod client;
pub mod enrollment;
pub mod error;
pub mod program;
pub mod types;
pub mod validation;
