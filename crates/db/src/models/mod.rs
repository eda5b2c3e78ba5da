//! Row structs and query projections.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the table row, plus any joined or aggregated shapes built from it. Insert
//! payloads are the validated `New*` types from `clinic_core`.

pub mod client;
pub mod enrollment;
pub mod program;
pub mod stats;
