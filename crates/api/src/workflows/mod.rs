//! Multi-step operations that coordinate several repositories.

pub mod enrollment;
