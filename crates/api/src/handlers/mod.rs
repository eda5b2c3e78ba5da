pub mod client;
pub mod enrollment;
pub mod program;
pub mod stats;
