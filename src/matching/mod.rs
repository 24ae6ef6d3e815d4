// src/matching/mod.rs

pub mod name;
pub mod option;

// Re-export the two similarity predicates for cleaner imports
pub use name::{names_match, normalize_spec_name};
pub use option::options_match;
