// src/lib.rs

pub mod audit;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod reconcile;

pub use matching::{names_match, normalize_spec_name, options_match};
pub use models::{BuyerIsq, MatchedSpecPair, RankedSpec, Specification, WebsiteIsqs};
pub use pipeline::run_reconciliation;
