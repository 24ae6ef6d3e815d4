// src/reconcile/mod.rs

pub mod options;
pub mod selector;
pub mod specs;

pub use options::reconcile_options;
pub use selector::select_buyer_isqs;
pub use specs::reconcile_specs;

/// Hard cap on reconciled and buyer-facing option lists.
pub const MAX_OPTIONS: usize = 8;
