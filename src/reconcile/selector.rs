// src/reconcile/selector.rs - Buyer-ISQ selection from reconciled pairs.

use log::debug;

use crate::models::{BuyerIsq, MatchedSpecPair};

use super::options::dedupe_case_insensitive;

/// Default number of buyer-facing ISQs surfaced per category.
pub const DEFAULT_BUYER_ISQ_COUNT: usize = 2;

/// Select the top-N reconciled pairs as buyer-facing ISQs.
///
/// Ordering is entirely inherited from [`super::reconcile_specs`]'s
/// combined-priority sort; no re-ranking happens here. Each selected pair's
/// options get a final case-insensitive dedupe preserving first-seen casing
/// and order.
pub fn select_buyer_isqs(pairs: &[MatchedSpecPair], n: usize) -> Vec<BuyerIsq> {
    let selected: Vec<BuyerIsq> = pairs
        .iter()
        .take(n)
        .map(|pair| BuyerIsq {
            name: pair.name.clone(),
            options: dedupe_case_insensitive(&pair.options),
        })
        .collect();

    debug!(
        "Selected {} buyer ISQs from {} reconciled pairs",
        selected.len(),
        pairs.len()
    );
    selected
}
