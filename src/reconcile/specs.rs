// src/reconcile/specs.rs - Greedy one-to-one matching of two specification
// collections, with combined-priority ranking.

use std::collections::HashSet;

use log::debug;

use crate::matching::names_match;
use crate::models::{MatchedSpecPair, RankedSpec, SourceTier};

use super::reconcile_options;

/// Find best-matching pairs across two prioritized specification
/// collections and merge their options.
///
/// Matching is greedy and one-to-one: each A spec, in original order, scans
/// the not-yet-used B specs for name-similar candidates and takes the one
/// with the highest individual priority (ties go to the first encountered).
/// Emitted pairs carry `combined_priority = a + b`, the seller-side tier as
/// category, and the reconciled option list. The result is deduplicated by
/// case-insensitive name (first occurrence wins) and stably sorted by
/// combined priority, descending.
///
/// Empty inputs or zero name matches yield an empty Vec; that is a valid
/// outcome, not an error.
pub fn reconcile_specs(specs_a: &[RankedSpec], specs_b: &[RankedSpec]) -> Vec<MatchedSpecPair> {
    let mut used_b: HashSet<usize> = HashSet::new();
    let mut pairs: Vec<MatchedSpecPair> = Vec::new();

    for spec_a in specs_a {
        let mut best: Option<(usize, u8)> = None;
        for (j, spec_b) in specs_b.iter().enumerate() {
            if used_b.contains(&j) {
                continue;
            }
            if !names_match(&spec_a.name, &spec_b.name) {
                continue;
            }
            // Highest individual priority wins; first encountered on ties.
            if best.map_or(true, |(_, best_priority)| spec_b.priority > best_priority) {
                best = Some((j, spec_b.priority));
            }
        }

        if let Some((j, priority_b)) = best {
            used_b.insert(j);
            debug!(
                "Matched '{}' against '{}' (combined priority {})",
                spec_a.name,
                specs_b[j].name,
                spec_a.priority + priority_b
            );
            pairs.push(MatchedSpecPair {
                name: spec_a.name.clone(),
                category: SourceTier::from_priority(spec_a.priority),
                combined_priority: spec_a.priority + priority_b,
                options: reconcile_options(&spec_a.options, &specs_b[j].options),
            });
        }
    }

    let mut seen_names: HashSet<String> = HashSet::new();
    pairs.retain(|pair| seen_names.insert(pair.name.trim().to_lowercase()));

    // Stable sort keeps encounter order among equal priorities.
    pairs.sort_by(|a, b| b.combined_priority.cmp(&a.combined_priority));
    pairs
}
