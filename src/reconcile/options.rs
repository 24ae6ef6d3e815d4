// src/reconcile/options.rs - Tiered merge of option lists for a matched
// specification pair.

use std::collections::HashSet;

use crate::matching::options_match;

use super::MAX_OPTIONS;

/// Merge two option lists into a bounded, deduplicated, ordered "common"
/// list. Asymmetric on purpose: the result represents the seller's own
/// options validated against website evidence, so values are always drawn
/// from `options_a` in their original casing and `options_b` acts only as a
/// filter, never as a source of new values.
///
/// Tiers, each skipped once the cap is reached:
/// 1. options with an exact case/whitespace-insensitive counterpart in B,
/// 2. options with a strong semantic counterpart in B,
/// 3. remaining A options in original (popularity) order.
pub fn reconcile_options(options_a: &[String], options_b: &[String]) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for opt_a in options_a {
        if selected.len() >= MAX_OPTIONS {
            break;
        }
        let key = dedupe_key(opt_a);
        if seen.contains(&key) {
            continue;
        }
        if options_b.iter().any(|opt_b| exact_match(opt_a, opt_b)) {
            seen.insert(key);
            selected.push(opt_a.clone());
        }
    }

    for opt_a in options_a {
        if selected.len() >= MAX_OPTIONS {
            break;
        }
        let key = dedupe_key(opt_a);
        if seen.contains(&key) {
            continue;
        }
        if options_b.iter().any(|opt_b| options_match(opt_a, opt_b)) {
            seen.insert(key);
            selected.push(opt_a.clone());
        }
    }

    for opt_a in options_a {
        if selected.len() >= MAX_OPTIONS {
            break;
        }
        let key = dedupe_key(opt_a);
        if seen.contains(&key) {
            continue;
        }
        seen.insert(key);
        selected.push(opt_a.clone());
    }

    // Residual dedupe pass: the seen-set already guards, but the output
    // contract is checked here rather than assumed.
    let mut final_seen: HashSet<String> = HashSet::new();
    selected.retain(|opt| final_seen.insert(dedupe_key(opt)));
    selected.truncate(MAX_OPTIONS);
    selected
}

/// Case-insensitive dedupe preserving first-seen casing and order.
pub fn dedupe_case_insensitive(options: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    options
        .iter()
        .filter(|opt| seen.insert(dedupe_key(opt)))
        .cloned()
        .collect()
}

fn dedupe_key(option: &str) -> String {
    option.trim().to_lowercase()
}

fn exact_match(opt_a: &str, opt_b: &str) -> bool {
    let clean_a = opt_a.trim().to_lowercase();
    let clean_b = opt_b.trim().to_lowercase();
    if clean_a == clean_b {
        return true;
    }
    let no_space_a: String = clean_a.split_whitespace().collect();
    let no_space_b: String = clean_b.split_whitespace().collect();
    no_space_a == no_space_b && !no_space_a.is_empty()
}
