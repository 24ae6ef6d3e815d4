// src/pipeline.rs - Flattening of the two upstream stages into ranked
// candidates, plus the end-to-end reconciliation entry point.

use log::info;

use crate::models::{
    BuyerIsq, IsqRole, MatchedSpecPair, RankedSpec, SourceTier, Specification, WebsiteIsqs,
    WebsiteSpec,
};
use crate::reconcile::{reconcile_specs, select_buyer_isqs};

/// Flatten seller-drafted specifications into prioritized candidates.
/// Primary maps to priority 3 and Secondary to 2; Tertiary specs are
/// supplementary detail and stay out of matching. Entries with blank names
/// are zero-strength evidence and are skipped.
pub fn flatten_seller_specs(specs: &[Specification]) -> Vec<RankedSpec> {
    specs
        .iter()
        .filter(|spec| spec.tier != SourceTier::Tertiary)
        .filter(|spec| !spec.name.trim().is_empty())
        .map(|spec| RankedSpec {
            name: spec.name.clone(),
            options: spec.options.clone(),
            priority: spec.tier.priority(),
        })
        .collect()
}

/// Flatten a website extraction triple into prioritized candidates:
/// config 3, keys 2, buyers 1. Blank-named entries are skipped.
pub fn flatten_website_isqs(isqs: &WebsiteIsqs) -> Vec<RankedSpec> {
    let mut candidates = Vec::new();
    if let Some(config) = &isqs.config {
        push_website_spec(&mut candidates, config, IsqRole::Config.priority());
    }
    for key in &isqs.keys {
        push_website_spec(&mut candidates, key, IsqRole::Key.priority());
    }
    for buyer in &isqs.buyers {
        push_website_spec(&mut candidates, buyer, IsqRole::Buyer.priority());
    }
    candidates
}

fn push_website_spec(candidates: &mut Vec<RankedSpec>, spec: &WebsiteSpec, priority: u8) {
    if spec.name.trim().is_empty() {
        return;
    }
    candidates.push(RankedSpec {
        name: spec.name.clone(),
        options: spec.options.clone(),
        priority,
    });
}

/// Run the full reconciliation: flatten both sources, match and merge, then
/// select the top-N buyer ISQs. Returns both the matched pairs (for
/// display) and the buyer ISQs (the terminal artifact).
pub fn run_reconciliation(
    seller_specs: &[Specification],
    website_isqs: &WebsiteIsqs,
    buyer_isq_count: usize,
) -> (Vec<MatchedSpecPair>, Vec<BuyerIsq>) {
    let seller_candidates = flatten_seller_specs(seller_specs);
    let website_candidates = flatten_website_isqs(website_isqs);
    info!(
        "Reconciling {} seller candidates against {} website candidates",
        seller_candidates.len(),
        website_candidates.len()
    );

    let pairs = reconcile_specs(&seller_candidates, &website_candidates);
    let buyer_isqs = select_buyer_isqs(&pairs, buyer_isq_count);
    info!(
        "Reconciliation produced {} matched pairs, {} buyer ISQs",
        pairs.len(),
        buyer_isqs.len()
    );

    (pairs, buyer_isqs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InputType;

    fn spec(name: &str, options: &[&str], tier: SourceTier) -> Specification {
        Specification {
            name: name.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            tier,
            input_type: InputType::SingleSelect,
        }
    }

    fn website_spec(name: &str, options: &[&str]) -> WebsiteSpec {
        WebsiteSpec {
            name: name.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_flatten_seller_excludes_tertiary_and_blank_names() {
        let specs = vec![
            spec("Material", &["MS"], SourceTier::Primary),
            spec("Finish", &["Polished"], SourceTier::Secondary),
            spec("Brand", &["Acme"], SourceTier::Tertiary),
            spec("  ", &["x"], SourceTier::Primary),
        ];
        let flattened = flatten_seller_specs(&specs);
        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened[0].priority, 3);
        assert_eq!(flattened[1].priority, 2);
    }

    #[test]
    fn test_flatten_website_priorities() {
        let isqs = WebsiteIsqs {
            config: Some(website_spec("Material", &["MS"])),
            keys: vec![website_spec("Size", &["10 mm"]), website_spec("", &[])],
            buyers: vec![website_spec("Color", &["Red"])],
        };
        let flattened = flatten_website_isqs(&isqs);
        assert_eq!(flattened.len(), 3);
        assert_eq!(flattened[0].priority, 3);
        assert_eq!(flattened[1].priority, 2);
        assert_eq!(flattened[2].priority, 1);
    }

    #[test]
    fn test_end_to_end_material_scenario() {
        let seller = vec![spec(
            "Material",
            &["SS304", "MS", "Aluminium"],
            SourceTier::Primary,
        )];
        let website = WebsiteIsqs {
            config: Some(website_spec("Material Type", &["SS 304", "GI"])),
            ..Default::default()
        };

        let (pairs, buyer_isqs) = run_reconciliation(&seller, &website, 2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].combined_priority, 6);
        assert_eq!(buyer_isqs.len(), 1);
        assert_eq!(buyer_isqs[0].name, "Material");
        assert_eq!(buyer_isqs[0].options, vec!["SS304", "MS", "Aluminium"]);
    }

    #[test]
    fn test_end_to_end_empty_inputs() {
        let (pairs, buyer_isqs) = run_reconciliation(&[], &WebsiteIsqs::default(), 2);
        assert!(pairs.is_empty());
        assert!(buyer_isqs.is_empty());
    }

    #[test]
    fn test_option_cap_holds_end_to_end() {
        let many: Vec<String> = (1..=12).map(|i| format!("{} mm", i)).collect();
        let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let seller = vec![spec("Size", &many_refs, SourceTier::Primary)];
        let website = WebsiteIsqs {
            config: Some(website_spec("Size", &["1 mm", "2 mm"])),
            ..Default::default()
        };

        let (pairs, buyer_isqs) = run_reconciliation(&seller, &website, 2);
        assert!(pairs[0].options.len() <= 8);
        assert!(buyer_isqs[0].options.len() <= 8);
    }
}
