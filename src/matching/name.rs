// src/matching/name.rs - Specification name normalization and similarity

use std::collections::HashSet;

/// Punctuation that separates rather than carries meaning in spec names.
const PUNCTUATION: [char; 7] = ['(', ')', '-', '_', ',', '.', ';'];

/// Token-level standardization table: variant -> canonical. Identity entries
/// matter too, because the containment rule maps inflected forms ("materials",
/// "perforations") onto their canonical token.
const STANDARDIZATIONS: [(&str, &str); 31] = [
    ("material", "material"),
    ("grade", "grade"),
    ("thk", "thickness"),
    ("thickness", "thickness"),
    ("type", "type"),
    ("shape", "shape"),
    ("size", "size"),
    ("dimension", "size"),
    ("length", "length"),
    ("width", "width"),
    ("height", "height"),
    ("dia", "diameter"),
    ("diameter", "diameter"),
    ("color", "color"),
    ("colour", "color"),
    ("finish", "finish"),
    ("surface", "finish"),
    ("weight", "weight"),
    ("wt", "weight"),
    ("capacity", "capacity"),
    ("brand", "brand"),
    ("model", "model"),
    ("quality", "quality"),
    ("standard", "standard"),
    ("specification", "spec"),
    ("perforation", "hole"),
    ("hole", "hole"),
    ("pattern", "pattern"),
    ("design", "design"),
    ("application", "application"),
    ("usage", "application"),
];

/// Product-form nouns, function words, and bare unit tokens that carry no
/// discriminative value in a spec name.
const FILLER_WORDS: [&str; 17] = [
    "sheet", "plate", "pipe", "rod", "bar", "in", "for", "of", "the", "and", "or", "mm", "cm",
    "m", "inch", "ft", "kg",
];

/// Containment mapping only applies to tokens and keys of at least this
/// length; two-letter tokens like "in" would otherwise collide with keys
/// that merely contain them.
const MIN_CONTAINMENT_LEN: usize = 3;

/// Synonym groups for name-level similarity. Two names are similar when each
/// contains a word from the same group.
const NAME_SYNONYM_GROUPS: [&[&str]; 16] = [
    &["material", "composition", "fabric"],
    &["grade", "quality", "class", "standard"],
    &["thickness", "thk", "gauge"],
    &["size", "dimension", "measurement"],
    &["diameter", "dia", "bore"],
    &["length", "long", "lng"],
    &["width", "breadth", "wide"],
    &["height", "high", "depth"],
    &["color", "colour", "shade"],
    &["finish", "surface", "coating", "polish"],
    &["weight", "wt", "mass"],
    &["type", "kind", "variety", "style"],
    &["shape", "form", "profile"],
    &["hole", "perforation", "aperture"],
    &["pattern", "design", "arrangement"],
    &["application", "use", "purpose", "usage"],
];

/// Canonicalize a free-text specification name into a comparable token
/// sequence: lowercase, strip punctuation, standardize tokens, dedupe, drop
/// filler words. Always returns a string; degenerate input yields "".
pub fn normalize_spec_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let spaced: String = lowered
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    let standardized: Vec<&str> = spaced
        .split_whitespace()
        .map(standardize_token)
        .collect();

    let mut seen = HashSet::new();
    let mut tokens = Vec::with_capacity(standardized.len());
    for token in standardized {
        if seen.insert(token) {
            tokens.push(token);
        }
    }

    tokens.retain(|t| !FILLER_WORDS.contains(t));
    tokens.join(" ")
}

/// Map a single token onto its canonical form: exact table hit first, then
/// bidirectional substring containment against table keys, else unchanged.
fn standardize_token(token: &str) -> &str {
    for (key, canonical) in &STANDARDIZATIONS {
        if token == *key {
            return canonical;
        }
    }
    if token.len() >= MIN_CONTAINMENT_LEN {
        for (key, canonical) in &STANDARDIZATIONS {
            if key.len() >= MIN_CONTAINMENT_LEN && (token.contains(key) || key.contains(token)) {
                return canonical;
            }
        }
    }
    token
}

/// Decide whether two specification names refer to the same attribute.
///
/// Rules, in order: equal normalized forms; one normalized form contained in
/// the other (intentionally loose: "size" matches "packet size"); both names
/// contain a word from a common synonym group. Empty names never match.
pub fn names_match(name_a: &str, name_b: &str) -> bool {
    let norm_a = normalize_spec_name(name_a);
    let norm_b = normalize_spec_name(name_b);

    if norm_a.is_empty() || norm_b.is_empty() {
        return false;
    }
    if norm_a == norm_b {
        return true;
    }
    if norm_a.contains(&norm_b) || norm_b.contains(&norm_a) {
        return true;
    }

    for group in &NAME_SYNONYM_GROUPS {
        let in_a = group.iter().any(|w| norm_a.contains(w));
        let in_b = group.iter().any(|w| norm_b.contains(w));
        if in_a && in_b {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_punctuation_and_standardizes() {
        assert_eq!(normalize_spec_name("Thk. (mm)"), "thickness");
        assert_eq!(normalize_spec_name("Dia"), "diameter");
        assert_eq!(normalize_spec_name("Colour"), "color");
        assert_eq!(normalize_spec_name("Wt."), "weight");
    }

    #[test]
    fn test_normalize_dedupes_and_drops_fillers() {
        assert_eq!(normalize_spec_name("Sheet Thickness"), "thickness");
        assert_eq!(normalize_spec_name("Size of the Pipe"), "size");
        // "dimension" and "size" both standardize to "size"; dedupe keeps one
        assert_eq!(normalize_spec_name("Size Dimension"), "size");
    }

    #[test]
    fn test_normalize_containment_maps_inflected_forms() {
        assert_eq!(normalize_spec_name("Perforations"), "hole");
        assert_eq!(normalize_spec_name("Materials"), "material");
    }

    #[test]
    fn test_normalize_degenerate_input() {
        assert_eq!(normalize_spec_name(""), "");
        assert_eq!(normalize_spec_name("  -_.,;()  "), "");
    }

    #[test]
    fn test_names_match_exact_and_substring() {
        assert!(names_match("Material", "material"));
        assert!(names_match("Size", "Packet Size"));
        assert!(names_match("Material", "Material Type"));
    }

    #[test]
    fn test_names_match_synonym_groups() {
        assert!(names_match("Finish", "Surface Coating"));
        assert!(names_match("Grade", "Quality Class"));
        assert!(names_match("Hole", "Perforation Type"));
        assert!(!names_match("Length", "Color"));
    }

    #[test]
    fn test_empty_names_never_match() {
        assert!(!names_match("", ""));
        assert!(!names_match("", "Material"));
        assert!(!names_match("Material", "   "));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in "[a-zA-Z0-9 ()._,;-]{0,60}") {
            let once = normalize_spec_name(&s);
            prop_assert_eq!(normalize_spec_name(&once), once);
        }

        #[test]
        fn prop_names_match_is_symmetric(a in "[a-zA-Z ().,-]{0,30}", b in "[a-zA-Z ().,-]{0,30}") {
            prop_assert_eq!(names_match(&a, &b), names_match(&b, &a));
        }
    }
}
