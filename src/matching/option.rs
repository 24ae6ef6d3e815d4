// src/matching/option.rs - Option value similarity: exact, whitespace,
// material/grade groups, measurement equivalence, shape/finish groups.

use once_cell::sync::Lazy;
use regex::Regex;

/// Two measurements closer than this (in millimeters) denote the same
/// value. 0.5 mm absorbs rounding between metric and imperial listings
/// ("1219 mm" vs "4 ft" differ by 0.2 mm).
pub const MEASUREMENT_TOLERANCE_MM: f64 = 0.5;

/// Material and grade synonym groups. Options sharing a group term denote
/// the same material, unless they carry conflicting numeric grades.
const MATERIAL_GROUPS: [&[&str]; 8] = [
    &["304", "ss304", "ss 304", "stainless steel 304"],
    &["316", "ss316", "ss 316", "stainless steel 316"],
    &["430", "ss430", "ss 430"],
    &["201", "ss201", "ss 201"],
    &["202", "ss202", "ss 202"],
    &["ms", "mild steel", "carbon steel"],
    &["gi", "galvanized iron"],
    &["aluminium", "aluminum"],
];

/// Shape, finish, and weave synonym groups.
const SHAPE_GROUPS: [&[&str]; 16] = [
    &["round", "circular", "circle"],
    &["square", "squared"],
    &["rectangular", "rectangle"],
    &["hexagonal", "hexagon"],
    &["flat", "flat bar"],
    &["angle", "l shape", "l-shape", "l-shaped"],
    &["channel", "c shape", "c-shape", "c-shaped"],
    &["pipe", "tube", "tubular"],
    &["slotted", "slot"],
    &["plain weave", "square weave"],
    &["twill weave", "twill"],
    &["dutch weave", "dutch woven"],
    &["mill finish", "mill"],
    &["polished", "polish", "mirror finish"],
    &["galvanized", "galvanised", "zinc coated"],
    &["anodized", "anodised"],
];

/// First numeric value plus optional length unit anywhere in the string.
static MEASUREMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(\d+(?:\.\d+)?)\s*(mm|cm|m|inch|in|ft|"|')?"#).expect("valid measurement regex")
});

/// First standalone integer token, used as the numeric grade of a material.
static GRADE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+)\b").expect("valid grade regex"));

/// Decide whether two option values denote the same underlying choice.
///
/// Rules short-circuit in order: trimmed case-insensitive equality,
/// whitespace-stripped equality, material/grade groups (with a hard reject
/// when numeric grades disagree), measurement equivalence in millimeters,
/// shape/finish groups. Empty options never match.
pub fn options_match(option_a: &str, option_b: &str) -> bool {
    let clean_a = option_a.trim().to_lowercase();
    let clean_b = option_b.trim().to_lowercase();

    if clean_a.is_empty() || clean_b.is_empty() {
        return false;
    }
    if clean_a == clean_b {
        return true;
    }

    let no_space_a: String = clean_a.split_whitespace().collect();
    let no_space_b: String = clean_b.split_whitespace().collect();
    if no_space_a == no_space_b {
        return true;
    }

    for group in &MATERIAL_GROUPS {
        let in_a = group.iter().any(|term| clean_a.contains(term));
        let in_b = group.iter().any(|term| clean_b.contains(term));
        if in_a && in_b {
            // Same material family, but a conflicting numeric grade is a
            // hard reject: "SS 304" never equals "SS 316".
            if let (Some(num_a), Some(num_b)) = (grade_number(&clean_a), grade_number(&clean_b)) {
                if num_a != num_b {
                    return false;
                }
            }
            return true;
        }
    }

    if let (Some(mm_a), Some(mm_b)) = (parse_measurement_mm(&clean_a), parse_measurement_mm(&clean_b))
    {
        if (mm_a - mm_b).abs() < MEASUREMENT_TOLERANCE_MM {
            return true;
        }
    }

    for group in &SHAPE_GROUPS {
        let in_a = group.iter().any(|term| clean_a.contains(term));
        let in_b = group.iter().any(|term| clean_b.contains(term));
        if in_a && in_b {
            return true;
        }
    }

    false
}

/// Parse the first `number [unit]` occurrence and convert it to
/// millimeters. Bare numbers are assumed to already be millimeters.
/// Returns None when the string holds no number; never errors.
pub fn parse_measurement_mm(value: &str) -> Option<f64> {
    let caps = MEASUREMENT_RE.captures(value)?;
    let number: f64 = caps.get(1)?.as_str().parse().ok()?;
    let factor = match caps.get(2).map(|m| m.as_str().to_lowercase()).as_deref() {
        Some("cm") => 10.0,
        Some("m") => 1000.0,
        Some("inch") | Some("in") | Some("\"") => 25.4,
        Some("ft") | Some("'") => 304.8,
        _ => 1.0, // mm or unitless
    };
    Some(number * factor)
}

fn grade_number(value: &str) -> Option<&str> {
    GRADE_NUMBER_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
