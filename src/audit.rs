// src/audit.rs - Matching audit findings back to drafted specifications.
//
// The audit stage reports on free-text specification names; for display the
// findings are tied back to the drafted specs with the same name-similarity
// rule the reconciler uses. Presentation concern only: this never feeds
// back into reconciliation output.

use log::debug;

use crate::matching::names_match;
use crate::models::{AuditFinding, Specification};

/// For each finding, the index of the first drafted specification whose
/// name is similar, preserving finding order. Findings that match nothing
/// map to None; callers render those as unmatched rather than failing.
pub fn match_audit_findings(
    findings: &[AuditFinding],
    specs: &[Specification],
) -> Vec<Option<usize>> {
    findings
        .iter()
        .map(|finding| {
            let matched = specs
                .iter()
                .position(|spec| names_match(&finding.specification, &spec.name));
            if matched.is_none() {
                debug!(
                    "Audit finding '{}' matched no drafted specification",
                    finding.specification
                );
            }
            matched
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditStatus, InputType, SourceTier};

    fn spec(name: &str) -> Specification {
        Specification {
            name: name.to_string(),
            options: vec![],
            tier: SourceTier::Primary,
            input_type: InputType::SingleSelect,
        }
    }

    fn finding(name: &str) -> AuditFinding {
        AuditFinding {
            specification: name.to_string(),
            status: AuditStatus::Incorrect,
            explanation: None,
            problematic_options: vec![],
        }
    }

    #[test]
    fn test_findings_match_by_similarity_not_equality() {
        let specs = vec![spec("Material"), spec("Thk. (mm)")];
        let findings = vec![finding("Material Type"), finding("Thickness")];

        let matches = match_audit_findings(&findings, &specs);
        assert_eq!(matches, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_unmatched_finding_is_none() {
        let specs = vec![spec("Material")];
        let findings = vec![finding("Voltage")];

        assert_eq!(match_audit_findings(&findings, &specs), vec![None]);
    }

    #[test]
    fn test_first_similar_spec_wins() {
        let specs = vec![spec("Size"), spec("Packet Size")];
        let findings = vec![finding("Packet Size")];

        // Substring matching makes both candidates similar; first wins
        assert_eq!(match_audit_findings(&findings, &specs), vec![Some(0)]);
    }
}
