// Partition findings into actionable corrections and suggestions
use crate::fingerprint::fingerprint;
use crate::tracker::ResolutionTracker;
use serde::Serialize;
use shared_types::Finding;

/// Result of one classification pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifiedFindings {
    /// Exactly one candidate replacement and not yet resolved
    pub corrections: Vec<Finding>,
    /// Zero or multiple candidates, or a single candidate already resolved
    pub suggestions: Vec<Finding>,
}

/// Split findings into corrections and suggestions against the current
/// resolution state.
///
/// Input order is preserved within each partition. A resolved finding is
/// reclassified rather than dropped: a one-candidate finding moves from
/// corrections to suggestions once it is marked resolved, so it keeps
/// showing up (as done) on later passes over the same analysis.
pub fn classify(findings: &[Finding], tracker: &ResolutionTracker) -> ClassifiedFindings {
    let mut classified = ClassifiedFindings::default();

    for finding in findings {
        let actionable =
            finding.replacements.len() == 1 && !tracker.is_resolved(&fingerprint(finding));
        if actionable {
            classified.corrections.push(finding.clone());
        } else {
            classified.suggestions.push(finding.clone());
        }
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::FindingContext;

    fn finding(offset: usize, message: &str, replacements: &[&str]) -> Finding {
        Finding {
            message: message.to_string(),
            short_message: String::new(),
            replacements: replacements.iter().map(|r| r.to_string()).collect(),
            offset,
            length: 3,
            context: FindingContext::default(),
        }
    }

    #[test]
    fn test_partition_by_replacement_count() {
        let findings = vec![
            finding(0, "one fix", &["a"]),
            finding(5, "no fix", &[]),
            finding(10, "two fixes", &["a", "b"]),
            finding(15, "another single fix", &["c"]),
        ];
        let classified = classify(&findings, &ResolutionTracker::new());

        assert_eq!(classified.corrections.len(), 2);
        assert_eq!(classified.suggestions.len(), 2);
        assert_eq!(classified.corrections[0].message, "one fix");
        assert_eq!(classified.corrections[1].message, "another single fix");
    }

    #[test]
    fn test_resolved_finding_moves_to_suggestions() {
        let findings = vec![finding(0, "one fix", &["a"]), finding(5, "other", &["b"])];
        let mut tracker = ResolutionTracker::new();

        let before = classify(&findings, &tracker);
        assert_eq!(before.corrections.len(), 2);
        assert!(before.suggestions.is_empty());

        tracker.mark_resolved(&fingerprint(&findings[0]));

        let after = classify(&findings, &tracker);
        assert_eq!(after.corrections.len(), 1);
        assert_eq!(after.corrections[0].message, "other");
        // Not dropped: the resolved finding is reclassified as a suggestion.
        assert_eq!(after.suggestions.len(), 1);
        assert_eq!(after.suggestions[0].message, "one fix");
    }

    #[test]
    fn test_input_order_preserved_within_partitions() {
        let findings = vec![
            finding(0, "c1", &["x"]),
            finding(3, "s1", &[]),
            finding(6, "c2", &["y"]),
            finding(9, "s2", &["a", "b"]),
            finding(12, "c3", &["z"]),
        ];
        let classified = classify(&findings, &ResolutionTracker::new());

        let correction_order: Vec<_> =
            classified.corrections.iter().map(|f| f.message.as_str()).collect();
        let suggestion_order: Vec<_> =
            classified.suggestions.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(correction_order, ["c1", "c2", "c3"]);
        assert_eq!(suggestion_order, ["s1", "s2"]);
    }

    #[test]
    fn test_empty_input_yields_empty_partitions() {
        let classified = classify(&[], &ResolutionTracker::new());
        assert!(classified.corrections.is_empty());
        assert!(classified.suggestions.is_empty());
    }
}
