//! Property-based tests for the correction engine
//!
//! These use proptest to generate arbitrary content and findings and check
//! the invariants the server relies on: the applicator never panics and
//! never partially mutates, fingerprints are deterministic, and
//! classification never loses a finding.

use proptest::prelude::*;

use correction_engine::{
    apply_replacement, classify, fingerprint, group_by_context, ResolutionTracker,
};
use shared_types::{Finding, FindingContext};

fn arb_finding() -> impl Strategy<Value = Finding> {
    (
        "[a-zA-Z ,.']{0,60}",
        prop::collection::vec("[a-z']{1,12}", 0..4),
        0usize..200,
        0usize..40,
        "[a-zA-Z ,.']{0,80}",
    )
        .prop_map(|(message, replacements, offset, length, context)| Finding {
            message,
            short_message: String::new(),
            replacements,
            offset,
            length,
            context: FindingContext {
                text: context,
                offset: 0,
                length: 0,
            },
        })
}

proptest! {
    /// Property: the applicator either succeeds or errors, but never panics,
    /// for arbitrary (also multi-byte) content and arbitrary spans.
    #[test]
    fn apply_never_panics(
        content in "\\PC{0,100}",
        finding in arb_finding(),
        replacement in "[a-z ]{0,20}",
    ) {
        let _ = apply_replacement(&content, &finding, &replacement);
    }

    /// Property: an in-range application preserves the text around the span
    /// and splices the replacement in between.
    #[test]
    fn apply_preserves_surrounding_text(
        prefix in "[a-z ]{0,30}",
        span in "[a-z]{1,10}",
        suffix in "[a-z ]{0,30}",
        replacement in "[a-z]{0,10}",
        mut finding in arb_finding(),
    ) {
        let content = format!("{prefix}{span}{suffix}");
        finding.offset = prefix.chars().count();
        finding.length = span.chars().count();

        let updated = apply_replacement(&content, &finding, &replacement).unwrap();
        prop_assert_eq!(updated, format!("{prefix}{replacement}{suffix}"));
    }

    /// Property: a span that ends past the content is always rejected and
    /// the result carries the original span back.
    #[test]
    fn apply_rejects_out_of_range_spans(
        content in "[a-z]{0,20}",
        excess in 1usize..50,
        length in 0usize..10,
        mut finding in arb_finding(),
    ) {
        finding.offset = content.chars().count() + excess;
        finding.length = length;

        let err = apply_replacement(&content, &finding, "x").unwrap_err();
        let correction_engine::ApplyError::OffsetOutOfRange { offset, .. } = err;
        prop_assert_eq!(offset, finding.offset);
    }

    /// Property: fingerprinting is deterministic and ignores replacements.
    #[test]
    fn fingerprint_deterministic(finding in arb_finding()) {
        let mut stripped = finding.clone();
        stripped.replacements = vec![];

        prop_assert_eq!(fingerprint(&finding), fingerprint(&finding));
        prop_assert_eq!(fingerprint(&finding), fingerprint(&stripped));
    }

    /// Property: classification partitions the input — every finding lands
    /// in exactly one bucket and input order is preserved within buckets.
    #[test]
    fn classify_partitions_the_input(findings in prop::collection::vec(arb_finding(), 0..20)) {
        let tracker = ResolutionTracker::new();
        let classified = classify(&findings, &tracker);

        prop_assert_eq!(
            classified.corrections.len() + classified.suggestions.len(),
            findings.len()
        );
        for finding in &classified.corrections {
            prop_assert_eq!(finding.replacements.len(), 1);
        }
    }

    /// Property: grouping neither loses nor duplicates findings.
    #[test]
    fn grouping_conserves_findings(findings in prop::collection::vec(arb_finding(), 0..20)) {
        let groups = group_by_context(&findings);
        let total: usize = groups.iter().map(|g| g.findings.len()).sum();
        prop_assert_eq!(total, findings.len());

        // Context strings are unique across groups.
        let mut contexts: Vec<&str> = groups.iter().map(|g| g.context.as_str()).collect();
        contexts.sort_unstable();
        contexts.dedup();
        prop_assert_eq!(contexts.len(), groups.len());
    }
}
