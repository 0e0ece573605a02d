// Group findings by their originating sentence
use serde::Serialize;
use shared_types::Finding;
use std::collections::HashMap;

/// Findings sharing one verbatim context window
#[derive(Debug, Clone, Serialize)]
pub struct SentenceGroup {
    /// The sentence text exactly as the oracle reported it
    pub context: String,
    pub findings: Vec<Finding>,
}

/// Bucket findings by `context.text`.
///
/// Groups appear in first-appearance order and findings keep their input
/// order within a group. Two findings with textually identical context
/// collapse into one group even if they originate from different parts of
/// the document; upstream context windows are usually locally unique, so
/// this is accepted rather than keyed by position.
pub fn group_by_context(findings: &[Finding]) -> Vec<SentenceGroup> {
    let mut groups: Vec<SentenceGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for finding in findings {
        match index.get(finding.context.text.as_str()) {
            Some(&slot) => groups[slot].findings.push(finding.clone()),
            None => {
                index.insert(finding.context.text.as_str(), groups.len());
                groups.push(SentenceGroup {
                    context: finding.context.text.clone(),
                    findings: vec![finding.clone()],
                });
            }
        }
    }

    groups
}
