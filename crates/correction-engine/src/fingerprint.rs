// Finding identity for resolution tracking
use shared_types::Finding;

/// Number of message characters that participate in a fingerprint
const MESSAGE_PREFIX_CHARS: usize = 20;

/// Derive the resolution-tracking key for a finding.
///
/// Composed of the span offset, span length and the first 20 characters of
/// the message. Findings agreeing on all three are treated as the same
/// issue even when their replacement lists differ; this is a deliberate
/// cheap heuristic, not a hash. Keys are only meaningful within one
/// analysis batch, because offsets restart with every analysis.
pub fn fingerprint(finding: &Finding) -> String {
    let prefix: String = finding.message.chars().take(MESSAGE_PREFIX_CHARS).collect();
    format!("{}:{}:{}", finding.offset, finding.length, prefix)
}
