// Replacement application over character-offset spans
use shared_types::Finding;
use thiserror::Error;

/// Failure to apply a replacement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// The finding's span does not fit inside the content buffer. Happens
    /// when the buffer was edited after the analysis that produced the
    /// finding, so its offsets describe a string of a different shape.
    #[error(
        "span at offset {offset} with length {length} is out of range for content of {content_length} characters"
    )]
    OffsetOutOfRange {
        offset: usize,
        length: usize,
        content_length: usize,
    },
}

/// Apply `replacement` over the finding's span, returning the new content.
///
/// Offsets are character indices relative to the content that was analyzed.
/// The input is never mutated; remaining findings are NOT re-indexed, so a
/// later fix against the same analysis may fail with `OffsetOutOfRange`
/// once the buffer has changed shape. Callers re-run analysis for fresh
/// offsets.
pub fn apply_replacement(
    content: &str,
    finding: &Finding,
    replacement: &str,
) -> Result<String, ApplyError> {
    let out_of_range = || ApplyError::OffsetOutOfRange {
        offset: finding.offset,
        length: finding.length,
        content_length: content.chars().count(),
    };

    let span_end = finding
        .offset
        .checked_add(finding.length)
        .ok_or_else(out_of_range)?;
    let byte_start = char_to_byte(content, finding.offset).ok_or_else(out_of_range)?;
    let byte_end = char_to_byte(content, span_end).ok_or_else(out_of_range)?;

    let mut updated = String::with_capacity(content.len() + replacement.len());
    updated.push_str(&content[..byte_start]);
    updated.push_str(replacement);
    updated.push_str(&content[byte_end..]);
    Ok(updated)
}

/// Byte index of the `pos`-th character; `pos == char count` maps to the end
fn char_to_byte(content: &str, pos: usize) -> Option<usize> {
    content
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(content.len()))
        .nth(pos)
}
