//! Correction engine for grammar/style findings.
//!
//! Takes the offset-tagged findings produced by an external grammar oracle
//! and turns them into an interactive correction workflow:
//!
//! - applying a chosen replacement into the content buffer ([`apply`])
//! - deriving a stable per-batch identity for each finding ([`fingerprint`])
//! - classifying findings into corrections vs. suggestions ([`classify`])
//! - grouping findings by their originating sentence ([`group`])
//! - remembering which findings were acted on ([`tracker`])
//! - orchestrating the whole cycle per user session ([`session`])
//!
//! The crate is pure and synchronous; all I/O (oracle calls, HTTP) lives in
//! the server on top of it. Offsets are character indices relative to the
//! content string that was sent for analysis, never the live buffer.

pub mod apply;
pub mod classify;
pub mod fingerprint;
pub mod group;
pub mod session;
pub mod tracker;

pub use apply::{apply_replacement, ApplyError};
pub use classify::{classify, ClassifiedFindings};
pub use fingerprint::fingerprint;
pub use group::{group_by_context, SentenceGroup};
pub use session::{CheckSession, SessionError, SessionState};
pub use tracker::ResolutionTracker;
