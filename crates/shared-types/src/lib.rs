pub mod types;

pub use types::{AnalysisOutcome, Finding, FindingContext, Language, LanguageInfo};
