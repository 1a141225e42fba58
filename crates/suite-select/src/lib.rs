//! Keyword-based test selection for Rust test harnesses.
//!
//! This crate wraps the [`suite_select_keywords`] engine with the pieces a
//! harness needs around it: the serialisable [`KeywordsConfig`] pair stored
//! in saved run configurations, the [`TestFilter`] trait the selection
//! pipeline applies to each [`TestDescription`], the [`KeywordFilter`]
//! adapter backed by a compiled predicate, and [`SelectionParameters`],
//! which caches the compiled filter across configuration edits.

mod config;
mod filter;
mod parameters;

pub use config::KeywordsConfig;
pub use filter::{KeywordFilter, TestDescription, TestFilter};
pub use parameters::SelectionParameters;
