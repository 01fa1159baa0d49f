//! ContentGuard Library
//!
//! This crate provides a deterministic compliance audit for content drafts:
//! a title and body are scanned against a lexicon of regulatory risk phrases
//! and platform-specific formatting rules, producing violations, safe items
//! and suggestions.
//!
//! ```rust
//! let report = contentguard::perform_audit("t", "<p>稳赚不赔</p>", "");
//! assert!(report.violations().any(|v| v.matched.as_deref() == Some("稳赚不赔")));
//! ```

pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod lexicon;
pub mod platform;
pub mod rules;
pub mod text;

use lazy_static::lazy_static;

pub use draft::Draft;
pub use error::ContentGuardError;
pub use rules::{AuditReport, RulesEngine};

lazy_static! {
    static ref DEFAULT_ENGINE: RulesEngine = RulesEngine::default();
}

/// Audit a draft with the embedded lexicon and default configuration
pub fn perform_audit(title: &str, content: &str, platform: &str) -> AuditReport {
    DEFAULT_ENGINE.audit_text(title, content, platform)
}
