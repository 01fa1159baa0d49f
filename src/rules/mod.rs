//! Rules module - Audit rules and evaluation engine

pub mod categories;
pub mod constants;
pub mod engine;
pub mod patterns;
pub mod results;

pub use engine::RulesEngine;
pub use results::{AuditReport, Finding, Severity, WireReport, WireViolation};
