//! Detection patterns

pub mod contact;
