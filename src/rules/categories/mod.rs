//! Rule categories

pub mod advertising;
pub mod ai_label;
pub mod contact;
pub mod disclosure;
pub mod formatting;
pub mod lexicon;
