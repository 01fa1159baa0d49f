//! Rule category constants and validation

use colored::Colorize;

/// Valid category names for --only and --skip options, in evaluation order
pub const VALID_CATEGORIES: &[&str] = &[
    "absolute",
    "extreme",
    "authority",
    "crypto",
    "stock_recommendation",
    "formatting",
    "disclosure",
    "advertising",
    "ai",
    "contact",
];

/// Check if a category name is valid
pub fn is_valid_category(name: &str) -> bool {
    VALID_CATEGORIES.contains(&name)
}

/// Filter a list of categories, returning only valid ones and printing warnings for invalid ones
pub fn filter_valid_categories(categories: Vec<String>) -> Vec<String> {
    let mut valid = Vec::new();
    for category in categories {
        if is_valid_category(&category) {
            valid.push(category);
        } else {
            eprintln!(
                "{} Unknown category '{}' ignored. Valid categories: {}",
                "Warning:".yellow(),
                category.cyan(),
                VALID_CATEGORIES.join(", ").dimmed()
            );
        }
    }
    valid
}
