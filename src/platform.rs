//! Platform classification
//!
//! Account labels are free-form compound strings such as
//! `"baijiahao - 财经号"` or `"微信服务号 - xxx"`, so platform identity is
//! decided by case-insensitive substring checks against alias lists.
//! Rules only ever see the resulting [`PlatformFlags`].

use serde::Serialize;

use crate::lexicon::PlatformAliases;

/// Policy gates derived from a platform label.
///
/// The two flags are independent: a label may match neither, either or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlatformFlags {
    /// 百家号 family (crypto ban, title and paragraph limits)
    pub platform_a: bool,
    /// WeChat family (stock-recommendation enforcement)
    pub platform_b: bool,
}

/// Maps a platform label to policy flags
pub trait PlatformClassifier: Send + Sync {
    fn classify(&self, label: &str) -> PlatformFlags;
}

/// Classifier backed by lexicon alias lists
#[derive(Debug, Clone)]
pub struct AliasClassifier {
    family_a: Vec<String>,
    family_b: Vec<String>,
}

impl AliasClassifier {
    pub fn new(aliases: &PlatformAliases) -> Self {
        Self {
            family_a: lowercase_all(&aliases.family_a),
            family_b: lowercase_all(&aliases.family_b),
        }
    }
}

fn lowercase_all(aliases: &[String]) -> Vec<String> {
    aliases.iter().map(|a| a.to_lowercase()).collect()
}

impl PlatformClassifier for AliasClassifier {
    fn classify(&self, label: &str) -> PlatformFlags {
        let label = label.to_lowercase();
        PlatformFlags {
            platform_a: self.family_a.iter().any(|a| label.contains(a.as_str())),
            platform_b: self.family_b.iter().any(|a| label.contains(a.as_str())),
        }
    }
}
