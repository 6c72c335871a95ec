//! FAQ knowledge base: entries and the immutable in-memory table

pub mod table;

pub use table::{FaqDocument, FaqTable};

use serde::{Deserialize, Serialize};

/// One question/answer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Unique identifier, matched case-sensitively
    pub id: String,

    /// The question as users would ask it
    pub question: String,

    /// Canonical answer text
    pub answer: String,

    /// Category name (e.g. "account", "shipping")
    pub category: String,

    /// Free-form tags used by keyword search
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FaqEntry {
    /// Whether the lowercased keyword occurs in the question, answer or any tag
    pub fn matches_keyword(&self, keyword_lower: &str) -> bool {
        self.question.to_lowercase().contains(keyword_lower)
            || self.answer.to_lowercase().contains(keyword_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(keyword_lower))
    }

    /// Whether this entry's category equals `category`, ignoring case
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
