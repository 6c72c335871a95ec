//! Loading and querying the FAQ table

use super::FaqEntry;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// On-disk document layout: `{"faqs": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqDocument {
    pub faqs: Vec<FaqEntry>,
}

/// Ordered, read-only collection of FAQ entries.
///
/// Built once at startup and shared behind an `Arc`; there are no mutating
/// methods, so concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    /// Build a table, rejecting duplicate ids
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(entries.len());
            for entry in &entries {
                if !seen.insert(entry.id.as_str()) {
                    return Err(ConfigError::DuplicateFaqId {
                        id: entry.id.clone(),
                    }
                    .into());
                }
            }
        }

        Ok(Self { entries })
    }

    /// Parse a JSON FAQ document
    pub fn from_json(content: &str) -> Result<Self> {
        let document: FaqDocument = serde_json::from_str(content)?;
        Self::new(document.faqs)
    }

    /// Load the FAQ document at `path`
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let table = Self::from_json(&content)?;
        info!("Loaded {} FAQ entries from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching `keyword` case-insensitively in question, answer or tags
    pub fn search(&self, keyword: &str) -> Vec<&FaqEntry> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.matches_keyword(&keyword))
            .collect()
    }

    /// Entries whose category equals `category`, ignoring case
    pub fn by_category(&self, category: &str) -> Vec<&FaqEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.in_category(category))
            .collect()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Exact, case-sensitive id lookup
    pub fn get(&self, id: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: &str, tags: &[&str]) -> FaqEntry {
        FaqEntry {
            id: id.to_string(),
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = FaqTable::new(vec![entry("1", "a", &[]), entry("1", "b", &[])]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Duplicate FAQ id: 1"));
    }

    #[test]
    fn test_categories_are_distinct_in_first_seen_order() {
        let table = FaqTable::new(vec![
            entry("1", "shipping", &[]),
            entry("2", "account", &[]),
            entry("3", "shipping", &[]),
        ])
        .unwrap();

        assert_eq!(table.categories(), vec!["shipping", "account"]);
    }

    #[test]
    fn test_search_matches_tags_case_insensitively() {
        let table = FaqTable::new(vec![
            entry("1", "account", &["Password"]),
            entry("2", "billing", &["invoice"]),
        ])
        .unwrap();

        let hits: Vec<_> = table.search("PASSWORD").iter().map(|e| e.id.clone()).collect();
        assert_eq!(hits, vec!["1"]);
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let table = FaqTable::new(vec![entry("abc", "general", &[])]).unwrap();
        assert!(table.get("abc").is_some());
        assert!(table.get("ABC").is_none());
    }

    #[test]
    fn test_from_json_defaults_missing_tags() {
        let table = FaqTable::from_json(
            r#"{"faqs": [{"id": "1", "question": "q", "answer": "a", "category": "c"}]}"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.entries()[0].tags.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = FaqTable::load("/definitely/not/here/faqs.json")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        tokio::fs::write(
            &path,
            r#"{"faqs": [
                {"id": "1", "question": "q1", "answer": "a1", "category": "general", "tags": ["x"]},
                {"id": "2", "question": "q2", "answer": "a2", "category": "payment", "tags": []}
            ]}"#,
        )
        .await
        .unwrap();

        let table = FaqTable::load(&path).await.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.by_category("PAYMENT").len(), 1);
    }
}
