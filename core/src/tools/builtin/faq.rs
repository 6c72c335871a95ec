//! FAQ lookup tools exposed to the model

use crate::faq::FaqTable;
use crate::tools::{require_string, Arguments, ParamType, Tool, ToolResult, ToolSpec};
use std::sync::Arc;

pub const SEARCH_FAQS: &str = "search_faqs";
pub const GET_FAQS_BY_CATEGORY: &str = "get_faqs_by_category";
pub const GET_CATEGORIES: &str = "get_categories";
pub const GET_FAQ_BY_ID: &str = "get_faq_by_id";

/// Keyword search across questions, answers and tags
pub struct SearchFaqsTool {
    table: Arc<FaqTable>,
    spec: ToolSpec,
}

impl SearchFaqsTool {
    pub fn new(table: Arc<FaqTable>) -> Self {
        let spec = ToolSpec::new(
            SEARCH_FAQS,
            "Search FAQs by keyword in questions, answers, or tags. Returns relevant FAQ entries.",
        )
        .with_param(
            "keyword",
            ParamType::String,
            "Keyword to search for in FAQs",
            true,
        );

        Self { table, spec }
    }
}

impl Tool for SearchFaqsTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, arguments: &Arguments) -> ToolResult {
        let keyword = match require_string(arguments, "keyword") {
            Ok(keyword) => keyword,
            Err(result) => return result,
        };

        ToolResult::json(&self.table.search(keyword))
    }
}

/// All FAQs of one category
pub struct FaqsByCategoryTool {
    table: Arc<FaqTable>,
    spec: ToolSpec,
}

impl FaqsByCategoryTool {
    pub fn new(table: Arc<FaqTable>) -> Self {
        let spec = ToolSpec::new(
            GET_FAQS_BY_CATEGORY,
            "Get all FAQs for a specific category (e.g., general, shipping, payment, account, products)",
        )
        .with_param(
            "category",
            ParamType::String,
            "Category name to filter FAQs",
            true,
        );

        Self { table, spec }
    }
}

impl Tool for FaqsByCategoryTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, arguments: &Arguments) -> ToolResult {
        let category = match require_string(arguments, "category") {
            Ok(category) => category,
            Err(result) => return result,
        };

        ToolResult::json(&self.table.by_category(category))
    }
}

/// Distinct category names
pub struct CategoriesTool {
    table: Arc<FaqTable>,
    spec: ToolSpec,
}

impl CategoriesTool {
    pub fn new(table: Arc<FaqTable>) -> Self {
        let spec = ToolSpec::new(GET_CATEGORIES, "Get list of all available FAQ categories");
        Self { table, spec }
    }
}

impl Tool for CategoriesTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, _arguments: &Arguments) -> ToolResult {
        ToolResult::json(&self.table.categories())
    }
}

/// Single FAQ by exact id
pub struct FaqByIdTool {
    table: Arc<FaqTable>,
    spec: ToolSpec,
}

impl FaqByIdTool {
    pub fn new(table: Arc<FaqTable>) -> Self {
        let spec = ToolSpec::new(GET_FAQ_BY_ID, "Get a specific FAQ by its ID").with_param(
            "id",
            ParamType::String,
            "FAQ ID",
            true,
        );

        Self { table, spec }
    }
}

impl Tool for FaqByIdTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, arguments: &Arguments) -> ToolResult {
        let id = match require_string(arguments, "id") {
            Ok(id) => id,
            Err(result) => return result,
        };

        match self.table.get(id) {
            Some(entry) => ToolResult::json(entry),
            None => ToolResult::error(format!("FAQ with ID {} not found", id)),
        }
    }
}
