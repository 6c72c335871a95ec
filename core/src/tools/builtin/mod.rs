//! Built-in tools

pub mod faq;

pub use faq::{
    CategoriesTool, FaqByIdTool, FaqsByCategoryTool, SearchFaqsTool, GET_CATEGORIES,
    GET_FAQS_BY_CATEGORY, GET_FAQ_BY_ID, SEARCH_FAQS,
};

use crate::error::Result;
use crate::faq::FaqTable;
use crate::tools::ToolRegistry;
use std::sync::Arc;

/// Registry holding the four FAQ tools over `table`
pub fn faq_tool_registry(table: Arc<FaqTable>) -> Result<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    registry.register(SearchFaqsTool::new(Arc::clone(&table)))?;
    registry.register(FaqsByCategoryTool::new(Arc::clone(&table)))?;
    registry.register(CategoriesTool::new(Arc::clone(&table)))?;
    registry.register(FaqByIdTool::new(table))?;
    Ok(registry)
}
