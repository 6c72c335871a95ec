//! System instruction for the FAQ assistant

use crate::tools::ToolSpec;

/// Persona and tool-first rules sent with every request
pub const SYSTEM_INSTRUCTION: &str = r#"You are a helpful FAQ assistant. Your job is to answer user questions using the FAQ database tools available to you.

IMPORTANT INSTRUCTIONS:
1. Always use the available tools to search for relevant FAQs before answering
2. When a user asks a question, use search_faqs tool with relevant keywords
3. Base your answers on the FAQ data retrieved from the tools
4. If you find relevant FAQs, summarize them in a friendly, conversational way
5. If no relevant FAQs are found, politely say you don't have that information
6. Be concise but helpful
7. Use proper formatting for readability"#;

/// Returned when the model's reply holds neither text nor a function call
pub const FALLBACK_ANSWER: &str = "I apologize, but I couldn't generate a proper response.";

/// Append the registered tools to a base instruction.
///
/// The list mirrors the registry so a custom tool set never disagrees with
/// what the prompt advertises.
pub fn build_system_instruction(base: &str, specs: &[&ToolSpec]) -> String {
    if specs.is_empty() {
        return base.to_string();
    }

    let tools = specs
        .iter()
        .map(|spec| format!("- {}: {}", spec.name, spec.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\nAvailable tools:\n{}", base.trim_end(), tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_tools_in_order() {
        let search = ToolSpec::new("search_faqs", "Search FAQs by keyword");
        let ids = ToolSpec::new("get_faq_by_id", "Get specific FAQ by ID");
        let prompt = build_system_instruction(SYSTEM_INSTRUCTION, &[&search, &ids]);

        assert!(prompt.starts_with("You are a helpful FAQ assistant."));
        assert!(prompt.ends_with(
            "Available tools:\n- search_faqs: Search FAQs by keyword\n- get_faq_by_id: Get specific FAQ by ID"
        ));
    }

    #[test]
    fn test_no_tools_keeps_base() {
        assert_eq!(build_system_instruction("Be brief.", &[]), "Be brief.");
    }
}
