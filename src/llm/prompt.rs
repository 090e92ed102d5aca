pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build_modification_prompt(title: &str, source: &str, instruction: &str) -> String {
        format!(
            r#"You are modifying a UI component from a design-system catalog.

Component: {title}

Current source code:
{source}

User request: {instruction}

Apply the requested change to the component source and respond with ONLY a valid JSON object in this exact format:
{{"updatedCode": "<the complete modified component source>", "description": "<a short summary of what you changed>"}}

Do not wrap the JSON in markdown code fences. Do not include any text before or after the JSON object."#
        )
    }

    pub fn build_probe_prompt() -> String {
        "Reply with the single word: ok".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_all_three_inputs() {
        let prompt = PromptBuilder::build_modification_prompt(
            "Button",
            "<button>Click</button>",
            "make it red",
        );

        assert!(prompt.contains("Component: Button"));
        assert!(prompt.contains("<button>Click</button>"));
        assert!(prompt.contains("User request: make it red"));
    }

    #[test]
    fn demands_bare_json() {
        let prompt = PromptBuilder::build_modification_prompt("Modal", "x", "y");

        assert!(prompt.contains("\"updatedCode\""));
        assert!(prompt.contains("\"description\""));
        assert!(prompt.contains("Do not wrap the JSON in markdown code fences"));
    }

    #[test]
    fn is_deterministic() {
        let a = PromptBuilder::build_modification_prompt("Table", "src", "sort rows");
        let b = PromptBuilder::build_modification_prompt("Table", "src", "sort rows");
        assert_eq!(a, b);
    }

    #[test]
    fn passes_empty_instruction_through() {
        let prompt = PromptBuilder::build_modification_prompt("Badge", "src", "");
        assert!(prompt.contains("User request: \n"));
    }
}
