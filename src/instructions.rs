//! Instructions and definition of the math tutor / weather assistant.

use crate::tools::tool_declarations;
use crate::types::AssistantSpec;

/// System prompt for the math tutor that also answers weather questions.
pub const MATH_TUTOR_INSTRUCTIONS: &str = r#"You are a personal math tutor. Write and run code to answer math questions.
Enclose math expressions in $$ (this is helpful to display latex). Example:
```
Given a formula below $$ s = ut + \frac{1}{2}at^{2} $$ Calculate the value of $s$ when $u = 10\frac{m}{s}$ and $a = 2\frac{m}{s^{2}}$ at $t = 1s$
```
You can also answer weather questions!
"#;

/// Build the assistant definition: code interpreter plus the weather tools.
pub fn math_tutor_spec(name: &str, model: &str) -> AssistantSpec {
    AssistantSpec {
        name: name.to_string(),
        instructions: MATH_TUTOR_INSTRUCTIONS.to_string(),
        model: model.to_string(),
        tools: tool_declarations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_is_valid_and_mentions_both_roles() {
        let spec = math_tutor_spec("Math Tutor And Weather Bot", "gpt-4-1106-preview");
        spec.validate().unwrap();
        assert!(spec.instructions.starts_with("You are a personal math tutor."));
        assert!(spec.instructions.contains("weather questions"));
        assert_eq!(spec.tools.len(), 3);
    }
}
