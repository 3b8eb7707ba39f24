//! Prompt template and rendering

use tripcover_core::ChatMessage;

/// The fixed prompt sent to the completion model, with named insertion
/// points for the retrieved context, the prior conversation, and the
/// current question.
pub const TEMPLATE: &str = r#"This is all in relation to customer travel insurance. We are the insurance provider. You are to give me relevant information from the context passed to you in order for me to answer a customers questions. Take this into consideration when replying. Always give examples and evidence where possible.
Answer in specific detail instead of general advice.
Answer the user's questions based on the provided context. If the answer is not in the context, reply politely that you do not have that information available.

Context: {context}

Current conversation: {chat_history}

user: {question}
assistant:"#;

/// Named fields of the prompt template
#[derive(Debug, Clone, Copy)]
pub struct PromptInputs<'a> {
    pub context: &'a str,
    pub chat_history: &'a str,
    pub question: &'a str,
}

/// Render the template with the given fields.
///
/// Pure string substitution; every field renders even when empty, so a
/// conversation with no history still produces a complete prompt.
pub fn render_prompt(inputs: &PromptInputs<'_>) -> String {
    TEMPLATE
        .replace("{context}", inputs.context)
        .replace("{chat_history}", inputs.chat_history)
        .replace("{question}", inputs.question)
}

/// Format prior messages as `role: content` lines, one per message,
/// original order preserved.
pub fn format_history(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| message.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_preserves_order() {
        let messages = vec![
            ChatMessage::user("Do I have winter sports cover?"),
            ChatMessage::assistant("Yes, on the premium plan."),
            ChatMessage::user("And for off-piste skiing?"),
        ];

        let history = format_history(&messages);
        assert_eq!(
            history,
            "user: Do I have winter sports cover?\n\
             assistant: Yes, on the premium plan.\n\
             user: And for off-piste skiing?"
        );
    }

    #[test]
    fn empty_history_is_empty_string() {
        assert_eq!(format_history(&[]), "");
    }

    #[test]
    fn all_placeholders_are_substituted() {
        let prompt = render_prompt(&PromptInputs {
            context: "ctx",
            chat_history: "hist",
            question: "q",
        });

        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{chat_history}"));
        assert!(!prompt.contains("{question}"));
        assert!(prompt.contains("Context: ctx"));
        assert!(prompt.contains("Current conversation: hist"));
        assert!(prompt.contains("user: q"));
        assert!(prompt.ends_with("assistant:"));
    }

    #[test]
    fn single_message_conversation_renders_with_empty_history() {
        let context = "Policy X covers cancellation up to $2000.";
        let question = "What does my policy cover for trip cancellation?";

        let prompt = render_prompt(&PromptInputs {
            context,
            chat_history: "",
            question,
        });

        assert!(prompt.contains("Context: Policy X covers cancellation up to $2000.\n"));
        assert!(prompt.contains("Current conversation: \n"));
        assert!(prompt.contains("user: What does my policy cover for trip cancellation?\n"));
        assert!(prompt.ends_with("assistant:"));
    }
}
