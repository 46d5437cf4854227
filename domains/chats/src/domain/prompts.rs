//! Fixed prompts sent to the completion service

/// System prompt prepended to every completion request
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. Answer in the language the user \
writes in, and use Markdown formatting when it improves readability.";

/// Instruction appended as a final user turn when generating a session title
pub const TITLE_PROMPT: &str = "Return only a concise title (maximum 30 characters) for this \
chat session, based on the previous conversation and the language used. The title must relate \
to the earlier messages. You may abbreviate technical concepts. Do not include any explanation, \
punctuation, or formatting. Respond with the title only.";
