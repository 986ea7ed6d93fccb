use crate::config::Config;
use crate::error::TransformError;
use crate::llm::{Completion, OllamaClient};
use crate::parser::{parse_output, ParsedResult};
use crate::prompt::PromptRequest;

/// Raw model reply together with its parsed sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub raw: String,
    pub parsed: ParsedResult,
}

/// prompt -> model -> parser.
pub struct Transformer<C> {
    completion: C,
}

impl Transformer<OllamaClient> {
    pub fn new(config: &Config) -> Result<Self, TransformError> {
        Ok(Self::with_completion(OllamaClient::new(config)?))
    }
}

impl<C: Completion> Transformer<C> {
    pub fn with_completion(completion: C) -> Self {
        Self { completion }
    }

    /// Send the formatted prompt and hand back the reply untouched.
    pub fn invoke(&self, request: &PromptRequest) -> Result<String, TransformError> {
        let prompt = request.render();
        let raw = self.completion.complete(&prompt)?;
        Ok(raw)
    }

    pub fn transform(&self, request: &PromptRequest) -> Result<Transformation, TransformError> {
        let raw = self.invoke(request)?;
        let parsed = parse_output(&raw);
        Ok(Transformation { raw, parsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompletionError;
    use crate::prompt::SAMPLE_PARAGRAPH;
    use std::cell::RefCell;

    const CANNED_REPLY: &str = "SUMMARY:
The sentence is a pangram containing every letter.
It is used to test fonts and keyboards.

TONE:
Formal

IMPROVED VERSION:
\"The quick brown fox jumps over the lazy dog\" is a well-known pangram.
It remains popular for testing fonts and keyboards.";

    struct StubCompletion {
        reply: &'static str,
        prompts: RefCell<Vec<String>>,
    }

    impl StubCompletion {
        fn new(reply: &'static str) -> Self {
            Self { reply, prompts: RefCell::new(Vec::new()) }
        }
    }

    impl Completion for StubCompletion {
        fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    struct FailingCompletion;

    impl Completion for FailingCompletion {
        fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                message: "busy".to_string(),
            })
        }
    }

    #[test]
    fn pangram_paragraph_end_to_end() {
        let transformer = Transformer::with_completion(StubCompletion::new(CANNED_REPLY));
        let request = PromptRequest::new(SAMPLE_PARAGRAPH).unwrap();

        let result = transformer.transform(&request).unwrap();

        assert_eq!(result.raw, CANNED_REPLY);
        assert_eq!(
            result.parsed.summary,
            "The sentence is a pangram containing every letter.\nIt is used to test fonts and keyboards."
        );
        assert_eq!(result.parsed.tone, "Formal");
        assert_eq!(
            result.parsed.improved_version,
            "\"The quick brown fox jumps over the lazy dog\" is a well-known pangram.\nIt remains popular for testing fonts and keyboards."
        );
    }

    #[test]
    fn invoke_sends_rendered_prompt_once() {
        let stub = StubCompletion::new("whatever");
        let transformer = Transformer::with_completion(stub);
        let request = PromptRequest::new("Short text.").unwrap();

        let raw = transformer.invoke(&request).unwrap();

        assert_eq!(raw, "whatever");
        let prompts = transformer.completion.prompts.borrow();
        assert_eq!(*prompts, vec![request.render()]);
    }

    #[test]
    fn completion_errors_propagate() {
        let transformer = Transformer::with_completion(FailingCompletion);
        let request = PromptRequest::new("Short text.").unwrap();

        match transformer.transform(&request) {
            Err(TransformError::Completion(CompletionError::Status { status, message })) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(message, "busy");
            }
            other => panic!("expected completion error, got {:?}", other),
        }
    }
}
