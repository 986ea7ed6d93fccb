use crate::error::TransformError;

/// Instruction template; `{paragraph}` is replaced with the caller's text.
pub const TEMPLATE: &str = "Analyze and transform the following paragraph. Provide your response in this exact format:

SUMMARY:
[Provide a 3-4 line summary of the main points]

TONE:
[Identify if the tone is Formal / Casual / Technical]

IMPROVED VERSION:
[Provide an improved version of the paragraph with better flow, vocabulary, and clarity]

Paragraph to analyze:
{paragraph}

Please provide the response in the format specified above.";

/// Used when no paragraph is given on the command line.
pub const SAMPLE_PARAGRAPH: &str = "
    The quick brown fox jumps over the lazy dog. This is a well-known pangram that contains 
    every letter of the English alphabet. It is often used for testing fonts and keyboards. 
    The sentence has been around for many years and is still widely used today in various 
    applications and educational settings.
    ";

#[derive(Debug, Clone)]
pub struct PromptRequest {
    paragraph: String,
}

impl PromptRequest {
    pub fn new(paragraph: impl Into<String>) -> Result<Self, TransformError> {
        let paragraph = paragraph.into();
        if paragraph.trim().is_empty() {
            return Err(TransformError::EmptyParagraph);
        }
        Ok(Self { paragraph })
    }

    pub fn paragraph(&self) -> &str {
        &self.paragraph
    }

    /// The paragraph goes in as given, surrounding whitespace included.
    pub fn render(&self) -> String {
        TEMPLATE.replace("{paragraph}", &self.paragraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_paragraph() {
        assert!(matches!(PromptRequest::new(""), Err(TransformError::EmptyParagraph)));
        assert!(matches!(PromptRequest::new(" \n\t "), Err(TransformError::EmptyParagraph)));
    }

    #[test]
    fn render_substitutes_paragraph() {
        let prompt = PromptRequest::new("Hello there.").unwrap().render();
        assert!(prompt.contains("Paragraph to analyze:\nHello there.\n\nPlease provide"));
        assert!(!prompt.contains("{paragraph}"));
    }

    #[test]
    fn template_carries_all_markers() {
        let prompt = PromptRequest::new(SAMPLE_PARAGRAPH).unwrap().render();
        for marker in ["SUMMARY:", "TONE:", "IMPROVED VERSION:"] {
            assert!(prompt.contains(marker), "missing {marker}");
        }
        assert!(prompt.contains("The quick brown fox"));
    }
}
