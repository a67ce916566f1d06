//! Reply composition for each intent.

use std::fmt::Write as _;

use crate::analyzer::{self, CodeAnalysis};
use crate::concepts;
use crate::config::SUPPORTED_LANGUAGES;
use crate::intent::Intent;
use crate::models::{Message, Reply};
use crate::text::title_case;
use crate::{Config, Error, Result};

/// Substrings that mark a message as containing code.
const CODE_MARKERS: &[&str] = &[
    "def ", "class ", "function ", "import ", "var ", "let ", "const ", "public ", "private ",
];

/// Multi-line messages longer than this are treated as code.
const MIN_MULTILINE_CODE_LEN: usize = 20;

/// Words skipped when guessing a concept from free text.
const STOP_WORDS: &[&str] = &["what", "is", "explain", "how", "does", "work", "the", "a", "an"];

/// Concept used when nothing in the message looks like one.
pub const PLACEHOLDER_CONCEPT: &str = "programming concept";

/// Reply for a blank message.
pub const EMPTY_MESSAGE_REPLY: &str = "Please provide a message or code to analyze.";

/// Reply when an analysis request carries no code.
pub const MISSING_CODE_REPLY: &str =
    "Please provide the code you'd like me to analyze. You can paste it directly in your message.";

/// Generic apology used when composition fails.
pub const INTERNAL_ERROR_REPLY: &str =
    "❌ Sorry, I encountered an error processing your request. Please try again.";

/// Composes replies. Holds only read-only configuration.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    config: &'a Config,
}

impl<'a> Composer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Produce the reply for `message` under `intent`.
    pub fn compose(&self, intent: Intent, message: &Message) -> Result<Reply> {
        let text = match intent {
            Intent::Analyze => self.compose_analysis(message)?,
            Intent::Explain => compose_explanation(message),
            Intent::Help => help_text(),
            Intent::General => welcome_text(),
        };

        Ok(Reply::new(text))
    }

    fn compose_analysis(&self, message: &Message) -> Result<String> {
        let language = message
            .context
            .language()
            .unwrap_or(self.config.default_language.as_str());

        let Some(code) = extract_code(&message.text) else {
            return Ok(MISSING_CODE_REPLY.to_string());
        };

        let analysis = analyzer::analyze(code, language, Some(&message.text));
        render_analysis(language, &analysis)
    }
}

/// Return the message itself if it looks like code.
pub fn extract_code(message: &str) -> Option<&str> {
    let has_marker = CODE_MARKERS.iter().any(|m| message.contains(m));
    let looks_multiline = message.contains('\n') && message.len() > MIN_MULTILINE_CODE_LEN;

    (has_marker || looks_multiline).then_some(message)
}

/// Pick the concept a message asks about.
pub fn extract_concept(message: &str) -> String {
    if let Some(key) = concepts::find_key(message) {
        return key.to_string();
    }

    message
        .to_lowercase()
        .split_whitespace()
        .find(|word| !STOP_WORDS.contains(word) && word.chars().count() > 2)
        .map(str::to_string)
        .unwrap_or_else(|| PLACEHOLDER_CONCEPT.to_string())
}

fn render_analysis(language: &str, analysis: &CodeAnalysis) -> Result<String> {
    let mut out = String::new();
    render_analysis_into(&mut out, language, analysis)
        .map_err(|e| Error::Internal(format!("Failed to render analysis: {}", e)))?;
    Ok(out)
}

fn render_analysis_into(
    out: &mut String,
    language: &str,
    analysis: &CodeAnalysis,
) -> std::fmt::Result {
    write!(out, "🔍 **Code Analysis for {}**\n\n", title_case(language))?;
    write!(out, "**Analysis:** {}\n\n", analysis.summary)?;

    let sections = [
        ("⚠️ **Potential Issues:**", &analysis.issues),
        ("💡 **Suggestions:**", &analysis.suggestions),
        ("🚀 **Improvements:**", &analysis.improvements),
    ];

    for (heading, items) in sections.iter().filter(|(_, items)| !items.is_empty()) {
        writeln!(out, "{}", heading)?;
        for item in items.iter() {
            writeln!(out, "• {}", item)?;
        }
        out.push('\n');
    }

    Ok(())
}

fn compose_explanation(message: &Message) -> String {
    let concept = extract_concept(&message.text);
    let explanation = concepts::explain(&concept, message.context.language());

    format!(
        "📚 **Explanation: {}**\n\n{}\n\n**Examples:**\n{}\n\nNeed more details? Feel free to ask!",
        title_case(&explanation.concept),
        explanation.explanation,
        explanation.examples
    )
}

/// Fixed help text listing capabilities and example requests.
pub fn help_text() -> String {
    format!(
        "🤖 **Code Helper Agent - Help**

I can assist you with:

**🔍 Code Analysis**
• Analyze your code for potential issues
• Suggest improvements and best practices
• Review code structure and organization

**📚 Concept Explanations**
• Explain programming concepts (OOP, APIs, REST, etc.)
• Provide examples in different languages
• Clarify development methodologies

**💡 General Assistance**
• Programming best practices
• Code review suggestions
• Development guidance

**Supported Languages:** {}

**Examples:**
• \"analyze this code: [your code]\"
• \"explain OOP\"
• \"what is REST API\"
• \"review this function\"

Just paste your code or ask your question!",
        SUPPORTED_LANGUAGES.join(", ")
    )
}

/// Fixed welcome text for messages with no recognized intent.
pub fn welcome_text() -> String {
    "👋 **Welcome to Code Helper!**

I'm your programming assistant. I can:

• 🔍 Analyze and review your code
• 📚 Explain programming concepts
• 💡 Suggest best practices

**Quick start:**
Type \"help\" for full options
or paste your code for analysis!"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageContext;

    fn compose(intent: Intent, text: &str, context: MessageContext) -> String {
        let config = Config::default();
        Composer::new(&config)
            .compose(intent, &Message::new(text, context))
            .unwrap()
            .text
    }

    #[test]
    fn test_extract_code() {
        assert_eq!(extract_code("analyze def foo(): pass"), Some("analyze def foo(): pass"));
        assert_eq!(extract_code("review\nsomething longer than twenty"), Some("review\nsomething longer than twenty"));
        assert_eq!(extract_code("review\nshort"), None);
        assert_eq!(extract_code("analyze my code please"), None);
    }

    #[test]
    fn test_extract_concept() {
        assert_eq!(extract_concept("explain OOP"), "oop");
        assert_eq!(extract_concept("what is a REST api"), "api");
        assert_eq!(extract_concept("explain how closures work"), "closures");
        assert_eq!(extract_concept("what is it"), PLACEHOLDER_CONCEPT);
    }

    #[test]
    fn test_analysis_without_code() {
        let reply = compose(Intent::Analyze, "analyze my code", MessageContext::default());
        assert_eq!(reply, MISSING_CODE_REPLY);
    }

    #[test]
    fn test_analysis_sections_in_order() {
        let text = "analyze this:\nfrom x import *\nresult = eval(data)";
        let reply = compose(Intent::Analyze, text, MessageContext::default());

        assert!(reply.starts_with("🔍 **Code Analysis for Python**"));
        let issues = reply.find("Potential Issues").unwrap();
        let suggestions = reply.find("Suggestions").unwrap();
        assert!(issues < suggestions);
        assert!(!reply.contains("Improvements"));

        let import_issue = reply.find("'import *'").unwrap();
        let eval_issue = reply.find("eval() can be dangerous").unwrap();
        assert!(import_issue < eval_issue);
    }

    #[test]
    fn test_analysis_uses_context_language() {
        let context = MessageContext::default().with("language", "javascript");
        let reply = compose(Intent::Analyze, "review: var x = 1", context);

        assert!(reply.starts_with("🔍 **Code Analysis for Javascript**"));
        assert!(reply.contains("Prefer let/const over var"));
        assert!(!reply.contains("Potential Issues"));
    }

    #[test]
    fn test_explain_oop() {
        let reply = compose(Intent::Explain, "explain OOP", MessageContext::default());
        assert!(reply.contains("**Explanation: Oop**"));
        assert!(reply.contains(
            "Object-Oriented Programming (OOP) organizes software design around objects and classes"
        ));
        assert!(reply.contains("class Dog:"));
    }

    #[test]
    fn test_explain_fallback_echoes_word() {
        let reply = compose(Intent::Explain, "explain monads", MessageContext::default());
        assert!(reply.contains("I'll explain monads."));
    }

    #[test]
    fn test_help_and_general() {
        let help = compose(Intent::Help, "help", MessageContext::default());
        assert!(help.contains("Code Analysis"));
        assert!(help.contains("Rust"));

        let general = compose(Intent::General, "hello there", MessageContext::default());
        assert_eq!(general, welcome_text());
    }

    #[test]
    fn test_compose_is_deterministic() {
        let context = MessageContext::default().with("language", "go");
        let text = "review this\nfunc main() {\n}\n";
        let first = compose(Intent::Analyze, text, context.clone());
        let second = compose(Intent::Analyze, text, context);
        assert_eq!(first, second);
    }
}
