//! Heuristic code analysis.
//!
//! Checks are plain substring tests, not parsing. Findings are reported in the
//! order the checks run, and callers render them in that order.

use crate::text::title_case;

/// Above this many lines the analyzer suggests splitting the code up.
const LONG_CODE_LINES: usize = 50;
/// Above this many lines, code with no function definitions is flagged.
const UNSTRUCTURED_CODE_LINES: usize = 10;

/// Substrings that indicate the code defines at least one function.
const FUNCTION_MARKERS: &[&str] = &["def ", "function ", "fn ", "func "];

/// Result of analyzing a code snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeAnalysis {
    pub summary: String,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub improvements: Vec<String>,
    pub line_count: usize,
}

impl CodeAnalysis {
    fn with_summary(summary: impl Into<String>, line_count: usize) -> Self {
        Self {
            summary: summary.into(),
            line_count,
            ..Default::default()
        }
    }
}

/// Analyze `code` written in `language`.
///
/// `question` is the caller's original message; it only affects whether
/// `console.log` calls are reported for JavaScript.
pub fn analyze(code: &str, language: &str, question: Option<&str>) -> CodeAnalysis {
    if code.trim().is_empty() {
        return CodeAnalysis::with_summary("No code provided for analysis.", 0);
    }

    let line_count = code.split('\n').count();

    let mut analysis = match language.to_lowercase().as_str() {
        "python" => analyze_python(code, line_count),
        "javascript" | "typescript" => analyze_javascript(code, line_count, question),
        _ => analyze_general(language, line_count),
    };

    check_structure(code, &mut analysis);
    analysis
}

fn analyze_python(code: &str, line_count: usize) -> CodeAnalysis {
    let mut analysis = CodeAnalysis::with_summary("Python code analysis completed.", line_count);

    if code.contains("import *") {
        analysis
            .issues
            .push("Avoid using 'import *' as it pollutes the namespace".to_string());
        analysis
            .suggestions
            .push("Import specific functions/classes instead".to_string());
    }

    if code.contains("eval(") {
        analysis
            .issues
            .push("Use of eval() can be dangerous".to_string());
        analysis
            .suggestions
            .push("Consider safer alternatives like ast.literal_eval()".to_string());
    }

    if code.contains("except:") || code.contains("except Exception:") {
        analysis
            .issues
            .push("Bare except clause may catch too many exceptions".to_string());
        analysis
            .suggestions
            .push("Catch specific exceptions instead".to_string());
    }

    analysis
}

fn analyze_javascript(code: &str, line_count: usize, question: Option<&str>) -> CodeAnalysis {
    let mut analysis = CodeAnalysis::with_summary(
        "JavaScript/TypeScript code analysis completed.",
        line_count,
    );

    if code.contains("==") && !code.contains("===") {
        analysis
            .suggestions
            .push("Consider using === instead of == for strict equality checks".to_string());
    }

    if code.contains("var ") {
        analysis
            .suggestions
            .push("Prefer let/const over var for better scoping".to_string());
    }

    let mentions_testing = question
        .map(|q| q.to_lowercase().contains("test"))
        .unwrap_or(false);

    if code.contains("console.log") && !mentions_testing {
        analysis
            .issues
            .push("Remove console.log statements before production deployment".to_string());
    }

    analysis
}

fn analyze_general(language: &str, line_count: usize) -> CodeAnalysis {
    let mut analysis = CodeAnalysis::with_summary(
        format!("{} code analysis completed.", title_case(language)),
        line_count,
    );

    analysis.suggestions = vec![
        "Ensure proper error handling".to_string(),
        "Add comments for complex logic".to_string(),
        "Follow language-specific best practices".to_string(),
    ];
    analysis.improvements = vec![
        "Consider adding unit tests".to_string(),
        "Review code for potential performance bottlenecks".to_string(),
    ];

    analysis
}

/// Language-independent structure checks, run after the language branch.
fn check_structure(code: &str, analysis: &mut CodeAnalysis) {
    if analysis.line_count > LONG_CODE_LINES {
        analysis
            .improvements
            .push("Consider breaking down long code into smaller functions".to_string());
    }

    let has_function = FUNCTION_MARKERS.iter().any(|m| code.contains(m));
    if !has_function && analysis.line_count > UNSTRUCTURED_CODE_LINES {
        analysis
            .improvements
            .push("Consider organizing code into functions for better reusability".to_string());
    }
}
