//! Static knowledge base of programming concepts.

/// Concept keys in lookup order. The first key contained in a query wins.
pub const CONCEPT_KEYS: &[&str] = &["oop", "api", "rest", "mvc", "docker", "git"];

const EXPLANATIONS: &[(&str, &str)] = &[
    (
        "oop",
        "Object-Oriented Programming (OOP) organizes software design around objects and classes rather than functions and logic.",
    ),
    (
        "api",
        "API (Application Programming Interface) defines interactions between multiple software applications.",
    ),
    (
        "rest",
        "REST (Representational State Transfer) is an architectural style for designing networked applications.",
    ),
    (
        "mvc",
        "MVC (Model-View-Controller) separates an application into three interconnected components.",
    ),
    (
        "docker",
        "Docker is a platform for developing, shipping, and running applications in containers.",
    ),
    (
        "git",
        "Git is a distributed version control system for tracking changes in source code.",
    ),
];

/// Per-concept examples, keyed by language. `general` is the fallback entry.
const EXAMPLES: &[(&str, &[(&str, &str)])] = &[
    (
        "oop",
        &[
            (
                "python",
                "class Dog:\n    def __init__(self, name):\n        self.name = name\n    def bark(self):\n        return 'Woof!'",
            ),
            (
                "javascript",
                "class Dog {\n    constructor(name) {\n        this.name = name;\n    }\n    bark() {\n        return 'Woof!';\n    }\n}",
            ),
        ],
    ),
    (
        "api",
        &[(
            "general",
            "REST APIs use HTTP methods:\nGET /users - retrieve users\nPOST /users - create user\nPUT /users/1 - update user\nDELETE /users/1 - delete user",
        )],
    ),
];

const NO_TABLE_EXAMPLES: &str = "Examples available in language-specific documentation.";
const UNKNOWN_CONCEPT_EXAMPLES: &str =
    "Check official documentation for specific examples and implementations.";

/// Explanation of a single concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptExplanation {
    /// The concept as it was asked for
    pub concept: String,
    pub explanation: String,
    pub examples: String,
}

/// Find the first known concept key contained in `text` (case-insensitive).
pub fn find_key(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    CONCEPT_KEYS.iter().copied().find(|key| lowered.contains(key))
}

/// Explain `concept`, using `language` to pick an example where one exists.
pub fn explain(concept: &str, language: Option<&str>) -> ConceptExplanation {
    let explanation = find_key(concept).and_then(|key| {
        EXPLANATIONS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| (key, *text))
    });

    match explanation {
        Some((key, text)) => ConceptExplanation {
            concept: concept.to_string(),
            explanation: text.to_string(),
            examples: examples_for(key, language).to_string(),
        },
        None => ConceptExplanation {
            concept: concept.to_string(),
            explanation: format!(
                "I'll explain {}. This is a programming/development concept that involves...",
                concept
            ),
            examples: UNKNOWN_CONCEPT_EXAMPLES.to_string(),
        },
    }
}

fn examples_for(key: &str, language: Option<&str>) -> &'static str {
    let Some((_, entries)) = EXAMPLES.iter().find(|(k, _)| *k == key) else {
        return NO_TABLE_EXAMPLES;
    };

    let lookup = |lang: &str| entries.iter().find(|(l, _)| *l == lang).map(|(_, e)| *e);

    language
        .and_then(|lang| lookup(&lang.to_lowercase()))
        .or_else(|| lookup("general"))
        .or_else(|| entries.first().map(|(_, e)| *e))
        .unwrap_or(NO_TABLE_EXAMPLES)
}
