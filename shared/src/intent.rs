//! Keyword-based intent classification.

/// The classified purpose of an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Analyze,
    Explain,
    Help,
    General,
}

/// Ordered classification rules. The first rule with a matching keyword wins.
const RULES: &[(&[&str], Intent)] = &[
    (&["analyze", "review", "check code"], Intent::Analyze),
    (&["explain", "what is", "tell me about"], Intent::Explain),
    (&["help"], Intent::Help),
];

/// Classify a message. Matching is case-insensitive substring search.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(classify("Please REVIEW this"), Intent::Analyze);
        assert_eq!(classify("can you check code for me"), Intent::Analyze);
        assert_eq!(classify("What is Docker?"), Intent::Explain);
        assert_eq!(classify("tell me about git"), Intent::Explain);
        assert_eq!(classify("help"), Intent::Help);
        assert_eq!(classify("good morning"), Intent::General);
    }

    #[test]
    fn test_first_match_wins() {
        // Analyze outranks explain, explain outranks help.
        assert_eq!(classify("explain and analyze this"), Intent::Analyze);
        assert_eq!(classify("help me, what is rest"), Intent::Explain);
    }

    #[test]
    fn test_total_over_odd_input() {
        for text in ["", "   ", "\n\t", "🦀", "ANALYZE", "checkcode"] {
            let intent = classify(text);
            assert!(matches!(
                intent,
                Intent::Analyze | Intent::Explain | Intent::Help | Intent::General
            ));
        }
        assert_eq!(classify("checkcode"), Intent::General);
    }
}
