//! Tokenizer/Normalizer — lower-cases free text and splits it into word tokens.

/// Tokens shorter than this carry too little signal to be keywords
/// ("aws", "git" and friends are a known casualty — see DESIGN.md).
pub const MIN_TOKEN_LEN: usize = 4;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits `text` into lower-cased word tokens of length ≥ [`MIN_TOKEN_LEN`].
///
/// The whole input is lower-cased first, then maximal runs of word characters
/// (letters, digits, underscore) are extracted. No stemming, no substitution
/// for dropped short tokens. Never fails; empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_lowercases_tokens() {
        assert_eq!(tokenize("Python REACT Docker"), vec!["python", "react", "docker"]);
    }

    #[test]
    fn test_drops_tokens_shorter_than_four_chars() {
        // "aws", "git", "sql" are all 3 chars and vanish before any other rule.
        assert_eq!(tokenize("AWS and Git or SQL plus Java"), vec!["plus", "java"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        assert_eq!(
            tokenize("CI/CD pipelines, node.js (kubernetes)"),
            vec!["pipelines", "node", "kubernetes"]
        );
    }

    #[test]
    fn test_digits_and_underscore_are_word_chars() {
        assert_eq!(tokenize("python3 snake_case utf8"), vec!["python3", "snake_case", "utf8"]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let text = "Senior Rust Engineer building distributed systems";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
