//! Stopword Filter — fixed set of professional noise words excluded from
//! keyword consideration. Keeps "experience", "required" and similar filler
//! out of the candidate keyword set and the missing-keyword report.

/// Domain-noise words that never count as candidate keywords.
/// Checked only against tokens that already survived the ≥4-char filter,
/// so short English stopwords are not needed here.
const STOP_WORDS: &[&str] = &[
    "should",
    "looking",
    "basic",
    "knowledge",
    "required",
    "members",
    "work",
    "candidate",
    "ability",
    "skills",
    "using",
    "working",
    "experience",
    "years",
    "strong",
    "excellent",
    "written",
    "verbal",
    "communication",
    "plus",
    "preferred",
    "requirements",
    "responsibilities",
    "provide",
    "applications",
    "maintain",
    "develop",
    "engineer",
    "software",
    "team",
    "programming",
    "databases",
    "problem",
    "solving",
    "related",
    "test",
];

/// Returns true if `token` (already lower-cased) is a noise word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
