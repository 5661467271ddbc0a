//! The local ATS engine — deterministic keyword/impact/readability scoring.
//!
//! Single-pass pipeline per call, no state between calls:
//! keyword extraction and the two text scorers are independent, and a fixed
//! weighted sum aggregates them into the final report.

use crate::scoring::report::{ScoreReport, SubScores};
use crate::scoring::stopwords::is_stop_word;
use crate::scoring::tokenize::tokenize;

/// Achievement verbs counted by the impact scorer. Substring matched
/// against the lower-cased resume, same semantics as keyword matching.
const IMPACT_VERBS: &[&str] = &["achieved", "led", "managed", "increased", "launched", "improved"];

/// Aggregation weights: keywords 50%, impact 30%, readability 20%.
const KEYWORD_WEIGHT: f64 = 0.5;
const IMPACT_WEIGHT: f64 = 0.3;
const READABILITY_WEIGHT: f64 = 0.2;

/// Resumes between these word counts (exclusive on both ends) read well.
const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 900;

const MAX_MISSING_KEYWORDS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume_text` against `job_description`. Total function: any pair
/// of strings (including empty ones) yields a well-formed report, and
/// identical inputs always yield identical output.
pub fn score_resume(resume_text: &str, job_description: &str) -> ScoreReport {
    let resume_lower = resume_text.to_lowercase();

    let candidates = extract_candidates(job_description);
    let (keyword_score, missing_keywords) = score_keywords(&candidates, &resume_lower);
    let impact_score = score_impact(&resume_lower);
    let readability_score = score_readability(resume_text);

    let ats_score = (f64::from(keyword_score) * KEYWORD_WEIGHT
        + f64::from(impact_score) * IMPACT_WEIGHT
        + f64::from(readability_score) * READABILITY_WEIGHT)
        .floor() as u32;

    ScoreReport {
        ats_score,
        sub_scores: SubScores {
            keywords: keyword_score,
            impact: impact_score,
            readability: readability_score,
        },
        // Static illustrative feedback. The local engine does not derive these
        // from the input; only the LLM path produces tailored text. Documented
        // limitation, kept so both backends stay shape-compatible.
        strengths: vec![
            "Clear document structure".to_string(),
            "Professional formatting detected".to_string(),
        ],
        weaknesses: vec![
            "Low impact verb density".to_string(),
            "Missing core technical industry terms".to_string(),
        ],
        missing_keywords,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword extraction and matching
// ────────────────────────────────────────────────────────────────────────────

/// Candidate keywords from the job description: tokenized, stopwords removed,
/// deduplicated with first-seen order preserved (the order the missing-keyword
/// report is derived from).
fn extract_candidates(job_description: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for token in tokenize(job_description) {
        if is_stop_word(&token) || candidates.contains(&token) {
            continue;
        }
        candidates.push(token);
    }
    candidates
}

/// Fraction of candidates present in the resume, scaled to 0–100, plus the
/// ordered missing-keyword list (first 10).
///
/// Matching is raw substring containment against the lower-cased resume, so
/// "java" matches inside "javascript". Preserved deliberately: tightening to
/// token-boundary matching would change observable scores.
fn score_keywords(candidates: &[String], resume_lower: &str) -> (u32, Vec<String>) {
    let matched = candidates
        .iter()
        .filter(|kw| resume_lower.contains(kw.as_str()))
        .count();

    // max(1) denominator: an empty candidate set scores 0 instead of dividing
    // by zero.
    let score = (matched * 100 / candidates.len().max(1)).min(100) as u32;

    let missing = candidates
        .iter()
        .filter(|kw| !resume_lower.contains(kw.as_str()))
        .take(MAX_MISSING_KEYWORDS)
        .cloned()
        .collect();

    (score, missing)
}

// ────────────────────────────────────────────────────────────────────────────
// Impact and readability
// ────────────────────────────────────────────────────────────────────────────

/// Counts distinct achievement verbs present in the resume.
/// Base of 30 so resumes with valid but different phrasing are not
/// zero-scored; saturates at 100 from the 4th distinct verb on.
fn score_impact(resume_lower: &str) -> u32 {
    let verbs_present = IMPACT_VERBS
        .iter()
        .filter(|v| resume_lower.contains(**v))
        .count() as u32;
    (verbs_present * 20 + 30).min(100)
}

/// Binary word-count band check on the original (case-preserved) text:
/// 95 strictly inside (300, 900), flat 60 anywhere outside regardless of
/// degree.
fn score_readability(resume_text: &str) -> u32 {
    let words = resume_text.split_whitespace().count();
    if words > MIN_WORDS && words < MAX_WORDS {
        95
    } else {
        60
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// A resume with `n` whitespace-separated words and no impact verbs or
    /// likely keyword collisions.
    fn resume_of_words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_worked_keyword_example() {
        // "looking" and "experience" are stopwords; "for"/"and" are under
        // 4 chars. Candidates: {python, react}.
        let jd = "Looking for Python and React experience";
        let report = score_resume("Seasoned Python developer", jd);

        assert_eq!(report.sub_scores.keywords, 50);
        assert_eq!(report.missing_keywords, vec!["react"]);
    }

    #[test]
    fn test_empty_resume_against_nonempty_jd() {
        let report = score_resume("", "Looking for Python and React experience");
        // keywords 0, impact base 30, readability 60 (0 words, outside band)
        // → floor(0*0.5 + 30*0.3 + 60*0.2) = 21
        assert_eq!(report.sub_scores.keywords, 0);
        assert_eq!(report.sub_scores.impact, 30);
        assert_eq!(report.sub_scores.readability, 60);
        assert_eq!(report.ats_score, 21);
    }

    #[test]
    fn test_empty_jd_scores_zero_keywords_without_panicking() {
        let report = score_resume("Seasoned Python developer", "");
        assert_eq!(report.sub_scores.keywords, 0);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_jd_of_only_stopwords_scores_zero_keywords() {
        let report = score_resume("anything", "excellent communication skills required");
        assert_eq!(report.sub_scores.keywords, 0);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_missing_keywords_capped_at_ten_without_duplicates_or_stopwords() {
        let jd = "rust golang python react angular svelte docker kubernetes \
                  terraform ansible prometheus grafana rust golang experience required";
        let report = score_resume("", jd);

        assert_eq!(report.missing_keywords.len(), 10);
        let mut deduped = report.missing_keywords.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 10, "missing keywords must not repeat");
        assert!(report
            .missing_keywords
            .iter()
            .all(|kw| !is_stop_word(kw)));
    }

    #[test]
    fn test_missing_keywords_preserve_first_seen_order() {
        let report = score_resume("", "zebra apple zebra mango");
        assert_eq!(report.missing_keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_keyword_match_is_substring_containment() {
        // "java" matches inside "javascript" — known false positive, kept.
        let report = score_resume("Senior JavaScript coder", "Java developer");
        assert_eq!(report.sub_scores.keywords, 50);
        assert_eq!(report.missing_keywords, vec!["developer"]);
    }

    #[test]
    fn test_impact_score_base_is_30_with_no_verbs() {
        // No impact verb, and no accidental substring ("handled" contains
        // "led", so wording here is chosen carefully).
        let report = score_resume("wrote code for the data platform", "");
        assert_eq!(report.sub_scores.impact, 30);
    }

    #[test]
    fn test_impact_score_saturates_at_four_distinct_verbs() {
        let resume = "Achieved targets, led a squad, managed releases, increased uptime";
        let report = score_resume(resume, "");
        assert_eq!(report.sub_scores.impact, 100);
    }

    #[test]
    fn test_impact_verbs_counted_distinctly_not_by_occurrence() {
        let report = score_resume("achieved and achieved and achieved again", "");
        assert_eq!(report.sub_scores.impact, 50); // one distinct verb
    }

    #[test]
    fn test_readability_band_boundaries_are_exclusive() {
        assert_eq!(score_readability(&resume_of_words(300)), 60);
        assert_eq!(score_readability(&resume_of_words(301)), 95);
        assert_eq!(score_readability(&resume_of_words(899)), 95);
        assert_eq!(score_readability(&resume_of_words(900)), 60);
    }

    #[test]
    fn test_all_scores_stay_in_bounds_on_arbitrary_input() {
        let long = resume_of_words(5000);
        let inputs = [
            ("", ""),
            ("résumé naïve façade", "pâtissier recherché"),
            (long.as_str(), "python python python"),
            ("achieved led managed increased launched improved", "x"),
        ];
        for (resume, jd) in inputs {
            let report = score_resume(resume, jd);
            assert!(report.ats_score <= 100);
            assert!(report.sub_scores.keywords <= 100);
            assert!(report.sub_scores.impact <= 100);
            assert!(report.sub_scores.readability <= 100);
            assert!(report.missing_keywords.len() <= 10);
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let resume = "Led migration to Kubernetes, improved deploy times";
        let jd = "Kubernetes and Terraform experience required";
        assert_eq!(score_resume(resume, jd), score_resume(resume, jd));
    }

    #[test]
    fn test_local_strengths_and_weaknesses_are_static_templates() {
        let a = score_resume("one resume", "one jd");
        let b = score_resume("a completely different resume", "another jd");
        assert_eq!(a.strengths, b.strengths);
        assert_eq!(a.weaknesses, b.weaknesses);
    }
}
