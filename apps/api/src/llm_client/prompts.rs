// All LLM prompt constants for remote resume analysis.
// The prompt must pin the model to the exact ScoreReport JSON contract, since
// its output is deserialized straight into the same struct the local engine
// produces.

/// System prompt for resume analysis — enforces JSON-only output.
pub const ANALYZE_SYSTEM: &str =
    "You are an expert applicant tracking system and resume analyst. \
    Compare a resume against a job description and score compatibility. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Analysis prompt template. Replace `{resume_text}` and `{jd_text}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze the resume against the job description below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "ats_score": 72,
  "sub_scores": {
    "keywords": 60,
    "impact": 90,
    "readability": 95
  },
  "strengths": [
    "Quantified achievements throughout experience section"
  ],
  "weaknesses": [
    "Missing cloud infrastructure keywords"
  ],
  "missing_keywords": [
    "kubernetes"
  ]
}

All scores are integers from 0 to 100.

RULES for missing_keywords:
- ONLY include Hard Skills (Python, React, etc), Tools (Git, AWS), or Industry Terms (Agile).
- EXCLUDE common English words (knowledge, required, basic, etc).
- At most 10 entries.

RESUME:
{resume_text}

JOB DESCRIPTION:
{jd_text}"#;
