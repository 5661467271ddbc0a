// Local ATS scoring engine.
// Pure and deterministic: same resume + job description in, same report out.
// The remote LLM path shares the ScoreReport contract and lives behind the
// Scorer trait — no other module calls the engine or the LLM directly.

pub mod engine;
pub mod report;
pub mod scorer;
pub mod stopwords;
pub mod tokenize;
