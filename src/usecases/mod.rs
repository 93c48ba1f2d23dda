//! Application use cases. Orchestrate domain logic via ports.

pub mod generator;
pub mod session;

pub use generator::GeneratorService;
pub use session::{QuizReport, QuizSession, ScoreBand, Verdict};
