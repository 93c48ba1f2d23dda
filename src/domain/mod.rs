//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{Difficulty, Question, QuestionKind, Quiz, QuizParams};
pub use errors::DomainError;
