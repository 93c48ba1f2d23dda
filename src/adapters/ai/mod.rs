//! AI adapter module. Implements AiPort for LLM integration.
//!
//! Provides the Gemini adapter, a mock adapter for offline use, and the
//! output-text parser.

pub mod gemini_adapter;
pub mod mock_adapter;
pub mod parser;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::{fallback_quiz, MockAiAdapter};
pub use parser::parse_quiz_output;
