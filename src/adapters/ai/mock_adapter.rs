//! Mock AI adapter for testing without API calls.
//!
//! Returns a canned completion in the same wire format the prompt asks for,
//! so the parser is exercised end to end. Also hosts the fixed fallback quiz
//! shown when a real generation attempt fails.

use crate::domain::{DomainError, Question, QuestionKind, Quiz};
use crate::ports::AiPort;
use std::time::Duration;
use tracing::info;

/// Canned model output, one block per question kind.
const CANNED_OUTPUT: &str = "\
1. What is the principle of wave-particle duality?
Answer: Every particle or quantum entity exhibits both wave and particle properties.
Explanation: Wave-particle duality is a fundamental concept of quantum mechanics.
2. Which of the following is an example of quantum entanglement?
a) Two electrons sharing the same orbit
b) Two particles whose states are dependent regardless of distance
c) A photon passing through a slit
d) A neutron decaying into a proton
Answer: b
Explanation: Entanglement means the state of one particle instantly influences the other, no matter the distance.
3. Is the following statement correct?
True/False: The Schrodinger equation is a fundamental equation in quantum mechanics.
Answer: True
Explanation: The Schrodinger equation describes how the quantum state of a system changes over time.
";

/// Mock AI adapter.
///
/// Returns predetermined output without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AiPort for MockAiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(
            prompt_len = prompt.len(),
            "[MOCK] Simulating quiz generation"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(CANNED_OUTPUT.to_string())
    }
}

/// The fixed quiz shown when generation fails. Returned unchanged on every
/// failure, regardless of cause.
pub fn fallback_quiz() -> Quiz {
    Quiz {
        questions: vec![
            Question {
                text: "What is the principle of wave-particle duality?".to_string(),
                kind: QuestionKind::ShortAnswer,
                options: Vec::new(),
                answer: "It states that every particle or quantum entity exhibits both wave and particle properties.".to_string(),
                explanation: Some(
                    "Wave-particle duality is a fundamental concept of quantum mechanics."
                        .to_string(),
                ),
            },
            Question {
                text: "Which of the following is an example of quantum entanglement?".to_string(),
                kind: QuestionKind::MultipleChoice,
                options: vec![
                    "Two electrons sharing the same orbit".to_string(),
                    "Two particles whose states are dependent regardless of distance".to_string(),
                    "A photon passing through a slit".to_string(),
                    "A neutron decaying into a proton".to_string(),
                ],
                answer: "Two particles whose states are dependent regardless of distance"
                    .to_string(),
                explanation: Some(
                    "Entanglement means the state of one particle instantly influences the other, no matter the distance."
                        .to_string(),
                ),
            },
            Question {
                text: "True or False: The Schrodinger equation is a fundamental equation in quantum mechanics.".to_string(),
                kind: QuestionKind::TrueFalse,
                options: Vec::new(),
                answer: "True".to_string(),
                explanation: Some(
                    "The Schrodinger equation describes how the quantum state of a system changes over time."
                        .to_string(),
                ),
            },
        ],
    }
}
