//! Quiz generation: build prompt -> call AI -> parse output.
//!
//! Single catch-all error policy: any failure on that path (HTTP, auth,
//! quota, malformed response) is logged and replaced by the fixed fallback
//! quiz. No retries.

use crate::adapters::ai::{fallback_quiz, parse_quiz_output};
use crate::domain::{DomainError, Quiz, QuizParams};
use crate::ports::AiPort;
use std::sync::Arc;
use tracing::{info, warn};

/// Format instructions sent ahead of the parameters. The parser depends on
/// this exact shape (numbered blocks, a)–d) markers, Answer:/Explanation:
/// tags), so keep the two in sync.
const FORMAT_INSTRUCTIONS: &str = "\
You are a quiz generator. Generate a quiz following this EXACT format for each question type:

For multiple choice questions:
1. [Question text here]
a) [First option here]
b) [Second option here]
c) [Third option here]
d) [Fourth option here]
Answer: [Correct option letter (a, b, c, or d)]
Explanation: [Explanation text if requested]

For true/false questions:
1. [Question text here]
True/False: [statement]
Answer: [True or False]
Explanation: [Explanation text if requested]

For short answer questions:
1. [Question text here]
Answer: [Correct answer text]
Explanation: [Explanation text if requested]

Generate a quiz with these parameters:
";

/// Build the full generation prompt from form parameters.
pub fn build_prompt(params: &QuizParams) -> String {
    let kinds = params
        .question_kinds
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ");

    let mut prompt = String::from(FORMAT_INSTRUCTIONS);
    prompt.push_str(&format!("- Topic: {}\n", params.topic));
    prompt.push_str(&format!("- Difficulty: {}\n", params.difficulty));
    prompt.push_str(&format!(
        "- Number of Questions: {}\n",
        params.num_questions
    ));
    prompt.push_str(&format!("- Question Types: {}\n", kinds));

    if !params.subtopics.is_empty() {
        prompt.push_str(&format!("- Sub-topics: {}\n", params.subtopics.join(", ")));
    }
    if !params.context_keywords.is_empty() {
        prompt.push_str(&format!(
            "- Context Keywords: {}\n",
            params.context_keywords.join(", ")
        ));
    }
    if let Some(audience) = &params.target_audience {
        prompt.push_str(&format!("- Target Audience: {}\n", audience));
    }
    prompt.push_str(&format!("- Language: {}\n", params.language));
    prompt.push_str(&format!(
        "- Include Explanations: {}\n",
        if params.include_explanations {
            "Yes"
        } else {
            "No"
        }
    ));
    if let Some(max_length) = params.max_length {
        prompt.push_str(&format!(
            "- Maximum Length per Question: {} words\n",
            max_length
        ));
    }

    prompt.push_str(
        "\nIMPORTANT: Follow the exact format shown above. For multiple choice, \
         always provide exactly 4 options labeled a), b), c), d).",
    );
    prompt
}

/// Generation service. Owns the AI port; the UI owns the params.
pub struct GeneratorService {
    ai: Arc<dyn AiPort>,
}

impl GeneratorService {
    pub fn new(ai: Arc<dyn AiPort>) -> Self {
        Self { ai }
    }

    /// Generate a quiz, falling back to the fixed mock quiz on any failure.
    ///
    /// Returns the quiz plus a flag telling the UI whether the fallback was
    /// used (so it can warn the user).
    pub async fn generate(&self, params: &QuizParams) -> (Quiz, bool) {
        match self.try_generate(params).await {
            Ok(quiz) => (quiz, false),
            Err(e) => {
                warn!(error = %e, "quiz generation failed, showing fallback quiz");
                (fallback_quiz(), true)
            }
        }
    }

    /// The fallible path: prompt -> AI -> parse.
    pub async fn try_generate(&self, params: &QuizParams) -> Result<Quiz, DomainError> {
        let prompt = build_prompt(params);
        let text = self.ai.generate(&prompt).await?;
        let quiz = parse_quiz_output(&text)?;
        info!(
            topic = %params.topic,
            requested = params.num_questions,
            parsed = quiz.len(),
            "quiz generated"
        );
        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiAdapter;
    use crate::domain::{Difficulty, QuestionKind};

    /// AiPort stub that always fails, for exercising the fallback path.
    struct FailingAi;

    #[async_trait::async_trait]
    impl AiPort for FailingAi {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            Err(DomainError::Ai("simulated outage".to_string()))
        }
    }

    /// AiPort stub that returns unparseable prose.
    struct RamblingAi;

    #[async_trait::async_trait]
    impl AiPort for RamblingAi {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            Ok("I'm sorry, I can't produce a quiz right now.".to_string())
        }
    }

    fn params() -> QuizParams {
        QuizParams {
            topic: "Rust ownership".to_string(),
            difficulty: Difficulty::Hard,
            num_questions: 5,
            question_kinds: vec![QuestionKind::MultipleChoice, QuestionKind::ShortAnswer],
            subtopics: vec!["borrowing".to_string(), "lifetimes".to_string()],
            context_keywords: vec!["move semantics".to_string()],
            target_audience: Some("intermediate developers".to_string()),
            language: "en".to_string(),
            include_explanations: false,
            max_length: Some(40),
        }
    }

    #[test]
    fn prompt_carries_all_parameters() {
        let prompt = build_prompt(&params());
        assert!(prompt.contains("- Topic: Rust ownership"));
        assert!(prompt.contains("- Difficulty: hard"));
        assert!(prompt.contains("- Number of Questions: 5"));
        assert!(prompt.contains("- Question Types: multiple choice, short answer"));
        assert!(prompt.contains("- Sub-topics: borrowing, lifetimes"));
        assert!(prompt.contains("- Context Keywords: move semantics"));
        assert!(prompt.contains("- Target Audience: intermediate developers"));
        assert!(prompt.contains("- Language: en"));
        assert!(prompt.contains("- Include Explanations: No"));
        assert!(prompt.contains("- Maximum Length per Question: 40 words"));
        assert!(prompt.contains("exactly 4 options labeled a), b), c), d)"));
    }

    #[test]
    fn prompt_omits_unset_optionals() {
        let prompt = build_prompt(&QuizParams::default());
        assert!(!prompt.contains("- Sub-topics:"));
        assert!(!prompt.contains("- Context Keywords:"));
        assert!(!prompt.contains("- Target Audience:"));
        assert!(!prompt.contains("- Maximum Length per Question:"));
        assert!(prompt.contains("- Include Explanations: Yes"));
    }

    #[tokio::test]
    async fn ai_failure_yields_fallback_unchanged() {
        let service = GeneratorService::new(Arc::new(FailingAi));
        let (quiz, used_fallback) = service.generate(&params()).await;
        assert!(used_fallback);
        assert_eq!(quiz, fallback_quiz());
    }

    #[tokio::test]
    async fn unparseable_output_yields_fallback_unchanged() {
        let service = GeneratorService::new(Arc::new(RamblingAi));
        let (quiz, used_fallback) = service.generate(&params()).await;
        assert!(used_fallback);
        assert_eq!(quiz, fallback_quiz());
    }

    #[tokio::test]
    async fn mock_adapter_output_parses_without_fallback() {
        let service = GeneratorService::new(Arc::new(MockAiAdapter::with_delay(1)));
        let (quiz, used_fallback) = service.generate(&params()).await;
        assert!(!used_fallback);
        assert_eq!(quiz.len(), 3);
        assert!(quiz
            .questions
            .iter()
            .all(|q| QuestionKind::ALL.contains(&q.kind)));
    }
}
