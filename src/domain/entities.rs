//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of question shapes the generator knows how to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "multiple choice")]
    MultipleChoice,
    #[serde(rename = "true/false")]
    TrueFalse,
    #[serde(rename = "short answer")]
    ShortAnswer,
}

impl QuestionKind {
    /// All kinds, in the order the creation form lists them.
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::MultipleChoice,
        QuestionKind::ShortAnswer,
        QuestionKind::TrueFalse,
    ];

    /// Human-readable label, as used in prompts and the UI.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple choice",
            QuestionKind::TrueFalse => "true/false",
            QuestionKind::ShortAnswer => "short answer",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single generated question.
///
/// `options` is populated only for multiple choice; `answer` holds the option
/// letter for parsed multiple-choice questions and a plain string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// An ordered set of generated question records. Ephemeral, per-session;
/// overwritten wholesale on each new generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the creation form collects. Fed to the prompt builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizParams {
    pub topic: String,
    pub difficulty: Difficulty,
    /// Clamped to 1..=20 by the form.
    pub num_questions: u8,
    /// Non-empty; the form preselects multiple choice.
    pub question_kinds: Vec<QuestionKind>,
    #[serde(default)]
    pub subtopics: Vec<String>,
    #[serde(default)]
    pub context_keywords: Vec<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    pub language: String,
    pub include_explanations: bool,
    /// Maximum words per question, when requested.
    #[serde(default)]
    pub max_length: Option<u32>,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            topic: "Quantum Physics".to_string(),
            difficulty: Difficulty::Easy,
            num_questions: 3,
            question_kinds: vec![QuestionKind::MultipleChoice],
            subtopics: Vec::new(),
            context_keywords: Vec::new(),
            target_audience: None,
            language: "en".to_string(),
            include_explanations: true,
            max_length: None,
        }
    }
}
