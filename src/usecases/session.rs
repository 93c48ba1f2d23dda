//! Quiz-taking session: collect answers, grade on submit, score bands.
//!
//! Per-session state only; a new generation replaces the whole session.

use crate::domain::{Question, QuestionKind, Quiz};

/// Outcome for one question after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    Unanswered,
}

/// One graded question: what the user said and how it went.
#[derive(Debug, Clone)]
pub struct QuestionResult {
    pub index: usize,
    pub user_answer: Option<String>,
    pub verdict: Verdict,
}

/// Score bands, thresholds in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    KeepPracticing,
    Review,
}

impl ScoreBand {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 90.0 {
            ScoreBand::Excellent
        } else if pct >= 70.0 {
            ScoreBand::Good
        } else if pct >= 50.0 {
            ScoreBand::KeepPracticing
        } else {
            ScoreBand::Review
        }
    }

    /// User-facing message for the final score line.
    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent work! Keep it up!",
            ScoreBand::Good => "Good job!",
            ScoreBand::KeepPracticing => "Keep practicing!",
            ScoreBand::Review => "You might want to review the material.",
        }
    }
}

/// Full grading report, produced by `QuizSession::submit`.
#[derive(Debug, Clone)]
pub struct QuizReport {
    pub results: Vec<QuestionResult>,
    pub correct: usize,
    pub total: usize,
}

impl QuizReport {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}

/// Interactive session over one quiz. Answers accumulate until `submit`;
/// after that, `record_answer` is a no-op until `reset`.
pub struct QuizSession {
    quiz: Quiz,
    answers: Vec<Option<String>>,
    submitted: bool,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        let answers = vec![None; quiz.len()];
        Self {
            quiz,
            answers,
            submitted: false,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Record an answer for question `index`. Empty strings count as no answer.
    pub fn record_answer(&mut self, index: usize, answer: impl Into<String>) {
        if self.submitted || index >= self.answers.len() {
            return;
        }
        let answer = answer.into();
        self.answers[index] = if answer.trim().is_empty() {
            None
        } else {
            Some(answer)
        };
    }

    /// Grade every question and lock the session.
    pub fn submit(&mut self) -> QuizReport {
        self.submitted = true;
        let results: Vec<QuestionResult> = self
            .quiz
            .questions
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(index, (question, answer))| {
                let verdict = match answer {
                    None => Verdict::Unanswered,
                    Some(a) if answer_matches(question, a) => Verdict::Correct,
                    Some(_) => Verdict::Incorrect,
                };
                QuestionResult {
                    index,
                    user_answer: answer.clone(),
                    verdict,
                }
            })
            .collect();

        let correct = results
            .iter()
            .filter(|r| r.verdict == Verdict::Correct)
            .count();
        QuizReport {
            correct,
            total: self.quiz.len(),
            results,
        }
    }

    /// Clear answers and the submitted flag ("Try Again").
    pub fn reset(&mut self) {
        self.answers = vec![None; self.quiz.len()];
        self.submitted = false;
    }
}

/// Case-insensitive, trimmed comparison. For multiple choice, both sides are
/// resolved through the option list first, so an option letter and the full
/// option text grade the same.
pub fn answer_matches(question: &Question, user_answer: &str) -> bool {
    let expected = canonical_answer(question, &question.answer);
    let given = canonical_answer(question, user_answer);
    !expected.is_empty() && expected == given
}

/// Normalized form of `answer` for grading. A lone option letter (a-d)
/// resolves to the normalized option text when the question has options.
fn canonical_answer(question: &Question, answer: &str) -> String {
    let normalized = answer.trim().to_lowercase();
    if question.kind == QuestionKind::MultipleChoice && normalized.len() == 1 {
        if let Some(idx) = letter_index(&normalized) {
            if let Some(option) = question.options.get(idx) {
                return option.trim().to_lowercase();
            }
        }
    }
    normalized
}

/// Index of an option letter: "a" -> 0, "b" -> 1, ...
fn letter_index(letter: &str) -> Option<usize> {
    let c = letter.chars().next()?;
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::fallback_quiz;
    use crate::domain::Question;

    fn mc_question() -> Question {
        Question {
            text: "Pick the even number.".to_string(),
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
                "five".to_string(),
            ],
            answer: "b".to_string(),
            explanation: None,
        }
    }

    #[test]
    fn multiple_choice_accepts_letter_or_text() {
        let q = mc_question();
        assert!(answer_matches(&q, "b"));
        assert!(answer_matches(&q, "B"));
        assert!(answer_matches(&q, "two"));
        assert!(answer_matches(&q, "  Two "));
        assert!(!answer_matches(&q, "a"));
        assert!(!answer_matches(&q, "three"));
    }

    #[test]
    fn text_answer_grades_against_letter_key_and_back() {
        // Key stored as full option text (the fallback quiz does this).
        let mut q = mc_question();
        q.answer = "two".to_string();
        assert!(answer_matches(&q, "b"));
        assert!(answer_matches(&q, "two"));
    }

    #[test]
    fn short_answer_is_case_insensitive_and_trimmed() {
        let q = Question {
            text: "Capital of France?".to_string(),
            kind: QuestionKind::ShortAnswer,
            options: Vec::new(),
            answer: "Paris".to_string(),
            explanation: None,
        };
        assert!(answer_matches(&q, "  paris "));
        assert!(!answer_matches(&q, "Lyon"));
    }

    #[test]
    fn empty_answer_key_never_matches() {
        let q = Question {
            text: "Malformed".to_string(),
            kind: QuestionKind::ShortAnswer,
            options: Vec::new(),
            answer: String::new(),
            explanation: None,
        };
        assert!(!answer_matches(&q, ""));
        assert!(!answer_matches(&q, "anything"));
    }

    #[test]
    fn session_grades_and_counts() {
        let mut session = QuizSession::new(fallback_quiz());
        session.record_answer(1, "b"); // letter for the entanglement question
        session.record_answer(2, "true");
        let report = session.submit();

        assert_eq!(report.total, 3);
        assert_eq!(report.correct, 2);
        assert_eq!(report.results[0].verdict, Verdict::Unanswered);
        assert_eq!(report.results[1].verdict, Verdict::Correct);
        assert_eq!(report.results[2].verdict, Verdict::Correct);
        assert!((report.percentage() - 66.7).abs() < 0.1);
        assert_eq!(report.band(), ScoreBand::KeepPracticing);
    }

    #[test]
    fn answers_lock_after_submit_and_reset_unlocks() {
        let mut session = QuizSession::new(fallback_quiz());
        session.record_answer(2, "False");
        session.submit();

        // Locked: this must not take effect.
        session.record_answer(2, "True");
        let report = session.submit();
        assert_eq!(report.results[2].verdict, Verdict::Incorrect);

        session.reset();
        assert!(!session.is_submitted());
        session.record_answer(2, "True");
        let report = session.submit();
        assert_eq!(report.results[2].verdict, Verdict::Correct);
        assert_eq!(report.results[0].verdict, Verdict::Unanswered);
    }

    #[test]
    fn empty_quiz_scores_zero_percent() {
        let mut session = QuizSession::new(Quiz::default());
        let report = session.submit();
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage(), 0.0);
        assert_eq!(report.band(), ScoreBand::Review);
    }

    #[test]
    fn score_bands_at_thresholds() {
        assert_eq!(ScoreBand::from_percentage(100.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(90.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(89.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(70.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(50.0), ScoreBand::KeepPracticing);
        assert_eq!(ScoreBand::from_percentage(49.9), ScoreBand::Review);
    }
}
