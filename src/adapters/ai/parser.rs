//! Parses free-text model output into structured question records.
//!
//! The prompt asks for numbered question blocks ("1. ...", "2. ..."), each
//! followed by option lines, an `Answer:` line, and an optional
//! `Explanation:` line. This is line-position heuristics plus keyword
//! matching, not a grammar: malformed lines degrade to empty fields instead
//! of failing the whole quiz.

use crate::domain::{DomainError, Question, QuestionKind, Quiz};
use regex::Regex;

/// Option letter markers for multiple choice, lowercase.
const OPTION_MARKERS: [&str; 4] = ["a)", "b)", "c)", "d)"];

/// Split model output into a `Quiz`.
///
/// Returns `Err(Parse)` only when no question block can be extracted at all;
/// the caller treats that the same as an API failure (fallback quiz).
pub fn parse_quiz_output(text: &str) -> Result<Quiz, DomainError> {
    // "\n<digits>. " starts a new question block. Pad with a leading newline
    // so a quiz that begins at the first byte still splits.
    let block_start = Regex::new(r"\n\d+\.\s").expect("valid block-start regex");
    let padded = format!("\n{}", text);

    let mut questions = Vec::new();
    for block in block_start.split(&padded).skip(1) {
        if let Some(q) = parse_block(block) {
            questions.push(q);
        }
    }

    if questions.is_empty() {
        return Err(DomainError::Parse(
            "no question blocks found in model output".to_string(),
        ));
    }
    Ok(Quiz { questions })
}

/// Parse one question block. The first line is the question text; the second
/// line decides the kind (option marker => multiple choice, "true"/"false"
/// keyword => true/false, anything else => short answer).
fn parse_block(block: &str) -> Option<Question> {
    let lines: Vec<&str> = block.trim().lines().map(str::trim).collect();
    let text = (*lines.first()?).to_string();
    if text.is_empty() {
        return None;
    }

    let second = lines.get(1).copied().unwrap_or_default();
    let second_lower = second.to_lowercase();

    let q = if OPTION_MARKERS.iter().any(|m| second_lower.contains(m)) {
        Question {
            text,
            kind: QuestionKind::MultipleChoice,
            options: collect_options(&lines),
            answer: tagged_line(&lines, "answer:").unwrap_or_default(),
            explanation: explanation(&lines),
        }
    } else if second_lower.contains("true") || second_lower.contains("false") {
        Question {
            text,
            kind: QuestionKind::TrueFalse,
            options: Vec::new(),
            // Prefer the explicit Answer: line; older outputs put the verdict
            // on the statement line itself.
            answer: tagged_line(&lines, "answer:").unwrap_or_else(|| second.to_string()),
            explanation: explanation(&lines),
        }
    } else {
        Question {
            text,
            kind: QuestionKind::ShortAnswer,
            options: Vec::new(),
            answer: tagged_line(&lines, "answer:").unwrap_or_default(),
            explanation: explanation(&lines),
        }
    };

    Some(q)
}

/// Lines 2..=5 of the block that carry an option marker, marker stripped.
/// The prompt asks for exactly 4 options; fewer are kept as-is.
fn collect_options(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .skip(1)
        .take(4)
        .filter(|l| {
            let lower = l.to_lowercase();
            OPTION_MARKERS.iter().any(|m| lower.starts_with(m))
        })
        .map(|l| l[2..].trim().to_string())
        .collect()
}

/// Value of the first line starting with `tag` (case-insensitive), trimmed.
fn tagged_line(lines: &[&str], tag: &str) -> Option<String> {
    lines
        .iter()
        .find(|l| l.to_lowercase().starts_with(tag))
        .and_then(|l| l.split_once(':'))
        .map(|(_, rest)| rest.trim().to_string())
}

/// Non-empty `Explanation:` line, if any.
fn explanation(lines: &[&str]) -> Option<String> {
    tagged_line(lines, "explanation:").filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_choice_block() {
        let text = "1. What is the speed of light?\n\
                    a) 3x10^8 m/s\n\
                    b) 3x10^6 m/s\n\
                    c) 3x10^10 m/s\n\
                    d) 3x10^4 m/s\n\
                    Answer: a\n\
                    Explanation: c is the fundamental constant of relativity.";
        let quiz = parse_quiz_output(text).unwrap();
        assert_eq!(quiz.len(), 1);
        let q = &quiz.questions[0];
        assert_eq!(q.kind, QuestionKind::MultipleChoice);
        assert_eq!(q.text, "What is the speed of light?");
        assert_eq!(
            q.options,
            vec!["3x10^8 m/s", "3x10^6 m/s", "3x10^10 m/s", "3x10^4 m/s"]
        );
        assert_eq!(q.answer, "a");
        assert!(q.explanation.as_deref().unwrap().starts_with("c is"));
    }

    #[test]
    fn parses_true_false_with_answer_line() {
        let text = "1. Consider the following statement.\n\
                    True/False: Entropy never decreases in a closed system.\n\
                    Answer: True";
        let quiz = parse_quiz_output(text).unwrap();
        let q = &quiz.questions[0];
        assert_eq!(q.kind, QuestionKind::TrueFalse);
        assert_eq!(q.answer, "True");
        assert!(q.options.is_empty());
        assert!(q.explanation.is_none());
    }

    #[test]
    fn true_false_falls_back_to_statement_line() {
        let text = "1. Is this right?\nTrue or False";
        let quiz = parse_quiz_output(text).unwrap();
        let q = &quiz.questions[0];
        assert_eq!(q.kind, QuestionKind::TrueFalse);
        assert_eq!(q.answer, "True or False");
    }

    #[test]
    fn parses_short_answer_block() {
        let text = "1. Define superposition.\n\
                    Answer: A system exists in all its states at once until measured.\n\
                    Explanation: Core postulate of quantum mechanics.";
        let quiz = parse_quiz_output(text).unwrap();
        let q = &quiz.questions[0];
        assert_eq!(q.kind, QuestionKind::ShortAnswer);
        assert!(q.answer.starts_with("A system exists"));
        assert_eq!(
            q.explanation.as_deref(),
            Some("Core postulate of quantum mechanics.")
        );
    }

    #[test]
    fn splits_multiple_blocks_in_order() {
        let text = "Here is your quiz:\n\
                    1. First question?\nAnswer: one\n\
                    2. Second question?\nAnswer: two\n\
                    3. Third question?\nAnswer: three";
        let quiz = parse_quiz_output(text).unwrap();
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz.questions[0].answer, "one");
        assert_eq!(quiz.questions[2].text, "Third question?");
    }

    #[test]
    fn missing_answer_degrades_to_empty_string() {
        let text = "1. Orphaned question?\nSome stray line without a tag";
        let quiz = parse_quiz_output(text).unwrap();
        let q = &quiz.questions[0];
        assert_eq!(q.kind, QuestionKind::ShortAnswer);
        assert_eq!(q.answer, "");
    }

    #[test]
    fn single_line_block_is_short_answer() {
        let quiz = parse_quiz_output("1. Just a question, nothing else").unwrap();
        assert_eq!(quiz.questions[0].kind, QuestionKind::ShortAnswer);
        assert_eq!(quiz.questions[0].answer, "");
    }

    #[test]
    fn no_blocks_is_a_parse_error() {
        let err = parse_quiz_output("I cannot generate a quiz about that topic.");
        assert!(matches!(err, Err(DomainError::Parse(_))));
    }

    #[test]
    fn option_markers_are_case_insensitive() {
        let text = "1. Pick one.\n\
                    A) first\n\
                    B) second\n\
                    C) third\n\
                    D) fourth\n\
                    Answer: B";
        let quiz = parse_quiz_output(text).unwrap();
        let q = &quiz.questions[0];
        assert_eq!(q.kind, QuestionKind::MultipleChoice);
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options[1], "second");
    }

    #[test]
    fn fewer_than_four_options_are_kept() {
        let text = "1. Two-way choice.\na) yes\nb) no\nAnswer: a";
        let quiz = parse_quiz_output(text).unwrap();
        assert_eq!(quiz.questions[0].options, vec!["yes", "no"]);
    }
}
