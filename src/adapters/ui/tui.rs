//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Drives the whole flow: main menu -> creation form -> generation spinner ->
//! preview -> quiz taking -> scoring.

use crate::domain::{Difficulty, DomainError, Question, QuestionKind, Quiz, QuizParams};
use crate::ports::InputPort;
use crate::usecases::{GeneratorService, QuizReport, QuizSession, Verdict};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, CustomType, InquireError, MultiSelect, Select, Text};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const MENU_CREATE: &str = "Create quiz";
const MENU_TAKE: &str = "Take quiz";
const MENU_QUIT: &str = "Quit";

/// TUI adapter. Inquire prompts around the generator service.
pub struct TuiInputPort {
    generator: Arc<GeneratorService>,
}

impl TuiInputPort {
    pub fn new(generator: Arc<GeneratorService>) -> Self {
        Self { generator }
    }

    /// Creation form. Mirrors the web form fields and defaults.
    fn collect_params(&self) -> Result<QuizParams, DomainError> {
        let topic = Text::new("Quiz topic:")
            .with_default("Quantum Physics")
            .prompt()
            .map_err(map_inquire)?;

        let difficulty = Select::new("Difficulty:", Difficulty::ALL.to_vec())
            .prompt()
            .map_err(map_inquire)?;

        let num_questions = CustomType::<u8>::new("Number of questions (1-20):")
            .with_default(3)
            .with_error_message("Enter a whole number")
            .prompt()
            .map_err(map_inquire)?
            .clamp(1, 20);

        let mut question_kinds =
            MultiSelect::new("Question types:", QuestionKind::ALL.to_vec())
                .with_default(&[0])
                .prompt()
                .map_err(map_inquire)?;
        if question_kinds.is_empty() {
            question_kinds.push(QuestionKind::MultipleChoice);
        }

        let subtopics = comma_list(
            &Text::new("Specific sub-topics (comma separated, optional):")
                .with_default("")
                .prompt()
                .map_err(map_inquire)?,
        );

        let context_keywords = comma_list(
            &Text::new("Context keywords (comma separated, optional):")
                .with_default("")
                .prompt()
                .map_err(map_inquire)?,
        );

        let target_audience = Text::new("Target audience (optional):")
            .with_default("")
            .prompt()
            .map_err(map_inquire)?;
        let target_audience = if target_audience.trim().is_empty() {
            None
        } else {
            Some(target_audience.trim().to_string())
        };

        let language = Text::new("Language:")
            .with_default("en")
            .prompt()
            .map_err(map_inquire)?;
        let language = if language.trim().is_empty() {
            "en".to_string()
        } else {
            language.trim().to_string()
        };

        let include_explanations = Confirm::new("Include explanations?")
            .with_default(true)
            .prompt()
            .map_err(map_inquire)?;

        let max_length = CustomType::<u32>::new("Maximum length per question (words, 0 = no limit):")
            .with_default(0)
            .with_error_message("Enter a whole number")
            .prompt()
            .map_err(map_inquire)?;
        let max_length = if max_length > 0 { Some(max_length) } else { None };

        Ok(QuizParams {
            topic,
            difficulty,
            num_questions,
            question_kinds,
            subtopics,
            context_keywords,
            target_audience,
            language,
            include_explanations,
            max_length,
        })
    }

    /// Generate under a spinner; warn when the fallback quiz is shown.
    async fn create_quiz(&self) -> Result<Quiz, DomainError> {
        let params = self.collect_params()?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Generating quiz on '{}'...", params.topic));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let (quiz, used_fallback) = self.generator.generate(&params).await;
        spinner.finish_and_clear();

        if used_fallback {
            println!("Generation failed; showing the built-in sample quiz instead.\n");
        }
        print_preview(&quiz);
        println!("Quiz ready. Pick 'Take quiz' from the menu to try it out.\n");
        Ok(quiz)
    }

    /// Walk the questions, grade, print the report; loop on "Try again".
    fn take_quiz(&self, quiz: &Quiz) -> Result<(), DomainError> {
        let mut session = QuizSession::new(quiz.clone());
        loop {
            for (idx, question) in quiz.questions.iter().enumerate() {
                let answer = prompt_answer(idx, question)?;
                session.record_answer(idx, answer);
            }
            let report = session.submit();
            print_report(quiz, &report);

            let again = Confirm::new("Try again?")
                .with_default(false)
                .prompt()
                .map_err(map_inquire)?;
            if !again {
                return Ok(());
            }
            session.reset();
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut current: Option<Quiz> = None;

        loop {
            let choice = Select::new(
                "What would you like to do?",
                vec![MENU_CREATE, MENU_TAKE, MENU_QUIT],
            )
            .prompt();

            match choice {
                Ok(MENU_CREATE) => match self.create_quiz().await {
                    Ok(quiz) => current = Some(quiz),
                    // Esc in the form goes back to the menu.
                    Err(DomainError::Input(_)) => println!("Canceled.\n"),
                    Err(e) => return Err(e),
                },
                Ok(MENU_TAKE) => match &current {
                    Some(quiz) => match self.take_quiz(quiz) {
                        Ok(()) => {}
                        Err(DomainError::Input(_)) => println!("Canceled.\n"),
                        Err(e) => return Err(e),
                    },
                    None => println!("Please generate a quiz first.\n"),
                },
                Ok(_) | Err(InquireError::OperationCanceled) => {
                    info!("exiting on user request");
                    return Ok(());
                }
                Err(e) => return Err(map_inquire(e)),
            }
        }
    }
}

/// Ask one question with the prompt shape matching its kind. Returns the raw
/// user answer (option letter for multiple choice).
fn prompt_answer(idx: usize, question: &Question) -> Result<String, DomainError> {
    println!("Q{}: {}", idx + 1, question.text);
    match question.kind {
        QuestionKind::MultipleChoice if !question.options.is_empty() => {
            let labeled: Vec<String> = question
                .options
                .iter()
                .enumerate()
                .map(|(i, opt)| format!("{}) {}", option_letter(i), opt))
                .collect();
            let picked = Select::new("Select your answer:", labeled)
                .prompt()
                .map_err(map_inquire)?;
            // "a) text" -> "a"
            Ok(picked.chars().take(1).collect())
        }
        QuestionKind::TrueFalse => Select::new("Select your answer:", vec!["True", "False"])
            .prompt()
            .map(str::to_string)
            .map_err(map_inquire),
        _ => Text::new("Enter your answer:")
            .with_default("")
            .prompt()
            .map_err(map_inquire),
    }
}

/// Preview after generation: questions, lettered options, answer, explanation.
fn print_preview(quiz: &Quiz) {
    println!("Generated Quiz Preview");
    println!("----------------------");
    for (idx, q) in quiz.questions.iter().enumerate() {
        println!("Q{}: {}", idx + 1, q.text);
        for (i, opt) in q.options.iter().enumerate() {
            println!("  {}) {}", option_letter(i), opt);
        }
        println!("  Answer: {}", q.answer);
        if let Some(explanation) = &q.explanation {
            println!("  Explanation: {}", explanation);
        }
        println!();
    }
}

/// Per-question verdicts, then the final score line and band message.
fn print_report(quiz: &Quiz, report: &QuizReport) {
    println!();
    for result in &report.results {
        let question = &quiz.questions[result.index];
        match result.verdict {
            Verdict::Correct => println!("Q{}: correct!", result.index + 1),
            Verdict::Incorrect => {
                println!(
                    "Q{}: incorrect. Your answer: {}. Correct answer: {}",
                    result.index + 1,
                    result.user_answer.as_deref().unwrap_or("-"),
                    question.answer
                );
            }
            Verdict::Unanswered => println!("Q{}: no answer provided", result.index + 1),
        }
        if result.verdict != Verdict::Correct {
            if let Some(explanation) = &question.explanation {
                println!("    {}", explanation);
            }
        }
    }
    println!(
        "\nFinal Score: {}/{} ({:.1}%)",
        report.correct,
        report.total,
        report.percentage()
    );
    println!("{}\n", report.band().message());
}

fn option_letter(i: usize) -> char {
    (b'a' + (i as u8).min(25)) as char
}

/// Split a comma-separated field into trimmed, non-empty items.
fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn map_inquire(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}
