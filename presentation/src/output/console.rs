//! Console presenter for the quiz engine

use crate::output::formatter::QuizFormatter;
use colored::Colorize;
use quizzer_application::{CommandError, CommandHelp, PlayProgressNotifier, QuizPresenter};
use quizzer_domain::{PlayOutcome, Quiz, QuizId};

/// Prints every engine result to the terminal; errors go to stderr
#[derive(Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_welcome(&self, store_description: &str) {
        println!();
        for line in QuizFormatter::banner("Quizzer", colored::Color::Cyan) {
            println!("{}", line);
        }
        println!("{} {}", "Quizzes:".cyan().bold(), store_description);
        println!(
            "Escriba {} para ver los comandos, {} para salir.",
            "help".green(),
            "quit".green()
        );
        println!();
    }

    fn print_lines(lines: Vec<String>) {
        for line in lines {
            println!("{}", line);
        }
    }
}

impl PlayProgressNotifier for ConsolePresenter {
    fn on_session_start(&self, total: usize) {
        if total > 0 {
            println!("{} {} preguntas.", "Jugando:".cyan().bold(), total);
        }
    }

    fn on_answer(&self, _quiz: &Quiz, correct: bool, score: usize) {
        println!("{}", QuizFormatter::play_answer(correct, score));
    }
}

impl QuizPresenter for ConsolePresenter {
    fn on_quizzes_listed(&self, quizzes: &[Quiz]) {
        Self::print_lines(QuizFormatter::list(quizzes));
    }

    fn on_quiz_shown(&self, quiz: &Quiz) {
        println!("{}", QuizFormatter::quiz_detail(quiz));
    }

    fn on_quiz_added(&self, quiz: &Quiz) {
        println!("{}", QuizFormatter::added(quiz));
    }

    fn on_quiz_updated(&self, quiz: &Quiz) {
        println!("{}", QuizFormatter::updated(quiz));
    }

    fn on_quiz_deleted(&self, id: QuizId) {
        println!("{}", QuizFormatter::deleted(id));
    }

    fn on_answer_checked(&self, _quiz: &Quiz, correct: bool) {
        Self::print_lines(QuizFormatter::checked(correct));
    }

    fn on_play_finished(&self, outcome: &PlayOutcome) {
        Self::print_lines(QuizFormatter::play_finished(outcome));
    }

    fn on_help(&self, entries: &[CommandHelp]) {
        Self::print_lines(QuizFormatter::help(entries));
    }

    fn on_credits(&self, authors: &[String]) {
        Self::print_lines(QuizFormatter::credits(authors));
    }

    fn on_error(&self, error: &CommandError) {
        for line in QuizFormatter::error(error) {
            eprintln!("{}", line);
        }
    }

    fn on_unknown_command(&self, name: &str) {
        for line in QuizFormatter::unknown_command(name) {
            eprintln!("{}", line);
        }
    }
}
