//! Text formatting for quizzes, answers and session results
//!
//! Every function returns plain lines (with ANSI colors when enabled) so the
//! console presenter only decides where they go.

use colored::{Color, Colorize};
use quizzer_application::{CommandError, CommandHelp};
use quizzer_domain::{PlayEnd, PlayOutcome, Quiz};

/// Formats engine results for console display
pub struct QuizFormatter;

impl QuizFormatter {
    /// `[id]: question`
    pub fn quiz_line(quiz: &Quiz) -> String {
        format!(" [{}]: {}", quiz.id.to_string().magenta(), quiz.question)
    }

    /// `[id]: question => answer`
    pub fn quiz_detail(quiz: &Quiz) -> String {
        format!(
            " [{}]: {} {} {}",
            quiz.id.to_string().magenta(),
            quiz.question,
            "=>".magenta(),
            quiz.answer
        )
    }

    pub fn list(quizzes: &[Quiz]) -> Vec<String> {
        if quizzes.is_empty() {
            return vec!["No hay ningún quiz guardado.".to_string()];
        }
        quizzes.iter().map(Self::quiz_line).collect()
    }

    pub fn added(quiz: &Quiz) -> String {
        format!(
            "{}: {} {} {}",
            "Se ha añadido".magenta(),
            quiz.question,
            "=>".magenta(),
            quiz.answer
        )
    }

    pub fn updated(quiz: &Quiz) -> String {
        format!(
            "Se ha cambiado el quiz {} por: {} {} {}",
            quiz.id.to_string().magenta(),
            quiz.question,
            "=>".magenta(),
            quiz.answer
        )
    }

    pub fn deleted(id: impl std::fmt::Display) -> String {
        format!("Se ha borrado el quiz {}.", id.to_string().magenta())
    }

    /// Plain message plus banner for a `test` answer
    pub fn checked(correct: bool) -> Vec<String> {
        let mut lines = if correct {
            vec!["Su respuesta es correcta.".to_string()]
        } else {
            vec!["Su respuesta es incorrecta.".to_string()]
        };
        lines.extend(if correct {
            Self::banner("Correcta", Color::Green)
        } else {
            Self::banner("Incorrecta", Color::Red)
        });
        lines
    }

    /// Feedback after each play answer
    pub fn play_answer(correct: bool, score: usize) -> String {
        if correct {
            format!("{} - Lleva {} aciertos.", "CORRECTO".green().bold(), score)
        } else {
            format!("{}", "INCORRECTO.".red().bold())
        }
    }

    pub fn play_finished(outcome: &PlayOutcome) -> Vec<String> {
        let mut lines = Vec::new();
        match outcome.end {
            PlayEnd::Exhausted if outcome.total == 0 => {
                lines.push("No hay preguntas que jugar.".to_string())
            }
            PlayEnd::Exhausted => lines.push("No hay más preguntas.".to_string()),
            PlayEnd::WrongAnswer => {}
            PlayEnd::Abandoned => lines.push("Partida abandonada.".to_string()),
        }
        lines.push(format!(
            "Fin del juego. Aciertos: {} de {}",
            outcome.score, outcome.total
        ));
        lines.extend(Self::banner(&outcome.score.to_string(), Color::Magenta));
        lines
    }

    pub fn help(entries: &[CommandHelp]) -> Vec<String> {
        let width = entries.iter().map(|e| e.usage.len()).max().unwrap_or(0);
        let mut lines = vec!["Comandos:".to_string()];
        lines.extend(
            entries
                .iter()
                .map(|e| format!("  {:<width$} - {}", e.usage, e.description)),
        );
        lines
    }

    pub fn credits(authors: &[String]) -> Vec<String> {
        let mut lines = vec!["Autores de la práctica:".to_string()];
        lines.extend(authors.iter().map(|a| format!("  {}", a.green())));
        lines
    }

    /// Error lines; validation errors get a header and one line per violation
    pub fn error(error: &CommandError) -> Vec<String> {
        let mut lines = Vec::new();
        if matches!(error, CommandError::Validation(_)) {
            lines.push(format!("{} El quiz es erróneo:", "Error:".red().bold()));
            lines.extend(error.messages().iter().map(|m| format!("  {}", m.red())));
        } else {
            lines.extend(
                error
                    .messages()
                    .iter()
                    .map(|m| format!("{} {}", "Error:".red().bold(), m.red())),
            );
        }
        lines
    }

    pub fn unknown_command(name: &str) -> Vec<String> {
        vec![
            format!("Comando desconocido: '{}'", name.red()),
            format!("Use {} para ver todos los comandos disponibles.", "help".green()),
        ]
    }

    /// Boxed, emphasized rendering of a short text
    pub fn banner(text: &str, color: Color) -> Vec<String> {
        let width = text.chars().count() + 2;
        let rule = "─".repeat(width);
        vec![
            format!("╭{}╮", rule).color(color).bold().to_string(),
            format!("│ {} │", text).color(color).bold().to_string(),
            format!("╰{}╯", rule).color(color).bold().to_string(),
        ]
    }
}
