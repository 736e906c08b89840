//! Maps a typed line to an engine [`Command`]

use quizzer_application::Command;

/// Result of parsing one REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or whitespace-only input
    Empty,
    Command(Command),
    /// First word did not name any command (lowercased)
    Unknown(String),
}

/// Split `line` on whitespace; the first word picks the command
/// (case-insensitive), the second, if any, is its argument. Extra words are
/// ignored.
pub fn parse_line(line: &str) -> ParsedLine {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return ParsedLine::Empty;
    };
    let name = name.to_lowercase();
    let arg = words.next().map(str::to_string);

    let command = match name.as_str() {
        "h" | "help" => Command::Help,
        "list" => Command::List,
        "show" => Command::Show(arg),
        "add" => Command::Add,
        "delete" => Command::Delete(arg),
        "edit" => Command::Edit(arg),
        "test" => Command::Test(arg),
        "p" | "play" => Command::Play,
        "credits" => Command::Credits,
        "q" | "quit" => Command::Quit,
        _ => return ParsedLine::Unknown(name),
    };
    ParsedLine::Command(command)
}
