//! Commands understood by the engine

/// A parsed user command. Id-taking commands carry the raw argument, which
/// the engine validates itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List => "list",
            Command::Show(_) => "show",
            Command::Add => "add",
            Command::Delete(_) => "delete",
            Command::Edit(_) => "edit",
            Command::Test(_) => "test",
            Command::Play => "play",
            Command::Credits => "credits",
            Command::Quit => "quit",
        }
    }
}

/// What the REPL should do once a command has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFlow {
    /// Show the prompt again
    Continue,
    /// Close the interactive session
    Quit,
}

/// One line of the `help` listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

const fn entry(usage: &'static str, description: &'static str) -> CommandHelp {
    CommandHelp { usage, description }
}

/// Every command, in the order `help` lists them
pub const COMMAND_HELP: &[CommandHelp] = &[
    entry("h|help", "Muestra esta ayuda."),
    entry("list", "Listar los quizzes existentes."),
    entry("show <id>", "Muestra la pregunta y la respuesta del quiz indicado."),
    entry("add", "Añadir un nuevo quiz interactivamente."),
    entry("delete <id>", "Borrar el quiz indicado."),
    entry("edit <id>", "Editar el quiz indicado."),
    entry("test <id>", "Probar el quiz indicado."),
    entry("p|play", "Jugar a preguntar aleatoriamente todos los quizzes."),
    entry("credits", "Créditos."),
    entry("q|quit", "Salir del programa."),
];
