//! Quiz store adapters implementing the
//! [`QuizStore`](quizzer_application::QuizStore) port.

mod json_file;
mod memory;
mod seed;
mod table;

pub use json_file::JsonFileQuizStore;
pub use memory::InMemoryQuizStore;
pub use seed::default_quizzes;
