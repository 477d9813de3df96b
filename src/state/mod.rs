//! Application state: story records, the fetched corpus, and the shell state.

pub mod app_state;
pub mod corpus;
pub mod types;

pub use app_state::{AppState, InputMode, ShellListener};
pub use corpus::Corpus;
pub use types::{Item, LoadStatus};
