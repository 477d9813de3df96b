//! Terminal shell: runtime loop, key handling, and terminal setup.

mod events;
mod runtime;
mod terminal;

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use events::handle_key;
pub use runtime::run;
pub use terminal::HEADLESS_ENV;
