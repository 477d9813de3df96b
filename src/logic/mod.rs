//! Core non-UI logic: domain extraction, view reducer, paging, and the session boundary.

pub mod domain;
pub mod projector;
pub mod session;
pub mod view;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use domain::extract_domain;
pub use projector::{DEFAULT_PAGE_SIZE, Projector, View};
pub use session::{NoopListener, Session, ViewListener};
pub use view::{Command, DomainMatch, Filter, ViewState, matching_positions, reduce};
