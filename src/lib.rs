//! Library entry for hnview exposing the retrieval and view pipeline for integration tests.

pub mod app;
pub mod config;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
