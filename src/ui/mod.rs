//! Terminal UI: the interactive game loop and its ratatui view.

mod app;
mod game_view;

pub use app::App;
