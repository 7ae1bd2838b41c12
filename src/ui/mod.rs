//! Full-screen terminal front end: name entry, the board with a column
//! selector, and the result screen.

mod app;
mod game_view;

pub use app::{App, Phase};
