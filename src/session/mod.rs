//! Prompt-driven session loop: asks for player names, runs games through the
//! turn controller, prints the board as text, and offers replays.

mod console;
mod render;

pub use console::Console;
pub use render::{board_to_text, cell_glyph};
