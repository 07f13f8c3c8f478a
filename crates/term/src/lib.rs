//! Terminal rendering for the game.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, no I/O)
//! and [`TerminalRenderer`] flushes it to the terminal.
//!
//! Board cells are drawn 2 columns wide by default to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{palette_rgb, GameView, Viewport};
pub use renderer::{changed_rows, encode_frame_into, TerminalRenderer};
