//! Terminal UI layer for SportsTracker.
//!
//! Provides the [`UiContext`] seam used by commands to show messages and ask
//! questions, the English [`ResourceReader`], color styling and terminal
//! detection.

pub mod context;
pub mod resources;
pub mod styles;
pub mod terminal;

pub use context::{MessageKind, TerminalContext, UiContext};
pub use resources::ResourceReader;
