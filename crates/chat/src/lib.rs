// File: crates/chat/src/lib.rs
// Summary: Chat driver entry point; wires extraction and rendering into a turn-based session.

pub mod config;
pub mod export;
pub mod logging;
pub mod presets;
pub mod render;
pub mod session;
pub mod transcript;

pub use config::Config;
pub use presets::Preset;
pub use render::{ChartHandle, ChartSlot, PngChart, Renderer, SkiaRenderer};
pub use session::{ChatSession, PendingTurn, TurnError, TurnOutcome};
pub use transcript::{Author, Message, Transcript};
