//! Audio playback module
//!
//! Fire-and-forget clip playback over a single shared output stream.

mod player;

pub use player::ClipPlayer;
