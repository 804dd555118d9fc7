//! UI module for the soundboard
//!
//! - **Components** (`components`): application-specific UI emitting `Message`
//! - **Theme** (`theme`): dark/light palette and shared widget styles

pub mod components;
pub mod theme;
