//! Procedural magic-wand app icon generator.
//!
//! Renders a gradient background, a wand with sparkles, and an iOS-style
//! rounded-corner mask at every size in a table, writing one PNG per size.

pub mod contents_json;
pub mod draw;
pub mod error;
pub mod gradient;
pub mod icon_gen;
pub mod sizes;

pub use error::IconError;
pub use icon_gen::{create_app_icon, generate_icons, GenerationReport, GeneratorConfig};
