// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::config::PadConfig;
pub use crate::core::connection::Connection;
pub use crate::core::dictionary::{Dictionary, DictionaryEntry};
pub use crate::core::pad::{InputPad, PadEvent, PadState, StrokeLimit};
pub use crate::core::symbol::{Draft, Symbol};
pub use crate::core::types::{GridPoint, PadGeometry, GRID_POINT_COUNT};
pub use crate::error::{GlyphError, Result};
