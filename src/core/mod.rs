// src/core/mod.rs

pub mod connection;
pub mod dictionary;
pub mod ordered;
pub mod pad;
pub mod symbol;
pub mod types;
