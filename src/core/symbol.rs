// src/core/symbol.rs
//! Drawn shapes.
//!
//! A [`Draft`] is what the pad builds while the user is drawing: connections
//! in stroke order, retraced segments kept so each one can be undone. A
//! [`Symbol`] is the canonical form, sorted and duplicate-free, and is the
//! only form that compares, serializes, or keys a dictionary.
//!
//! Text encoding: every connection is two base-11 digits (`0`-`9`, `a`),
//! concatenated in sequence order. `[(0,1), (1,2)]` encodes as `"0112"`.
//! Decoding pairs UTF-16 code units, so a character outside the BMP spends
//! one whole (unparsable) pair and the digits after it stay aligned.

use crate::core::connection::Connection;
use crate::core::ordered::OrderedSet;
use crate::core::types::GRID_POINT_COUNT;
use crate::error::{GlyphError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const RADIX: u32 = GRID_POINT_COUNT as u32;

fn write_connections<'a, I>(f: &mut fmt::Formatter<'_>, connections: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Connection>,
{
    for c in connections {
        for point in [c.a(), c.b()] {
            // '?' is outside the alphabet, so off-grid points never decode back
            let digit = u32::try_from(point)
                .ok()
                .and_then(|p| char::from_digit(p, RADIX))
                .unwrap_or('?');
            write!(f, "{}", digit)?;
        }
    }
    Ok(())
}

fn unit_digit(unit: u16) -> Option<u32> {
    char::from_u32(u32::from(unit))?.to_digit(RADIX)
}

/// Splits `text` into pairs of UTF-16 code units. The flag is set when an
/// odd unit is left over.
fn decode_pairs(text: &str) -> (Vec<Option<Connection>>, bool) {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut pairs = units.chunks_exact(2);
    let decoded = pairs
        .by_ref()
        .map(|pair| {
            let p = unit_digit(pair[0])?;
            let q = unit_digit(pair[1])?;
            Some(Connection::new(p as usize, q as usize))
        })
        .collect();
    let dangling = !pairs.remainder().is_empty();
    (decoded, dangling)
}

/// A normalized shape: its connections are always sorted and unique.
#[derive(Debug, Clone, Default)]
pub struct Symbol {
    connections: OrderedSet<Connection>,
}

impl Symbol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid connection that is not already present.
    /// Returns whether the symbol changed.
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        connection.is_valid() && self.connections.add(connection)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn connection_at(&self, index: usize) -> Result<Connection> {
        self.connections.at(index).copied()
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Sorts and de-duplicates in place. Idempotent; `add_connection` already
    /// keeps the sequence in this form.
    pub fn normalize(&mut self) -> &mut Self {
        self.connections.sort_and_unique();
        self
    }

    pub fn compare(x: &Symbol, y: &Symbol) -> Ordering {
        x.cmp(y)
    }

    /// Strict counterpart of `parse`: rejects odd-length text, characters
    /// outside the base-11 alphabet, and pairs that are invalid or repeated.
    pub fn from_str_strict(text: &str) -> Result<Symbol> {
        let invalid = || GlyphError::InvalidEncoding { text: text.to_string() };
        let (pairs, dangling) = decode_pairs(text);
        if dangling {
            return Err(invalid());
        }
        let mut symbol = Symbol::new();
        for pair in pairs {
            let connection = pair.ok_or_else(invalid)?;
            if !symbol.add_connection(connection) {
                return Err(invalid());
            }
        }
        Ok(symbol)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.connections.as_slice() == other.connections.as_slice()
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.connections.as_slice().hash(state);
    }
}

impl Ord for Symbol {
    /// Pairwise over the connections; on a common prefix, fewer connections sort first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.connections.as_slice().cmp(other.connections.as_slice())
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_connections(f, &self.connections)
    }
}

impl FromStr for Symbol {
    type Err = Infallible;

    /// Permissive decode: malformed, invalid, and duplicate pairs are dropped.
    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let (pairs, dangling) = decode_pairs(text);
        let total = pairs.len();
        let mut symbol = Symbol::new();
        let added = pairs
            .into_iter()
            .flatten()
            .filter(|&c| symbol.add_connection(c))
            .count();
        if added < total || dangling {
            log::warn!(
                "decoded {:?}: kept {} of {} pairs{}",
                text,
                added,
                total,
                if dangling { ", dangling character ignored" } else { "" }
            );
        }
        Ok(symbol)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        match text.parse() {
            Ok(symbol) => symbol,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Symbol::from(text.as_str()))
    }
}

/// A shape being drawn: connections in stroke order, duplicates allowed.
///
/// Drafts do not compare. Turn one into a [`Symbol`] first.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    connections: OrderedSet<Connection>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends without validity or duplicate checks, so undo reverses exactly
    /// what was drawn.
    pub fn add_connection_forced(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Removes the most recently appended connection.
    pub fn remove_last_connection(&mut self) -> Option<Connection> {
        self.connections.pop()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn connection_at(&self, index: usize) -> Result<Connection> {
        self.connections.at(index).copied()
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn clear(&mut self) {
        self.connections.clear();
    }

    /// Sorts and de-duplicates, consuming the draft. Invalid connections that
    /// were forced in are dropped here.
    pub fn normalize(self) -> Symbol {
        let mut connections = self.connections;
        connections.retain(Connection::is_valid);
        connections.sort_and_unique();
        Symbol { connections }
    }

    /// Normalized copy; the draft keeps its stroke order.
    pub fn to_symbol(&self) -> Symbol {
        self.clone().normalize()
    }
}

impl From<&Symbol> for Draft {
    fn from(symbol: &Symbol) -> Self {
        Self {
            connections: symbol.connections.clone(),
        }
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_connections(f, &self.connections)
    }
}
