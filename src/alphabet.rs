use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{PRIMARY_SIZE, TRAILING_SIZE, tables};

/// Which of the two symbol tables a configuration problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Primary,
    Trailing,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Primary => f.write_str("primary"),
            Table::Trailing => f.write_str("trailing"),
        }
    }
}

/// Errors that can occur while building an alphabet
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("wrong primary table size: expected 2048 symbols, got {actual}")]
    PrimarySize { actual: usize },
    #[error("wrong trailing table size: expected 8 symbols, got {actual}")]
    TrailingSize { actual: usize },
    #[error("forbidden control character in {table} table at index {index}")]
    ControlCharacter { table: Table, index: usize },
}

/// A radix-2048 alphabet: 2048 primary symbols, one per 11-bit value, plus 8
/// trailing symbols that may only end an encoding.
///
/// Symbols must be distinct within each table for decoding to invert
/// encoding. This is the caller's responsibility and is not checked.
#[derive(Debug, Clone)]
pub struct Alphabet {
    primary: [char; PRIMARY_SIZE],
    primary_inverse: HashMap<char, u16>,
    trailing: [char; TRAILING_SIZE],
    trailing_inverse: HashMap<char, u16>,
}

static STANDARD: LazyLock<Alphabet> = LazyLock::new(|| {
    Alphabet::from_strs(tables::PRIMARY, tables::TRAILING)
        .expect("embedded base2048 tables are valid")
});

/// Line breaks are ignored by the decoder, so they can never be symbols.
pub(crate) fn is_line_break(symbol: char) -> bool {
    symbol == '\r' || symbol == '\n'
}

fn check_line_breaks(symbols: &[char], table: Table) -> Result<(), ConfigError> {
    match symbols.iter().position(|&s| is_line_break(s)) {
        Some(index) => Err(ConfigError::ControlCharacter { table, index }),
        None => Ok(()),
    }
}

fn inverse(symbols: &[char]) -> HashMap<char, u16> {
    symbols
        .iter()
        .enumerate()
        .map(|(value, &symbol)| (symbol, value as u16))
        .collect()
}

impl Alphabet {
    /// Build an alphabet from a 2048-symbol primary table and an 8-symbol
    /// trailing table.
    pub fn new(primary: &[char], trailing: &[char]) -> Result<Self, ConfigError> {
        let primary: [char; PRIMARY_SIZE] =
            primary.try_into().map_err(|_| ConfigError::PrimarySize {
                actual: primary.len(),
            })?;
        let trailing: [char; TRAILING_SIZE] =
            trailing.try_into().map_err(|_| ConfigError::TrailingSize {
                actual: trailing.len(),
            })?;

        check_line_breaks(&primary, Table::Primary)?;
        check_line_breaks(&trailing, Table::Trailing)?;

        let alphabet = Self {
            primary_inverse: inverse(&primary),
            trailing_inverse: inverse(&trailing),
            primary,
            trailing,
        };
        log::debug!(
            "built base2048 alphabet ({} distinct primary, {} distinct trailing symbols)",
            alphabet.primary_inverse.len(),
            alphabet.trailing_inverse.len()
        );
        Ok(alphabet)
    }

    /// Build an alphabet from two strings, one symbol per `char`.
    pub fn from_strs(primary: &str, trailing: &str) -> Result<Self, ConfigError> {
        let primary: Vec<char> = primary.chars().collect();
        let trailing: Vec<char> = trailing.chars().collect();
        Self::new(&primary, &trailing)
    }

    /// The alphabet built from the embedded default tables. Built on first
    /// use and shared for the rest of the process.
    pub fn standard() -> &'static Alphabet {
        &STANDARD
    }

    /// The primary table, indexed by 11-bit value.
    pub fn primary(&self) -> &[char; PRIMARY_SIZE] {
        &self.primary
    }

    /// The trailing table, indexed by values 0..8.
    pub fn trailing(&self) -> &[char; TRAILING_SIZE] {
        &self.trailing
    }

    /// The 11-bit value of a primary symbol.
    pub fn primary_value(&self, symbol: char) -> Option<u16> {
        self.primary_inverse.get(&symbol).copied()
    }

    /// The value of a trailing symbol.
    pub fn trailing_value(&self, symbol: char) -> Option<u16> {
        self.trailing_inverse.get(&symbol).copied()
    }
}
