use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::op::OpKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Line {0}: expected `MNEMONIC HEX`, got `{1}`")]
    Syntax(usize, String),

    #[error("Line {0}: `{1}` is not a one-byte hex opcode")]
    Code(usize, String),

    #[error("`{0}` is not a one-byte hex opcode")]
    YamlCode(String),

    #[error("Failed to parse YAML opcode table")]
    Yaml(#[from] serde_yaml::Error),
}

/// Mnemonic -> opcode byte. Keys are stored upper-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpTable(IndexMap<String, u8>);

/// The standard SIC instruction set.
pub static STANDARD: Lazy<OpTable> = Lazy::new(OpTable::standard);

impl OpTable {
    pub fn new() -> Self {
        OpTable(IndexMap::new())
    }

    pub fn standard() -> Self {
        let mut table = Self::new();
        for op in OpKind::iter() {
            table.insert(&op.to_string(), op.code());
        }
        table
    }

    /// Text definitions: one `MNEMONIC HEX` pair per line, blank lines ignored.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut table = Self::new();
        for (idx, line) in text.lines().enumerate() {
            let words: Vec<&str> = line.split_whitespace().collect();
            match words.as_slice() {
                [] => continue,
                [mnemonic, code, ..] => {
                    let code = parse_code(code).ok_or(Error::Code(idx + 1, code.to_string()))?;
                    table.insert(mnemonic, code);
                }
                _ => return Err(Error::Syntax(idx + 1, line.trim().to_string())),
            }
        }
        Ok(table)
    }

    /// YAML definitions: a mapping of `MNEMONIC: "HEX"`.
    pub fn from_yaml<R: std::io::Read>(reader: R) -> Result<Self, Error> {
        let raw: IndexMap<String, String> = serde_yaml::from_reader(reader)?;
        let mut table = Self::new();
        for (mnemonic, code) in raw {
            let code = parse_code(&code).ok_or(Error::YamlCode(code.clone()))?;
            table.insert(&mnemonic, code);
        }
        Ok(table)
    }

    pub fn insert(&mut self, mnemonic: &str, code: u8) -> Option<u8> {
        self.0.insert(mnemonic.to_ascii_uppercase(), code)
    }

    pub fn get(&self, mnemonic: &str) -> Option<u8> {
        self.0.get(&mnemonic.to_ascii_uppercase()).copied()
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.0.contains_key(&mnemonic.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(name, code)| (name.as_str(), *code))
    }
}

fn parse_code(s: &str) -> Option<u8> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(s, 16).ok()
}
