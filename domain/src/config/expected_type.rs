//! Expected output type of an encoded script

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the script returned by `encode_multi`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedType {
    /// One newline-delimited string (default)
    #[default]
    Str,
    /// One string per statement
    List,
}

impl FromStr for ExpectedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" => Ok(Self::Str),
            "list" => Ok(Self::List),
            other => Err(format!(
                "Unsupported expected type \"{}\"; expected one of: str, list",
                other
            )),
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::Str => write!(f, "str"),
            ExpectedType::List => write!(f, "list"),
        }
    }
}
