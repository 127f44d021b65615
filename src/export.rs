//! Text encodings of a connection sequence.
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `"1. Peg 0"` per line.
    Txt,
    /// Pretty-printed integer array.
    Json,
    /// Comma-joined integers.
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Txt, Self::Json, Self::Csv];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Encode `connections` in `format`. No encoding ends with a newline.
pub fn export_connections(connections: &[usize], format: ExportFormat) -> String {
    match format {
        ExportFormat::Txt => connections
            .iter()
            .enumerate()
            .map(|(i, peg)| format!("{}. Peg {peg}", i + 1))
            .collect::<Vec<_>>()
            .join("\n"),
        // serializing a slice of integers cannot fail
        ExportFormat::Json => serde_json::to_string_pretty(connections).unwrap_or_default(),
        ExportFormat::Csv => connections
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}
