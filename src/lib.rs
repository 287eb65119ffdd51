//! croprec library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod recommend;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the recommendation list is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Every recommendation with its probability score.
    #[default]
    Table,
    /// The top three crops with rank labels, no score.
    Podium,
}

impl DisplayMode {
    /// Toggles between the two modes.
    pub fn next(self) -> DisplayMode {
        match self {
            DisplayMode::Table => DisplayMode::Podium,
            DisplayMode::Podium => DisplayMode::Table,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Table => "Table",
            DisplayMode::Podium => "Top 3",
        }
    }
}
