//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the summary and register views.

use crate::config::Settings;
use crate::models::Money;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Presentation choices derived from settings and command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub color: bool,
}

impl DisplayOptions {
    /// Plain output: no symbol, no color
    pub fn plain() -> Self {
        Self {
            currency_symbol: String::new(),
            color: false,
        }
    }

    /// Options from settings, with color forced off when `no_color` is set
    pub fn from_settings(settings: &Settings, no_color: bool) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            color: settings.color_output && !no_color,
        }
    }

    /// Render an amount with the configured symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Render an amount green when non-negative, red when negative
    pub fn money_signed(&self, amount: Money) -> String {
        let text = self.money(amount);
        if !self.color {
            text
        } else if amount.is_negative() {
            format!("{}{}{}", RED, text, RESET)
        } else {
            format!("{}{}{}", GREEN, text, RESET)
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default(), false)
    }
}

/// Uppercase the first character (category names are stored lowercase)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "=".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
