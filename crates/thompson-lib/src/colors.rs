//! ANSI styling for automaton listings, traces and verdicts.
//!
//! - Blue: state identifiers
//! - Green: input symbols, acceptance
//! - Red: rejection
//! - Dim: markers, arrows, positions, epsilon

/// Terminal palette. Every field is empty when colors are off, so callers
/// can interpolate unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// `S{id}` in blue.
    pub fn state(&self, id: u32) -> String {
        format!("{}S{}{}", self.blue, id, self.reset)
    }

    /// An input symbol in green.
    pub fn symbol(&self, symbol: char) -> String {
        format!("{}{}{}", self.green, symbol, self.reset)
    }

    /// Any text, dimmed.
    pub fn dimmed(&self, text: impl std::fmt::Display) -> String {
        format!("{}{}{}", self.dim, text, self.reset)
    }
}
