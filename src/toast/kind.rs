// SPDX-License-Identifier: MPL-2.0
//! Toast kinds and their accent colors.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of a toast, selecting its accent color and label.
///
/// Parsing never fails: names outside the fixed set are kept verbatim in
/// [`ToastKind::Other`] and rendered without an accent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Operation failed (red).
    Error,
    /// Something the user should look at (orange).
    Warning,
    /// Neutral information (blue).
    Info,
    /// Unrecognised kind name, accepted as-is.
    Other(String),
}

impl ToastKind {
    /// Returns the accent color, or `None` for [`ToastKind::Other`].
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            ToastKind::Success => Some(palette::SUCCESS_500),
            ToastKind::Error => Some(palette::ERROR_500),
            ToastKind::Warning => Some(palette::WARNING_500),
            ToastKind::Info => Some(palette::INFO_500),
            ToastKind::Other(_) => None,
        }
    }

    /// Returns the kind name as it would be parsed back.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Other(name) => name,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, ToastKind::Other(_))
    }
}

impl FromStr for ToastKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            "info" => ToastKind::Info,
            other => ToastKind::Other(other.to_string()),
        })
    }
}

impl From<&str> for ToastKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kind_colors_are_distinct() {
        let colors: Vec<Color> = [
            ToastKind::Success,
            ToastKind::Error,
            ToastKind::Warning,
            ToastKind::Info,
        ]
        .iter()
        .map(|kind| kind.color().expect("known kinds have a color"))
        .collect();

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parsing_known_names() {
        assert_eq!(ToastKind::from("success"), ToastKind::Success);
        assert_eq!(ToastKind::from("error"), ToastKind::Error);
        assert_eq!(ToastKind::from("warning"), ToastKind::Warning);
        assert_eq!(ToastKind::from("info"), ToastKind::Info);
    }

    #[test]
    fn unknown_name_is_kept_without_color() {
        let kind = ToastKind::from("celebration");
        assert_eq!(kind, ToastKind::Other("celebration".to_string()));
        assert!(!kind.is_known());
        assert!(kind.color().is_none());
        assert_eq!(kind.to_string(), "celebration");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(!ToastKind::from("Success").is_known());
    }
}
