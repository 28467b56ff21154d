#![forbid(unsafe_code)]

//! Render-time diagnostics.
//!
//! None of these stop a frame. They are logged when raised and also kept in
//! the [`RenderReport`] so a host without a subscriber can still see them.

use std::fmt;

/// How bad a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A recoverable problem found while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Headers and closers do not pair up. `surplus` is headers minus
    /// closers; `first_underflow` is the first closer with nothing to close.
    Imbalanced {
        surplus: i32,
        first_underflow: Option<usize>,
    },
    /// The closer at `index` had no open collection to end.
    StackUnderflow { index: usize },
    /// The collection ended at `index` would end above where it starts.
    /// Its connector was not drawn.
    InvertedGeometry { index: usize, start: i32, end: i32 },
}

impl Diagnostic {
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Imbalanced { .. } => Severity::Warning,
            Self::StackUnderflow { .. } | Self::InvertedGeometry { .. } => Severity::Error,
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.severity(), Severity::Error)
    }

    /// Log this diagnostic at its severity.
    pub fn emit(&self) {
        match self.severity() {
            Severity::Warning => propview_core::warn!(diagnostic = %self, "properties"),
            Severity::Error => propview_core::error!(diagnostic = %self, "properties"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imbalanced {
                surplus,
                first_underflow,
            } => {
                if *surplus > 0 {
                    write!(f, "imbalanced properties: {surplus} more headers than closers")?;
                } else if *surplus < 0 {
                    write!(f, "imbalanced properties: {} more closers than headers", -surplus)?;
                } else {
                    f.write_str("imbalanced properties")?;
                }
                if let Some(index) = first_underflow {
                    write!(f, " (closer {index} has nothing to close)")?;
                }
                Ok(())
            }
            Self::StackUnderflow { index } => {
                write!(f, "closer {index} popped with no open collection")
            }
            Self::InvertedGeometry { index, start, end } => write!(
                f,
                "collection ended by entry {index} ends at y={end} before it starts at y={start}"
            ),
        }
    }
}

/// What happened during the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Entries processed before the panel's bottom edge was passed.
    pub visible_count: usize,
    /// Header whose collapse state was toggled by a click.
    pub toggled: Option<usize>,
    /// Problems found, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub(crate) fn reset(&mut self) {
        self.visible_count = 0;
        self.toggled = None;
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities() {
        let imbalanced = Diagnostic::Imbalanced {
            surplus: 1,
            first_underflow: None,
        };
        assert_eq!(imbalanced.severity(), Severity::Warning);
        assert!(Diagnostic::StackUnderflow { index: 0 }.is_error());
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn messages() {
        let more_closers = Diagnostic::Imbalanced {
            surplus: -2,
            first_underflow: Some(3),
        };
        assert_eq!(
            more_closers.to_string(),
            "imbalanced properties: 2 more closers than headers (closer 3 has nothing to close)"
        );
        let inverted = Diagnostic::InvertedGeometry {
            index: 4,
            start: 50,
            end: 20,
        };
        assert!(inverted.to_string().contains("y=20"));
    }

    #[test]
    fn report_errors() {
        let mut report = RenderReport::default();
        assert!(!report.has_errors());
        report.diagnostics.push(Diagnostic::StackUnderflow { index: 0 });
        assert!(report.has_errors());
        report.reset();
        assert!(report.diagnostics.is_empty());
    }
}
