//! Error diagnostics pointing into a source file, rendered for a terminal.

mod render;
pub mod source;
pub mod span;

pub use termcolor;
use termcolor::{Color, ColorSpec};

use self::span::Span;

/// An error message with a labelled span of the source it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<Id> {
    pub message: String,
    pub label: String,

    pub source_id: Id,
    pub span: Span,
}

impl<Id> Diagnostic<Id> {
    pub fn error(message: impl Into<String>, source_id: Id, span: Span) -> Self {
        Self {
            message: message.into(),
            label: String::new(),
            source_id,
            span,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Rendering settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lines of source shown above and below the labelled line.
    pub context_lines: usize,

    pub error_color: ColorSpec,
    pub emphasis: ColorSpec,
    pub subtle: ColorSpec,

    pub gutter: &'static str,
    pub underline: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        let mut error_color = ColorSpec::new();
        error_color.set_fg(Some(Color::Red)).set_bold(true);

        let mut emphasis = ColorSpec::new();
        emphasis.set_bold(true);

        let mut subtle = ColorSpec::new();
        subtle.set_dimmed(true);

        Self {
            context_lines: 1,

            error_color,
            emphasis,
            subtle,

            gutter: "│",
            underline: "^",
        }
    }
}
