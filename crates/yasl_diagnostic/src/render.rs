use std::io;

use termcolor::WriteColor;
use unicode_width::UnicodeWidthStr;

use crate::source::SourceFile;
use crate::span::Span;
use crate::{Config, Diagnostic};

const TAB: &str = "    ";

impl<Id> Diagnostic<Id> {
    /// Writes the diagnostic: a header, the position of the span, and the
    /// lines around it with the span underlined and labelled.
    pub fn write_to_stream(
        &self,
        source: &SourceFile,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        let (line, column) = source
            .line_col(self.span.start)
            .ok_or_else(|| out_of_bounds(self.span))?;

        stream.set_color(&config.error_color)?;
        write!(stream, "Error:")?;
        stream.set_color(&config.emphasis)?;
        writeln!(stream, " {}", self.message)?;
        stream.reset()?;

        writeln!(stream, "In {}:{line}:{column}", source.name())?;

        let labelled = line - 1;
        let first = labelled.saturating_sub(config.context_lines);
        let last = (labelled + config.context_lines).min(source.num_lines() - 1);
        let width = (last + 1).ilog10() as usize + 1;

        write_gutter(stream, config, None, width)?;
        writeln!(stream)?;

        for index in first..=last {
            let text = source.line_str(index).unwrap_or_default();

            write_gutter(stream, config, Some(index + 1), width)?;
            writeln!(stream, " {}", text.replace('\t', TAB))?;

            if index == labelled {
                write_gutter(stream, config, None, width)?;
                self.write_underline(source, config, stream, text, column)?;
            }
        }

        writeln!(stream)
    }

    fn write_underline(
        &self,
        source: &SourceFile,
        config: &Config,
        stream: &mut impl WriteColor,
        line_text: &str,
        column: usize,
    ) -> io::Result<()> {
        let (start_line, _) = source
            .line_col(self.span.start)
            .ok_or_else(|| out_of_bounds(self.span))?;
        let (end_line, end_column) = source
            .line_col(self.span.end)
            .ok_or_else(|| out_of_bounds(self.span))?;

        // spans running onto later lines are underlined to the end of the first
        let len = if end_line == start_line {
            end_column.saturating_sub(column)
        } else {
            usize::MAX
        };

        let before: String = line_text.chars().take(column - 1).collect();
        let under: String = line_text.chars().skip(column - 1).take(len).collect();

        let indent = str_width(&before);
        let carets = str_width(&under).max(1);

        write!(stream, " {:indent$}", "")?;

        stream.set_color(&config.error_color)?;
        write!(stream, "{}", config.underline.repeat(carets))?;
        if !self.label.is_empty() {
            write!(stream, "  {}", self.label)?;
        }
        stream.reset()?;

        writeln!(stream)
    }
}

fn write_gutter(
    stream: &mut impl WriteColor,
    config: &Config,
    line_num: Option<usize>,
    width: usize,
) -> io::Result<()> {
    stream.set_color(&config.subtle)?;
    match line_num {
        Some(n) => write!(stream, "{n:>width$} {}", config.gutter)?,
        None => write!(stream, "{:width$} {}", "", config.gutter)?,
    }
    stream.reset()
}

fn out_of_bounds(span: Span) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("span {}..{} is outside the source", span.start, span.end),
    )
}

fn str_width(s: &str) -> usize {
    s.replace('\t', TAB).width()
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use crate::source::SourceFile;
    use crate::span::Span;
    use crate::{Config, Diagnostic};

    fn render(source: &str, diagnostic: &Diagnostic<()>) -> String {
        let source = SourceFile::new("main.yasl", source);
        let mut stream = NoColor::new(vec![]);

        diagnostic
            .write_to_stream(&source, &Config::default(), &mut stream)
            .unwrap();

        String::from_utf8(stream.into_inner()).unwrap()
    }

    #[test]
    fn labelled_span() {
        let diagnostic = Diagnostic::error("syntax error", (), Span::new(10, 15))
            .with_label("expected `;`");

        assert_eq!(
            render("program p\nconst x = 5;\nbegin end.\nextra", &diagnostic),
            "Error: syntax error
In main.yasl:2:1
  │
1 │ program p
2 │ const x = 5;
  │ ^^^^^  expected `;`
3 │ begin end.

"
        );
    }

    #[test]
    fn span_at_end_of_source() {
        let diagnostic = Diagnostic::error("syntax error", (), Span::empty(20))
            .with_label("expected `.`");

        assert_eq!(
            render("program p;\nbegin end", &diagnostic),
            "Error: syntax error
In main.yasl:2:10
  │
1 │ program p;
2 │ begin end
  │          ^  expected `.`

"
        );
    }

    #[test]
    fn span_over_several_lines() {
        let diagnostic = Diagnostic::error("lexical error", (), Span::new(6, 20))
            .with_label("unterminated comment");

        assert_eq!(
            render("begin { never\nclosed\n", &diagnostic),
            "Error: lexical error
In main.yasl:1:7
  │
1 │ begin { never
  │       ^^^^^^^  unterminated comment
2 │ closed

"
        );
    }

    #[test]
    fn wide_chars_and_tabs() {
        let diagnostic = Diagnostic::error("lexical error", (), Span::new(6, 7))
            .with_label("unexpected character '@'");

        let rendered = render("\t\"日\"@", &diagnostic);
        assert!(rendered.contains("1 │     \"日\"@\n  │         ^  unexpected"));
    }

    #[test]
    fn gutter_fits_line_numbers() {
        let source = "x\n".repeat(10);
        let diagnostic = Diagnostic::error("syntax error", (), Span::new(16, 17));

        let rendered = render(&source, &diagnostic);
        assert!(rendered.contains(" 8 │ x\n 9 │ x\n   │ ^\n10 │ x\n"));
    }

    #[test]
    fn span_outside_source() {
        let source = SourceFile::new("main.yasl", "x");
        let diagnostic = Diagnostic::error("syntax error", (), Span::new(5, 6));

        let mut stream = NoColor::new(vec![]);
        assert!(diagnostic
            .write_to_stream(&source, &Config::default(), &mut stream)
            .is_err());
    }
}
