use std::path::{Path, PathBuf};

/// A named source text, indexed by line.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    path: Option<PathBuf>,
    text: String,

    // byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_path(name.into(), None, text.into())
    }

    /// A source read from `path`, named after its file name.
    pub fn from_path(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };

        Self::with_path(name, Some(path), text.into())
    }

    fn with_path(name: String, path: Option<PathBuf>, text: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name,
            path,
            text,
            line_starts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn num_lines(&self) -> usize {
        self.line_starts.len()
    }

    /// One-based line and column of a byte offset. Columns count chars.
    pub fn line_col(&self, byte: usize) -> Option<(usize, usize)> {
        if byte > self.text.len() {
            return None;
        }

        let line = self.line_starts.partition_point(|&start| start <= byte) - 1;
        let column = self.text.get(self.line_starts[line]..byte)?.chars().count();

        Some((line + 1, column + 1))
    }

    /// The text of a zero-based line, without its line ending.
    pub fn line_str(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };

        let s = &self.text[start..end];
        Some(s.strip_suffix('\r').unwrap_or(s))
    }
}

#[cfg(test)]
mod tests {
    use super::SourceFile;

    #[test]
    fn lines_and_columns() {
        let source = SourceFile::new("main.yasl", "program p;\r\n  é x\n");

        assert_eq!(source.num_lines(), 3);
        assert_eq!(source.line_col(0), Some((1, 1)));
        assert_eq!(source.line_col(8), Some((1, 9)));
        assert_eq!(source.line_col(12), Some((2, 1)));
        // `é` is two bytes but one column
        assert_eq!(source.line_col(17), Some((2, 5)));
        assert_eq!(source.line_col(19), Some((3, 1)));
        assert_eq!(source.line_col(20), None);
    }

    #[test]
    fn line_text() {
        let source = SourceFile::new("main.yasl", "program p;\r\nbegin end.");

        assert_eq!(source.line_str(0), Some("program p;"));
        assert_eq!(source.line_str(1), Some("begin end."));
        assert_eq!(source.line_str(2), None);
    }

    #[test]
    fn named_after_file() {
        let source = SourceFile::from_path("dir/b.yasl", "");

        assert_eq!(source.name(), "b.yasl");
        assert!(source.path().is_some());
        assert_eq!(source.line_col(0), Some((1, 1)));
    }
}
