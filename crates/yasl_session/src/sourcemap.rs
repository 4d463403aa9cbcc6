use std::ops::Index;

pub use yasl_diagnostic::source::SourceFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(usize);

/// Every source loaded during a session. Ids are never invalidated.
#[derive(Default, Debug, Clone)]
pub struct SourceMap {
    inner: Vec<SourceFile>,
}

impl SourceMap {
    pub fn insert(&mut self, source: SourceFile) -> SourceId {
        let id = SourceId(self.inner.len());
        self.inner.push(source);
        id
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Index<SourceId> for SourceMap {
    type Output = SourceFile;

    fn index(&self, id: SourceId) -> &Self::Output {
        &self.inner[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::{SourceFile, SourceMap};

    #[test]
    fn ids_are_sequential() {
        let mut sources = SourceMap::default();
        let a = sources.insert(SourceFile::new("a", "program a; begin end."));
        let b = sources.insert(SourceFile::from_path("dir/b.yasl", "program b; begin end."));

        assert_ne!(a, b);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[a].name(), "a");
        assert_eq!(sources[b].name(), "b.yasl");
        assert_eq!(sources[b].text(), "program b; begin end.");
    }
}
