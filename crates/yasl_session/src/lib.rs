pub mod diagnostics;
pub mod sourcemap;

use diagnostics::{DiagnosticEmitter, IntoDiagnostic};
use sourcemap::SourceMap;

/// Proof that an error has been reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorsEmitted;

/// State shared by every compilation unit of one driver run.
pub struct Session<D: DiagnosticEmitter> {
    pub sources: SourceMap,
    pub diagnostics: D,
}

impl<D: DiagnosticEmitter> Session<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            sources: SourceMap::default(),
            diagnostics,
        }
    }

    pub fn report<Context: ?Sized>(
        &mut self,
        error: impl IntoDiagnostic<Context>,
        cx: &Context,
    ) -> ErrorsEmitted {
        let diagnostic = error.into_diagnostic(cx);
        self.diagnostics.emit_diagnostic(diagnostic, &self.sources);

        ErrorsEmitted
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorsEmitted, Session};
    use crate::diagnostics::prelude::*;
    use crate::sourcemap::SourceFile;

    struct MissingEnd(Span);

    impl IntoDiagnostic<SourceId> for MissingEnd {
        fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
            Diagnostic::error("syntax error", *source_id, self.0).with_label("expected `end`")
        }
    }

    #[test]
    fn reported_errors_reach_the_emitter() {
        let mut session = Session::new(Vec::<Diagnostic>::new());
        let id = session
            .sources
            .insert(SourceFile::new("main.yasl", "program p; begin."));

        assert_eq!(session.report(MissingEnd(Span::new(16, 17)), &id), ErrorsEmitted);

        let [diagnostic] = session.diagnostics.as_slice() else {
            panic!("expected one diagnostic");
        };
        assert_eq!(diagnostic.source_id, id);
        assert_eq!(diagnostic.label, "expected `end`");
    }
}
