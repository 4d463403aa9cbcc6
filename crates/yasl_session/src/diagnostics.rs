use yasl_diagnostic::termcolor::{ColorChoice, StandardStream};
use yasl_diagnostic::Config;

use crate::sourcemap::{SourceId, SourceMap};

pub mod prelude {
    pub use super::{Diagnostic, IntoDiagnostic};
    pub use crate::sourcemap::SourceId;
    pub use yasl_diagnostic::span::Span;
}

pub type Diagnostic = yasl_diagnostic::Diagnostic<SourceId>;

pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap);
}

/// Collects diagnostics instead of printing them.
impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, _sources: &SourceMap) {
        self.push(diagnostic);
    }
}

/// Renders diagnostics to stderr as they are emitted.
#[derive(Debug)]
pub struct PrettyDiagnosticEmitter {
    stream: StandardStream,
    config: Config,
}

impl PrettyDiagnosticEmitter {
    pub fn new(color: ColorChoice, config: Config) -> Self {
        Self {
            stream: StandardStream::stderr(color),
            config,
        }
    }
}

impl DiagnosticEmitter for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap) {
        let source = &sources[diagnostic.source_id];

        // stderr is the last place left to report to
        let _ = diagnostic.write_to_stream(source, &self.config, &mut self.stream);
    }
}

pub trait IntoDiagnostic<Context: ?Sized> {
    fn into_diagnostic(self, cx: &Context) -> Diagnostic;
}
