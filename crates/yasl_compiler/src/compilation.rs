use yasl_frontend::ast::Program;
use yasl_frontend::token::Token;
use yasl_session::diagnostics::DiagnosticEmitter;
use yasl_session::sourcemap::{SourceFile, SourceId};
use yasl_session::Session;

use crate::CompilerResult;

/// Adds a program to the session, either read from the file at `input` or,
/// with `inline`, taken as the source text itself.
pub fn load_source<D: DiagnosticEmitter>(
    session: &mut Session<D>,
    input: String,
    inline: bool,
) -> CompilerResult<SourceId> {
    let source = if inline {
        SourceFile::new("<source>", input)
    } else {
        let text = std::fs::read_to_string(&input)?;
        SourceFile::from_path(input, text)
    };

    tracing::info!(
        name = source.name(),
        path = ?source.path(),
        bytes = source.text().len(),
        "loaded source"
    );

    Ok(session.sources.insert(source))
}

pub fn tokenize<D: DiagnosticEmitter>(
    session: &mut Session<D>,
    source_id: SourceId,
) -> CompilerResult<Vec<Token>> {
    tracing::info!("tokenizing");

    let tokens = yasl_frontend::tokenize(session.sources[source_id].text())
        .map_err(|err| session.report(err, &source_id))?;

    tracing::info!(count = tokens.len(), "tokenized");

    Ok(tokens)
}

pub fn parse<D: DiagnosticEmitter>(
    session: &mut Session<D>,
    source_id: SourceId,
) -> CompilerResult<Program> {
    tracing::info!("parsing");

    let program = yasl_frontend::parse_source(session.sources[source_id].text())
        .map_err(|err| session.report(err, &source_id))?;

    tracing::info!(
        consts = program.block.consts.len(),
        stmts = program.block.stmts.len(),
        "parsed"
    );

    Ok(program)
}
