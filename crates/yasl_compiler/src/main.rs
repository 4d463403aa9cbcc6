mod cli;
mod compilation;

#[cfg(test)]
mod tests;

use std::io::{self, Write as _};
use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};
use yasl_diagnostic::Config;
use yasl_session::diagnostics::PrettyDiagnosticEmitter;
use yasl_session::{ErrorsEmitted, Session};

#[derive(thiserror::Error, Debug)]
enum CompilerError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("errors while compiling")]
    HadErrors,
}

impl From<ErrorsEmitted> for CompilerError {
    fn from(_: ErrorsEmitted) -> Self {
        Self::HadErrors
    }
}

type CompilerResult<T> = Result<T, CompilerError>;

fn main() -> ExitCode {
    initialize_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CompilerResult<()> {
    let cli = Cli::parse();

    let emitter = PrettyDiagnosticEmitter::new(cli.color.into(), Config::default());
    let mut session = Session::new(emitter);

    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Tokens { input, source } => {
            let source_id = compilation::load_source(&mut session, input, source)?;
            let tokens = compilation::tokenize(&mut session, source_id)?;

            for token in tokens {
                writeln!(stdout, "{} {:?} {}", token.pos, token.kind, token.lexeme)?;
            }
        }

        Command::Parse { input, source } => {
            let source_id = compilation::load_source(&mut session, input, source)?;
            let program = compilation::parse(&mut session, source_id)?;

            writeln!(stdout, "{program}")?;
        }
    }

    Ok(())
}

fn initialize_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_filter(env_filter),
        )
        .init();
}
