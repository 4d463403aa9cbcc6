use yasl_diagnostic::termcolor::NoColor;
use yasl_diagnostic::Config;
use yasl_session::diagnostics::Diagnostic;
use yasl_session::Session;

use crate::compilation;
use crate::CompilerError;

fn test_compiles(source: &str, should_compile: bool) {
    let mut session = Session::new(Vec::<Diagnostic>::new());
    let source_id = compilation::load_source(&mut session, source.to_owned(), true).unwrap();

    let compiled = compilation::parse(&mut session, source_id).is_ok();

    match (compiled, should_compile) {
        (false, true) => panic!(
            "failed to compile: {source:?}, diagnostics: {:?}",
            session.diagnostics
        ),
        (true, false) => panic!("unexpectedly compiled: {source:?}"),
        _ => {}
    }
}

fn render_errors(source: &str) -> String {
    let mut session = Session::new(Vec::<Diagnostic>::new());
    let source_id = compilation::load_source(&mut session, source.to_owned(), true).unwrap();

    assert!(matches!(
        compilation::parse(&mut session, source_id),
        Err(CompilerError::HadErrors)
    ));

    let mut stream = NoColor::new(vec![]);
    for diagnostic in &session.diagnostics {
        diagnostic
            .write_to_stream(
                &session.sources[diagnostic.source_id],
                &Config::default(),
                &mut stream,
            )
            .unwrap();
    }

    String::from_utf8(stream.into_inner()).unwrap()
}

#[test]
fn sample_program() {
    test_compiles(
        "program p;\nconst x = 5;\nbegin\n  print x + 2 * 3;\nend.",
        true,
    );
}

#[test]
fn multi_digit() {
    test_compiles("program p; begin print 100; end.", true);
}

#[test]
fn newlines() {
    test_compiles("\nprogram\np\n;\nbegin\nprint\n0\n;\nend\n.\n", true);
}

#[test]
fn no_whitespace() {
    test_compiles("program p;const x=1;begin print x*(x+1)mod 3;end.", true);
}

#[test]
fn comments() {
    test_compiles("{header}program p; // name\nbegin {nothing} end.", true);
}

#[test]
fn missing_semicolon() {
    test_compiles("program p const x = 5; begin end.", false);
}

#[test]
fn unary_minus() {
    test_compiles("program p; begin print -1; end.", false);
}

#[test]
fn leading_zeros() {
    test_compiles("program p; begin print 007; end.", false);
}

#[test]
fn trailing_input() {
    test_compiles("program p; begin end. end.", false);
}

#[test]
fn unterminated_string() {
    test_compiles("program p; begin end. \"", false);
}

#[test]
fn tokens_of_inline_source() {
    let mut session = Session::new(Vec::<Diagnostic>::new());
    let source_id = compilation::load_source(&mut session, "x <= 10".to_owned(), true).unwrap();

    let tokens = compilation::tokenize(&mut session, source_id).unwrap();
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();

    assert_eq!(lexemes, ["x", "<=", "10", ""]);
    assert!(session.diagnostics.is_empty());
}

#[test]
fn lexical_error_is_reported() {
    let mut session = Session::new(Vec::<Diagnostic>::new());
    let source_id = compilation::load_source(&mut session, "x ? y".to_owned(), true).unwrap();

    assert!(compilation::tokenize(&mut session, source_id).is_err());

    let [diagnostic] = session.diagnostics.as_slice() else {
        panic!("expected one diagnostic");
    };
    assert_eq!(diagnostic.message, "lexical error");
    assert_eq!(diagnostic.label, "unexpected character '?'");
}

#[test]
fn missing_file() {
    let mut session = Session::new(Vec::<Diagnostic>::new());

    assert!(matches!(
        compilation::load_source(&mut session, "does/not/exist.yasl".to_owned(), false),
        Err(CompilerError::Io(_))
    ));
    assert!(session.sources.is_empty());
}

#[test]
fn syntax_error_rendering() {
    let rendered = render_errors("program p\nconst x = 5;\nbegin end.");

    assert!(rendered.starts_with("Error: syntax error\nIn <source>:2:1\n"));
    assert!(rendered.contains("2 │ const x = 5;\n"));
    assert!(rendered.contains("^^^^^  expected `;`, found keyword `const`\n"));
}

#[test]
fn reported_errors_fail_the_phase() {
    let mut session = Session::new(Vec::<Diagnostic>::new());
    let source_id = compilation::load_source(&mut session, "x @".to_owned(), true).unwrap();

    assert!(matches!(
        compilation::tokenize(&mut session, source_id),
        Err(CompilerError::HadErrors)
    ));
    assert!(matches!(
        compilation::parse(&mut session, source_id),
        Err(CompilerError::HadErrors)
    ));
    assert_eq!(session.diagnostics.len(), 2);
}
