//! Shared harness for the end-to-end test files.
//!
//! Each file declares `mod cases;` and then lists `test_case!` blocks. A case
//! names its input and any of the expected printed output, the parsed form
//! (one declaration per line, grouping spelled out), or the first error.
#![allow(dead_code)]

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use tally::{Error, render_error_to_string_no_color};

#[macro_export]
macro_rules! test_case {
    {
        name: $name:ident,
        input: $input:expr,
        $( parsed: $parsed:expr, )?
        $( output: $output:expr, )?
        $( error: { code: $code:expr, line: $line:expr $(, contains: [$($needle:expr),* $(,)?])? $(,)? }, )?
    } => {
        #[test]
        fn $name() {
            let input: &str = $input;
            $( $crate::cases::check_parsed(input, $parsed); )?
            $( $crate::cases::check_output(input, $output); )?
            $( $crate::cases::check_error(input, $code, $line, &[$($($needle),*)?]); )?
        }
    };
}

pub fn run(input: &str) -> Result<String, Error> {
    let arena = Bump::new();
    let bindings = tally::run(&arena, input)?;
    Ok(bindings.iter().map(|b| format!("{}\n", b)).collect())
}

pub fn check_parsed(input: &str, expected: &str) {
    let arena = Bump::new();
    let program = match tally::parser::parse(&arena, input) {
        Ok(program) => program,
        Err(e) => panic!("Parsing failed for {:?}:\n{}", input, e),
    };
    let parsed: String = program.decls.iter().map(|d| format!("{}\n", d)).collect();
    assert_eq!(parsed, expected, "parsed form of {:?}", input);
}

pub fn check_output(input: &str, expected: &str) {
    match run(input) {
        Ok(output) => assert_eq!(output, expected, "output of {:?}", input),
        Err(e) => panic!(
            "Running {:?} failed:\n{}",
            input,
            render_error_to_string_no_color(&e)
        ),
    }
}

pub fn check_error(input: &str, code: &str, line: u32, needles: &[&str]) {
    let err = match run(input) {
        Ok(output) => panic!("Expected an error for {:?}, got output {:?}", input, output),
        Err(e) => e,
    };

    let diagnostic = match err.diagnostics().first() {
        Some(diagnostic) => diagnostic,
        None => panic!("Error without diagnostics for {:?}: {}", input, err),
    };
    assert_eq!(diagnostic.code.as_deref(), Some(code), "error code for {:?}", input);
    assert_eq!(diagnostic.line, line, "error line for {:?}", input);

    // The one-line message names the line too.
    let message = err.to_string();
    assert!(
        message.contains(&format!("line {}", line)),
        "message {:?} does not mention line {}",
        message,
        line
    );

    let rendered = render_error_to_string_no_color(&err);
    for needle in needles {
        assert!(
            rendered.contains(needle),
            "rendered error does not contain {:?}:\n{}",
            needle,
            rendered
        );
    }
}
