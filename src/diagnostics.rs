//! Pretty-printed error reporting for the CLI, built on `ariadne`.
//!
//! The core [`crate::parser::Parser`] only ever produces plain diagnostic
//! strings (their exact text is pinned by tests), and [`crate::token::Token`]
//! carries no source span, so rather than anchoring each report at a
//! precise byte range, these reports anchor at the start of the file.
//! That's still enough for `ariadne` to draw a labelled, colored report box
//! around each message, which reads far better on a terminal than a bare
//! `eprintln!`.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

/// Prints one parse diagnostic per line, with the file name and source for
/// context, in the order the parser recorded them.
pub fn report_parse_errors(filename: &str, source: &str, errors: &[String]) {
    for message in errors {
        print_report(filename, source, message);
    }
}

/// Prints a single runtime error (an evaluated `Object::Error`'s message).
pub fn report_runtime_error(filename: &str, source: &str, message: &str) {
    print_report(filename, source, message);
}

fn print_report(filename: &str, source: &str, message: &str) {
    let report = Report::build(ReportKind::Error, (filename, 0..0))
        .with_config(Config::default())
        .with_message(message)
        .with_label(
            Label::new((filename, 0..0))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish();

    if report.eprint((filename, Source::from(source))).is_err() {
        eprintln!("{filename}: {message}");
    }
}
