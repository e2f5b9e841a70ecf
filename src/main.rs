//! CSV frontend: requests on stdin, trade events on stdout, diagnostics on
//! stderr.
//!
//! Malformed lines are logged and dropped; the stream keeps going. Exit is
//! at end of input.

use std::io::{self, BufRead, Write};

use matchbook::csv::{apply, parse_line};
use matchbook::report::CsvReporter;
use matchbook::OrderBook;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut book = OrderBook::with_capacity(100_000, 1_000);
    let mut reporter = CsvReporter::new(io::BufWriter::new(stdout.lock()));

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(request)) => {
                apply(&mut book, request, &mut reporter);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(line = line_no + 1, input = line.trim(), %err, "dropping malformed request");
            }
        }
    }

    reporter.into_inner().flush()
}
