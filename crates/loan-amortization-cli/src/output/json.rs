use serde_json::Value;
use std::io::{self, ErrorKind, Write};

/// Pretty-print JSON to stdout.
///
/// A closed pipe (`amort schedule ... | head`) ends output quietly.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = serde_json::to_writer_pretty(&mut out, value)
        .map_err(io::Error::from)
        .and_then(|_| writeln!(out));

    if let Err(e) = written {
        if e.kind() != ErrorKind::BrokenPipe {
            eprintln!("JSON serialization error: {}", e);
        }
    }
}
