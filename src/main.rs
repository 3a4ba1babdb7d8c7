//! FlintOthello - referee-driven Othello engine
//!
//! Reads referee commands from stdin and writes move replies to stdout.
//! Exits 0 on STOP (or end of input) and non-zero on any protocol error,
//! reporting the error on stderr.

use std::process::ExitCode;

use flint_othello::protocol::Protocol;

fn main() -> ExitCode {
    let mut protocol = Protocol::new();
    match protocol.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
