//! The `billsplit` binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    billsplit::cmd::split::main()
}
