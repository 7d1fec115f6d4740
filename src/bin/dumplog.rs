//! Thin binary shim — all real work lives in `dumplog::cli`.

use std::process::ExitCode;

fn main() -> ExitCode {
    dumplog::cli::run()
}
