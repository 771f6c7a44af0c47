use std::process::ExitCode;

use nook::cli::{UsageError, usage};

fn main() -> ExitCode {
    if let Err(err) = nook::run() {
        if let Some(usage_err) = err.downcast_ref::<UsageError>() {
            eprintln!("{usage_err}");
            println!("{}", usage());
        } else {
            eprintln!("error: {err:#}");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
