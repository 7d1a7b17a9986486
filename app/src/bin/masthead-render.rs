use std::process::ExitCode;

use masthead_app::shell;

fn main() -> ExitCode {
    if let Err(err) = masthead_app::run() {
        shell().error(format!("{err:#}"));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
