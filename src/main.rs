use std::process::ExitCode;

fn main() -> ExitCode {
    sitecat::cli::run()
}
