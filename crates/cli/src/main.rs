use std::process::ExitCode;

fn main() -> ExitCode {
    stockrisk_observability::init();
    stockrisk_cli::run()
}
