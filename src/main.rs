use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = eco_plan::app::run() {
        eprintln!("eco: {err}");
        return ExitCode::from(err.exit_code());
    }
    ExitCode::SUCCESS
}
