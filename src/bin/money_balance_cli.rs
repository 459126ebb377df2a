use std::process::ExitCode;

fn main() -> ExitCode {
    money_balance::init();
    match money_balance::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Erro fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
