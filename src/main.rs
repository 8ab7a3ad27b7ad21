use std::process::ExitCode;

use clap::Parser;
use pump_selector::{app, config, ui_cli::Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "debug"
    } else {
        "pump_selector=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    app::run(cli, &cfg)
}
