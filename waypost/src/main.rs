use clap::Parser;

use waypost::app::cli_args::CliArgs;
use waypost::app::run;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CliArgs::parse();
    log::info!("starting waypost at {}", chrono::Local::now().to_rfc3339());
    if let Err(e) = run::run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
