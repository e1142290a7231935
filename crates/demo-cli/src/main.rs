use demo_cli::commands::leaf_matches;
use demo_cli::{cli, logging, App, AppConfig, EXIT_CONFIG, EXIT_ERROR};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let config_path = leaf_matches(&matches).get_one::<PathBuf>("config");
    let config = match AppConfig::load(config_path.map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    logging::init_tracing(&config.logging);
    tracing::debug!(
        default_user = config.store.effective_default_user_id(),
        "Configuration loaded"
    );

    let app = App::new(&config);
    let mut stdout = std::io::stdout().lock();
    match app.run(&matches, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!("Command failed: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
