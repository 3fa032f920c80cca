use clap::Parser;
use color_eyre::Result;
use searchbox::cli::{self, Args};
use searchbox::config;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logs go to stderr so stdout stays parseable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(warning) = &loaded.warning {
        eprintln!("warning: {}", warning);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(cli::run(&args, loaded.config))?;

    Ok(())
}
