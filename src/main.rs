// src/main.rs
use clap::Parser;

use fontgen::{load_config, run, AppResult, Cli};

fn main() {
    let _ = env_logger::try_init();
    let cli = Cli::parse();
    if let Err(err) = execute(&cli) {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}

fn execute(cli: &Cli) -> AppResult<()> {
    let config = load_config(cli)?;
    if cli.dump {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let atlas = run(&config.resolve()?)?;
    eprintln!(
        "✓ Packed {} glyphs into {}x{} atlas",
        atlas.glyphs.len(),
        atlas.width,
        atlas.height
    );
    Ok(())
}
