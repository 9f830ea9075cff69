use anyhow::bail;
use clap::Parser;

mod cli;
mod generators;
mod models;

use crate::cli::{Args, MAX_LENGTH, MIN_LENGTH};
use crate::generators::{analyze_password_strength, PasswordGenerator};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    log::debug!("Command line args: {:?}", args);

    if args.interactive {
        return cli::menu::run_cli_menu().map_err(|e| anyhow::anyhow!(e.to_string()));
    }

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&args.length) {
        bail!("length must be between {} and {}", MIN_LENGTH, MAX_LENGTH);
    }

    let selection = args.selection();
    let generator = PasswordGenerator::new();

    let password = generator.generate_password(args.length, &selection)?;
    let tier = analyze_password_strength(&password, selection.include_symbols);

    if args.json {
        let output = serde_json::json!({
            "password": password,
            "strength": tier,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", password);
        println!("Strength: {}", cli::render::render_strength(tier));
    }

    if args.copy {
        cli::clipboard::copy_to_clipboard(&password)?;
        println!("✅ Password copied!");
    }

    Ok(())
}
