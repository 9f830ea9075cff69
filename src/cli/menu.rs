// src/cli/menu.rs
use inquire::{Confirm, Select, Text};
use std::error::Error;

use crate::cli::{clipboard, render, MAX_LENGTH, MIN_LENGTH};
use crate::generators::{analyze_password_strength, PasswordGenerator};
use crate::models::CharsetSelection;

pub fn run_cli_menu() -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSFORGE                 ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();

    loop {
        let options = vec!["🔐  Generate password", "🚪  Exit"];

        let choice = Select::new("Choose an option:", options).prompt()?;

        match choice {
            "🔐  Generate password" => {
                let length: usize = Text::new("Password length:")
                    .with_default("16")
                    .prompt()
                    .and_then(|s| {
                        s.parse()
                            .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
                    })?;

                if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
                    println!(
                        "❌ Length must be between {} and {}.",
                        MIN_LENGTH, MAX_LENGTH
                    );
                    continue;
                }

                let include_lowercase = Confirm::new("Include lowercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_uppercase = Confirm::new("Include uppercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_numbers = Confirm::new("Include numbers?")
                    .with_default(true)
                    .prompt()?;

                let include_symbols = Confirm::new("Include symbols?")
                    .with_default(true)
                    .prompt()?;

                let selection = CharsetSelection {
                    include_lowercase,
                    include_uppercase,
                    include_numbers,
                    include_symbols,
                };

                if selection.is_empty() {
                    println!("❌ Please choose at least one of the criteria.");
                    continue;
                }

                match generator.generate_password(length, &selection) {
                    Ok(password) => {
                        println!("\nGenerated password: {}", password);

                        let tier =
                            analyze_password_strength(&password, selection.include_symbols);
                        println!("Strength: {}", render::render_strength(tier));

                        let copy = Confirm::new("Copy to clipboard?")
                            .with_default(false)
                            .prompt()?;

                        if copy {
                            match clipboard::copy_to_clipboard(&password) {
                                Ok(_) => println!("✅ Password copied!"),
                                Err(e) => println!("❌ Unable to copy password: {}", e),
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to generate password: {}", e);
                    }
                }

                // Wait for user to press enter
                let _ = Text::new("Press enter to continue...").prompt();
            }
            _ => {
                println!("👋 Goodbye!");
                break;
            }
        }
    }

    Ok(())
}
