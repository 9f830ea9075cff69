// src/cli/mod.rs
use clap::Parser;

use crate::models::CharsetSelection;

pub mod clipboard;
pub mod menu;
pub mod render;

// Slider bounds from the UI this tool replaces.
pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 100;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Password length (1-100)
    #[arg(short, long, default_value_t = 16, env = "PASSFORGE_LENGTH")]
    pub length: usize,

    /// Include lowercase letters
    #[arg(long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(long)]
    pub upper: bool,

    /// Include digits
    #[arg(long)]
    pub digits: bool,

    /// Include symbols
    #[arg(long)]
    pub symbols: bool,

    /// Copy the generated password to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Run the interactive menu
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    /// Character classes from the CLI flags. With no class flag at all,
    /// every class is enabled rather than none.
    pub fn selection(&self) -> CharsetSelection {
        if !self.lower && !self.upper && !self.digits && !self.symbols {
            return CharsetSelection::default();
        }

        CharsetSelection {
            include_lowercase: self.lower,
            include_uppercase: self.upper,
            include_numbers: self.digits,
            include_symbols: self.symbols,
        }
    }
}
