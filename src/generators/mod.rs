// src/generators/mod.rs
mod password;
mod strength;

pub use password::{generate_with_rng, PasswordGenerator};
pub use strength::analyze_password_strength;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("no character classes selected")]
    EmptyCharset,
}
