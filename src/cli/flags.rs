use std::path::PathBuf;

use clap::Parser;

/// Generate a secure password.
#[derive(Debug, Parser)]
#[command(name = "passgen", version)]
pub struct CliFlags {
    /// Length of the password
    #[arg(allow_negative_numbers = true)]
    pub length: i64,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude special characters
    #[arg(long)]
    pub no_special: bool,

    /// Save the generated password to a file
    #[arg(long)]
    pub save: bool,

    /// File that --save appends to
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: Option<u32>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print bare passwords only
    #[arg(short, long)]
    pub quiet: bool,

    /// Store the effective options as future defaults
    #[arg(long)]
    pub remember: bool,
}
