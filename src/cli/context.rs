//! CLI context - bundles settings, flags, and console state.

use std::path::{Path, PathBuf};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, Console};
use crate::error::{AppError, GenerateError, Result};
use crate::pass::{self, Password, PasswordSink, charset};
use crate::settings::Settings;
use crate::terminal::{calculate_entropy, entropy_strength};

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    settings_path: PathBuf,
    console: Console,
}

impl Context {
    /// Build a context from parsed flags layered over saved settings.
    pub fn new(flags: CliFlags, saved: Settings, settings_path: PathBuf) -> Self {
        let mut ctx = Self {
            settings: saved,
            console: Console::new(flags.quiet),
            flags,
            settings_path,
        };
        ctx.apply_flags();
        ctx
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Generate, remember, show, then save. Nothing is stored for a rejected request.
    pub fn run(&mut self) -> Result<()> {
        let passwords = self.generate()?;

        if self.flags.remember {
            self.remember()?;
        }
        self.show(&passwords)?;

        if self.flags.save {
            let sink = self.sink();
            sink.append(&passwords)?;
            log::info!("appended {} password(s) to {}", passwords.len(), sink.path().display());
            self.console.saved(passwords.len(), sink.path());
        }
        Ok(())
    }

    /// Opt-out flags only ever disable classes enabled by the saved settings.
    fn apply_flags(&mut self) {
        if self.flags.no_uppercase {
            self.settings.uppercase = false;
        }
        if self.flags.no_lowercase {
            self.settings.lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.digits = false;
        }
        if self.flags.no_special {
            self.settings.special = false;
        }
        if let Some(number) = self.flags.number {
            self.settings.count = number as usize;
        }
        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = path.to_string_lossy().into_owned();
        }
    }

    /// Requested length. Negative input maps to 0 so the generator rejects it as too short.
    pub fn length(&self) -> usize {
        usize::try_from(self.flags.length).unwrap_or(0)
    }

    pub fn generate(&self) -> std::result::Result<Vec<Password>, GenerateError> {
        let length = self.length();
        let classes = self.settings.classes();
        let count = self.settings.count.max(1);

        if log::log_enabled!(log::Level::Debug) {
            let names: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
            let pool = charset::size(classes);
            let bits = calculate_entropy(length, pool);
            log::debug!(
                "generating {count} password(s): length {length}, classes [{}], pool {pool} chars, ~{bits:.1} bits ({})",
                names.join(", "),
                entropy_strength(bits),
            );
        }

        (0..count).map(|_| pass::generate(length, classes)).collect()
    }

    pub fn sink(&self) -> PasswordSink {
        PasswordSink::new(&self.settings.output_file_path)
    }

    fn remember(&self) -> Result<()> {
        if self.settings.classes().is_empty() {
            return Err(GenerateError::NoClassesSelected.into());
        }
        self.settings.save_to(&self.settings_path)?;
        self.console.remembered(&self.settings_path);
        Ok(())
    }

    fn show(&self, passwords: &[Password]) -> Result<()> {
        if self.flags.clipboard {
            match copy_to_clipboard(passwords) {
                Ok(()) => {
                    for pass in passwords {
                        self.console.strength(pass::score(pass.as_str()));
                    }
                    self.console.clipboard_copied();
                    return Ok(());
                }
                Err(e) => {
                    log::warn!("{e}");
                    if !self.console.clipboard_fallback_prompt() {
                        return Err(e);
                    }
                }
            }
        }

        for pass in passwords {
            self.console.password(pass, pass::score(pass.as_str()));
        }
        Ok(())
    }
}

fn copy_to_clipboard(passwords: &[Password]) -> Result<()> {
    let mut clipboard =
        ClipboardContext::new().map_err(|e| AppError::Clipboard(e.to_string()))?;

    let mut contents = passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    let copied = clipboard
        .set_contents(contents.clone())
        .map_err(|e| AppError::Clipboard(e.to_string()));
    contents.zeroize();
    copied?;

    if let Ok(mut retrieved) = clipboard.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
