//! Settings file persistence.
//!
//! A single comma-separated line. `|` escapes `,` and `|` inside the output path.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 6;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut output_path = String::with_capacity(settings.output_file_path.len());
    for c in settings.output_file_path.chars() {
        if c == ',' || c == '|' {
            output_path.push('|');
        }
        output_path.push(c);
    }

    let data = format!(
        "{},{},{},{},{},{}\n",
        settings.uppercase,
        settings.lowercase,
        settings.digits,
        settings.special,
        settings.count,
        output_path,
    );

    file.write_all(data.as_bytes())?;
    log::info!("settings written to {}", path.display());
    Ok(())
}

/// Fill `settings` from `path`. A missing or empty file leaves the defaults in place.
pub fn load(settings: &mut Settings, path: &Path) -> io::Result<()> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(());
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        log::warn!(
            "ignoring {}: expected {} fields, found {}",
            path.display(),
            FIELDS,
            parts.len()
        );
        return Ok(());
    }

    let classes: Vec<bool> = parts[..4]
        .iter()
        .zip([settings.uppercase, settings.lowercase, settings.digits, settings.special])
        .map(|(part, default)| part.parse().unwrap_or(default))
        .collect();
    if classes.iter().any(|&on| on) {
        settings.uppercase = classes[0];
        settings.lowercase = classes[1];
        settings.digits = classes[2];
        settings.special = classes[3];
    } else {
        log::warn!("ignoring class selection in {}: every class disabled", path.display());
    }
    settings.count = parts[4]
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(settings.count);
    if !parts[5].is_empty() {
        settings.output_file_path = parts[5].clone();
    }

    Ok(())
}

/// `$HOME/.config/passgen/settings`, or relative to the working directory without `HOME`.
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
