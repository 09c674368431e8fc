use std::path::PathBuf;

use clap::Parser;
use passgen::cli::{CliFlags, Context};
use passgen::pass::{CharacterClass, ClassSet};
use passgen::settings::Settings;
use passgen::{AppError, GenerateError};

fn context(args: &[&str], settings: Settings, settings_path: PathBuf) -> Context {
    let flags = CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied()))
        .expect("valid arguments");
    Context::new(flags, settings, settings_path)
}

#[test]
fn defaults_generate_one_password_with_every_class() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&["12"], Settings::default(), dir.path().join("settings"));

    let passwords = ctx.generate().unwrap();
    assert_eq!(passwords.len(), 1);
    assert_eq!(passwords[0].len(), 12);
    for class in CharacterClass::ALL {
        assert!(passwords[0].as_str().chars().any(|c| class.contains(c)));
    }
}

#[test]
fn opt_out_flags_remove_classes() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(
        &["20", "--no-uppercase", "--no-special", "-n", "25"],
        Settings::default(),
        dir.path().join("settings"),
    );

    assert_eq!(ctx.settings.classes(), ClassSet::from_flags(false, true, true, false));
    let passwords = ctx.generate().unwrap();
    assert_eq!(passwords.len(), 25);
    for pass in &passwords {
        assert!(pass.as_str().chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}

#[test]
fn all_classes_disabled_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(
        &["12", "--no-uppercase", "--no-lowercase", "--no-digits", "--no-special", "-q"],
        Settings::default(),
        dir.path().join("settings"),
    );

    assert_eq!(ctx.generate().unwrap_err(), GenerateError::NoClassesSelected);
    assert!(matches!(
        ctx.run(),
        Err(AppError::Generate(GenerateError::NoClassesSelected))
    ));
}

#[test]
fn short_and_negative_lengths_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for length in ["3", "0", "-5"] {
        let ctx = context(&[length, "--no-special"], Settings::default(), dir.path().join("settings"));
        assert!(matches!(
            ctx.generate(),
            Err(GenerateError::LengthTooShort { min: 4, .. })
        ));
    }
}

#[test]
fn save_appends_generated_passwords() {
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("passwords.txt");
    let sink_arg = sink.to_str().unwrap();

    let mut first = context(
        &["10", "--save", "-q", "-o", sink_arg],
        Settings::default(),
        dir.path().join("settings"),
    );
    first.run().unwrap();
    let mut second = context(
        &["14", "--save", "-q", "-n", "2", "-o", sink_arg],
        Settings::default(),
        dir.path().join("settings"),
    );
    second.run().unwrap();

    let contents = std::fs::read_to_string(&sink).unwrap();
    let lengths: Vec<usize> = contents.lines().map(str::len).collect();
    assert_eq!(lengths, vec![10, 14, 14]);
    assert!(contents.ends_with('\n'));
}

#[test]
fn failed_validation_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("passwords.txt");

    let mut ctx = context(
        &["2", "--save", "-q", "-o", sink.to_str().unwrap()],
        Settings::default(),
        dir.path().join("settings"),
    );
    assert!(ctx.run().is_err());
    assert!(!sink.exists());
}

#[test]
fn saved_settings_are_layered_under_flags() {
    let dir = tempfile::tempdir().unwrap();
    let saved = Settings {
        digits: false,
        count: 3,
        ..Default::default()
    };

    let ctx = context(&["9", "--no-lowercase"], saved, dir.path().join("settings"));
    assert_eq!(ctx.settings.classes(), ClassSet::from_flags(true, false, false, true));

    let passwords = ctx.generate().unwrap();
    assert_eq!(passwords.len(), 3);
    assert!(passwords.iter().all(|p| !p.as_str().chars().any(|c| c.is_ascii_digit())));
}

#[test]
fn remember_stores_effective_settings() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("config/settings");

    let mut ctx = context(
        &["8", "--no-special", "-n", "2", "-q", "--remember"],
        Settings::default(),
        settings_path.clone(),
    );
    ctx.run().unwrap();

    let stored = Settings::load_from(&settings_path).unwrap();
    assert!(!stored.special);
    assert!(stored.uppercase && stored.lowercase && stored.digits);
    assert_eq!(stored.count, 2);
    assert_eq!(ctx.settings_path(), settings_path.as_path());
}

#[test]
fn rejected_request_does_not_remember_settings() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("settings");

    let mut ctx = context(
        &[
            "16",
            "--no-uppercase",
            "--no-lowercase",
            "--no-digits",
            "--no-special",
            "-q",
            "--remember",
        ],
        Settings::default(),
        settings_path.clone(),
    );
    assert!(matches!(
        ctx.run(),
        Err(AppError::Generate(GenerateError::NoClassesSelected))
    ));
    assert!(!settings_path.exists());

    let mut short = context(&["2", "-q", "--remember"], Settings::default(), settings_path.clone());
    assert!(short.run().is_err());
    assert!(!settings_path.exists());

    let stored = Settings::load_from(&settings_path).unwrap();
    let ctx = context(&["16", "-q"], stored, settings_path);
    assert_eq!(ctx.settings.classes(), ClassSet::all());
    assert_eq!(ctx.generate().unwrap().len(), 1);
}

#[test]
fn stored_empty_class_set_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("settings");
    std::fs::write(&settings_path, "false,false,false,false,1,passwords.txt\n").unwrap();

    let stored = Settings::load_from(&settings_path).unwrap();
    let ctx = context(&["16", "-q"], stored, settings_path);

    assert_eq!(ctx.settings.classes(), ClassSet::all());
    assert_eq!(ctx.generate().unwrap()[0].len(), 16);
}
