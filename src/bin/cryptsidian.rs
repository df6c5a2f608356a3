// src/bin/cryptsidian.rs
//! Encrypt or decrypt every file in a vault — password prompt + confirmation

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cryptsidian_vault::aliases::UserPassword;
use cryptsidian_vault::{config, process_batch, scan_vault, CoreError, ErrorKind, Operation, Session};
use rpassword::read_password;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: cryptsidian <encrypt|decrypt> [VAULT_DIR]";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let operation = match args.next().as_deref().map(str::to_ascii_uppercase) {
        Some(tag) => tag.parse::<Operation>().context(USAGE)?,
        None => bail!(USAGE),
    };

    let conf = config::load().context("failed to load configuration")?;
    let params = conf.kdf_params()?;

    let vault_dir = match args.next() {
        Some(dir) => PathBuf::from(dir),
        None => match conf.vault.root.clone() {
            Some(root) => root,
            None => std::env::current_dir().context("cannot determine current directory")?,
        },
    };

    println!("{operation}");
    println!(
        "This operation will apply to all files and folders in: {}",
        vault_dir.display()
    );
    println!(
        "Do not open files with other programs after encrypting - they can become corrupted \
         and irrecoverable. Always decrypt before re-opening files!\n"
    );

    let session = loop {
        let password = prompt_password("Please enter your password: ")?;
        let confirm = prompt_password("Confirm your password: ")?;

        if password.expose_secret().is_empty() || confirm.expose_secret().is_empty() {
            println!("Please enter your password in both boxes.");
            continue;
        }
        if password.expose_secret() != confirm.expose_secret() {
            println!("Passwords must match");
            continue;
        }

        match Session::establish(password.expose_secret(), &params) {
            Ok(session) => break session,
            Err(err) if err.kind() == ErrorKind::PasswordStrength => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    };

    let files = scan_vault(&vault_dir)
        .with_context(|| format!("failed to scan vault {}", vault_dir.display()))?;
    info!("{} file(s) found under {}", files.len(), vault_dir.display());

    process_batch(&files, operation, &session).map_err(report)?;

    println!("{operation} complete: {} file(s)", files.len());
    Ok(())
}

fn prompt_password(prompt: &str) -> Result<UserPassword> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let input = read_password()?;
    Ok(UserPassword::new(input))
}

fn report(err: CoreError) -> anyhow::Error {
    match err.kind() {
        ErrorKind::FileSystem => anyhow::Error::new(err)
            .context("batch stopped; files listed before this one were already processed"),
        _ => err.into(),
    }
}
