// UI layer: an interactive menu built on `dialoguer` plus a one-shot mode
// for scripted use. Both delegate the actual work to `Uploader`.

use crate::client::Uploader;
use crate::provider::Provider;
use crate::response::UploadResult;
use crate::size::check_file;
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main interactive menu. Pick a provider, pick a file, upload; repeat
/// until the user chooses "Exit".
pub fn main_menu(uploader: Uploader) -> Result<()> {
    let mut items: Vec<&str> = Provider::ALL.iter().map(|p| p.name()).collect();
    items.push("Exit");

    loop {
        let selection = Select::new()
            .with_prompt("Upload to")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(provider) = Provider::ALL.get(selection).copied() else {
            break;
        };

        let Some(path) = pick_file()? else {
            continue;
        };
        let size = match check_file(&path) {
            Ok(size) => size,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        let prompt = format!("Upload {} ({}) to {}?", path.display(), size, provider);
        if !Confirm::new().with_prompt(prompt).default(true).interact()? {
            continue;
        }

        match upload_with_spinner(&uploader, provider, &path) {
            Ok(result) => print_result(provider, &result),
            Err(e) => println!("{} {:#}", "Upload failed:".red(), e),
        }
    }
    Ok(())
}

/// Upload a single file without prompting. Returns whether a URL came back.
pub fn run_once(uploader: &Uploader, path: &Path, provider: Provider, json: bool) -> Result<bool> {
    let size = check_file(path)?;
    if !json {
        println!("Uploading {} ({}) to {}", path.display(), size, provider);
    }

    let result = upload_with_spinner(uploader, provider, path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(provider, &result);
    }
    Ok(result.status)
}

fn upload_with_spinner(uploader: &Uploader, provider: Provider, path: &Path) -> Result<UploadResult> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Uploading to {}...", provider));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = uploader
        .upload(provider, path)
        .with_context(|| format!("uploading {} to {}", path.display(), provider));
    spinner.finish_and_clear();
    result
}

fn print_result(provider: Provider, result: &UploadResult) {
    if !result.status {
        println!(
            "{}",
            format!("{} accepted the upload but returned no URL.", provider).yellow()
        );
        return;
    }
    println!("{}", "Upload successful".green());
    println!("  URL:       {}", result.full_url);
    if !result.short_url.is_empty() {
        println!("  Short URL: {}", result.short_url);
    }
}

/// Ask for a file either as a typed path or through the native file dialog.
fn pick_file() -> Result<Option<PathBuf>> {
    let choices = ["Type a path", "Browse...", "Back"];
    match Select::new().items(&choices).default(0).interact()? {
        0 => {
            let raw: String = Input::new().with_prompt("File path").interact_text()?;
            Ok(Some(expand_tilde(raw.trim())))
        }
        1 => Ok(rfd::FileDialog::new().pick_file()),
        _ => Ok(None),
    }
}

/// Resolve a leading `~` against the user's home directory.
fn expand_tilde(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
