// Entrypoint for the CLI application.
// - `particeps <file> [provider] [--json]` uploads once and exits.
// - `particeps` alone opens the interactive menu.

use anyhow::Context;
use particeps::{ui, Provider, Uploader};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Endpoints and timeout come from `PARTICEPS_*` variables when set.
    let uploader = Uploader::from_env().context("Failed to set up uploader")?;

    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [] => ui::main_menu(uploader),
        [file, rest @ ..] if rest.len() <= 1 => {
            let provider = match rest.first() {
                Some(name) => name.parse::<Provider>()?,
                None => Provider::AnonFiles,
            };
            if !ui::run_once(&uploader, &PathBuf::from(file), provider, json)? {
                std::process::exit(1);
            }
            Ok(())
        }
        _ => anyhow::bail!("usage: particeps [<file> [anonfiles|bayfiles|filebin|imagebin]] [--json]"),
    }
}
