// src/cli.rs
use std::env;
use std::path::PathBuf;

use color_eyre::eyre::Result;

use crate::config::options::Params;
use crate::progress::Progress;
use crate::{scrape, store};

pub fn run() -> Result<()> {
    let params = parse_cli()?;

    let dir = if params.cached {
        store::load_directory(&store::default_path())?
    } else {
        let mut progress = CliProgress { quiet: params.quiet };
        let dir = scrape::run(Some(&mut progress))?;
        // cache, best-effort for --cached runs later
        if let Err(e) = store::save_directory(&store::default_path(), &dir) {
            eprintln!("Warning: could not cache directory: {e}");
        }
        dir
    };

    if params.labels_only {
        for label in dir.labels() {
            println!("{label}");
        }
        return Ok(());
    }

    if let Some(out) = &params.out {
        store::save_directory(out, &dir)?;
        println!("Wrote {}", out.display());
        return Ok(());
    }

    if !params.quiet {
        for entry in dir.iter() {
            println!("Classification: {}", entry.label);
            println!("  url: {}", entry.locator);
            println!("  id: {}", entry.record.identifier);
            println!("  bookmark: {}", entry.record.anchor);
            println!();
        }
    }
    println!("Found {} classifications to scrape", dir.len());

    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--labels" => params.labels_only = true,
            "--cached" => params.cached = true,
            "-q" | "--quiet" => params.quiet = true,
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| color_eyre::eyre::eyre!("Missing output path"))?;
                params.out = Some(PathBuf::from(v));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(color_eyre::eyre::eyre!("Unknown arg: {}", a)),
        }
    }

    Ok(params)
}

/// Progress printer for terminal runs.
struct CliProgress {
    quiet: bool,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        if !self.quiet {
            eprintln!("{msg}");
        }
    }
}
