use anyhow::{bail, Context as _, Result};
use clap::Parser;
use console::Term;
use dialoguer::Input;
use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use crate::{config::Config, pipeline};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Configuration file [default: coffeemap.toml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Your address (you are asked for it if omitted)
    #[arg(short, long)]
    pub address: Option<String>,

    /// JSON file with the known coffee shops
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Where to save the rendered map
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Port to serve the map on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Only render the map, don't serve it
    #[arg(long)]
    pub no_serve: bool,
}

impl Args {
    fn apply_to(&mut self, cfg: &mut Config) {
        if let Some(file) = self.catalog.take() {
            cfg.catalog.file = file;
        }
        if let Some(file) = self.output.take() {
            cfg.map.file = file;
        }
        if let Some(port) = self.port {
            cfg.webserver.port = port;
        }
    }
}

pub fn run() -> Result<()> {
    let mut args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    args.apply_to(&mut cfg);

    let address = args
        .address
        .take()
        .map(|a| a.trim().to_owned())
        .filter(|a| !a.is_empty())
        .or_else(|| cfg.location.address.take());
    // Asked only after the catalog has been loaded
    let address = move || match address {
        Some(address) => Ok(address),
        None => ask_for_address(),
    };
    pipeline::run(cfg, address, !args.no_serve)
}

const ADDRESS_PROMPT: &str = "Where are you located?";

fn ask_for_address() -> Result<String> {
    let address = if Term::stderr().is_term() {
        Input::<String>::new()
            .with_prompt(ADDRESS_PROMPT)
            .interact_text()
            .context("Unable to read your address")?
    } else {
        log::debug!("No terminal attached: read address from stdin");
        read_address(io::stdin().lock())?
    };
    non_empty_address(address)
}

fn read_address<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Unable to read your address")?;
    Ok(line)
}

fn non_empty_address(address: String) -> Result<String> {
    let address = address.trim();
    if address.is_empty() {
        bail!("No address given");
    }
    Ok(address.to_owned())
}
