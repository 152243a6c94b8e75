// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use singleheader::config::DEFAULT_OUTPUT;
use singleheader::{Bundler, Config};

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Cli {
    /// The single header to create, citeron.h by default.
    pub output: Option<PathBuf>,
    /// JSON file with the configuration; flags override its values.
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Directory the header and source names are relative to.
    #[clap(long)]
    pub base_dir: Option<PathBuf>,
    /// Header to bundle, in order; repeat for each one.
    #[clap(long = "header")]
    pub headers: Vec<String>,
    /// Implementation file to bundle, in order; repeat for each one.
    #[clap(long = "source")]
    pub sources: Vec<String>,
    /// Drop input lines containing this text; replaces the defaults.
    #[clap(long = "drop")]
    pub drop_substrings: Vec<String>,
    /// Also drop input lines matching this regular expression.
    #[clap(long = "drop-pattern")]
    pub drop_patterns: Vec<String>,
    /// Include guard of the bundle.
    #[clap(long)]
    pub guard: Option<String>,
    /// Macro that enables the implementations.
    #[clap(long)]
    pub implementation_flag: Option<String>,
    /// Write the bundle to stdout instead of a file.
    #[clap(long, conflicts_with = "output")]
    pub stdout: bool,
    /// Print the input files in bundle order and exit.
    #[clap(long)]
    pub list: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_path(path)?,
            None => Config::default(),
        };
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if !self.headers.is_empty() {
            config.headers = self.headers.clone();
        }
        if !self.sources.is_empty() {
            config.sources = self.sources.clone();
        }
        if !self.drop_substrings.is_empty() {
            config.drop_substrings = self.drop_substrings.clone();
        }
        config.drop_patterns.extend(self.drop_patterns.iter().cloned());
        if self.guard.is_some() {
            config.guard = self.guard.clone();
        }
        if self.implementation_flag.is_some() {
            config.implementation_flag = self.implementation_flag.clone();
        }
        if self.output.is_some() {
            config.output = self.output.clone();
        }
        Ok(config)
    }
}

pub fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config()?;
    if cli.list {
        for file in config.collect().iter() {
            println!("{}", file.path.display());
        }
        return Ok(());
    }
    if cli.stdout {
        Bundler::new_fd(&config, Box::new(std::io::stdout()))
            .run()
            .context("error creating bundle")?;
        return Ok(());
    }
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    info!("bundling {} into {}", config.base_dir.display(), output.display());
    Bundler::new(&config, &output)
        .run()
        .with_context(|| format!("error creating bundle {}", output.display()))?;
    Ok(())
}
