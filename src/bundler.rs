// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::amalgamator::Amalgamator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::source::read_sources;

enum Output<'a> {
    Path(&'a Path),
    Fd(Box<dyn Write + 'a>),
}

/// Reads the configured library files and writes the single header.
pub struct Bundler<'a> {
    config: &'a Config,
    output: Output<'a>,
}

impl<'a> Bundler<'a> {
    pub fn new(config: &'a Config, bundle_filename: &'a Path) -> Bundler<'a> {
        Bundler {
            config,
            output: Output::Path(bundle_filename),
        }
    }

    pub fn new_fd(config: &'a Config, fd: Box<dyn Write + 'a>) -> Bundler<'a> {
        Bundler {
            config,
            output: Output::Fd(fd),
        }
    }

    /// Builds the whole bundle in memory. Fails with
    /// [`Error::PathNotFound`] on the first input that can't be read.
    pub fn bundle(&self) -> Result<String> {
        let collected = self.config.collect();
        let sources = read_sources(&collected)?;
        let filter = self.config.line_filter()?;
        let guard = self.config.guard();
        let flag = self.config.implementation_flag();
        let lines = Amalgamator::new(&guard, &flag, &filter).amalgamate(&sources);
        let mut text = String::new();
        for line in lines {
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }

    /// The output is only created once every input was read, so a failed
    /// run leaves no bundle behind.
    pub fn run(self) -> Result<()> {
        let text = self.bundle()?;
        match self.output {
            Output::Path(path) => {
                let write_error = |source| Error::Write {
                    destination: path.display().to_string(),
                    source,
                };
                let mut o = File::create(path).map_err(write_error)?;
                o.write_all(text.as_bytes()).map_err(write_error)?;
                o.flush().map_err(write_error)?;
                info!("wrote {}", path.display());
            }
            Output::Fd(mut o) => {
                let write_error = |source: io::Error| Error::Write {
                    destination: String::from("output stream"),
                    source,
                };
                o.write_all(text.as_bytes()).map_err(write_error)?;
                o.flush().map_err(write_error)?;
            }
        }
        Ok(())
    }
}
