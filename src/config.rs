// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::collector::{self, Collected};
use crate::error::{ConfigError, Error, Result};
use crate::filter::{FilterRule, LineFilter, DEFAULT_DROP_SUBSTRINGS};

pub const DEFAULT_BASE_DIR: &str = "./citeron/";
pub const DEFAULT_OUTPUT: &str = "citeron.h";
pub const DEFAULT_HEADERS: &[&str] = &["common.h", "mem.h", "tuple.h"];
pub const DEFAULT_SOURCES: &[&str] = &["mem.c", "tuple.c"];

lazy_static! {
    static ref NON_IDENT_RE: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// Everything a run needs. Missing fields in a JSON config file take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub base_dir: PathBuf,
    pub headers: Vec<String>,
    pub sources: Vec<String>,
    pub drop_substrings: Vec<String>,
    pub drop_patterns: Vec<String>,
    pub guard: Option<String>,
    pub implementation_flag: Option<String>,
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        let strings =
            |s: &[&str]| -> Vec<String> { s.iter().map(|s| s.to_string()).collect() };
        Config {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            headers: strings(DEFAULT_HEADERS),
            sources: strings(DEFAULT_SOURCES),
            drop_substrings: strings(DEFAULT_DROP_SUBSTRINGS),
            drop_patterns: Vec::new(),
            guard: None,
            implementation_flag: None,
            output: None,
        }
    }
}

impl Config {
    pub fn from_json_path(path: &Path) -> Result<Config> {
        let config_error = |source: ConfigError| Error::Config {
            path: path.to_path_buf(),
            source,
        };
        let contents = fs::read_to_string(path).map_err(|e| config_error(e.into()))?;
        serde_json::from_str(&contents).map_err(|e| config_error(e.into()))
    }

    pub fn collect(&self) -> Collected {
        collector::collect(&self.base_dir, &self.headers, &self.sources)
    }

    pub fn line_filter(&self) -> Result<LineFilter> {
        let mut filter = LineFilter::from_substrings(self.drop_substrings.iter().cloned());
        for pattern in &self.drop_patterns {
            let re = Regex::new(pattern).map_err(|e| Error::Pattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            filter.push(FilterRule::Pattern(re));
        }
        Ok(filter)
    }

    /// The stem all generated macro names start with: the output file stem
    /// if there is one, "citeron" otherwise.
    fn macro_stem(&self) -> String {
        let stem = self
            .output
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("citeron"));
        macro_name(&stem)
    }

    pub fn guard(&self) -> String {
        match &self.guard {
            Some(guard) => guard.clone(),
            None => format!("{}_H", self.macro_stem()),
        }
    }

    pub fn implementation_flag(&self) -> String {
        match &self.implementation_flag {
            Some(flag) => flag.clone(),
            None => format!("{}_IMPLEMENTATION", self.macro_stem()),
        }
    }
}

/// Uppercases `name` and squashes everything that can't be part of a C
/// identifier into `_`.
pub fn macro_name(name: &str) -> String {
    let name = NON_IDENT_RE.replace_all(name, "_").to_uppercase();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.guard(), "CITERON_H");
        assert_eq!(config.implementation_flag(), "CITERON_IMPLEMENTATION");
        let names: Vec<_> = config.collect().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["common.h", "mem.h", "tuple.h", "mem.c", "tuple.c"]);
    }

    #[test]
    fn macros_from_output_name() {
        let config = Config {
            output: Some(PathBuf::from("out/my-lib.h")),
            ..Config::default()
        };
        assert_eq!(config.guard(), "MY_LIB_H");
        assert_eq!(config.implementation_flag(), "MY_LIB_IMPLEMENTATION");
    }

    #[test]
    fn explicit_macros_win() {
        let config = Config {
            output: Some(PathBuf::from("whatever.h")),
            guard: Some(String::from("G")),
            implementation_flag: Some(String::from("F")),
            ..Config::default()
        };
        assert_eq!(config.guard(), "G");
        assert_eq!(config.implementation_flag(), "F");
    }

    #[test]
    fn macro_names() {
        assert_eq!(macro_name("citeron"), "CITERON");
        assert_eq!(macro_name("a.b--c"), "A_B_C");
        assert_eq!(macro_name("9lives"), "_9LIVES");
    }

    #[test]
    fn partial_json() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{"base_dir": "lib", "headers": ["x.h"], "drop_patterns": ["^#pragma once"]}}"#
        )?;
        let config = Config::from_json_path(file.path())?;
        assert_eq!(config.base_dir, PathBuf::from("lib"));
        assert_eq!(config.headers, ["x.h"]);
        assert_eq!(config.sources, ["mem.c", "tuple.c"]);
        let filter = config.line_filter()?;
        assert!(!filter.keep("#pragma once"));
        assert!(!filter.keep("#endif"));
        Ok(())
    }

    #[test]
    fn unknown_field_is_rejected() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"{{"hedaers": []}}"#)?;
        assert!(matches!(
            Config::from_json_path(file.path()),
            Err(Error::Config { .. })
        ));
        Ok(())
    }

    #[test]
    fn bad_pattern() {
        let config = Config {
            drop_patterns: vec![String::from("(")],
            ..Config::default()
        };
        assert!(matches!(config.line_filter(), Err(Error::Pattern { .. })));
    }
}
