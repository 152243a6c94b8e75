// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use log::info;

use crate::collector::{Collected, SourceFile};
use crate::error::{Error, Result};

/// The contents of one input file, split in lines without terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub name: String,
    pub lines: Vec<String>,
}

impl SourceText {
    pub fn new<S: Into<String>>(name: S, text: &str) -> SourceText {
        SourceText {
            name: name.into(),
            lines: text.lines().map(String::from).collect(),
        }
    }
}

/// Declarations and implementations, read and ready to be amalgamated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub declarations: Vec<SourceText>,
    pub implementations: Vec<SourceText>,
}

pub fn read_source(file: &SourceFile) -> Result<SourceText> {
    let not_found = |source| Error::PathNotFound {
        path: file.path.clone(),
        source,
    };
    let fd = File::open(&file.path).map_err(not_found)?;
    let reader = BufReader::new(fd);
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(not_found)?;
    info!("read {} ({} lines)", file.path.display(), lines.len());
    Ok(SourceText {
        name: file.name(),
        lines,
    })
}

/// Reads every collected file, one after the other. The first failure aborts.
pub fn read_sources(collected: &Collected) -> Result<Sources> {
    Ok(Sources {
        declarations: collected
            .declarations
            .iter()
            .map(read_source)
            .collect::<Result<_>>()?,
        implementations: collected
            .implementations
            .iter()
            .map(read_source)
            .collect::<Result<_>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::collect;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_in_order() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("a.h"), "int a;\n")?;
        fs::write(dir.path().join("b.h"), "int b;\r\nint c;")?;
        fs::write(dir.path().join("a.c"), "int a = 1;\n")?;
        let collected = collect(dir.path(), ["b.h", "a.h"], ["a.c"]);
        let sources = read_sources(&collected)?;
        assert_eq!(
            sources.declarations,
            vec![
                SourceText::new("b.h", "int b;\nint c;"),
                SourceText::new("a.h", "int a;"),
            ]
        );
        assert_eq!(sources.implementations[0].name, "a.c");
        Ok(())
    }

    #[test]
    fn missing_file_is_path_not_found() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("a.h"), "int a;\n")?;
        let collected = collect(dir.path(), ["a.h", "missing.h"], ["a.c"]);
        match read_sources(&collected) {
            Err(Error::PathNotFound { path, .. }) => {
                assert_eq!(path, dir.path().join("missing.h"))
            }
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }
}
