// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use log::{debug, info};

use crate::collapse::collapse_blank_lines;
use crate::filter::LineFilter;
use crate::source::{SourceText, Sources};

pub fn banner(name: &str) -> String {
    format!("/* ====[ FILE: {} ]==== */", name)
}

/// Builds the single-header document out of already-read sources.
#[derive(Debug, Clone)]
pub struct Amalgamator<'a> {
    guard: &'a str,
    implementation_flag: &'a str,
    filter: &'a LineFilter,
}

impl<'a> Amalgamator<'a> {
    pub fn new(guard: &'a str, implementation_flag: &'a str, filter: &'a LineFilter) -> Self {
        Amalgamator {
            guard,
            implementation_flag,
            filter,
        }
    }

    /// Declarations first, then the implementations inside the
    /// `#ifdef <implementation_flag>` region, all within the outer guard.
    /// The result is already blank-line collapsed.
    pub fn amalgamate(&self, sources: &Sources) -> Vec<String> {
        let mut o = vec![
            format!("#ifndef {}", self.guard),
            format!("#define {}", self.guard),
            String::new(),
        ];
        for source in &sources.declarations {
            self.file(&mut o, source);
        }
        o.push(format!("#ifdef {}", self.implementation_flag));
        for source in &sources.implementations {
            self.file(&mut o, source);
        }
        o.push(String::new());
        o.push(format!("#endif /* {} */", self.implementation_flag));
        o.push(format!("#endif /* {} */", self.guard));
        collapse_blank_lines(o)
    }

    fn file(&self, o: &mut Vec<String>, source: &SourceText) {
        info!("bundling {}", source.name);
        o.push(String::new());
        o.push(banner(&source.name));
        o.push(String::new());
        for line in &source.lines {
            if self.filter.keep(line) {
                o.push(line.clone());
            } else {
                debug!("{}: dropping {:?}", source.name, line);
            }
        }
    }
}
