// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use regex::Regex;

/// Markers that become redundant once the library's files share one unit:
/// the per-file include guard triplet and local `#include "..."` lines.
pub const DEFAULT_DROP_SUBSTRINGS: &[&str] =
    &["#ifndef CIT", "#define CIT", "#endif", "#include \""];

/// A single reason to drop a line.
#[derive(Debug, Clone)]
pub enum FilterRule {
    /// Literal, case-sensitive substring.
    Contains(String),
    Pattern(Regex),
}

impl FilterRule {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            FilterRule::Contains(needle) => line.contains(needle.as_str()),
            FilterRule::Pattern(re) => re.is_match(line),
        }
    }
}

/// Line-by-line filter; has no notion of balanced `#if`/`#endif` pairs.
#[derive(Debug, Clone, Default)]
pub struct LineFilter {
    rules: Vec<FilterRule>,
}

impl LineFilter {
    pub fn new(rules: Vec<FilterRule>) -> LineFilter {
        LineFilter { rules }
    }

    pub fn from_substrings<I, S>(substrings: I) -> LineFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LineFilter::new(
            substrings
                .into_iter()
                .map(|s| FilterRule::Contains(s.into()))
                .collect(),
        )
    }

    pub fn push(&mut self, rule: FilterRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// True when no rule matches the line.
    pub fn keep(&self, line: &str) -> bool {
        !self.rules.iter().any(|rule| rule.matches(line))
    }
}
