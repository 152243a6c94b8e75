// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use log::debug;

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Replaces every run of blank (or whitespace-only) lines with the first line
/// of the run. Idempotent.
pub fn collapse_blank_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut output = Vec::new();
    let mut purging = false;
    let mut purged = 0usize;
    for line in lines {
        let line = line.into();
        let blank = is_blank(&line);
        if purging && blank {
            purged += 1;
            continue;
        }
        purging = blank;
        output.push(line);
    }
    if purged > 0 {
        debug!("collapsed {} blank lines", purged);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs() {
        assert_eq!(
            collapse_blank_lines(["a", "", "", "  ", "b", "", "c"]),
            vec!["a", "", "b", "", "c"]
        );
    }

    #[test]
    fn keeps_first_line_of_run() {
        assert_eq!(collapse_blank_lines(["\t", "", "x"]), vec!["\t", "x"]);
    }

    #[test]
    fn leading_and_trailing_runs() {
        assert_eq!(
            collapse_blank_lines(["", "", "x", "", "", ""]),
            vec!["", "x", ""]
        );
    }

    #[test]
    fn untouched_without_runs() {
        let lines = vec!["int a;", "", "int b;"];
        assert_eq!(collapse_blank_lines(lines.clone()), lines);
    }

    #[test]
    fn empty_input() {
        assert!(collapse_blank_lines(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn idempotent() {
        let once = collapse_blank_lines(["", " ", "a", "", "\t", "", "b", "  ", "c", "", ""]);
        let twice = collapse_blank_lines(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn no_consecutive_blanks() {
        let out = collapse_blank_lines(["x", "", "", "y", " ", "\t", "", "z", ""]);
        assert!(out.windows(2).all(|w| !(is_blank(&w[0]) && is_blank(&w[1]))));
    }
}
