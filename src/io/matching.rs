/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Matching-problem loader: line 1 `n`; `n` lines of men's preferences (each
 * `n` whitespace-separated woman indices, most preferred first); then `n`
 * lines of women's preferences in the same shape.
 */

use super::{first_non_empty, parse_usize, read_lines};
use crate::error::Error;
use std::path::Path;

pub fn load(path: &Path) -> Result<(Vec<Vec<usize>>, Vec<Vec<usize>>), Error> {
    parse_lines(&read_lines(path)?)
}

fn parse_lines(lines: &[String]) -> Result<(Vec<Vec<usize>>, Vec<Vec<usize>>), Error> {
    let (n_line, n_token) = first_non_empty(lines, 0)?;
    let n = parse_usize(n_line, n_token)?;

    let mut line_no = n_line + 1;
    let men = read_preferences(lines, &mut line_no, n)?;
    let women = read_preferences(lines, &mut line_no, n)?;
    Ok((men, women))
}

fn read_preferences(lines: &[String], line_no: &mut usize, n: usize) -> Result<Vec<Vec<usize>>, Error> {
    let mut prefs = Vec::with_capacity(n);
    for _ in 0..n {
        if *line_no >= lines.len() {
            return Err(Error::input_format(lines.len(), "unexpected end of file"));
        }
        let tokens: Vec<&str> = lines[*line_no].split_whitespace().collect();
        if tokens.len() != n {
            return Err(Error::input_format(
                *line_no + 1,
                format!("expected {n} preferences, found {}", tokens.len()),
            ));
        }
        let mut pref = Vec::with_capacity(n);
        for token in &tokens {
            let idx = parse_usize(*line_no, token)?;
            if idx >= n {
                return Err(Error::input_format(*line_no + 1, format!("preference {idx} out of range for {n}")));
            }
            pref.push(idx);
        }
        prefs.push(pref);
        *line_no += 1;
    }
    Ok(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(String::from).collect()
    }

    #[test]
    fn reads_men_then_women_preferences() {
        let (men, women) = parse_lines(&lines("2\n0 1\n1 0\n1 0\n0 1\n")).unwrap();
        assert_eq!(men, vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(women, vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn rejects_a_short_preference_list() {
        let err = parse_lines(&lines("2\n0\n1 0\n1 0\n0 1\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }

    #[test]
    fn rejects_truncated_women_preferences() {
        let err = parse_lines(&lines("2\n0 1\n1 0\n1 0\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }
}
