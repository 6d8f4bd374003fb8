/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Input-file loaders, one per data shape the dispatcher consumes. Each
 * loader separates file I/O (`load`) from parsing a materialized line
 * buffer (`parse_lines`), so parsing is unit-testable without touching the
 * filesystem.
 */

pub mod array;
pub mod digraph;
pub mod matching;
pub mod undigraph_unweighted;
pub mod undigraph_weighted;

use crate::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let file = File::open(path)
        .map_err(|e| Error::input_format(0, format!("cannot open {}: {e}", path.display())))?;
    BufReader::new(file)
        .lines()
        .map(|line| line.map_err(|e| Error::input_format(0, format!("read error: {e}"))))
        .collect()
}

/// Scans `lines` from `start` for the first non-blank line, returning its
/// 0-based index and trimmed content.
fn first_non_empty(lines: &[String], start: usize) -> Result<(usize, &str), Error> {
    lines
        .iter()
        .enumerate()
        .skip(start)
        .map(|(i, l)| (i, l.trim()))
        .find(|(_, l)| !l.is_empty())
        .ok_or_else(|| Error::input_format(lines.len(), "unexpected end of file"))
}

fn parse_usize(line_no: usize, token: &str) -> Result<usize, Error> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::input_format(line_no + 1, format!("expected a non-negative integer, found {token:?}")))
}

fn parse_i64(line_no: usize, token: &str) -> Result<i64, Error> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::input_format(line_no + 1, format!("expected an integer, found {token:?}")))
}

/// Splits a neighbor-list line on commas and/or whitespace; `*` or an empty
/// line means no entries.
fn split_list(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return Vec::new();
    }
    trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}
