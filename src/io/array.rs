/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Integer-array loader: first non-empty line `n`, then `n` whitespace-
 * separated integers across any number of lines.
 */

use super::{first_non_empty, parse_i64, parse_usize, read_lines};
use crate::error::Error;
use crate::value::IntArray;
use std::path::Path;

pub fn load(path: &Path) -> Result<IntArray, Error> {
    parse_lines(&read_lines(path)?)
}

fn parse_lines(lines: &[String]) -> Result<IntArray, Error> {
    let (header_line, header) = first_non_empty(lines, 0)?;
    let n = parse_usize(header_line, header)?;

    let mut values = Vec::with_capacity(n);
    let mut line_no = header_line + 1;
    while values.len() < n {
        if line_no >= lines.len() {
            return Err(Error::input_format(
                lines.len(),
                format!("expected {n} integers, found {}", values.len()),
            ));
        }
        for token in lines[line_no].split_whitespace() {
            if values.len() == n {
                break;
            }
            values.push(parse_i64(line_no, token)?);
        }
        line_no += 1;
    }
    Ok(IntArray::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(String::from).collect()
    }

    #[test]
    fn reads_an_array_split_across_lines() {
        let array = parse_lines(&lines("5\n1 2 3\n4 5\n")).unwrap();
        assert_eq!(array.len(), 5);
        assert_eq!(array.get(4), 5);
    }

    #[test]
    fn skips_a_leading_blank_line() {
        let array = parse_lines(&lines("\n3\n10 20 30\n")).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(0), 10);
    }

    #[test]
    fn rejects_a_truncated_array() {
        let err = parse_lines(&lines("5\n1 2 3\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }

    #[test]
    fn rejects_a_non_integer_token() {
        let err = parse_lines(&lines("2\n1 x\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }
}
