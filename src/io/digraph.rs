/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Weighted directed graph loader, adjacency-matrix form: first line `n`,
 * then per vertex a destinations line and a matching weights line.
 */

use super::{first_non_empty, parse_i64, parse_usize, read_lines, split_list};
use crate::error::Error;
use crate::value::WeightedDigraph;
use std::path::Path;

pub fn load(path: &Path) -> Result<WeightedDigraph, Error> {
    parse_lines(&read_lines(path)?)
}

fn parse_lines(lines: &[String]) -> Result<WeightedDigraph, Error> {
    let (header_line, header) = first_non_empty(lines, 0)?;
    let n = parse_usize(header_line, header)?;

    let mut arcs = Vec::new();
    let mut line_no = header_line + 1;
    for v in 0..n {
        let dest_line_no = line_no;
        let dests = split_list(lines.get(dest_line_no).map(String::as_str).unwrap_or(""));
        line_no += 1;

        let weight_line_no = line_no;
        let weights = split_list(lines.get(weight_line_no).map(String::as_str).unwrap_or(""));
        line_no += 1;

        if dests.len() != weights.len() {
            return Err(Error::input_format(
                weight_line_no + 1,
                format!("vertex {v}: {} destinations but {} weights", dests.len(), weights.len()),
            ));
        }
        for (dest, weight) in dests.iter().zip(weights.iter()) {
            let dest = parse_usize(dest_line_no, dest)?;
            if dest >= n {
                return Err(Error::input_format(
                    dest_line_no + 1,
                    format!("destination {dest} out of range for {n} vertices"),
                ));
            }
            let weight = parse_i64(weight_line_no, weight)?;
            arcs.push((v, dest, weight));
        }
    }
    Ok(WeightedDigraph::from_arcs(n, arcs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(String::from).collect()
    }

    #[test]
    fn reads_a_small_digraph() {
        let graph = parse_lines(&lines("3\n1,2\n10,-1\n2\n5\n*\n*\n")).unwrap();
        assert_eq!(graph.successors(0), &[(1, 10), (2, -1)]);
        assert_eq!(graph.successors(1), &[(2, 5)]);
        assert!(graph.successors(2).is_empty());
        assert_eq!(graph.parents(2), &[(0, -1), (1, 5)]);
    }

    #[test]
    fn star_means_no_outgoing_edges() {
        let graph = parse_lines(&lines("2\n*\n*\n*\n*\n")).unwrap();
        assert!(graph.successors(0).is_empty());
        assert!(graph.successors(1).is_empty());
    }

    #[test]
    fn rejects_mismatched_destination_and_weight_counts() {
        let err = parse_lines(&lines("1\n0\n1,2\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }

    #[test]
    fn rejects_an_out_of_range_destination() {
        let err = parse_lines(&lines("1\n5\n1\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }
}
