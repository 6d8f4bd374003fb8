/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Unweighted undirected graph loader: first line `n`, then per vertex one
 * line of neighbors separated by commas and/or whitespace; `*` or empty
 * means none. Each listed neighbor becomes a weight-1 edge, deduplicated so
 * a fully symmetric adjacency listing (both endpoints list each other)
 * doesn't double the edge count.
 */

use super::{first_non_empty, parse_usize, read_lines, split_list};
use crate::error::Error;
use crate::value::WeightedUndirectedGraph;
use std::collections::HashSet;
use std::path::Path;

pub fn load(path: &Path) -> Result<WeightedUndirectedGraph, Error> {
    parse_lines(&read_lines(path)?)
}

fn parse_lines(lines: &[String]) -> Result<WeightedUndirectedGraph, Error> {
    let (header_line, header) = first_non_empty(lines, 0)?;
    let n = parse_usize(header_line, header)?;

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for v in 0..n {
        let line_no = header_line + 1 + v;
        let line = lines.get(line_no).map(String::as_str).unwrap_or("");
        for token in split_list(line) {
            let u = parse_usize(line_no, token)?;
            if u >= n {
                return Err(Error::input_format(line_no + 1, format!("neighbor {u} out of range for {n} vertices")));
            }
            let pair = (v.min(u), v.max(u));
            if seen.insert(pair) {
                edges.push((pair.0, pair.1, 1i64));
            }
        }
    }
    Ok(WeightedUndirectedGraph::from_edges(n, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(String::from).collect()
    }

    #[test]
    fn a_fully_symmetric_listing_is_deduplicated() {
        let graph = parse_lines(&lines("3\n1,2\n0\n0\n")).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn a_one_sided_listing_still_symmetrizes() {
        let graph = parse_lines(&lines("2\n1\n*\n")).unwrap();
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn star_means_isolated() {
        let graph = parse_lines(&lines("1\n*\n")).unwrap();
        assert_eq!(graph.num_edges(), 0);
    }
}
