/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Weighted undirected edge-list loader: line 1 `n`, line 2 `m`, then `m`
 * lines each `u v w`.
 */

use super::{first_non_empty, parse_i64, parse_usize, read_lines};
use crate::error::Error;
use crate::value::WeightedUndirectedGraph;
use std::path::Path;

pub fn load(path: &Path) -> Result<WeightedUndirectedGraph, Error> {
    parse_lines(&read_lines(path)?)
}

fn parse_lines(lines: &[String]) -> Result<WeightedUndirectedGraph, Error> {
    let (n_line, n_token) = first_non_empty(lines, 0)?;
    let n = parse_usize(n_line, n_token)?;
    let (m_line, m_token) = first_non_empty(lines, n_line + 1)?;
    let m = parse_usize(m_line, m_token)?;

    let mut edges = Vec::with_capacity(m);
    let mut line_no = m_line + 1;
    while edges.len() < m {
        if line_no >= lines.len() {
            return Err(Error::input_format(lines.len(), format!("expected {m} edges, found {}", edges.len())));
        }
        let trimmed = lines[line_no].trim();
        line_no += 1;
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(Error::input_format(line_no, format!("expected \"u v w\", found {trimmed:?}")));
        }
        let u = parse_usize(line_no - 1, fields[0])?;
        let v = parse_usize(line_no - 1, fields[1])?;
        let w = parse_i64(line_no - 1, fields[2])?;
        if u >= n || v >= n {
            return Err(Error::input_format(line_no, format!("edge ({u}, {v}) out of range for {n} vertices")));
        }
        edges.push((u, v, w));
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
    fn reads_a_small_edge_list() {
        let graph = parse_lines(&lines("4\n3\n0 1 4\n1 2 2\n2 3 5\n")).unwrap();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.edge(0), (0, 1, 4));
    }

    #[test]
    fn rejects_a_truncated_edge_list() {
        let err = parse_lines(&lines("4\n3\n0 1 4\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }

    #[test]
    fn rejects_an_out_of_range_endpoint() {
        let err = parse_lines(&lines("2\n1\n0 5 1\n")).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }));
    }
}
