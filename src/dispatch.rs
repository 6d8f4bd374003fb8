/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Algorithm dispatcher: keyed by algorithm name, loads the matching input
 * shape and runs the corresponding LLP instance to a fixed point.
 */

use crate::algorithms::{BellmanFord, Boruvka, FastComponents, GaleShapley, Johnson, PrefixSum, Reduce};
use crate::error::Error;
use crate::io;
use std::path::Path;

/// The result shapes SPEC_FULL.md §6 names, one per algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutput {
    /// Reduce: the subtree-sum tree.
    IntVec(Vec<i64>),
    /// Bellman-Ford/Johnson: `None` on a detected negative cycle.
    OptionIntVec(Option<Vec<i64>>),
    /// FastComponents: `parent[]`.
    UsizeVec(Vec<usize>),
    /// Boruvka: the MST edge list.
    Edges(Vec<(usize, usize, i64)>),
    /// Gale-Shapley: `husband[v]`, man `v`'s matched woman.
    Matching(Vec<usize>),
}

/// Loads `input` in the shape `algorithm` expects and runs it to
/// completion. `src` is required by, and only by, `bellman-ford`.
pub fn run(algorithm: &str, input: &Path, src: Option<usize>) -> Result<DispatchOutput, Error> {
    match algorithm {
        "reduce" => {
            let array = io::array::load(input)?;
            Ok(DispatchOutput::IntVec(Reduce::new(array).solve()?))
        }
        "prefix-sum" => {
            let array = io::array::load(input)?;
            Ok(DispatchOutput::IntVec(PrefixSum::new(array)?.solve()?))
        }
        "bellman-ford" => {
            let graph = io::digraph::load(input)?;
            let src = src.ok_or_else(|| Error::invalid_argument("bellman-ford requires a source vertex"))?;
            if src >= graph.num_vertices() {
                return Err(Error::invalid_argument(format!(
                    "source {src} out of range for {} vertices",
                    graph.num_vertices()
                )));
            }
            Ok(DispatchOutput::OptionIntVec(BellmanFord::new(graph, src).solve()?))
        }
        "johnson" => {
            let graph = io::digraph::load(input)?;
            Ok(DispatchOutput::OptionIntVec(Johnson::new(graph).solve()?))
        }
        "fast-components" => {
            let graph = io::undigraph_unweighted::load(input)?;
            Ok(DispatchOutput::UsizeVec(FastComponents::new(graph).solve()?))
        }
        "boruvka" => {
            let graph = io::undigraph_weighted::load(input)?;
            let (mst, _component) = Boruvka::new(graph).solve()?;
            Ok(DispatchOutput::Edges(mst))
        }
        "gale-shapley" => {
            let (men_pref, women_pref) = io::matching::load(input)?;
            let (_fiance, husband) = GaleShapley::new(men_pref, women_pref).solve()?;
            Ok(DispatchOutput::Matching(husband))
        }
        other => Err(Error::invalid_argument(format!("unknown algorithm {other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("llp-kernel-dispatch-test-{name}-{:?}.txt", std::thread::current().id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn dispatches_reduce() {
        let path = write_fixture("reduce", "4\n1 2 3 4\n");
        let out = run("reduce", &path, None).unwrap();
        // n = 4 is already even, so the tree needs no padding: G[0] = 10
        // (total sum), G[1] = 3 (1+2) and G[2] = 7 (3+4), the two
        // leaf-parents.
        assert_eq!(out, DispatchOutput::IntVec(vec![10, 3, 7]));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn dispatches_bellman_ford_and_requires_a_source() {
        let path = write_fixture("bf", "2\n1\n10\n*\n*\n");
        let err = run("bellman-ford", &path, None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        let out = run("bellman-ford", &path, Some(0)).unwrap();
        assert_eq!(out, DispatchOutput::OptionIntVec(Some(vec![0, 10])));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_an_unknown_algorithm() {
        let path = write_fixture("unknown", "1\n1\n");
        let err = run("not-a-real-algorithm", &path, None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        std::fs::remove_file(path).ok();
    }
}
