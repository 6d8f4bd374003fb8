/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * `llp`: runs one of the library's LLP instances against an input file and
 * prints the result to stdout.
 */

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use llp_kernel::dispatch::{self, DispatchOutput};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "llp", version, about = "Lattice-linear-predicate fixed-point algorithms")]
struct Cli {
    /// Which LLP instance to run.
    algorithm: Algorithm,

    /// Path to the input file, in the shape the chosen algorithm expects
    /// (see the `io` module for the per-shape grammar).
    input: PathBuf,

    /// The source vertex. Required by, and only by, `bellman-ford`.
    #[arg(long)]
    src: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    Reduce,
    PrefixSum,
    BellmanFord,
    Johnson,
    FastComponents,
    Boruvka,
    GaleShapley,
}

impl Algorithm {
    fn dispatch_name(self) -> &'static str {
        match self {
            Algorithm::Reduce => "reduce",
            Algorithm::PrefixSum => "prefix-sum",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::Johnson => "johnson",
            Algorithm::FastComponents => "fast-components",
            Algorithm::Boruvka => "boruvka",
            Algorithm::GaleShapley => "gale-shapley",
        }
    }
}

fn init_env_logger() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .context("failed to initialize the logger")
}

fn print_output(output: DispatchOutput) {
    match output {
        DispatchOutput::IntVec(values) => print_row(&values),
        DispatchOutput::OptionIntVec(Some(values)) => print_row(&values),
        DispatchOutput::OptionIntVec(None) => println!("negative cycle detected"),
        DispatchOutput::UsizeVec(values) => print_row(&values),
        DispatchOutput::Edges(edges) => {
            for (u, v, w) in edges {
                println!("{u} {v} {w}");
            }
        }
        DispatchOutput::Matching(husband) => print_row(&husband),
    }
}

fn print_row<T: std::fmt::Display>(values: &[T]) {
    let row: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("{}", row.join(" "));
}

fn main() -> Result<()> {
    init_env_logger()?;
    let cli = Cli::parse();

    let output = dispatch::run(cli.algorithm.dispatch_name(), &cli.input, cli.src);
    match output {
        Ok(output) => {
            print_output(output);
            Ok(())
        }
        Err(e) => bail!(e),
    }
}
