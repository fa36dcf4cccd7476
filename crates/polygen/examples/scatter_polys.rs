//! Print a few random simple polygons for quick sanity on counts.
//!
//! Usage:
//!   cargo run -p polygen --example scatter_polys -- 5
//!
//! Each line shows the vertex count, how many interior points could not be
//! absorbed, and the replay token that reproduces the sample.

use polygen::prelude::*;

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let mut source = ClippedHullSource::new(ScatterCfg::default(), 2025).expect("params");
    for i in 0..count {
        match source.generate_next() {
            Ok(Some(sample)) => println!(
                "sample {i}: V={}, residual={}, replay=({}, {})",
                sample.polygon.vertices.len(),
                sample.polygon.residual.len(),
                sample.replay.seed,
                sample.replay.index
            ),
            Ok(None) => break,
            Err(err) => {
                eprintln!("generation failed: {err}");
                break;
            }
        }
    }
}
