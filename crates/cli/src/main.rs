use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use polygen::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Random simple-polygon generation runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a batch of random simple polygons and print or write JSON
    Generate {
        /// Number of polygons to generate
        #[arg(long, default_value_t = 8)]
        count: usize,
        /// Master seed for the replayable stream
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Minimum scattered points per polygon
        #[arg(long, default_value_t = 5)]
        min_points: usize,
        /// Maximum scattered points per polygon
        #[arg(long, default_value_t = 10)]
        max_points: usize,
        /// Output path for the batch JSON; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the convex hull of inline `x,y` pairs, one vertex per line
    Hull {
        /// Points as `x,y` pairs
        points: Vec<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            count,
            seed,
            min_points,
            max_points,
            out,
        } => generate(count, seed, min_points, max_points, out),
        Action::Hull { points } => hull(points),
    }
}

#[derive(Serialize)]
struct SampleRecord {
    index: u64,
    vertices: Vec<[f64; 2]>,
    residual: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct BatchDoc {
    seed: u64,
    min_points: usize,
    max_points: usize,
    samples: Vec<SampleRecord>,
}

fn generate(
    count: usize,
    seed: u64,
    min_points: usize,
    max_points: usize,
    out: Option<String>,
) -> Result<()> {
    let cfg = ScatterCfg {
        vertex_count: VertexCount::Uniform {
            min: min_points,
            max: max_points,
        },
        ..ScatterCfg::default()
    };
    let mut source = ClippedHullSource::new(cfg, seed)?;
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(sample) = source.generate_next()? else {
            break;
        };
        tracing::info!(
            index = sample.replay.index,
            vertices = sample.polygon.vertices.len(),
            residual = sample.polygon.residual.len(),
            "generated polygon"
        );
        samples.push(SampleRecord {
            index: sample.replay.index,
            vertices: to_pairs(&sample.polygon.vertices),
            residual: to_pairs(&sample.polygon.residual),
        });
    }
    let doc = BatchDoc {
        seed,
        min_points,
        max_points,
        samples,
    };
    match out {
        Some(path) => write_batch(Path::new(&path), &doc),
        None => {
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn write_batch(path: &Path, doc: &BatchDoc) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn hull(raw: Vec<String>) -> Result<()> {
    let points = raw
        .iter()
        .map(|s| parse_point(s))
        .collect::<Result<Vec<_>>>()?;
    let hull = convex_hull(&points)?;
    for p in hull {
        println!("{} {}", p.x, p.y);
    }
    Ok(())
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got `{s}`"))?;
    Ok(Point::new(
        x.trim()
            .parse()
            .with_context(|| format!("bad x coordinate in `{s}`"))?,
        y.trim()
            .parse()
            .with_context(|| format!("bad y coordinate in `{s}`"))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_pairs() {
        let p = parse_point("1.5, -2").unwrap();
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, -2.0);
        assert!(parse_point("nope").is_err());
    }

    #[test]
    fn write_batch_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("batch.json");
        let doc = BatchDoc {
            seed: 1,
            min_points: 5,
            max_points: 10,
            samples: Vec::new(),
        };
        write_batch(&path, &doc).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"seed\": 1"));
    }
}
