//! Command-line driver: generate one terrain mesh and report it.
//!
//! Configuration comes from an optional JSON file, then flag overrides.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use terra_mesh::{TerrainConfig, TerrainGenerator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "terra-mesh-cli", about = "Generate a procedural terrain mesh")]
struct Args {
    /// JSON file with a (partial) terrain configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the noise-origin seed source.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of successive generations (each draws a fresh origin).
    #[arg(long, default_value_t = 1)]
    passes: u32,

    #[arg(long)]
    grid_width: Option<u32>,

    #[arg(long)]
    grid_depth: Option<u32>,

    #[arg(long)]
    point_spacing: Option<f32>,

    #[arg(long)]
    max_height: Option<f32>,

    #[arg(long)]
    detail: Option<u32>,

    #[arg(long)]
    noise_step: Option<f64>,

    #[arg(long)]
    noise_offset_scale: Option<f64>,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<TerrainConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                TerrainConfig::from_json(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => TerrainConfig::default(),
        };

        if let Some(v) = self.grid_width { cfg.grid_width = v; }
        if let Some(v) = self.grid_depth { cfg.grid_depth = v; }
        if let Some(v) = self.point_spacing { cfg.point_spacing = v; }
        if let Some(v) = self.max_height { cfg.max_height = v; }
        if let Some(v) = self.detail { cfg.detail = v; }
        if let Some(v) = self.noise_step { cfg.noise_step = v; }
        if let Some(v) = self.noise_offset_scale { cfg.noise_offset_scale = v; }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = args.resolve_config()?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let mut generator = TerrainGenerator::seeded(cfg, args.seed);
    for pass in 1..=args.passes.max(1) {
        generator.generate().with_context(|| format!("generation pass {pass}"))?;

        let store = generator
            .render_target()
            .context("render target detached")?;
        let mesh = store.mesh().context("no mesh published")?;
        let (ox, oy) = generator.last_offset().unwrap_or_default();

        tracing::info!("Pass {pass}:");
        tracing::info!("  Vertices:  {}", mesh.vertex_count());
        tracing::info!("  Triangles: {}", mesh.triangle_count());
        tracing::info!("  Origin:    ({ox:.3}, {oy:.3})");
        if let Some(b) = store.bounds() {
            tracing::info!("  Bounds:    {:?} .. {:?}", b.min, b.max);
        }
        tracing::info!("  Anchor:    {:?}", store.anchor());
        tracing::info!("  Orbit:     radius {:.1}, height {:.1}", generator.orbit().radius, generator.orbit().height);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "terra-mesh-cli",
            "--grid-width", "8",
            "--detail", "3",
            "--noise-step", "0.5",
        ])
        .unwrap();
        let cfg = args.resolve_config().unwrap();
        assert_eq!(cfg.grid_width, 8);
        assert_eq!(cfg.detail, 3);
        assert_eq!(cfg.noise_step, 0.5);
        assert_eq!(cfg.grid_depth, TerrainConfig::default().grid_depth);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["terra-mesh-cli", "--config", "/nonexistent/terrain.json"]).unwrap();
        assert!(args.resolve_config().is_err());
    }
}
