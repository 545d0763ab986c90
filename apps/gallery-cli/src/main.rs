use anyhow::Context;
use clap::{Parser, Subcommand};
use gallery_common::{ExhibitId, GalleryConfig};
use gallery_motion::{InputEvent, MoveKey};
use gallery_pick::{Aabb, Exhibit, HighlightSink};
use gallery_runtime::{WalkInspector, Walkthrough};
use gallery_view::{DebugTextView, GalleryView};
use glam::{Vec2, Vec3};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gallery-cli", about = "Headless driver for the gallery runtime")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional JSON config file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the effective configuration
    Info,
    /// Simulate a first-person walk and print trail state
    Walk {
        /// Number of 60 fps ticks to simulate
        #[arg(short, long, default_value = "300")]
        ticks: u64,
        /// Seed for the trail jitter
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// Sweep the pointer across the exhibits and print highlight transitions
    Pick {
        /// Number of sweep steps from screen left to screen right
        #[arg(short, long, default_value = "40")]
        steps: u32,
    },
}

/// Sink that records transitions for printing after each update.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<(ExhibitId, bool)>,
}

impl HighlightSink for RecordingSink {
    fn set_highlight(&mut self, id: ExhibitId, on: bool) {
        self.calls.push((id, on));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_deref())?;
    config.validate().context("invalid configuration")?;

    match cli.command {
        Commands::Info => {
            println!("gallery-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Walk { ticks, seed } => {
            let mut walk = Walkthrough::new(config, seed)?;
            walk.handle_event(InputEvent::ToggleMode);
            walk.handle_event(InputEvent::Press(MoveKey::Forward));

            let view = DebugTextView::new();
            let mut now_ms = 0.0;
            for tick in 0..ticks {
                walk.tick(1.0 / 60.0, now_ms);
                now_ms += 1000.0 / 60.0;
                if tick % 60 == 59 {
                    println!("{}", view.render(&walk));
                }
            }
            println!("{}", WalkInspector::summary(&walk));
        }
        Commands::Pick { steps } => {
            let mut walk = Walkthrough::new(config, 0)?;
            for (exhibit, proxies) in sample_exhibits() {
                walk.register_exhibit(exhibit, proxies);
            }

            let mut sink = RecordingSink::default();
            for step in 0..=steps {
                let x = -1.0 + 2.0 * step as f32 / steps as f32;
                walk.pick_at(Vec2::new(x, 0.0), &mut sink);
                for (id, on) in sink.calls.drain(..) {
                    let title = walk
                        .registry()
                        .exhibit(id)
                        .map(|e| e.title.as_str())
                        .unwrap_or("?");
                    println!(
                        "ndc.x {x:+.2}: {} \"{}\"",
                        if on { "highlight" } else { "unhighlight" },
                        title
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<GalleryConfig> {
    match path {
        None => Ok(GalleryConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
    }
}

/// The demo gallery: four photo exhibits on the four walls, each with a
/// thin frame proxy plus an oversized invisible collider.
fn sample_exhibits() -> Vec<(Exhibit, Vec<Aabb>)> {
    let photos = [
        ("Mountain Sunset", "A sunset over mountain ranges.", "f/8 | 1/125s | ISO 100 | 24mm", Vec3::new(-5.0, 1.5, 0.0), Vec3::new(0.1, 0.75, 1.0)),
        ("Ocean Waves", "Waves crashing against coastal rocks.", "f/11 | 1/500s | ISO 200 | 16mm", Vec3::new(0.0, 1.5, -5.0), Vec3::new(1.0, 0.75, 0.1)),
        ("Urban Night", "City lights reflecting in a puddle.", "f/2.8 | 1/15s | ISO 800 | 35mm", Vec3::new(5.0, 1.5, 0.0), Vec3::new(0.1, 0.75, 1.0)),
        ("Forest Path", "Morning light through ancient trees.", "f/5.6 | 1/60s | ISO 400 | 50mm", Vec3::new(0.0, 1.5, 5.0), Vec3::new(1.0, 0.75, 0.1)),
    ];
    photos
        .into_iter()
        .map(|(title, description, metadata, center, half)| {
            let exhibit = Exhibit {
                id: ExhibitId::new(),
                title: title.into(),
                description: description.into(),
                metadata: metadata.into(),
            };
            let collider = half + Vec3::splat(0.25);
            (
                exhibit,
                vec![
                    Aabb::from_center_half_extents(center, half),
                    Aabb::from_center_half_extents(center, collider),
                ],
            )
        })
        .collect()
}
