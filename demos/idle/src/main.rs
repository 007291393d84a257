//! idle: a crowd of idle bots milling about their spawn box.
//!
//! Every bot drives an in-memory `RecordingHost` at a fixed frame rate.  Pose
//! snapshots and per-frame counts go to CSV under `--output`.

mod logging;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use bot_behavior::{BehaviorConfig, BotSnapshot};
use bot_core::math::yaw_degrees;
use bot_core::{Frame, SimConfig, SimRng};
use bot_host::RecordingHost;
use bot_output::writer::OutputWriter;
use bot_output::{CsvWriter, SimOutputObserver};
use bot_sim::{FrameStats, SimBuilder, SimObserver};

/// Run a crowd of idle bots and record what they do.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of bots
    #[arg(short, long, default_value_t = 8)]
    bots: usize,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 3_600)]
    frames: u64,

    /// Host frame rate; each bot is updated with a delta of 1 / fps
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Master seed; a clock-derived seed is used (and printed) when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file overriding behavior tunables; missing keys keep defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for bot_snapshots.csv and frame_summaries.csv
    #[arg(short, long, default_value = "output/idle")]
    output: PathBuf,

    /// Snapshot every N frames (0 disables snapshots)
    #[arg(long, default_value_t = 60)]
    snapshot_every: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

// ── Observer wrapper for the run summary ─────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    timers_fired:  usize,
    peak_walking:  usize,
    peak_waving:   usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            snapshot_rows: 0,
            summary_rows:  0,
            timers_fired:  0,
            peak_walking:  0,
            peak_waving:   0,
        }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, stats: &FrameStats) {
        self.summary_rows += 1;
        self.timers_fired += stats.timers_fired;
        self.peak_walking = self.peak_walking.max(stats.walking);
        self.peak_waving = self.peak_waving.max(stats.waving);
        self.inner.on_frame_end(frame, stats);
    }

    fn on_snapshot(&mut self, frame: Frame, bots: &[BotSnapshot]) {
        self.snapshot_rows += bots.len();
        self.inner.on_snapshot(frame, bots);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_behavior(path: Option<&Path>) -> Result<BehaviorConfig> {
    let Some(path) = path else {
        return Ok(BehaviorConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    info!("loaded behavior config from {}", path.display());
    Ok(config)
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    SimRng::new(nanos).next_seed()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be positive, got {}", args.fps);
    }

    let behavior = load_behavior(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    let config = SimConfig {
        frame_delta_secs:         1.0 / args.fps,
        total_frames:             args.frames,
        bot_count:                args.bots,
        seed,
        snapshot_interval_frames: args.snapshot_every,
    };

    println!("=== idle: wandering bots ===");
    println!(
        "Bots: {}  |  Frames: {} ({:.1} s at {} fps)  |  Seed: {seed}",
        config.bot_count,
        config.total_frames,
        config.duration_secs(),
        args.fps,
    );
    println!();

    // 1. Build sim; every bot gets its own recording host.
    let mut sim = SimBuilder::new(config, behavior, |_| RecordingHost::new()).build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(&args.output)
        .with_context(|| format!("creating output in {}", args.output.display()))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  bot_snapshots.csv   : {} rows", obs.snapshot_rows);
    println!("  frame_summaries.csv : {} rows", obs.summary_rows);
    println!(
        "  timers fired: {}  |  peak walking: {}  |  peak waving: {}",
        obs.timers_fired, obs.peak_walking, obs.peak_waving,
    );
    println!();

    // 5. Final pose table.
    println!(
        "{:<6} {:<10} {:<8} {:<8} {:<8} {:<8} {:<8}",
        "Bot", "Model", "x", "z", "yaw", "walking", "waving"
    );
    println!("{}", "-".repeat(62));
    for bot in sim.bots() {
        let snapshot = bot.updater.snapshot();
        println!(
            "{:<6} {:<10} {:<8.2} {:<8.2} {:<8.1} {:<8} {:<8}",
            snapshot.bot.0,
            bot.updater.appearance().bot_number,
            snapshot.position.x,
            snapshot.position.z,
            yaw_degrees(snapshot.orientation),
            if snapshot.walking { "yes" } else { "no" },
            if snapshot.waving { "yes" } else { "no" },
        );
    }

    Ok(())
}
