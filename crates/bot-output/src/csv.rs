//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `bot_snapshots.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BotSnapshotRow, FrameSummaryRow, OutputResult};

pub const SNAPSHOTS_FILE: &str = "bot_snapshots.csv";
pub const SUMMARIES_FILE: &str = "frame_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files, and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record([
            "frame", "bot_id", "x", "y", "z", "yaw_deg", "head_pitch", "walking", "waving",
            "turning_head",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "frame", "elapsed_secs", "walking", "waving", "turning_head", "timers_fired",
        ])?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[BotSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.frame.to_string(),
                row.bot_id.to_string(),
                format!("{:.4}", row.x),
                format!("{:.4}", row.y),
                format!("{:.4}", row.z),
                format!("{:.2}", row.yaw_deg),
                format!("{:.2}", row.head_pitch),
                (row.walking as u8).to_string(),
                (row.waving as u8).to_string(),
                (row.turning_head as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            format!("{:.4}", row.elapsed_secs),
            row.walking.to_string(),
            row.waving.to_string(),
            row.turning_head.to_string(),
            row.timers_fired.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
