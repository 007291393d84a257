//! Integration tests for bot-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOTS_FILE, SUMMARIES_FILE};
    use crate::row::{BotSnapshotRow, FrameSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(bot_id: u32, frame: u64) -> BotSnapshotRow {
        BotSnapshotRow {
            frame,
            bot_id,
            x:            20.0 + bot_id as f32,
            y:            2.5,
            z:            22.25,
            yaw_deg:      -35.0,
            head_pitch:   6.0,
            walking:      bot_id % 2 == 0,
            waving:       false,
            turning_head: true,
        }
    }

    fn summary_row(frame: u64) -> FrameSummaryRow {
        FrameSummaryRow {
            frame,
            elapsed_secs: 0.5,
            walking:      2,
            waving:       1,
            turning_head: 0,
            timers_fired: 1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOTS_FILE).exists());
        assert!(dir.path().join(SUMMARIES_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SNAPSHOTS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["frame", "bot_id", "x", "y", "z", "yaw_deg", "head_pitch", "walking", "waving", "turning_head"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["frame", "elapsed_secs", "walking", "waving", "turning_head", "timers_fired"]);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "5"); // frame
        assert_eq!(&read_rows[0][1], "0"); // bot_id
        assert_eq!(&read_rows[1][2], "21.0000"); // x
        assert_eq!(&read_rows[1][3], "2.5000"); // y
        assert_eq!(&read_rows[0][5], "-35.00"); // yaw_deg
        assert_eq!(&read_rows[0][7], "1"); // walking
        assert_eq!(&read_rows[1][7], "0");
        assert_eq!(&read_rows[2][9], "1"); // turning_head
    }

    #[test]
    fn csv_frame_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "0.5000");
        assert_eq!(&read_rows[0][2], "2");
        assert_eq!(&read_rows[0][5], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use bot_behavior::BehaviorConfig;
    use bot_core::SimConfig;
    use bot_host::RecordingHost;
    use bot_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOTS_FILE, SUMMARIES_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::{BotSnapshotRow, FrameSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Fails every write so the first error can be checked.
    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[BotSnapshotRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("snapshot {}", self.calls))))
        }

        fn write_frame_summary(&mut self, _row: &FrameSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("summary {}", self.calls))))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn config(total_frames: u64) -> SimConfig {
        SimConfig {
            frame_delta_secs:         1.0 / 60.0,
            total_frames,
            bot_count:                3,
            seed:                     1,
            snapshot_interval_frames: 2,
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(6), BehaviorConfig::default(), |_| RecordingHost::new())
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // interval 2 → snapshots at frames 0, 2, 4 (3 frames × 3 bots = 9 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 3 frames × 3 bots = 9 snapshot rows, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][0], "5");
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(config(4), BehaviorConfig::default(), |_| RecordingHost::new())
            .build()
            .unwrap();

        let mut obs = SimOutputObserver::new(FailingWriter { calls: 0 });
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("write error stored");
        assert_eq!(err.to_string(), "I/O error: summary 1");
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().calls > 1);
    }
}
