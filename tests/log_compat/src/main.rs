fn main() {
    println!("Run `cargo test -p log-compat` to execute log wording compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use shiplog_progress::{
        Clock, ProgressReporter, ProgressSink, ThrottlePolicy, TransferObserver,
    };

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture file as its list of lines.
    fn load_fixture(name: &str) -> Vec<String> {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        data.lines().map(str::to_string).collect()
    }

    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                lines: Mutex::new(Vec::new()),
            })
        }

        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl ProgressSink for RecordingSink {
        fn lifecycle(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }

    struct ManualClock {
        now: Mutex<u64>,
    }

    impl ManualClock {
        fn at(start: u64) -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(start),
            })
        }

        fn set(&self, millis: u64) {
            *self.now.lock().unwrap() = millis;
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> u64 {
            *self.now.lock().unwrap()
        }
    }

    #[test]
    fn start_lines_match_fixture() {
        let sink = RecordingSink::new();
        let reporter = ProgressReporter::new(ThrottlePolicy::PercentDelta, shiplog_format::kibibytes)
            .with_sink(sink.clone());

        let nested = reporter.on_directory("maps");
        nested.on_file("maps/overworld.pak", 2048);

        assert_eq!(sink.lines(), load_fixture("start_lines.txt"));
    }

    #[test]
    fn percent_delta_session_matches_fixture() {
        let sink = RecordingSink::new();
        let reporter = ProgressReporter::new(ThrottlePolicy::PercentDelta, shiplog_format::kibibytes)
            .with_sink(sink.clone());

        let mut listener = reporter.on_file("payload.bin", 400);
        for transferred in [100, 200, 300, 400] {
            listener.on_bytes_transferred(transferred);
        }

        assert_eq!(sink.lines(), load_fixture("percent_delta_session.txt"));
    }

    #[test]
    fn timed_session_matches_fixture() {
        const BASE: u64 = 1_700_000_000_000;
        const GIB: i64 = 1024 * 1024 * 1024;

        let sink = RecordingSink::new();
        let clock = ManualClock::at(BASE);
        let reporter = ProgressReporter::new(ThrottlePolicy::default(), shiplog_format::scaled)
            .with_sink(sink.clone())
            .with_clock(clock.clone());

        let mut listener = reporter.on_file("game.pak", GIB);
        listener.on_bytes_transferred(GIB / 2);
        clock.set(BASE + 1000);
        listener.on_bytes_transferred(GIB * 6 / 10);
        clock.set(BASE + 2000);
        listener.on_bytes_transferred(GIB);
        clock.set(BASE + 3000);
        listener.on_bytes_transferred(GIB);

        assert_eq!(sink.lines(), load_fixture("timed_session.txt"));
    }
}
