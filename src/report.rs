use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_RESULTS_FILE: &str = "reaction_results.txt";

const HEADER_PREFIX: &str = "Test: Level ";
const PRESS_PREFIX: &str = "Press ";
const TIME_SUFFIX: &str = " sec";

/// One session as recorded in (or read back from) the results log.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionRecord {
    pub level: u8,
    pub times: Vec<f64>,
}

/// Append-only, human-readable results log. One block per finished session:
/// a `Test: Level <N>` header followed by a `Press <i>: <t> sec` line per
/// recorded reaction time.
#[derive(Clone, Debug)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RESULTS_FILE),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one finished session, creating the log if absent. An I/O
    /// error here is treated as fatal by the caller.
    pub fn append(&self, level: u8, times: &[f64]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        writeln!(file)?;
        writeln!(file, "{HEADER_PREFIX}{level}")?;
        for (i, time) in times.iter().enumerate() {
            writeln!(file, "{PRESS_PREFIX}{}: {time:.3}{TIME_SUFFIX}", i + 1)?;
        }
        Ok(())
    }

    /// Parses the log back into session records. Lines that do not match the
    /// known shapes are skipped, so a hand-edited log still loads.
    pub fn read_sessions(&self) -> io::Result<Vec<SessionRecord>> {
        let file = File::open(&self.path)?;
        let mut sessions: Vec<SessionRecord> = Vec::new();

        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some(rest) = line.strip_prefix(HEADER_PREFIX) {
                if let Ok(level) = rest.trim().parse::<u8>() {
                    sessions.push(SessionRecord {
                        level,
                        times: Vec::new(),
                    });
                }
            } else if line.starts_with(PRESS_PREFIX) {
                let time = line
                    .split_once(": ")
                    .map(|(_, v)| v)
                    .and_then(|v| v.strip_suffix(TIME_SUFFIX))
                    .and_then(|v| v.parse::<f64>().ok());
                if let (Some(time), Some(session)) = (time, sessions.last_mut()) {
                    session.times.push(time);
                }
            }
        }
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn append_then_read_back_roundtrips() {
        let dir = tempdir().unwrap();
        let log = ResultsLog::with_path(dir.path().join("results.txt"));

        let times: Vec<f64> = (1..=10).map(|i| i as f64 / 10.0).collect();
        log.append(3, &times).unwrap();

        let sessions = log.read_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].level, 3);
        assert_eq!(sessions[0].times.len(), 10);
        for (read, written) in sessions[0].times.iter().zip(&times) {
            assert!((read - written).abs() < 0.0005, "3-decimal precision kept");
        }
    }

    #[test]
    fn appends_accumulate_sessions() {
        let dir = tempdir().unwrap();
        let log = ResultsLog::with_path(dir.path().join("results.txt"));

        log.append(1, &[0.5, 0.25]).unwrap();
        log.append(4, &[0.125]).unwrap();

        let sessions = log.read_sessions().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].level, 1);
        assert_eq!(sessions[0].times, vec![0.5, 0.25]);
        assert_eq!(sessions[1].level, 4);
        assert_eq!(sessions[1].times, vec![0.125]);
    }

    #[test]
    fn log_format_matches_expected_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let log = ResultsLog::with_path(&path);

        log.append(2, &[0.4567, 1.0]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["", "Test: Level 2", "Press 1: 0.457 sec", "Press 2: 1.000 sec"]);
    }

    #[test]
    fn unparseable_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        std::fs::write(
            &path,
            "garbage\nTest: Level 5\nPress 1: 0.100 sec\nPress x: nonsense\n",
        )
        .unwrap();

        let sessions = ResultsLog::with_path(&path).read_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].level, 5);
        assert_eq!(sessions[0].times, vec![0.1]);
    }

    #[test]
    fn read_missing_log_is_an_error() {
        let dir = tempdir().unwrap();
        let log = ResultsLog::with_path(dir.path().join("absent.txt"));
        assert!(log.read_sessions().is_err());
    }
}
