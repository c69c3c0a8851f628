// End-to-end core flow without the UI shell: run a session to completion,
// persist it the way the app does on the tenth press, then read everything
// back and render the chart.

use kvikk::chart;
use kvikk::report::ResultsLog;
use kvikk::trial::{Trial, ATTEMPTS_PER_SESSION};
use tempfile::tempdir;

fn run_full_session(level: u8) -> Trial {
    let mut trial = Trial::new(level);
    trial.start();
    for _ in 0..ATTEMPTS_PER_SESSION {
        let target = trial.target.expect("running session has a target");
        trial.submit(target);
    }
    assert!(trial.has_finished());
    trial
}

#[test]
fn session_log_roundtrip() {
    let dir = tempdir().unwrap();
    let log = ResultsLog::with_path(dir.path().join("results.txt"));

    let trial = run_full_session(1);
    log.append(trial.level, &trial.times).unwrap();

    let sessions = log.read_sessions().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].level, 1);
    assert_eq!(sessions[0].times.len(), trial.times.len());
}

#[test]
fn results_log_header_matches_session_level() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.txt");
    let log = ResultsLog::with_path(&path);

    let trial = run_full_session(1);
    log.append(trial.level, &trial.times).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Test: Level 1"));
    assert_eq!(
        contents.lines().filter(|l| l.starts_with("Press ")).count(),
        ATTEMPTS_PER_SESSION
    );
    assert!(contents.lines().any(|l| l.starts_with("Press 10: ")));
}

#[test]
fn consecutive_sessions_append_rather_than_overwrite() {
    let dir = tempdir().unwrap();
    let log = ResultsLog::with_path(dir.path().join("results.txt"));

    let first = run_full_session(2);
    log.append(first.level, &first.times).unwrap();
    let second = run_full_session(5);
    log.append(second.level, &second.times).unwrap();

    let sessions = log.read_sessions().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].level, 2);
    assert_eq!(sessions[1].level, 5);
    assert!(sessions
        .iter()
        .all(|s| s.times.len() == ATTEMPTS_PER_SESSION));
}

#[test]
fn aborted_session_leaves_no_trace() {
    let dir = tempdir().unwrap();
    let log = ResultsLog::with_path(dir.path().join("results.txt"));

    let mut trial = Trial::new(3);
    trial.start();
    for _ in 0..4 {
        let target = trial.target.unwrap();
        trial.submit(target);
    }
    trial.change_level(5);

    // The app only persists on Submission::Completed; a level change mid-run
    // never reaches that point, so the log file is never created.
    assert!(!trial.has_finished());
    assert!(log.read_sessions().is_err());
    assert!(!log.path().exists());
}

#[test]
fn completed_session_renders_chart_image() {
    let dir = tempdir().unwrap();
    let chart_path = dir.path().join("graph.png");

    let trial = run_full_session(4);
    chart::render(&trial.times, &chart_path).unwrap();

    let metadata = std::fs::metadata(&chart_path).unwrap();
    assert!(metadata.len() > 0, "chart PNG should not be empty");
}
