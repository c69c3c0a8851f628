pub mod chart;
pub mod config;
pub mod keymap;
pub mod keys;
pub mod report;
pub mod runtime;
pub mod sequencer;
pub mod trial;
pub mod ui;
pub mod util;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    keys::Key,
    report::ResultsLog,
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    trial::{Submission, Trial},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// How long a transient status message stays on screen, in ticks.
const STATUS_TICKS: u8 = 20;

/// terminal reaction-time trainer with visualized results
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal reaction-time trainer: a random digit key is highlighted, press it as fast as you can. Ten presses make a session; results are appended to a log and plotted to a PNG."
)]
pub struct Cli {
    /// difficulty level 1-5 (defaults to the last-used level)
    #[clap(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=5))]
    level: Option<u8>,

    /// file the per-session results log is appended to
    #[clap(long, default_value = report::DEFAULT_RESULTS_FILE)]
    results_file: PathBuf,

    /// file the reaction scatter plot is written to
    #[clap(long, default_value = chart::DEFAULT_CHART_FILE)]
    chart_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Idle,
    Running,
    Results,
}

#[derive(Debug)]
pub struct App {
    pub trial: Trial,
    pub state: AppState,
    pub status: Option<String>,
    pub results_log: ResultsLog,
    pub chart_file: PathBuf,
    status_ticks_left: u8,
}

impl App {
    pub fn new(cli: &Cli, level: u8) -> Self {
        Self {
            trial: Trial::new(level),
            state: AppState::Idle,
            status: None,
            results_log: ResultsLog::with_path(&cli.results_file),
            chart_file: cli.chart_file.clone(),
            status_ticks_left: 0,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
        self.status_ticks_left = STATUS_TICKS;
    }

    /// Expire the transient status message once its ticks run out.
    pub fn on_tick(&mut self) {
        if self.status.is_some() {
            self.status_ticks_left = self.status_ticks_left.saturating_sub(1);
            if self.status_ticks_left == 0 {
                self.status = None;
            }
        }
    }

    pub fn start(&mut self) {
        self.trial.start();
        self.state = AppState::Running;
        self.status = None;
    }

    pub fn change_level(&mut self, level: u8) {
        let aborted = self.trial.running;
        self.trial.change_level(level);
        self.state = AppState::Idle;
        if aborted {
            self.set_status(format!("Test aborted, level set to {level}"));
        } else {
            self.set_status(format!("Level set to {level}"));
        }
    }

    /// Feed one validated key into the running trial. On the tenth correct
    /// press the results are persisted and plotted; failure there is fatal.
    pub fn submit(&mut self, key: Key) -> Result<(), Box<dyn Error>> {
        match self.trial.submit(key) {
            Submission::Completed { .. } => {
                self.results_log
                    .append(self.trial.level, &self.trial.times)?;
                chart::render(&self.trial.times, &self.chart_file)?;
                self.state = AppState::Results;
                self.status = None;
            }
            Submission::Mismatch => {
                if let Some(target) = self.trial.target {
                    self.set_status(format!("Wrong key, press {target}"));
                }
            }
            Submission::Recorded { .. } | Submission::Ignored => {}
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let level = cli.level.unwrap_or_else(|| store.load().level);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&cli, level);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    store.save(&Config {
        level: app.trial.level,
    })?;

    res
}

enum Flow {
    Continue,
    Quit,
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        terminal.draw(|f| ui(app, f))?;

        match runner.step() {
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                if let Flow::Quit = handle_key(app, key)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<Flow, Box<dyn Error>> {
    match key.code {
        KeyCode::Esc => return Ok(Flow::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(Flow::Quit);
        }
        // Function keys switch level from any state, aborting a running test.
        KeyCode::F(n @ 1..=5) => {
            app.change_level(n as u8);
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    match app.state {
        AppState::Running => {
            if let Some(input) = keymap::map_key_event(&key) {
                app.submit(input)?;
            } else {
                app.set_status("Unrecognized key");
            }
        }
        AppState::Idle | AppState::Results => match key.code {
            KeyCode::Char('s') | KeyCode::Char('r') | KeyCode::Enter => app.start(),
            KeyCode::Char(c @ '1'..='5') => {
                app.change_level(c as u8 - b'0');
            }
            _ => {}
        },
    }

    Ok(Flow::Continue)
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
