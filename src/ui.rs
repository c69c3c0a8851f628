pub mod charting;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::keys::{Key, DIGITS, MAX_LEVEL, MIN_LEVEL};
use crate::trial::ATTEMPTS_PER_SESSION;
use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Idle => render_idle(self, area, buf),
            AppState::Running => render_running(self, area, buf),
            AppState::Results => render_results(self, area, buf),
        }
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim_bold() -> Style {
    bold().add_modifier(Modifier::DIM)
}

fn hint_style() -> Style {
    Style::default()
        .add_modifier(Modifier::ITALIC)
        .add_modifier(Modifier::DIM)
}

/// One row of key caps, with the current target highlighted.
fn key_row(keys: impl Iterator<Item = Key>, target: Option<Key>) -> Line<'static> {
    let highlighted = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);

    let spans = keys
        .map(|key| {
            let style = if target == Some(key) {
                highlighted
            } else {
                dim_bold()
            };
            Span::styled(format!(" {key} "), style)
        })
        .collect::<Vec<Span>>();

    Line::from(spans)
}

fn digit_row(target: Option<Key>) -> Line<'static> {
    key_row(DIGITS.iter().map(|&d| Key::Digit(d)), target)
}

fn pad_row(target: Option<Key>) -> Line<'static> {
    key_row(DIGITS.iter().map(|&d| Key::Pad(d)), target)
}

fn status_line(app: &App) -> Paragraph<'_> {
    let text = app.status.as_deref().unwrap_or("");
    Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
}

fn centered_rows(area: Rect, rows: u16) -> std::rc::Rc<[Rect]> {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(std::iter::repeat(Constraint::Length(1)).take(rows as usize));
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints(constraints)
        .split(area)
}

fn render_idle(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = centered_rows(area, 8);

    Paragraph::new(Span::styled("kvikk", bold().fg(Color::Magenta)))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let mut level_spans = vec![Span::styled("Level: ", dim_bold())];
    for level in MIN_LEVEL..=MAX_LEVEL {
        let style = if level == app.trial.level {
            bold().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
        } else {
            dim_bold()
        };
        level_spans.push(Span::styled(format!(" {level} "), style));
    }
    if app.trial.numpad_enabled() {
        level_spans.push(Span::styled("  numpad on", hint_style()));
    }
    Paragraph::new(Line::from(level_spans))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

    Paragraph::new(digit_row(None))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);
    if app.trial.numpad_enabled() {
        Paragraph::new(pad_row(None))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }

    Paragraph::new(Span::styled(
        "(1-5) level   (s)tart   (esc) quit",
        hint_style(),
    ))
    .alignment(Alignment::Center)
    .render(chunks[7], buf);

    status_line(app).render(chunks[8], buf);
}

fn render_running(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = centered_rows(area, 7);

    let target_label = match app.trial.target {
        Some(key) => format!("Press: {key}"),
        None => String::new(),
    };
    Paragraph::new(Span::styled(target_label, bold().fg(Color::Yellow)))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    Paragraph::new(Span::styled(
        format!("{}/{}", app.trial.attempts(), ATTEMPTS_PER_SESSION),
        dim_bold(),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);

    Paragraph::new(digit_row(app.trial.target))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);
    if app.trial.numpad_enabled() {
        Paragraph::new(pad_row(app.trial.target))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }

    status_line(app).render(chunks[7], buf);
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(1),    // chart
            Constraint::Length(1), // stats
            Constraint::Length(1), // saved-to line
            Constraint::Length(1), // padding
            Constraint::Length(1), // legend
        ])
        .split(area);

    let (x_max, y_max) = charting::compute_chart_params(&app.trial.times);
    let points: Vec<(f64, f64)> = app
        .trial
        .times
        .iter()
        .enumerate()
        .map(|(i, &t)| ((i + 1) as f64, t))
        .collect();

    let datasets = vec![Dataset::default()
        .marker(ratatui::symbols::Marker::Braille)
        .style(Style::default().fg(Color::Magenta))
        .graph_type(GraphType::Scatter)
        .data(&points)];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("press")
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled("0", bold()),
                    Span::styled(charting::format_label(x_max), bold()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("sec")
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", bold()),
                    Span::styled(charting::format_label(y_max), bold()),
                ]),
        );
    chart.render(chunks[0], buf);

    let (best, worst) = app.trial.time_spread().unwrap_or((0.0, 0.0));
    Paragraph::new(Span::styled(
        format!(
            "{:.3} s mean   {:.3} s best   {:.3} s worst   {:.3} s sd",
            app.trial.mean_time(),
            best,
            worst,
            app.trial.std_dev_time()
        ),
        bold(),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    let finished = app
        .trial
        .completed_at
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_default();
    Paragraph::new(Span::styled(
        format!(
            "level {} finished {}   log: {}   chart: {}",
            app.trial.level,
            finished,
            app.results_log.path().display(),
            app.chart_file.display()
        ),
        hint_style(),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);

    Paragraph::new(Span::styled(
        "(r)etry   (s)tart   (1-5) level   (esc) quit",
        hint_style(),
    ))
    .alignment(Alignment::Center)
    .render(chunks[4], buf);
}
