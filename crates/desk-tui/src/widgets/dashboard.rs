//! Staff dashboard: headline numbers plus per-dimension breakdown charts.

use crate::state::AppState;
use desk_core::{SeriesPoint, category_series, format_avg_resolution, sentiment_series, status_series};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if let Some(error) = &state.dashboard_error {
        f.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
                .block(Block::default().title(" Dashboard ").borders(Borders::ALL)),
            area,
        );
        return;
    }
    let summary = match &state.summary {
        Some(summary) if !state.summary_loading => summary,
        _ => {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "Loading analytics...",
                    Style::default().fg(Color::Yellow),
                ))
                .block(Block::default().title(" Dashboard ").borders(Borders::ALL)),
                area,
            );
            return;
        }
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let avg = match format_avg_resolution(summary.avg_resolution_seconds) {
        s if s == "—" => s,
        s => format!("{s}s"),
    };
    let headline = Line::from(vec![
        Span::styled("Total tickets: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            summary.total.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Avg resolution: ", Style::default().fg(Color::DarkGray)),
        Span::styled(avg, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(
        Paragraph::new(headline).block(Block::default().borders(Borders::ALL)),
        rows[0],
    );

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    render_chart(f, charts[0], " By status ", &status_series(summary), Color::Green);
    render_chart(f, charts[1], " By category ", &category_series(summary), Color::Cyan);
    render_chart(f, charts[2], " By sentiment ", &sentiment_series(summary), Color::Magenta);
}

// Server ordering is preserved as-is; the series are never re-sorted here.
fn render_chart(f: &mut Frame, area: Rect, title: &str, series: &[SeriesPoint], color: Color) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if series.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No data.", Style::default().fg(Color::DarkGray)))
                .block(block),
            area,
        );
        return;
    }

    let data: Vec<(&str, u64)> = series
        .iter()
        .map(|point| (point.label.as_str(), point.value))
        .collect();
    let chart = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color));
    f.render_widget(chart, area);
}
