//! Analytics pane: counters for the current cursor and the session settings

use crate::player::{Analytics, Speed};
use crate::snapshot::{Step, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub struct StatsRenderData<'a> {
    pub analytics: Analytics,
    pub speed: Speed,
    pub size: usize,
    pub target: Option<Value>,
    pub step: Option<&'a Step>,
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_stats_pane(frame: &mut Frame, area: Rect, data: &StatsRenderData) {
    let block = Block::default()
        .title(" Analytics ")
        .title_style(Style::default().fg(DEFAULT_THEME.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let analytics = &data.analytics;
    let mut lines = vec![
        row(
            "Step",
            format!("{}/{}", analytics.cursor + 1, analytics.total),
        ),
        row("Comparisons", analytics.comparisons.to_string()),
        row("Swaps", analytics.swaps.to_string()),
        row(
            "Elapsed",
            format!("{:.1}s", analytics.elapsed.as_secs_f64()),
        ),
        row("Speed", data.speed.to_string()),
        row("Size", data.size.to_string()),
    ];
    if let Some(target) = data.target {
        lines.push(row("Target", target.to_string()));
    }
    if let Some(step) = data.step {
        lines.push(Line::from(Span::styled(
            step.event.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
