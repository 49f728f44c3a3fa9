//! Info pane: description, pseudocode and colour legend of the algorithm

use crate::algorithms::{info, Algorithm};
use crate::ui::theme::{role_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const KEYWORDS: &[&str] = &["for", "while", "if", "else", "return", "to", "downto", "step"];

/// Pseudocode line with its keywords highlighted
fn highlight(line: &str) -> Line<'static> {
    let indent = line.len() - line.trim_start().len();
    let mut spans = vec![Span::raw(" ".repeat(indent))];
    for (i, word) in line.trim_start().split(' ').enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if KEYWORDS.contains(&word) {
            Style::default().fg(DEFAULT_THEME.keyword)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(word.to_string(), style));
    }
    Line::from(spans)
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, algorithm: Algorithm) {
    let block = Block::default()
        .title(format!(" {} ", algorithm.label()))
        .title_style(Style::default().fg(DEFAULT_THEME.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let heading = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            info::description(algorithm),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
        Line::from(Span::styled("Legend", heading)),
    ];

    let mut legend = Vec::new();
    for role in info::legend(algorithm) {
        legend.push(Span::styled("■ ", Style::default().fg(role_color(*role))));
        legend.push(Span::styled(
            format!("{}  ", role.label()),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    lines.push(Line::from(legend));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Pseudocode", heading)));
    lines.extend(info::pseudocode(algorithm).lines().map(highlight));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
