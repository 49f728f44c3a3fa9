//! Bar chart pane: one bar per element, coloured by its role

use crate::projection::Element;
use crate::roles::Role;
use crate::ui::theme::{role_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Everything the bar pane needs for one frame
pub struct BarsRenderData<'a> {
    pub title: String,
    pub elements: &'a [Element],
    pub roles: &'a [Role],
}

/// Width of each bar and the gap between bars for `count` bars in `width` cells
fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    let count = count.max(1) as u16;
    let gap = if width >= count.saturating_mul(3) { 1 } else { 0 };
    let gaps = gap * count.saturating_sub(1);
    let bar_width = (width.saturating_sub(gaps) / count).max(1);
    (bar_width, gap)
}

pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: &BarsRenderData) {
    let block = Block::default()
        .title(data.title.as_str())
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if data.elements.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, gap) = bar_layout(inner_width, data.elements.len());
    let max_value = data
        .elements
        .iter()
        .map(|element| element.value.max(0) as u64)
        .max()
        .unwrap_or(0)
        .max(1);
    let label_fits = max_value.to_string().len() <= bar_width as usize;

    let bars: Vec<Bar> = data
        .elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let role = data.roles.get(index).copied().unwrap_or(Role::Normal);
            let color = role_color(role);
            let label = if label_fits {
                element.value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value(element.value.max(0) as u64)
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(max_value);

    frame.render_widget(chart, area);
}
