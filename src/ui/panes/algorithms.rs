//! Algorithm picker pane

use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the list of algorithms, marking the selected one and the one
/// currently being animated
pub fn render_algorithms_pane(
    frame: &mut Frame,
    area: Rect,
    selected: Algorithm,
    running: Option<Algorithm>,
) {
    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, &algorithm)| {
            let is_selected = algorithm == selected;
            let marker = if running == Some(algorithm) { "▶" } else { " " };
            let name_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", marker),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(format!("{} ", i + 1), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(algorithm.name(), name_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
