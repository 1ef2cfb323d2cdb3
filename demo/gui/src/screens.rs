//! Screen rendering functions for the TUI.

use std::time::Duration;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::navigation::NavigationState;
use crate::registry::ProjectRegistry;

/// Format a money amount with two decimals
pub fn format_money(n: f64) -> String {
    format!("{:.2}", n)
}

/// Format a compute time with a unit suited to its size
pub fn format_elapsed(elapsed: Duration) -> String {
    let micros = elapsed.as_secs_f64() * 1e6;
    if micros < 1_000.0 {
        format!("{:.1} µs", micros)
    } else {
        format!("{:.3} ms", micros / 1_000.0)
    }
}

/// Draw header with the current page title
pub fn draw_header(frame: &mut Frame, area: Rect, page_title: &str) {
    let title = format!(" Financial Projects Portfolio - {} ", page_title);
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw footer with the keybindings valid for the current page
pub fn draw_footer(frame: &mut Frame, area: Rect, navigation: &NavigationState) {
    let footer_text = match navigation {
        NavigationState::Home { .. } => " [Up/Down]Select | [Enter]Open | [q/Esc]Quit ",
        NavigationState::ProjectDetail { .. } => {
            " [Tab/Up/Down]Field | [t]Call/Put | [Enter]Compute | [b/Esc]Back | [q]Quit "
        }
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Draw the home page: introduction and one card per project
pub fn draw_home(frame: &mut Frame, area: Rect, registry: &ProjectRegistry, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(
            "Each week a new finance project is added here, built and documented step by step, \
             with the concepts behind the code and concrete use cases.",
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(intro, chunks[0]);

    let card_area = chunks[1];
    if registry.is_empty() {
        let empty = Paragraph::new("No project registered yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Projects ").borders(Borders::ALL));
        frame.render_widget(empty, card_area);
        return;
    }

    // Three cards per row
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(card_area);

    for (index, project) in registry.iter().enumerate() {
        let row = index / 3;
        let column = columns[index % 3];
        let card_height = 9;
        let y = column.y + (row as u16) * card_height;
        if y + card_height > column.y + column.height {
            break;
        }
        let rect = Rect::new(column.x, y, column.width, card_height);

        let is_selected = index == selected;
        let border_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };

        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                project.title(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(project.description()),
            Line::from(""),
            Line::from(Span::styled(
                if is_selected { "[Enter] Open" } else { "" },
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", project.icon()))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(card, rect);
    }
}
