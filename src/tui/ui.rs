//! Rendering of the table: racks, bag count, message log, command line.

use crate::app::state::spaced;
use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the single playing screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let snapshot = app.game.show();

    let rack_rows = snapshot.racks.len() as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // Title
            Constraint::Length(rack_rows), // Racks
            Constraint::Min(4),            // Message log
            Constraint::Length(3),         // Command line
            Constraint::Length(1),         // Footer
        ])
        .margin(1)
        .split(area);

    render_title(frame, layout[0], app, snapshot.bag_remaining);
    render_racks(frame, layout[1], &snapshot.racks);
    render_log(frame, layout[2], app);
    render_input(frame, layout[3], app);
    render_footer(frame, layout[4]);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, bag_remaining: usize) {
    let dictionary = app.game.dictionary();
    let words = if dictionary.is_empty() {
        "no dictionary".to_string()
    } else {
        format!("{} words", dictionary.len())
    };
    let title = format!("RACKLE   {} tiles in bag   {}", bag_remaining, words);
    let widget = Paragraph::new(title)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_racks(frame: &mut Frame, area: Rect, racks: &[String]) {
    let items: Vec<ListItem> = racks
        .iter()
        .enumerate()
        .map(|(i, rack)| {
            ListItem::new(format!("player {}:  {}", i + 1, spaced(rack)))
                .style(Style::default().fg(Color::White))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Racks"));
    frame.render_widget(list, area);
}

fn render_log(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<&str> = app.messages().collect();
    let start = lines.len().saturating_sub(visible);

    let items: Vec<ListItem> = lines[start..]
        .iter()
        .map(|line| ListItem::new(line.to_string()).style(Style::default().fg(Color::Gray)))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(list, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let line = format!("> {}_", app.input);
    let widget = Paragraph::new(line)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title("Command"));
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer =
        Paragraph::new("show | play <player> <word> | swap <player> <letters> | rules | quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
