mod detail_view;
mod schedule_view;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::app::App;
use crate::data::LoadState;

pub const AWAY_COLOR: Color = Color::Rgb(200, 60, 60);
pub const HOME_COLOR: Color = Color::Rgb(60, 110, 200);

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(6), // Header
                Constraint::Min(0),    // Schedule
                Constraint::Length(1), // Footer
            ]
            .as_ref(),
        )
        .split(size);

    draw_header(f, chunks[0]);

    match &app.load {
        LoadState::Loading => draw_loading(f, chunks[1]),
        LoadState::Failed(msg) => draw_failed(f, chunks[1], msg),
        LoadState::Loaded(_) => {}
    }
    if app.schedule().is_some() {
        schedule_view::draw_schedule(f, app, chunks[1]);
    }

    draw_footer(f, app, chunks[2]);

    if app.overlay.is_open() {
        detail_view::draw_detail(f, app, size);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)].as_ref())
        .split(inner);

    if rows[0].width < 60 {
        let title = Paragraph::new("NFL PREDICTOR")
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, rows[0]);
    } else {
        let title = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(Style::default().fg(Color::White))
            .lines(vec!["NFL PREDICTOR".into()])
            .alignment(Alignment::Center)
            .build();
        f.render_widget(title, rows[0]);
    }

    let subtitle = Paragraph::new("Weekly schedule, betting lines and model score predictions")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center);
    f.render_widget(subtitle, rows[1]);
}

fn draw_loading(f: &mut Frame, area: Rect) {
    let p = Paragraph::new(vec![Line::from(""), Line::from("⏳ Loading schedule...")])
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(p, area);
}

fn draw_failed(f: &mut Frame, area: Rect, msg: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Failed to load schedule",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(msg.to_string()),
        Line::from(""),
        Line::from(Span::styled("Press q to quit", Style::default().fg(Color::DarkGray))),
    ];
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
    f.render_widget(p, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let (status, status_color) = match &app.load {
        LoadState::Loading => (" Loading ".to_string(), Color::Yellow),
        LoadState::Failed(_) => (" Load failed ".to_string(), Color::Red),
        LoadState::Loaded(s) => (
            format!(" {} games · {} weeks ", s.games().len(), s.weeks().len()),
            Color::Green,
        ),
    };
    let help = if app.schedule().is_none() {
        " q: quit "
    } else if app.overlay.is_open() {
        " Esc: close | l: logos | q: quit "
    } else {
        " j/k: move | Enter: details | n/p: page | l: logos | q: quit "
    };
    let mut spans = vec![
        Span::styled(status, Style::default().fg(status_color).add_modifier(Modifier::BOLD)),
        Span::styled(help, Style::default().fg(Color::DarkGray)),
    ];
    if app.pager.is_visible() {
        spans.push(Span::styled(
            format!(" Page {}/{} ", app.pager.page(), app.pager.total_pages()),
            Style::default().bg(Color::White).fg(Color::Black).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Rect of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(vertical[1])[1]
}
