use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::model::Game;
use crate::summary::{format_opt, format_pred, format_score, format_spread, kickoff_label, GameSummary, Verdict};

pub fn draw_schedule(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(schedule) = app.schedule() else {
        return;
    };

    let title = if app.pager.is_visible() {
        format!(" SCHEDULE - page {} of {} ", app.pager.page(), app.pager.total_pages())
    } else {
        " SCHEDULE ".to_string()
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if schedule.games().is_empty() {
        let p = Paragraph::new("No games in schedule")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut first_in_week = false;
    let mut card = 0;
    for week in schedule.page_weeks(&app.pager) {
        items.push(ListItem::new(Line::from(Span::styled(
            week.label.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))));
        for (n, &i) in week.games.iter().enumerate() {
            if card == app.cursor {
                selected_row = Some(items.len());
                first_in_week = n == 0;
            }
            items.push(ListItem::new(card_line(&schedule.games()[i])));
            card += 1;
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray).fg(Color::White));

    app.list_state.select(selected_row);
    // keep the week heading above a week's first card on screen
    if let Some(row) = selected_row {
        if first_in_week && app.list_state.offset() >= row {
            *app.list_state.offset_mut() = row.saturating_sub(1);
        }
    }
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// One summary card: matchup, prediction, result, line and verdict.
pub fn card_line(game: &Game) -> Line<'static> {
    let summary = GameSummary::from_game(game);
    let verdict = summary.verdict();
    let verdict_color = match verdict {
        Verdict::Upcoming => Color::Gray,
        Verdict::Correct => Color::Green,
        Verdict::Wrong => Color::Red,
    };
    let spread = game
        .spread_line
        .map(|s| format!("{} {}", game.away_team, format_spread(s)))
        .unwrap_or_else(|| "-".to_string());

    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{:>3} @ {:<3}", game.away_team, game.home_team),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  Pred {}–{}",
            format_pred(summary.away_pred),
            format_pred(summary.home_pred)
        )),
        Span::raw(format!(
            "  Score {}–{}",
            format_score(game.away_score),
            format_score(game.home_score)
        )),
        Span::styled(format!("  {}", spread), Style::default().fg(Color::Cyan)),
        Span::raw(format!("  O/U {}", format_opt(game.total_line))),
        Span::styled(format!("  {}", verdict.label()), Style::default().fg(verdict_color)),
        Span::styled(format!("  {}", kickoff_label(game)), Style::default().fg(Color::DarkGray)),
    ])
}
