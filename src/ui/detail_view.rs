use std::f64::consts::PI;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use super::{centered_rect, AWAY_COLOR, HOME_COLOR};
use crate::app::App;
use crate::detail::{PredictedShare, ScoreComparison, TeamBars};
use crate::model::Game;
use crate::summary::{
    format_opt, format_opt_odds, format_pred, format_score, format_spread, kickoff_label, GameSummary, Verdict,
};

pub fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some(game) = app.selected_game() else {
        return;
    };

    let popup = centered_rect(90, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(
            " {} @ {} · Week {} ",
            game.away_team, game.home_team, game.week
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(8), // Scoreboard
                Constraint::Length(5), // Lines and venue
                Constraint::Min(6),    // Charts
            ]
            .as_ref(),
        )
        .split(inner);

    let summary = GameSummary::from_game(game);
    draw_scoreboard(f, app, game, &summary, chunks[0]);
    draw_market(f, game, &summary, chunks[1]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(chunks[2]);
    draw_comparison(f, &ScoreComparison::from_game(game), chart_chunks[0]);
    draw_share(f, PredictedShare::from_game(game).as_ref(), chart_chunks[1]);
}

struct Side<'a> {
    team: &'a str,
    qb: Option<&'a str>,
    coach: Option<&'a str>,
    score: Option<f64>,
    pred: Option<i64>,
    color: Color,
}

fn draw_scoreboard(f: &mut Frame, app: &App, game: &Game, summary: &GameSummary, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(40), // Away
                Constraint::Percentage(20), // VS
                Constraint::Percentage(40), // Home
            ]
            .as_ref(),
        )
        .split(area);

    let away = Side {
        team: &game.away_team,
        qb: game.away_qb_name.as_deref(),
        coach: game.away_coach.as_deref(),
        score: game.away_score,
        pred: summary.away_pred,
        color: AWAY_COLOR,
    };
    let home = Side {
        team: &game.home_team,
        qb: game.home_qb_name.as_deref(),
        coach: game.home_coach.as_deref(),
        score: game.home_score,
        pred: summary.home_pred,
        color: HOME_COLOR,
    };
    draw_side(f, app, &away, header_chunks[0], false);
    draw_side(f, app, &home, header_chunks[2], true);

    let verdict = summary.verdict();
    let verdict_color = match verdict {
        Verdict::Upcoming => Color::Gray,
        Verdict::Correct => Color::Green,
        Verdict::Wrong => Color::Red,
    };
    let status = if summary.played { "FINAL" } else { "SCHEDULED" };
    let mid_text = vec![
        Line::from(""),
        Line::from(Span::styled("VS", Style::default().add_modifier(Modifier::ITALIC))),
        Line::from(""),
        Line::from(Span::styled(status, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(verdict.label(), Style::default().fg(verdict_color))),
        Line::from(format!(
            "Pick: {}",
            game.projected_winner.as_deref().unwrap_or("-")
        )),
    ];
    let mid_p = Paragraph::new(mid_text).alignment(Alignment::Center);
    f.render_widget(mid_p, header_chunks[1]);
}

fn draw_side(f: &mut Frame, app: &App, side: &Side, area: Rect, logo_right: bool) {
    f.render_widget(Block::default().style(Style::default().bg(side.color)), area);

    let logo = if app.show_logos { app.logos.get(side.team) } else { None };
    let logo_width = if logo.is_some() { 22 } else { 0 };
    let constraints = if logo_right {
        [Constraint::Min(0), Constraint::Length(logo_width)]
    } else {
        [Constraint::Length(logo_width), Constraint::Min(0)]
    };
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.as_ref())
        .split(area);
    let (logo_area, text_area) = if logo_right {
        (content_chunks[1], content_chunks[0])
    } else {
        (content_chunks[0], content_chunks[1])
    };

    if let Some(img) = logo {
        f.render_widget(crate::logos::LogoWidget { image: img }, logo_area);
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4), // Abbr
                Constraint::Length(1), // Score / prediction
                Constraint::Length(1), // QB
                Constraint::Length(1), // Coach
            ]
            .as_ref(),
        )
        .split(text_area);

    let text_style = Style::default().fg(Color::White);
    if rows[0].width < 25 {
        let p = Paragraph::new(side.team.to_string())
            .style(text_style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(p, rows[0]);
    } else {
        let abbr = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(text_style)
            .lines(vec![format!("  {}  ", side.team).into()])
            .alignment(Alignment::Center)
            .build();
        f.render_widget(abbr, rows[0]);
    }

    let lines = [
        format!("Score {}   Pred {}", format_score(side.score), format_pred(side.pred)),
        format!("QB {}", side.qb.unwrap_or("-")),
        format!("HC {}", side.coach.unwrap_or("-")),
    ];
    for (line, row) in lines.into_iter().zip(rows.iter().skip(1)) {
        let p = Paragraph::new(line).style(text_style).alignment(Alignment::Center);
        f.render_widget(p, *row);
    }
}

fn draw_market(f: &mut Frame, game: &Game, summary: &GameSummary, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let spread = game
        .spread_line
        .map(|s| format!("{} {}", game.away_team, format_spread(s)))
        .unwrap_or_else(|| "-".to_string());

    let mut venue = vec![game.stadium.clone().unwrap_or_else(|| "-".to_string())];
    if let Some(loc) = &game.location {
        venue.push(loc.clone());
    }
    if let Some(roof) = &game.roof {
        venue.push(roof.clone());
    }
    if let Some(surface) = &game.surface {
        venue.push(surface.clone());
    }
    let weather = match (game.temp, game.wind) {
        (None, None) => String::new(),
        (t, w) => format!("  {}°F  wind {} mph", format_opt(t), format_opt(w)),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Spread ", label),
            Span::styled(spread, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled("   O/U ", label),
            Span::raw(format_opt(game.total_line)),
            Span::styled("   Predicted total ", label),
            Span::raw(match (summary.away_pred, summary.home_pred) {
                (Some(a), Some(h)) => (a + h).to_string(),
                _ => "-".to_string(),
            }),
        ]),
        Line::from(vec![
            Span::styled("Moneyline ", label),
            Span::raw(format!(
                "{} {} / {} {}",
                game.away_team,
                format_opt_odds(game.away_moneyline),
                game.home_team,
                format_opt_odds(game.home_moneyline)
            )),
            Span::styled("   Spread odds ", label),
            Span::raw(format!(
                "{} / {}",
                format_opt_odds(game.away_spread_odds),
                format_opt_odds(game.home_spread_odds)
            )),
            Span::styled("   Over/Under odds ", label),
            Span::raw(format!(
                "{} / {}",
                format_opt_odds(game.over_odds),
                format_opt_odds(game.under_odds)
            )),
        ]),
        Line::from(vec![
            Span::styled("Kickoff ", label),
            Span::raw(kickoff_label(game)),
        ]),
        Line::from(vec![
            Span::styled("Venue ", label),
            Span::raw(venue.join(" · ")),
            Span::raw(weather),
        ]),
    ];
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(p, area);
}

fn team_group(bars: &TeamBars, played: bool) -> BarGroup<'static> {
    let actual_style = if played {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let actual_text = if played { bars.actual.to_string() } else { "-".to_string() };
    BarGroup::default()
        .label(Line::from(bars.team.clone()).centered())
        .bars(&[
            Bar::default()
                .value(bars.predicted)
                .label(Line::from("Pred"))
                .style(Style::default().fg(Color::Cyan)),
            Bar::default()
                .value(bars.actual)
                .label(Line::from("Actual"))
                .text_value(actual_text)
                .style(actual_style),
        ])
}

fn draw_comparison(f: &mut Frame, cmp: &ScoreComparison, area: Rect) {
    let title = if cmp.played {
        " Predicted vs Actual ".to_string()
    } else {
        " Predicted vs Actual (not yet played) ".to_string()
    };
    let chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .bar_width(6)
        .bar_gap(1)
        .group_gap(3)
        .value_style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD))
        .data(team_group(&cmp.away, cmp.played))
        .data(team_group(&cmp.home, cmp.played));
    f.render_widget(chart, area);
}

fn draw_share(f: &mut Frame, share: Option<&PredictedShare>, area: Rect) {
    let block = Block::default().title(" Predicted Share ").borders(Borders::ALL);
    let Some(share) = share else {
        let p = Paragraph::new("No prediction to chart")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(p, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(inner);

    let (away_pts, home_pts) = pie_points(share.away_fraction());
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &away_pts,
                color: AWAY_COLOR,
            });
            ctx.draw(&Points {
                coords: &home_pts,
                color: HOME_COLOR,
            });
        });
    f.render_widget(canvas, rows[0]);

    let legend = Line::from(vec![
        Span::styled(
            format!("■ {} {:.0}%", share.away_team, share.away_fraction() * 100.0),
            Style::default().fg(AWAY_COLOR),
        ),
        Span::raw("   "),
        Span::styled(
            format!("■ {} {:.0}%", share.home_team, share.home_fraction() * 100.0),
            Style::default().fg(HOME_COLOR),
        ),
    ]);
    f.render_widget(Paragraph::new(legend).alignment(Alignment::Center), rows[1]);
}

/// Unit-disc sample points split into the away slice (clockwise from 12
/// o'clock, `away_fraction` of the turn) and the home remainder.
fn pie_points(away_fraction: f64) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    const STEPS: i32 = 60;
    let mut away = Vec::new();
    let mut home = Vec::new();
    for yi in -STEPS..=STEPS {
        for xi in -STEPS..=STEPS {
            let x = xi as f64 / STEPS as f64;
            let y = yi as f64 / STEPS as f64;
            if x * x + y * y > 1.0 {
                continue;
            }
            let angle = x.atan2(y).rem_euclid(2.0 * PI);
            if angle / (2.0 * PI) < away_fraction {
                away.push((x, y));
            } else {
                home.push((x, y));
            }
        }
    }
    (away, home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_points_split() {
        let (away, home) = pie_points(0.25);
        let total = (away.len() + home.len()) as f64;
        let ratio = away.len() as f64 / total;
        assert!((ratio - 0.25).abs() < 0.02, "ratio {}", ratio);
        // first quarter clockwise from 12 o'clock is the upper-right quadrant
        assert!(away.iter().all(|&(x, y)| x >= 0.0 && y >= 0.0));
    }

    #[test]
    fn test_pie_points_all_home() {
        let (away, home) = pie_points(0.0);
        assert!(away.is_empty());
        assert!(!home.is_empty());
    }
}
