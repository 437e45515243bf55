use chrono::{NaiveDate, NaiveTime};

use crate::model::Game;

/// How the model's pick fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Upcoming,
    Correct,
    Wrong,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Upcoming => "⏳ Upcoming",
            Verdict::Correct => "✅ Correct",
            Verdict::Wrong => "❌ Wrong",
        }
    }
}

/// Display values derived from a single [`Game`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub home_pred: Option<i64>,
    pub away_pred: Option<i64>,
    pub played: bool,
    /// `None` until both scores are in.
    pub is_correct: Option<bool>,
}

impl GameSummary {
    pub fn from_game(game: &Game) -> Self {
        let played = game.is_played();
        let is_correct = if played {
            Some(game.predicted_winner_correct.unwrap_or(false))
        } else {
            None
        };
        Self {
            home_pred: game.home_pred_score.map(round_prediction),
            away_pred: game.away_pred_score.map(round_prediction),
            played,
            is_correct,
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self.is_correct {
            None => Verdict::Upcoming,
            Some(true) => Verdict::Correct,
            Some(false) => Verdict::Wrong,
        }
    }
}

/// Half away from zero: 23.4 -> 23, 23.5 -> 24.
pub fn round_prediction(score: f64) -> i64 {
    score.round() as i64
}

/// Spread relative to the away team, with an explicit `+` for positive lines.
pub fn format_spread(spread: f64) -> String {
    if spread > 0.0 {
        format!("+{}", format_number(spread))
    } else {
        format_number(spread)
    }
}

/// American odds read `+150` / `-110`.
pub fn format_odds(odds: f64) -> String {
    format_spread(odds)
}

/// Whole numbers print without a decimal point.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0.0
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_score(score: Option<f64>) -> String {
    score.map(|s| format!("{}", s.round() as i64)).unwrap_or_else(|| "-".to_string())
}

pub fn format_pred(pred: Option<i64>) -> String {
    pred.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_opt(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "-".to_string())
}

pub fn format_opt_odds(value: Option<f64>) -> String {
    value.map(format_odds).unwrap_or_else(|| "-".to_string())
}

/// Winner by actual score; `None` for unplayed games and ties.
pub fn actual_winner(game: &Game) -> Option<&str> {
    match (game.home_score, game.away_score) {
        (Some(h), Some(a)) if h > a => Some(game.home_team.as_str()),
        (Some(h), Some(a)) if a > h => Some(game.away_team.as_str()),
        _ => None,
    }
}

/// `"Thu Sep 4 · 8:20 PM"`, falling back to whatever the feed gave us.
pub fn kickoff_label(game: &Game) -> String {
    let day = game.gameday.as_deref().unwrap_or("");
    let time = game.gametime.as_deref().unwrap_or("");

    let day_part = match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(d) => d.format("%a %b %-d").to_string(),
        Err(_) => day.to_string(),
    };
    let time_part = match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    };

    match (day_part.is_empty(), time_part.is_empty()) {
        (true, true) => "TBD".to_string(),
        (false, true) => day_part,
        (true, false) => time_part,
        (false, false) => format!("{} · {}", day_part, time_part),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game {
            game_id: "2025_01_DAL_PHI".to_string(),
            week: 1,
            home_team: "PHI".to_string(),
            away_team: "DAL".to_string(),
            home_pred_score: Some(23.4),
            away_pred_score: Some(23.5),
            ..Default::default()
        }
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_prediction(23.4), 23);
        assert_eq!(round_prediction(23.5), 24);
        let s = GameSummary::from_game(&game());
        assert_eq!(s.home_pred, Some(23));
        assert_eq!(s.away_pred, Some(24));
    }

    #[test]
    fn test_spread_sign() {
        assert_eq!(format_spread(3.0), "+3");
        assert_eq!(format_spread(-3.0), "-3");
        assert_eq!(format_spread(0.0), "0");
        assert_eq!(format_spread(2.5), "+2.5");
        assert_eq!(format_spread(-6.5), "-6.5");
    }

    #[test]
    fn test_odds_format() {
        assert_eq!(format_odds(150.0), "+150");
        assert_eq!(format_odds(-110.0), "-110");
        assert_eq!(format_opt_odds(None), "-");
    }

    #[test]
    fn test_unplayed_is_upcoming_even_if_flag_set() {
        let mut g = game();
        g.predicted_winner_correct = Some(true);
        g.home_score = Some(21.0);
        let s = GameSummary::from_game(&g);
        assert!(!s.played);
        assert_eq!(s.is_correct, None);
        assert_eq!(s.verdict(), Verdict::Upcoming);
        assert_eq!(s.verdict().label(), "⏳ Upcoming");
    }

    #[test]
    fn test_played_verdicts() {
        let mut g = game();
        g.home_score = Some(24.0);
        g.away_score = Some(20.0);
        g.predicted_winner_correct = Some(true);
        assert_eq!(GameSummary::from_game(&g).verdict(), Verdict::Correct);
        g.predicted_winner_correct = Some(false);
        assert_eq!(GameSummary::from_game(&g).verdict(), Verdict::Wrong);
        g.predicted_winner_correct = None;
        assert_eq!(GameSummary::from_game(&g).verdict(), Verdict::Wrong);
    }

    #[test]
    fn test_score_placeholders() {
        assert_eq!(format_score(None), "-");
        assert_eq!(format_score(Some(27.0)), "27");
        assert_eq!(format_pred(None), "-");
    }

    #[test]
    fn test_actual_winner() {
        let mut g = game();
        assert_eq!(actual_winner(&g), None);
        g.home_score = Some(10.0);
        g.away_score = Some(13.0);
        assert_eq!(actual_winner(&g), Some("DAL"));
        g.away_score = Some(10.0);
        assert_eq!(actual_winner(&g), None);
    }

    #[test]
    fn test_kickoff_label() {
        let mut g = game();
        g.gameday = Some("2025-09-04".to_string());
        g.gametime = Some("20:20".to_string());
        assert_eq!(kickoff_label(&g), "Thu Sep 4 · 8:20 PM");
        g.gametime = Some("late".to_string());
        assert_eq!(kickoff_label(&g), "Thu Sep 4 · late");
        g.gameday = None;
        g.gametime = None;
        assert_eq!(kickoff_label(&g), "TBD");
    }
}
