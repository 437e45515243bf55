use crate::model::Game;
use crate::summary::GameSummary;

/// Detail overlay. Holds an index into the loaded schedule, never a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open(usize),
}

impl Overlay {
    pub fn open(&mut self, game_index: usize) {
        *self = Overlay::Open(game_index);
    }

    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Overlay::Open(i) => Some(*i),
            Overlay::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }
}

/// Predicted vs actual points for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamBars {
    pub team: String,
    pub predicted: u64,
    pub actual: u64,
}

/// Bar data for the comparison chart.
///
/// Unplayed games chart their actual score as 0; `played` tells the
/// renderer to caption that rather than show a 0-0 result.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComparison {
    pub away: TeamBars,
    pub home: TeamBars,
    pub played: bool,
}

impl ScoreComparison {
    pub fn from_game(game: &Game) -> Self {
        let summary = GameSummary::from_game(game);
        Self {
            away: TeamBars {
                team: game.away_team.clone(),
                predicted: bar_value(summary.away_pred.map(|p| p as f64)),
                actual: bar_value(game.away_score),
            },
            home: TeamBars {
                team: game.home_team.clone(),
                predicted: bar_value(summary.home_pred.map(|p| p as f64)),
                actual: bar_value(game.home_score),
            },
            played: summary.played,
        }
    }
}

fn bar_value(points: Option<f64>) -> u64 {
    points.map(|p| p.round().max(0.0) as u64).unwrap_or(0)
}

/// Two-slice share of the predicted points.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedShare {
    pub away_team: String,
    pub home_team: String,
    pub away: f64,
    pub home: f64,
}

impl PredictedShare {
    /// `None` when either prediction is missing or there are no points to split.
    pub fn from_game(game: &Game) -> Option<Self> {
        let away = game.away_pred_score?;
        let home = game.home_pred_score?;
        if away + home <= 0.0 {
            return None;
        }
        Some(Self {
            away_team: game.away_team.clone(),
            home_team: game.home_team.clone(),
            away,
            home,
        })
    }

    pub fn away_fraction(&self) -> f64 {
        self.away / (self.away + self.home)
    }

    pub fn home_fraction(&self) -> f64 {
        1.0 - self.away_fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game {
            game_id: "2025_05_SF_LA".to_string(),
            week: 5,
            home_team: "LA".to_string(),
            away_team: "SF".to_string(),
            home_pred_score: Some(24.6),
            away_pred_score: Some(20.2),
            ..Default::default()
        }
    }

    #[test]
    fn test_overlay_transitions() {
        let mut overlay = Overlay::default();
        assert_eq!(overlay, Overlay::Closed);
        overlay.open(3);
        assert_eq!(overlay.selected(), Some(3));
        overlay.open(7);
        assert_eq!(overlay.selected(), Some(7));
        overlay.close();
        assert!(!overlay.is_open());
        assert_eq!(overlay.selected(), None);
    }

    #[test]
    fn test_comparison_unplayed_defaults_actual_to_zero() {
        let cmp = ScoreComparison::from_game(&game());
        assert!(!cmp.played);
        assert_eq!(cmp.home.predicted, 25);
        assert_eq!(cmp.away.predicted, 20);
        assert_eq!(cmp.home.actual, 0);
        assert_eq!(cmp.away.actual, 0);
    }

    #[test]
    fn test_comparison_played() {
        let mut g = game();
        g.home_score = Some(17.0);
        g.away_score = Some(31.0);
        let cmp = ScoreComparison::from_game(&g);
        assert!(cmp.played);
        assert_eq!(cmp.away.team, "SF");
        assert_eq!(cmp.away.actual, 31);
        assert_eq!(cmp.home.actual, 17);
    }

    #[test]
    fn test_share_requires_both_predictions() {
        let mut g = game();
        g.home_pred_score = None;
        assert!(PredictedShare::from_game(&g).is_none());
    }

    #[test]
    fn test_share_keeps_zero_prediction() {
        let mut g = game();
        g.away_pred_score = Some(0.0);
        let share = PredictedShare::from_game(&g).expect("zero is a real prediction");
        assert_eq!(share.away_fraction(), 0.0);
        assert_eq!(share.home_fraction(), 1.0);
    }

    #[test]
    fn test_share_skips_empty_total() {
        let mut g = game();
        g.away_pred_score = Some(0.0);
        g.home_pred_score = Some(0.0);
        assert!(PredictedShare::from_game(&g).is_none());
    }

    #[test]
    fn test_share_fractions() {
        let mut g = game();
        g.away_pred_score = Some(10.0);
        g.home_pred_score = Some(30.0);
        let share = PredictedShare::from_game(&g).expect("share");
        assert!((share.away_fraction() - 0.25).abs() < 1e-9);
        assert!((share.home_fraction() - 0.75).abs() < 1e-9);
    }
}
