use serde::{Deserialize, Deserializer, Serialize};

/// One scheduled matchup as written by the prediction pipeline.
///
/// The feed is a dataframe export, so any column that was ever missing comes
/// through as `null` and integer columns may arrive as floats (`24.0`).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: String,
    #[serde(deserialize_with = "deserialize_week")]
    pub week: u32,
    pub home_team: String,
    pub away_team: String,

    #[serde(default)]
    pub home_qb_name: Option<String>,
    #[serde(default)]
    pub away_qb_name: Option<String>,
    #[serde(default)]
    pub home_coach: Option<String>,
    #[serde(default)]
    pub away_coach: Option<String>,

    #[serde(default)]
    pub home_score: Option<f64>,
    #[serde(default)]
    pub away_score: Option<f64>,

    #[serde(default)]
    pub home_pred_score: Option<f64>,
    #[serde(default)]
    pub away_pred_score: Option<f64>,
    #[serde(default)]
    pub projected_winner: Option<String>,
    #[serde(default)]
    pub predicted_winner_correct: Option<bool>,

    #[serde(default)]
    pub spread_line: Option<f64>,
    #[serde(default)]
    pub total_line: Option<f64>,
    #[serde(default)]
    pub home_moneyline: Option<f64>,
    #[serde(default)]
    pub away_moneyline: Option<f64>,
    #[serde(default)]
    pub home_spread_odds: Option<f64>,
    #[serde(default)]
    pub away_spread_odds: Option<f64>,
    #[serde(default)]
    pub over_odds: Option<f64>,
    #[serde(default)]
    pub under_odds: Option<f64>,

    #[serde(default)]
    pub gametime: Option<String>,
    #[serde(default)]
    pub gameday: Option<String>,
    #[serde(default)]
    pub stadium: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub roof: Option<String>,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub wind: Option<f64>,
}

impl Game {
    /// Both final scores are recorded.
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}

fn deserialize_week<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.fract() != 0.0 || raw < 1.0 || raw > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "week must be a whole number >= 1, got {}",
            raw
        )));
    }
    Ok(raw as u32)
}
