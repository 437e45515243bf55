use std::ops::Range;

use crate::model::Game;

/// Weeks shown per page.
pub const WEEKS_PER_PAGE: usize = 15;

/// All games scheduled in one numbered week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub week: u32,
    pub label: String,
    /// Indices into [`Schedule::games`], in source order.
    pub games: Vec<usize>,
}

/// The loaded feed, sorted by week, plus its week buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    games: Vec<Game>,
    weeks: Vec<WeekBucket>,
}

impl Schedule {
    pub fn new(mut games: Vec<Game>) -> Self {
        sort_by_week(&mut games);
        let weeks = group_by_week(&games);
        Self { games, weeks }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    pub fn weeks(&self) -> &[WeekBucket] {
        &self.weeks
    }

    /// Week buckets visible on `pager`'s current page.
    pub fn page_weeks(&self, pager: &Pager) -> &[WeekBucket] {
        &self.weeks[pager.visible_range()]
    }

    /// Game indices on the current page, in display order.
    pub fn page_games(&self, pager: &Pager) -> Vec<usize> {
        self.page_weeks(pager)
            .iter()
            .flat_map(|w| w.games.iter().copied())
            .collect()
    }
}

/// Stable ascending sort on `week`; ties keep their feed order.
pub fn sort_by_week(games: &mut [Game]) {
    games.sort_by_key(|g| g.week);
}

/// Partitions games into `"Week {n}"` buckets in first-seen order.
pub fn group_by_week(games: &[Game]) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = Vec::new();
    for (i, game) in games.iter().enumerate() {
        match buckets.iter_mut().find(|b| b.week == game.week) {
            Some(bucket) => bucket.games.push(i),
            None => buckets.push(WeekBucket {
                week: game.week,
                label: format!("Week {}", game.week),
                games: vec![i],
            }),
        }
    }
    buckets
}

/// 1-indexed page cursor over week buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    total_weeks: usize,
}

impl Pager {
    pub fn new(total_weeks: usize) -> Self {
        Self {
            page: 1,
            total_weeks,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_weeks.div_ceil(WEEKS_PER_PAGE)
    }

    /// The pager control is only drawn when there is somewhere to go.
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn visible_range(&self) -> Range<usize> {
        let start = ((self.page - 1) * WEEKS_PER_PAGE).min(self.total_weeks);
        let end = (self.page * WEEKS_PER_PAGE).min(self.total_weeks);
        start..end
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, week: u32) -> Game {
        Game {
            game_id: id.to_string(),
            week,
            home_team: "HOME".to_string(),
            away_team: "AWAY".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_is_stable_within_week() {
        let mut games = vec![game("a", 3), game("b", 1), game("c", 3), game("d", 1)];
        sort_by_week(&mut games);
        let ids: Vec<&str> = games.iter().map(|g| g.game_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_group_labels_and_order() {
        let schedule = Schedule::new(vec![game("a", 2), game("b", 1), game("c", 2)]);
        let labels: Vec<&str> = schedule.weeks().iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["Week 1", "Week 2"]);
        let week2: Vec<&str> = schedule.weeks()[1]
            .games
            .iter()
            .map(|&i| schedule.games()[i].game_id.as_str())
            .collect();
        assert_eq!(week2, vec!["a", "c"]);
    }

    #[test]
    fn test_weeks_non_decreasing() {
        let schedule = Schedule::new((0..40).map(|i| game(&i.to_string(), (i * 7 % 18) + 1)).collect());
        let weeks: Vec<u32> = schedule.weeks().iter().map(|w| w.week).collect();
        assert!(weeks.windows(2).all(|w| w[0] < w[1]));
        let flat: Vec<u32> = schedule.games().iter().map(|g| g.week).collect();
        assert!(flat.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for (weeks, pages) in [(0, 0), (1, 1), (15, 1), (16, 2), (20, 2), (30, 2), (31, 3)] {
            assert_eq!(Pager::new(weeks).total_pages(), pages, "W = {}", weeks);
        }
    }

    #[test]
    fn test_every_bucket_on_exactly_one_page() {
        for total in [1usize, 14, 15, 16, 29, 45, 46] {
            let mut pager = Pager::new(total);
            let mut seen = vec![0u32; total];
            for page in 1..=pager.total_pages() {
                pager.set_page(page);
                for i in pager.visible_range() {
                    seen[i] += 1;
                }
            }
            assert!(seen.iter().all(|&n| n == 1), "W = {}", total);
        }
    }

    #[test]
    fn test_twenty_weeks_split_fifteen_and_five() {
        let mut pager = Pager::new(20);
        assert_eq!(pager.visible_range(), 0..15);
        pager.next_page();
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.visible_range(), 15..20);
    }

    #[test]
    fn test_page_changes_clamp() {
        let mut pager = Pager::new(20);
        pager.prev_page();
        assert_eq!(pager.page(), 1);
        pager.set_page(9);
        assert_eq!(pager.page(), 2);
        pager.next_page();
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_empty_schedule_has_first_page_and_empty_range() {
        let mut pager = Pager::new(0);
        pager.next_page();
        assert_eq!(pager.page(), 1);
        assert!(pager.visible_range().is_empty());
        assert!(!pager.is_visible());
    }

    #[test]
    fn test_pager_hidden_for_single_page() {
        assert!(!Pager::new(15).is_visible());
        assert!(Pager::new(16).is_visible());
    }

    #[test]
    fn test_page_games_follow_week_order() {
        let games: Vec<Game> = (1..=20).map(|w| game(&format!("g{}", w), w)).collect();
        let schedule = Schedule::new(games);
        let mut pager = Pager::new(schedule.weeks().len());
        pager.set_page(2);
        let ids: Vec<&str> = schedule
            .page_games(&pager)
            .into_iter()
            .map(|i| schedule.games()[i].game_id.as_str())
            .collect();
        assert_eq!(ids, vec!["g16", "g17", "g18", "g19", "g20"]);
    }
}
