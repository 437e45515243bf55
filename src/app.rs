use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Error;
use crossterm::event::KeyCode;
use image::DynamicImage;
use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::data::{DataClient, LoadState, Source};
use crate::detail::Overlay;
use crate::logos::{fetch_logo, logo_url, LogoStore};
use crate::model::Game;
use crate::schedule::{Pager, Schedule};

/// Messages from the background tasks to the UI loop.
#[derive(Debug)]
pub enum Update {
    Schedule(Result<Vec<Game>, Error>),
    Logo(String, DynamicImage),
}

/// One-shot schedule load, then any logos `known_logos` lacks.
///
/// Returns `false` when the view was gone before the schedule could be
/// delivered; the result is dropped in that case.
pub async fn load_schedule(
    client: Arc<DataClient>,
    source: Source,
    tx: mpsc::Sender<Update>,
    logo_template: Option<String>,
    known_logos: HashSet<String>,
) -> bool {
    tracing::info!(%source, "loading schedule");
    let result = client.fetch_schedule(&source).await;
    let teams: Vec<String> = match &result {
        Ok(games) => {
            let mut seen = HashSet::new();
            games
                .iter()
                .flat_map(|g| [g.away_team.clone(), g.home_team.clone()])
                .filter(|t| seen.insert(t.clone()))
                .collect()
        }
        Err(_) => Vec::new(),
    };
    if tx.send(Update::Schedule(result)).await.is_err() {
        tracing::debug!("view closed before the schedule arrived, dropping it");
        return false;
    }

    let Some(template) = logo_template else {
        return true;
    };
    for team in teams {
        if known_logos.contains(&team.to_uppercase()) {
            continue;
        }
        let url = logo_url(&template, &team);
        match fetch_logo(client.http(), &url).await {
            Ok(img) => {
                if tx.send(Update::Logo(team, img)).await.is_err() {
                    break;
                }
            }
            Err(e) => tracing::debug!(%url, "logo fetch failed: {:#}", e),
        }
    }
    true
}

#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub load: LoadState<Schedule>,
    pub pager: Pager,
    /// Cursor over the games on the current page.
    pub cursor: usize,
    pub list_state: ListState,
    pub overlay: Overlay,
    pub logos: LogoStore,
    pub show_logos: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            should_quit: false,
            load: LoadState::Loading,
            pager: Pager::new(0),
            cursor: 0,
            list_state: ListState::default(),
            overlay: Overlay::Closed,
            logos: LogoStore::new(),
            show_logos: true,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logos(logos: LogoStore) -> Self {
        Self {
            logos,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, update: Update) {
        match update {
            Update::Schedule(Ok(games)) => self.set_games(games),
            Update::Schedule(Err(e)) => {
                tracing::error!("schedule load failed: {:#}", e);
                self.load = LoadState::Failed(format!("{:#}", e));
            }
            Update::Logo(code, img) => self.logos.insert(&code, img),
        }
    }

    pub fn set_games(&mut self, games: Vec<Game>) {
        let schedule = Schedule::new(games);
        tracing::info!(
            games = schedule.games().len(),
            weeks = schedule.weeks().len(),
            "schedule loaded"
        );
        self.pager = Pager::new(schedule.weeks().len());
        self.load = LoadState::Loaded(schedule);
        self.cursor = 0;
        self.overlay.close();
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        match &self.load {
            LoadState::Loaded(s) => Some(s),
            _ => None,
        }
    }

    /// Game indices visible on the current page.
    pub fn page_games(&self) -> Vec<usize> {
        self.schedule()
            .map(|s| s.page_games(&self.pager))
            .unwrap_or_default()
    }

    /// Index into the schedule of the card under the cursor.
    pub fn cursor_game(&self) -> Option<usize> {
        self.page_games().get(self.cursor).copied()
    }

    pub fn selected_game(&self) -> Option<&Game> {
        let i = self.overlay.selected()?;
        self.schedule()?.game(i)
    }

    pub fn on_key(&mut self, code: KeyCode) {
        if self.overlay.is_open() {
            match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Backspace => self.close_detail(),
                KeyCode::Char('l') => self.show_logos = !self.show_logos,
                _ => {}
            }
            return;
        }
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('l') => self.show_logos = !self.show_logos,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Right | KeyCode::Char('n') => self.next_page(),
            KeyCode::Left | KeyCode::Char('p') => self.prev_page(),
            KeyCode::Enter => self.open_detail(),
            _ => {}
        }
    }

    fn next(&mut self) {
        let len = self.page_games().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor >= len - 1 { 0 } else { self.cursor + 1 };
    }

    fn previous(&mut self) {
        let len = self.page_games().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    pub fn next_page(&mut self) {
        let before = self.pager.page();
        self.pager.next_page();
        self.after_page_change(before);
    }

    pub fn prev_page(&mut self) {
        let before = self.pager.page();
        self.pager.prev_page();
        self.after_page_change(before);
    }

    fn after_page_change(&mut self, before: usize) {
        if self.pager.page() != before {
            tracing::debug!(page = self.pager.page(), "page changed");
            self.cursor = 0;
            *self.list_state.offset_mut() = 0;
        }
    }

    pub fn open_detail(&mut self) {
        if let Some(i) = self.cursor_game() {
            tracing::debug!(game = i, "detail opened");
            self.overlay.open(i);
        }
    }

    pub fn close_detail(&mut self) {
        self.overlay.close();
    }
}
