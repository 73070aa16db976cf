//! Page shells rendered from the theme state.
//!
//! Pages are pure consumers of a [`ThemeManager`]: they branch on
//! [`is_ready`](ThemeManager::is_ready) and only then read the theme and the
//! projected tokens. Until the session's theme is resolved every page renders
//! the same neutral placeholder, so a pre-rendered page and its hydrated
//! counterpart always agree on the first frame.
//!
//! # Example
//!
//! ```rust
//! use spill_theme::page::PageRenderer;
//! use spill_theme::{FixedSignal, MemoryStore, PlaceholderGames, ThemeManager};
//!
//! let renderer = PageRenderer::new().unwrap();
//! let games = PlaceholderGames::new();
//! let mut manager = ThemeManager::new(MemoryStore::new());
//!
//! let html = renderer.render_home(&manager, &games).unwrap();
//! assert!(html.contains("Loading..."));
//!
//! manager.resolve(&FixedSignal(true)).unwrap();
//! let html = renderer.render_home(&manager, &games).unwrap();
//! assert!(html.contains("dark-theme-bg"));
//! ```

mod filters;
mod templates;

use std::time::SystemTime;

use minijinja::{context, Environment, HtmlEscape, Value};
use serde::Serialize;

use crate::context::PresentationContext;
use crate::games::{GameId, GameInfo, GameSource, GameSourceError, BOARD_SIZE, MAX_PLAYERS};
use crate::store::PreferenceStore;
use crate::theme::ThemeManager;
use filters::register_filters;

/// Error returned when a page cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Games(#[from] GameSourceError),
}

#[derive(Serialize)]
struct GameRow<'a> {
    id: &'a str,
    path: Value,
    status: String,
    player_count: u8,
    minutes: u64,
}

impl<'a> GameRow<'a> {
    fn new(game: &'a GameInfo, now: SystemTime) -> Self {
        Self {
            id: game.id.as_str(),
            path: route(&game.id.path()),
            status: game.status.label(),
            player_count: game.player_count,
            minutes: game.minutes_since_created(now),
        }
    }
}

/// Escapes each path segment but keeps the `/` separators readable.
fn route(path: &str) -> Value {
    let escaped: Vec<String> = path
        .split('/')
        .map(|segment| HtmlEscape(segment).to_string())
        .collect();
    Value::from_safe_string(escaped.join("/"))
}

/// A renderer with the page templates pre-compiled.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compiles the page templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn new() -> Result<Self, PageError> {
        let mut env = Environment::new();
        register_filters(&mut env);
        for (name, source) in [templates::LOADING, templates::HOME, templates::GAME] {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders the front page: actions and the list of active games.
    ///
    /// The game source is not consulted until the theme is ready.
    pub fn render_home<S, G>(
        &self,
        manager: &ThemeManager<S, PresentationContext>,
        games: &G,
    ) -> Result<String, PageError>
    where
        S: PreferenceStore,
        G: GameSource + ?Sized,
    {
        let Ok(theme) = manager.theme() else {
            return self.render_loading();
        };

        let now = SystemTime::now();
        let games = games.list_active_games()?;
        let rows: Vec<GameRow<'_>> = games.iter().map(|g| GameRow::new(g, now)).collect();

        let tmpl = self.env.get_template(templates::HOME.0)?;
        Ok(tmpl.render(context! {
            theme => theme.as_str(),
            css => manager.context().to_css(),
            games => rows,
            max_players => MAX_PLAYERS,
        })?)
    }

    /// Renders the per-game page with its board placeholder.
    pub fn render_game<S>(
        &self,
        manager: &ThemeManager<S, PresentationContext>,
        game_id: &GameId,
    ) -> Result<String, PageError>
    where
        S: PreferenceStore,
    {
        let Ok(theme) = manager.theme() else {
            return self.render_loading();
        };

        let tmpl = self.env.get_template(templates::GAME.0)?;
        Ok(tmpl.render(context! {
            theme => theme.as_str(),
            css => manager.context().to_css(),
            game_id => game_id.as_str(),
            board_size => BOARD_SIZE,
        })?)
    }

    fn render_loading(&self) -> Result<String, PageError> {
        let tmpl = self.env.get_template(templates::LOADING.0)?;
        Ok(tmpl.render(context! {})?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::PlaceholderGames;
    use crate::store::MemoryStore;
    use crate::theme::{FixedSignal, NoSignal, Theme};

    struct EmptyGames;

    impl GameSource for EmptyGames {
        fn list_active_games(&self) -> Result<Vec<GameInfo>, GameSourceError> {
            Ok(Vec::new())
        }

        fn create_game(&mut self) -> Result<GameId, GameSourceError> {
            Ok(GameId::new("x"))
        }
    }

    struct DownGames;

    impl GameSource for DownGames {
        fn list_active_games(&self) -> Result<Vec<GameInfo>, GameSourceError> {
            Err(GameSourceError::Unavailable("connection refused".into()))
        }

        fn create_game(&mut self) -> Result<GameId, GameSourceError> {
            Err(GameSourceError::Unavailable("connection refused".into()))
        }
    }

    fn ready_manager(dark: bool) -> ThemeManager<MemoryStore> {
        let mut manager = ThemeManager::new(MemoryStore::new());
        manager.resolve(&FixedSignal(dark)).unwrap();
        manager
    }

    #[test]
    fn test_pending_renders_placeholder_only() {
        let renderer = PageRenderer::new().unwrap();
        let manager = ThemeManager::new(MemoryStore::new());

        let html = renderer.render_home(&manager, &DownGames).unwrap();
        assert!(html.contains("Loading..."));
        assert!(!html.contains("theme-bg"));
        assert!(!html.contains("--button-primary-bg"));
    }

    #[test]
    fn test_placeholder_is_theme_independent() {
        let renderer = PageRenderer::new().unwrap();
        let pending = ThemeManager::new(MemoryStore::with_entry("goGameTheme", "dark"));
        let other = ThemeManager::new(MemoryStore::new());
        assert_eq!(
            renderer.render_home(&pending, &EmptyGames).unwrap(),
            renderer.render_home(&other, &EmptyGames).unwrap()
        );
    }

    #[test]
    fn test_home_lists_games() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render_home(&ready_manager(false), &PlaceholderGames::new())
            .unwrap();

        assert!(html.contains("light-theme-bg"));
        assert!(html.contains("Spill ID: dummy-12..."));
        assert!(html.contains("(1/2 spillere) - Status: waiting for players"));
        assert!(html.contains("(2/2 spillere) - Status: in progress"));
        assert!(html.contains("href=\"/spill/dummy-789\""));
        assert!(html.contains("Bytt til Mørkt Tema"));
    }

    #[test]
    fn test_home_rows_use_game_routes_and_labels() {
        let renderer = PageRenderer::new().unwrap();
        let games = PlaceholderGames::new();
        let listed = games.list_active_games().unwrap();
        let html = renderer.render_home(&ready_manager(false), &games).unwrap();

        for game in &listed {
            assert!(html.contains(&format!("href=\"{}\"", game.id.path())));
            assert!(html.contains(&format!("Status: {}</p>", game.status.label())));
        }
        assert!(!html.contains("waiting_for_players"));
        assert!(!html.contains("in_progress"));
    }

    #[test]
    fn test_game_route_is_escaped() {
        struct Hostile;

        impl GameSource for Hostile {
            fn list_active_games(&self) -> Result<Vec<GameInfo>, GameSourceError> {
                Ok(vec![GameInfo {
                    id: GameId::new("x\"><b>"),
                    status: crate::games::GameStatus::InProgress,
                    player_count: 2,
                    created_at: SystemTime::now(),
                }])
            }

            fn create_game(&mut self) -> Result<GameId, GameSourceError> {
                Ok(GameId::new("x"))
            }
        }

        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_home(&ready_manager(false), &Hostile).unwrap();
        assert!(html.contains("href=\"/spill/x&quot;&gt;&lt;b&gt;\""));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_home_shows_slogan() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_home(&ready_manager(false), &EmptyGames).unwrap();
        assert!(html.contains("Sharpen your mind, the board is set!"));
        assert!(html.contains("Are you ready to conquer the board?"));
    }

    #[test]
    fn test_home_uses_every_token() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render_home(&ready_manager(true), &PlaceholderGames::new())
            .unwrap();
        for name in crate::theme::TOKEN_NAMES {
            assert!(html.contains(&format!("var(--{name})")), "token {name} unused");
        }
    }

    #[test]
    fn test_home_embeds_projected_tokens() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render_home(&ready_manager(true), &EmptyGames)
            .unwrap();

        assert!(html.contains("--button-primary-bg: #FFA000;"));
        assert!(html.contains("dark-theme-bg"));
        assert!(html.contains("Bytt til Lyst Tema"));
        assert!(html.contains("Ingen aktive spill for øyeblikket."));
    }

    #[test]
    fn test_home_follows_toggle() {
        let renderer = PageRenderer::new().unwrap();
        let mut manager = ready_manager(true);
        manager.set_theme(Theme::Light).unwrap();

        let html = renderer.render_home(&manager, &EmptyGames).unwrap();
        assert!(html.contains("--button-primary-bg: #FFD700;"));
        assert!(!html.contains("#FFA000"));
    }

    #[test]
    fn test_game_source_failure_propagates() {
        let renderer = PageRenderer::new().unwrap();
        let err = renderer
            .render_home(&ready_manager(false), &DownGames)
            .unwrap_err();
        assert!(matches!(err, PageError::Games(_)));
    }

    #[test]
    fn test_game_page() {
        let renderer = PageRenderer::new().unwrap();
        let mut manager = ThemeManager::new(MemoryStore::new());
        let id = GameId::new("dev-game-a1b2c3d");

        assert!(renderer
            .render_game(&manager, &id)
            .unwrap()
            .contains("Loading..."));

        manager.resolve(&NoSignal).unwrap();
        let html = renderer.render_game(&manager, &id).unwrap();
        assert!(html.contains("light-theme-content-bg"));
        assert!(html.contains("Spill ID: dev-game..."));
        assert!(html.contains("data-size=\"19\""));
    }
}
