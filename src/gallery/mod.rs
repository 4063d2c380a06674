//! The gallery controller.
//!
//! Owns the catalog and drives a [`Host`]: initial load, search input,
//! leaderboard overlay, copy buttons and reveal-on-scroll. Leaderboard jumps
//! live in [`crate::navigation`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::catalog::{CatalogStore, DataSource};
use crate::clock;
use crate::config::GalleryConfig;
use crate::entity::{PromptRecord, RecordId};
use crate::error::{GalleryError, Result};
use crate::host::{Host, VISIBLE_CLASS};
use crate::intro::{IntroOutcome, IntroSequencer, IntroSurface, SessionStore};
use crate::leaderboard::{self, Leaderboard};
use crate::navigation::PendingHighlight;
use crate::search;
use crate::view::{self, card_dom_id, CardGrid};

/// Copy button label while the confirmation is shown.
pub const COPIED_LABEL: &str = "COPIED!";

pub struct Gallery<H: Host> {
    pub(crate) host: Arc<Mutex<H>>,
    pub(crate) catalog: CatalogStore,
    pub(crate) config: GalleryConfig,
    pub(crate) highlight: Option<PendingHighlight>,
    pub(crate) revealed: HashSet<String>,
    /// Pending copy label reverts, by card.
    copy_reverts: HashMap<String, CancellationToken>,
    clock: Option<CancellationToken>,
}

impl<H: Host> Gallery<H> {
    pub fn new(host: H, config: GalleryConfig) -> Self {
        Self {
            host: Arc::new(Mutex::new(host)),
            catalog: CatalogStore::new(),
            config,
            highlight: None,
            revealed: HashSet::new(),
            copy_reverts: HashMap::new(),
            clock: None,
        }
    }

    /// Shared handle on the host, for inspection.
    pub fn host(&self) -> Arc<Mutex<H>> {
        self.host.clone()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Page start: run the intro (or skip it if this session has seen it),
    /// then initialize. Nothing is rendered before the intro is over.
    pub async fn boot<F, S>(
        &mut self,
        intro: &IntroSequencer,
        session: &mut F,
        surface: &mut S,
        source: &dyn DataSource,
    ) -> Result<(IntroOutcome, bool)>
    where
        F: SessionStore,
        S: IntroSurface,
    {
        let outcome = intro.start(session, surface).await?;
        debug!(?outcome, "intro done, initializing");
        let loaded = self.initialize(source).await;
        Ok((outcome, loaded))
    }

    /// Start the clock and load the catalog once.
    ///
    /// Returns `false` when the source failed; the failure is logged and the
    /// card container keeps its previous content.
    pub async fn initialize(&mut self, source: &dyn DataSource) -> bool {
        self.start_clock();
        self.load(source).await
    }

    /// Fetch the catalog and show it. Nothing is retried.
    pub async fn load(&mut self, source: &dyn DataSource) -> bool {
        match source.fetch() {
            Ok(records) => {
                info!(source = %source.name(), records = records.len(), "catalog loaded");
                self.replace_catalog(records).await;
                true
            }
            Err(e) => {
                error!(source = %source.name(), error = %e, "failed to load catalog");
                false
            }
        }
    }

    /// Swap the catalog and redraw everything derived from it.
    pub async fn replace_catalog(&mut self, records: Vec<PromptRecord>) {
        self.catalog.replace(records);
        self.render_all().await;
        let board = self.leaderboard();
        self.host.lock().await.show_leaderboard(&board);
    }

    pub fn leaderboard(&self) -> Leaderboard {
        leaderboard::top_n(self.catalog.records(), self.config.leaderboard_size)
    }

    pub(crate) async fn show(&mut self, grid: CardGrid) {
        self.revealed.clear();
        self.host.lock().await.show_cards(&grid);
    }

    /// Render the whole catalog.
    pub async fn render_all(&mut self) {
        let grid = view::render(self.catalog.records());
        self.show(grid).await;
    }

    /// Search input changed.
    pub async fn on_search_input(&mut self, raw: &str) -> usize {
        self.host.lock().await.set_search_value(raw);
        let grid = view::render(search::filter(self.catalog.records(), raw));
        let shown = grid.cards().len();
        debug!(term = raw, shown, "search input");
        self.show(grid).await;
        shown
    }

    pub async fn open_leaderboard(&self) {
        self.host.lock().await.set_leaderboard_open(true);
    }

    pub async fn close_leaderboard(&self) {
        self.host.lock().await.set_leaderboard_open(false);
    }

    /// A click that landed on the overlay backdrop closes it.
    pub async fn backdrop_clicked(&self) {
        self.close_leaderboard().await;
    }

    /// Copy a prompt and flash the button label.
    ///
    /// Copying the same card again restarts the feedback period.
    pub async fn copy_prompt(&mut self, id: &RecordId) -> Result<()> {
        let record = self
            .catalog
            .get(id)
            .ok_or_else(|| GalleryError::RecordNotFound(id.to_string()))?;
        let dom_id = card_dom_id(&record.id);

        let mut host = self.host.lock().await;
        host.write_clipboard(&record.prompt)?;
        // Cancelled under the lock: a stale revert can no longer clear the
        // label set below.
        if let Some(previous) = self.copy_reverts.remove(&dom_id) {
            debug!(dom_id = %dom_id, "restarting copy feedback");
            previous.cancel();
        }
        host.set_copy_label(&dom_id, Some(COPIED_LABEL));
        drop(host);

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let host = self.host.clone();
        let feedback = self.config.copy_feedback();
        let target = dom_id.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(feedback) => {}
            }
            let mut host = host.lock().await;
            if !token.is_cancelled() {
                host.set_copy_label(&target, None);
            }
        });
        self.copy_reverts.insert(dom_id, cancel);
        Ok(())
    }

    /// Cards reported inside the viewport get the `visible` class, once per
    /// render.
    pub async fn cards_entered_viewport(&mut self, dom_ids: &[String]) -> usize {
        let mut host = self.host.lock().await;
        let mut newly = 0;
        for dom_id in dom_ids {
            if self.revealed.contains(dom_id) {
                continue;
            }
            if host.add_class(dom_id, VISIBLE_CLASS) {
                self.revealed.insert(dom_id.clone());
                newly += 1;
            }
        }
        newly
    }

    fn start_clock(&mut self) {
        if self.clock.is_some() {
            return;
        }
        let token = CancellationToken::new();
        tokio::spawn(clock::run(self.host.clone(), token.clone()));
        self.clock = Some(token);
    }

    /// Stop the clock and drop any pending highlight.
    pub async fn shutdown(&mut self) {
        if let Some(token) = self.clock.take() {
            token.cancel();
        }
        for (_, revert) in self.copy_reverts.drain() {
            revert.cancel();
        }
        if let Some(pending) = self.highlight.take() {
            pending.cancel().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JsonSource;
    use crate::host::MemoryHost;
    use crate::intro::MemorySession;
    use std::time::Duration;

    const CATALOG: &str = r#"[
        {"id": 1, "title": "A", "image": "a.png", "prompt": "prompt a", "tags": ["x", "Neon"], "rating": 4.5},
        {"id": 2, "title": "B", "image": "b.png", "prompt": "prompt b", "tags": ["y"], "rating": 5},
        {"id": "c", "title": "C", "image": "c.png", "prompt": "prompt c", "tags": ["neon-city"]}
    ]"#;

    async fn loaded() -> Gallery<MemoryHost> {
        let mut gallery = Gallery::new(MemoryHost::new(), GalleryConfig::default());
        assert!(gallery.load(&JsonSource::new(CATALOG)).await);
        gallery
    }

    #[tokio::test]
    async fn test_load_renders_cards_and_leaderboard() {
        let gallery = loaded().await;
        let host = gallery.host();
        let host = host.lock().await;

        assert_eq!(host.card_count(), 3);
        let titles: Vec<&str> = host
            .leaderboard()
            .entries
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_container_untouched() {
        let mut gallery = Gallery::new(MemoryHost::new(), GalleryConfig::default());
        assert!(!gallery.load(&JsonSource::new("not json")).await);

        let host = gallery.host();
        let host = host.lock().await;
        assert!(host.grid().is_none());
        assert_eq!(host.render_count(), 0);
        assert!(gallery.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_search_filters_and_restores() {
        let mut gallery = loaded().await;

        assert_eq!(gallery.on_search_input("#neon").await, 2);
        assert_eq!(gallery.on_search_input("x").await, 1);
        assert_eq!(gallery.on_search_input("zzz").await, 0);
        {
            let host = gallery.host();
            let host = host.lock().await;
            assert!(host.grid().unwrap().is_placeholder());
            assert_eq!(host.search_value(), "zzz");
        }
        assert_eq!(gallery.on_search_input("").await, 3);
    }

    #[tokio::test]
    async fn test_leaderboard_overlay() {
        let gallery = loaded().await;
        gallery.open_leaderboard().await;
        assert!(gallery.host().lock().await.is_leaderboard_open());
        gallery.backdrop_clicked().await;
        assert!(!gallery.host().lock().await.is_leaderboard_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_prompt_flashes_label() {
        let mut gallery = loaded().await;
        gallery.copy_prompt(&RecordId::Int(2)).await.unwrap();
        {
            let host = gallery.host();
            let host = host.lock().await;
            assert_eq!(host.clipboard(), Some("prompt b"));
            assert_eq!(host.copy_button_label("card-2"), Some(COPIED_LABEL));
        }

        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert!(gallery.host().lock().await.copy_button_label("card-2").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_copy_restarts_feedback() {
        let mut gallery = loaded().await;
        gallery.copy_prompt(&RecordId::Int(1)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        gallery.copy_prompt(&RecordId::Int(1)).await.unwrap();

        // Past the first copy's deadline, inside the second's.
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(
            gallery.host().lock().await.copy_button_label("card-1"),
            Some(COPIED_LABEL)
        );

        tokio::time::sleep(Duration::from_millis(1401)).await;
        assert!(gallery.host().lock().await.copy_button_label("card-1").is_none());
    }

    #[tokio::test]
    async fn test_copy_unknown_prompt() {
        let mut gallery = loaded().await;
        let err = gallery.copy_prompt(&RecordId::Int(42)).await.unwrap_err();
        assert!(matches!(err, GalleryError::RecordNotFound(_)));
    }

    #[tokio::test]
    async fn test_copy_with_denied_clipboard_keeps_label() {
        let mut gallery = Gallery::new(MemoryHost::without_clipboard(), GalleryConfig::default());
        gallery.load(&JsonSource::new(CATALOG)).await;
        assert!(gallery.copy_prompt(&RecordId::Int(1)).await.is_err());
        assert!(gallery.host().lock().await.copy_button_label("card-1").is_none());
    }

    #[tokio::test]
    async fn test_reveal_is_one_shot_per_render() {
        let mut gallery = loaded().await;
        let ids = vec!["card-1".to_string(), "card-2".to_string(), "card-9".to_string()];

        assert_eq!(gallery.cards_entered_viewport(&ids).await, 2);
        assert_eq!(gallery.cards_entered_viewport(&ids).await, 0);
        assert!(gallery.host().lock().await.has_class("card-1", VISIBLE_CLASS));

        gallery.render_all().await;
        assert_eq!(gallery.cards_entered_viewport(&ids).await, 2);
    }

    /// Intro surface that records whether cards were on screen at reveal.
    struct RevealWatcher {
        host: Arc<Mutex<MemoryHost>>,
        grid_at_reveal: Option<bool>,
    }

    impl IntroSurface for RevealWatcher {
        fn set_text(&mut self, _text: &str) {}
        fn hide_cursor(&mut self) {}
        fn set_glow(&mut self, _on: bool) {}
        fn show_logo(&mut self, _animated: bool) {}

        fn reveal(&mut self, _animated: bool) {
            let host = self.host.try_lock().expect("host is free during the intro");
            self.grid_at_reveal = Some(host.grid().is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_renders_after_intro() {
        let mut gallery = Gallery::new(MemoryHost::new(), GalleryConfig::default());
        let intro = IntroSequencer::default();
        let mut session = MemorySession::new();
        let mut surface = RevealWatcher {
            host: gallery.host(),
            grid_at_reveal: None,
        };

        let started = tokio::time::Instant::now();
        let (outcome, loaded) = gallery
            .boot(&intro, &mut session, &mut surface, &JsonSource::new(CATALOG))
            .await
            .unwrap();

        assert_eq!(outcome, IntroOutcome::Played);
        assert!(loaded);
        assert_eq!(surface.grid_at_reveal, Some(false));
        assert_eq!(started.elapsed(), intro.total_duration());
        assert_eq!(gallery.host().lock().await.card_count(), 3);
        assert!(session.intro_shown());
        gallery.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_skipped_session_renders_at_once() {
        let mut gallery = Gallery::new(MemoryHost::new(), GalleryConfig::default());
        let mut session = MemorySession::new();
        session.mark_intro_shown().unwrap();
        let mut surface = RevealWatcher {
            host: gallery.host(),
            grid_at_reveal: None,
        };

        let started = tokio::time::Instant::now();
        let (outcome, _) = gallery
            .boot(
                &IntroSequencer::default(),
                &mut session,
                &mut surface,
                &JsonSource::new(CATALOG),
            )
            .await
            .unwrap();

        assert_eq!(outcome, IntroOutcome::Skipped);
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(surface.grid_at_reveal, Some(false));
        assert_eq!(gallery.host().lock().await.card_count(), 3);
        gallery.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_starts_clock() {
        let mut gallery = Gallery::new(MemoryHost::new(), GalleryConfig::default());
        assert!(gallery.initialize(&JsonSource::new(CATALOG)).await);
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(gallery.host().lock().await.clock().starts_with('['));
        gallery.shutdown().await;
    }
}
