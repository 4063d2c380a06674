use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::catalog::{DataSource, FileSource, Prefetched};
use crate::clock;
use crate::config::GalleryConfig;
use crate::entity::{PromptRecord, RecordId};
use crate::error::{GalleryError, Result};
use crate::gallery::Gallery;
use crate::host::{Host, MemoryHost};
use crate::intro::{FileSession, IntroOutcome, IntroSequencer, SessionStore, TerminalSurface};
use crate::leaderboard;
use crate::navigation::JumpOutcome;
use crate::search;
use crate::view::html::LOGO_TEXT;
use crate::view::{card_dom_id, format_rating, Card, StarRating};

const PAGE_TITLE: &str = "prompts/🍌";

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: GalleryConfig,
}

impl Context {
    pub fn load(config_path: &Path, data: Option<PathBuf>) -> Result<Self> {
        let mut config = GalleryConfig::load(config_path)?;
        if let Some(data) = data {
            config.data = data;
        }
        Ok(Self { config })
    }

    fn source(&self) -> FileSource {
        FileSource::new(&self.config.data)
    }

    fn records(&self) -> Result<Vec<PromptRecord>> {
        self.source().fetch()
    }
}

/// Bring up a gallery the way the page does: intro first (on a terminal),
/// then the catalog.
async fn boot(ctx: &Context, records: Vec<PromptRecord>) -> Result<Gallery<MemoryHost>> {
    let mut gallery = Gallery::new(MemoryHost::new(), ctx.config.clone());
    let source = Prefetched::new(ctx.source().name(), records);

    if atty::is(atty::Stream::Stdout) {
        let mut session = FileSession::in_temp_dir();
        let mut surface = TerminalSurface::stdout();
        gallery
            .boot(&IntroSequencer::default(), &mut session, &mut surface, &source)
            .await?;
    } else {
        gallery.initialize(&source).await;
    }
    Ok(gallery)
}

/// Single-threaded runtime: the gallery is one cooperative actor.
fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn tag_list(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_record_line(record: &PromptRecord) {
    let stars = StarRating::from_rating(record.score()).glyphs();
    println!(
        "  {:>4}  {:<6} {}  {}",
        record.id.to_string(),
        stars,
        record.title,
        tag_list(&record.tags)
    );
}

pub fn handle_build(ctx: &Context, out: PathBuf, filter: Option<String>) -> Result<()> {
    let records = ctx.records()?;
    let rt = runtime()?;

    let (cards, html) = rt.block_on(async {
        let mut gallery = boot(ctx, records).await?;
        if let Some(term) = &filter {
            gallery.on_search_input(term).await;
        }

        let rendered = {
            let host = gallery.host();
            let mut host = host.lock().await;
            host.set_clock(&clock::format(&Local::now()));
            let page = host.to_html(PAGE_TITLE);
            (host.card_count(), page)
        };
        gallery.shutdown().await;
        Ok::<_, GalleryError>(rendered)
    })?;

    fs::create_dir_all(&out)?;
    let index = out.join("index.html");
    fs::write(&index, html)?;
    info!(path = %index.display(), cards, "wrote static gallery");

    println!("Wrote {} ({} cards)", index.display(), cards);
    Ok(())
}

pub fn handle_search(ctx: &Context, term: String, json: bool) -> Result<()> {
    let records = ctx.records()?;
    let results = search::filter(&records, &term);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No prompts found for '{}'.", term);
    } else {
        println!("Search results for '{}':\n", term);
        for record in results {
            print_record_line(record);
        }
    }

    Ok(())
}

pub fn handle_leaderboard(ctx: &Context, limit: Option<usize>, json: bool) -> Result<()> {
    let records = ctx.records()?;
    let n = limit.unwrap_or(ctx.config.leaderboard_size);
    let board = leaderboard::top_n(&records, n);

    if json {
        println!("{}", serde_json::to_string_pretty(&board.entries)?);
    } else if board.is_empty() {
        println!("No prompts rated yet.");
    } else {
        println!("Top {} prompts:\n", board.len());
        for entry in &board.entries {
            println!(
                "  {:<4} {:>4}  {}",
                entry.badge.to_string(),
                format_rating(entry.rating),
                entry.title
            );
        }
    }

    Ok(())
}

pub fn handle_show(ctx: &Context, id: String, json: bool) -> Result<()> {
    let records = ctx.records()?;
    let target = RecordId::parse_loose(&id);
    let rt = runtime()?;

    let card = rt.block_on(async {
        let mut gallery = boot(ctx, records).await?;
        let outcome = gallery.go_to(&target).await;

        let card = match &outcome {
            JumpOutcome::Highlighted { dom_id } => {
                let host = gallery.host();
                let host = host.lock().await;
                let card = host.grid().and_then(|g| g.find(dom_id)).cloned();
                card
            }
            JumpOutcome::NotFound { .. } => None,
        };
        gallery.shutdown().await;
        Ok::<_, GalleryError>(card)
    })?;

    let card: Card = card.ok_or_else(|| GalleryError::RecordNotFound(id.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!("{} ({})", card.title, card_dom_id(&card.id));
        println!(
            "  {} ({})",
            card.stars.glyphs(),
            format_rating(card.rating)
        );
        println!("  {}", tag_list(&card.tags));
        println!();
        println!("{}", card.prompt);
    }

    Ok(())
}

pub fn handle_intro(reset: bool) -> Result<()> {
    let mut session = FileSession::in_temp_dir();
    if reset {
        session.clear()?;
    }

    // Nothing to animate on a pipe; print the final state only.
    if !atty::is(atty::Stream::Stdout) {
        println!("{}", LOGO_TEXT);
        return Ok(());
    }

    let rt = runtime()?;
    let outcome = rt.block_on(async {
        let mut surface = TerminalSurface::stdout();
        IntroSequencer::default()
            .start(&mut session, &mut surface)
            .await
    })?;

    info!(?outcome, "intro finished");
    if outcome == IntroOutcome::Skipped {
        eprintln!("(intro already shown this session; use --reset to replay)");
    }
    Ok(())
}
