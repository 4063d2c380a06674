//! HTML serialization of the gallery.
//!
//! Produces the same markup the page styles expect: `.card` blocks inside
//! `#prompt-container`, leaderboard rows inside `#leaderboard-list`.

use std::fmt::Write;

use crate::leaderboard::{Leaderboard, LeaderboardEntry};

use super::utils::{card_dom_id, format_rating, html_escape, html_escape_into};
use super::{Card, CardGrid, NO_RESULTS};

/// Label of the copy button when idle.
pub const COPY_LABEL: &str = "COPY";

/// Final header logo, `<prompts/🍌>`.
pub const LOGO_TEXT: &str = "<prompts/🍌>";

/// Per-element state the host layers on top of the projection.
pub trait Decorations {
    /// Extra classes on the element (`highlight`, `visible`, ...).
    fn classes(&self, dom_id: &str) -> Vec<String>;

    /// Copy button label override for a card.
    fn copy_label(&self, dom_id: &str) -> Option<String>;
}

/// Everything needed to write a full page.
pub struct Page<'a> {
    pub title: &'a str,
    pub search_value: &'a str,
    pub clock: &'a str,
    pub grid: &'a CardGrid,
    pub leaderboard: &'a Leaderboard,
    pub leaderboard_open: bool,
}

/// Markup of one card.
pub fn card(out: &mut String, card: &Card, decor: &dyn Decorations) {
    let mut class = String::from("card");
    for extra in decor.classes(&card.dom_id) {
        class.push(' ');
        class.push_str(&extra);
    }
    let label = decor
        .copy_label(&card.dom_id)
        .unwrap_or_else(|| COPY_LABEL.to_string());
    let rating = format_rating(card.rating);

    let _ = write!(out, r#"<div class="{}" id="{}">"#, html_escape(&class), card.dom_id);

    out.push_str(r#"<div class="card-img-wrapper"><img src=""#);
    html_escape_into(out, &card.image);
    out.push_str(r#"" alt=""#);
    html_escape_into(out, &card.title);
    out.push_str(r#"" class="card-img" loading="lazy"></div>"#);

    out.push_str(r#"<div class="card-content">"#);
    let _ = write!(
        out,
        r#"<div class="rating-box" title="Rated {r}/5">{stars} <span class="star-score">({r})</span></div>"#,
        r = rating,
        stars = card.stars.glyphs(),
    );

    out.push_str(r#"<h3 class="card-title">&gt;"#);
    html_escape_into(out, &card.title);
    out.push_str("</h3>");

    out.push_str(r#"<div class="card-prompt-box"><p>"#);
    html_escape_into(out, &card.prompt);
    out.push_str(r#"</p><button class="copy-btn""#);
    if label != COPY_LABEL {
        out.push_str(r#" style="color:#3b82f6;border-color:#3b82f6;""#);
    }
    out.push('>');
    html_escape_into(out, &label);
    out.push_str(r#"</button><input type="hidden" value=""#);
    html_escape_into(out, &card.prompt);
    out.push_str(r#""></div>"#);

    out.push_str(r#"<div class="tags">"#);
    for tag in &card.tags {
        out.push_str("<span>#");
        html_escape_into(out, tag);
        out.push_str("</span>");
    }
    out.push_str("</div></div></div>");
}

/// Inner markup of the card container.
pub fn card_grid(grid: &CardGrid, decor: &dyn Decorations) -> String {
    match grid {
        CardGrid::Empty => format!(
            r#"<p style="text-align:center; color:#666;">{}</p>"#,
            html_escape(NO_RESULTS)
        ),
        CardGrid::Cards(cards) => {
            let mut out = String::new();
            for c in cards {
                card(&mut out, c, decor);
            }
            out
        }
    }
}

fn leaderboard_row(out: &mut String, entry: &LeaderboardEntry) {
    let mut style = String::from(
        "padding: 15px 10px; border-bottom: 1px solid rgba(255,255,255,0.05); \
         display: flex; align-items: center; justify-content: space-between;",
    );
    if entry.is_top() {
        style.push_str(
            "background: linear-gradient(90deg, rgba(255,215,0,0.1), transparent); \
             border-left: 3px solid #FFD700;",
        );
    }

    let _ = write!(
        out,
        r#"<div class="leaderboard-row" data-card="{}" style="{}">"#,
        card_dom_id(&entry.id),
        style
    );
    let _ = write!(
        out,
        r#"<div style="display:flex; align-items:center; gap:12px;"><span style="font-size:1.2rem;">{}</span><span style="font-weight:bold; color: var(--text-main); font-size: 0.95rem;">"#,
        entry.badge
    );
    html_escape_into(out, &entry.title);
    let _ = write!(
        out,
        r#"</span></div><div style="display:flex; flex-direction:column; align-items:end;"><span style="color:var(--accent); font-weight:bold;">{}</span><span style="font-size:0.65rem; color:#666;">Editor Rating</span></div></div>"#,
        format_rating(entry.rating)
    );
}

/// Inner markup of the leaderboard list.
pub fn leaderboard(board: &Leaderboard) -> String {
    let mut out = String::new();
    for entry in &board.entries {
        leaderboard_row(&mut out, entry);
    }
    out
}

/// A complete standalone document.
pub fn page(page: &Page<'_>, decor: &dyn Decorations) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", html_escape(page.title));
    out.push_str("<link rel=\"stylesheet\" href=\"assets/css/style.css\">\n</head>\n<body>\n");

    out.push_str("<header>\n");
    let _ = writeln!(
        out,
        r#"<div id="clock">{}</div>"#,
        html_escape(page.clock)
    );
    let _ = writeln!(
        out,
        r#"<h1 id="typing-target"><span class="final-logo" style="animation:none; opacity:1; transform:scale(1);">{}</span></h1>"#,
        html_escape(LOGO_TEXT)
    );
    let _ = writeln!(
        out,
        r#"<div class="fade-in-delayed visible"><input type="text" id="searchInput" placeholder="Search #tags..." value="{}"></div>"#,
        html_escape(page.search_value)
    );
    out.push_str("</header>\n");

    let _ = writeln!(
        out,
        r#"<main id="prompt-container">{}</main>"#,
        card_grid(page.grid, decor)
    );

    let display = if page.leaderboard_open { "block" } else { "none" };
    let _ = writeln!(
        out,
        r#"<div id="leaderboard-modal" style="display:{}"><div id="leaderboard-list">{}</div></div>"#,
        display,
        leaderboard(page.leaderboard)
    );
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PromptRecord;
    use crate::leaderboard::top_n;
    use crate::view::render;

    fn sample() -> Vec<PromptRecord> {
        let mut a = PromptRecord::new(1, "A");
        a.rating = Some(4.5);
        a.tags = vec!["x".to_string()];
        a.prompt = "draw <a> cat".to_string();
        a.image = "img/a.png".to_string();
        let mut b = PromptRecord::new(2, "B");
        b.rating = Some(5.0);
        b.tags = vec!["y".to_string()];
        vec![a, b]
    }

    struct Undecorated;

    impl Decorations for Undecorated {
        fn classes(&self, _dom_id: &str) -> Vec<String> {
            Vec::new()
        }

        fn copy_label(&self, _dom_id: &str) -> Option<String> {
            None
        }
    }

    struct Highlighted;

    impl Decorations for Highlighted {
        fn classes(&self, dom_id: &str) -> Vec<String> {
            if dom_id == "card-1" {
                vec!["highlight".to_string()]
            } else {
                Vec::new()
            }
        }

        fn copy_label(&self, dom_id: &str) -> Option<String> {
            (dom_id == "card-2").then(|| "COPIED!".to_string())
        }
    }

    #[test]
    fn test_empty_grid_is_placeholder_only() {
        let html = card_grid(&CardGrid::Empty, &Undecorated);
        assert!(html.contains(NO_RESULTS));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_card_markup() {
        let grid = render(&sample());
        let html = card_grid(&grid, &Undecorated);

        assert_eq!(html.matches(r#"<div class="card" id="#).count(), 2);
        assert!(html.contains(r#"id="card-1""#));
        assert!(html.contains("★★★★½"));
        assert!(html.contains(r#"title="Rated 4.5/5""#));
        assert!(html.contains("(5)"));
        assert!(html.contains("<span>#x</span>"));
        assert!(html.contains("&gt;A</h3>"));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn test_prompt_text_is_escaped() {
        let grid = render(&sample());
        let html = card_grid(&grid, &Undecorated);
        assert!(html.contains("draw &lt;a&gt; cat"));
        assert!(!html.contains("<a> cat"));
    }

    #[test]
    fn test_decorations_applied() {
        let grid = render(&sample());
        let html = card_grid(&grid, &Highlighted);
        assert!(html.contains(r#"class="card highlight" id="card-1""#));
        assert!(html.contains(">COPIED!</button>"));
        assert_eq!(html.matches(">COPY</button>").count(), 1);
    }

    #[test]
    fn test_leaderboard_markup() {
        let board = top_n(&sample(), 10);
        let html = leaderboard(&board);
        let gold = html.find("🥇").unwrap();
        let silver = html.find("🥈").unwrap();
        assert!(gold < silver);
        assert!(html.contains(r#"data-card="card-2""#));
        assert!(html.contains("Editor Rating"));
        assert_eq!(html.matches("#FFD700").count(), 1);
    }

    #[test]
    fn test_page_contains_every_region() {
        let records = sample();
        let grid = render(&records);
        let board = top_n(&records, 10);
        let html = page(
            &Page {
                title: "Prompts",
                search_value: "#x",
                clock: "[12:00:00]",
                grid: &grid,
                leaderboard: &board,
                leaderboard_open: false,
            },
            &Undecorated,
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="prompt-container""#));
        assert!(html.contains(r#"id="leaderboard-modal" style="display:none""#));
        assert!(html.contains("[12:00:00]"));
        assert!(html.contains(r##"value="#x""##));
        assert!(html.contains("&lt;prompts/🍌&gt;"));
    }
}
