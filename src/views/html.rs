//! Static HTML rendering of the story list, for `pico-hn render`.

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::api::Story;
use crate::time::format_relative;
use crate::views::stories::{BRAND, NAV_LINKS, SKELETON_ROWS};

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@1/css/pico.min.css";

/// One `<article>` per story, linking out in a new tab without leaking the
/// referrer or opener. An empty url produces an empty `href`.
pub fn render_article(story: &Story, now: DateTime<Utc>) -> String {
    let ago = format_relative(story.time, now);
    format!(
        r#"<article><a href="{}" target="_blank" rel="noopener noreferrer">{}</a><p>{}</p></article>"#,
        encode_double_quoted_attribute(&story.url),
        encode_text(&story.title),
        encode_text(&story.summary(&ago)),
    )
}

pub fn render_load_more(busy: bool) -> String {
    let class = if busy { "secondary" } else { "" };
    format!(r#"<button aria-busy="{busy}" class="{class}">Load More</button>"#)
}

fn render_nav() -> String {
    let mut nav = format!("<nav><ul><li><strong>{}</strong></li></ul><ul>", BRAND);
    for (label, active) in NAV_LINKS {
        let attrs = if active {
            r#"role="button""#
        } else {
            r#"aria-disabled="true""#
        };
        nav.push_str(&format!(r##"<li><a href="#" {attrs}>{label}</a></li>"##));
    }
    nav.push_str("</ul></nav>");
    nav
}

/// The full page: header, one article per story (or skeleton articles when
/// there are none yet) and the load more button.
pub fn render_page(stories: &[Story], busy: bool, now: DateTime<Utc>) -> String {
    let mut page = String::from("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str(&format!("<title>{}</title>\n", BRAND));
    page.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", STYLESHEET));
    page.push_str("</head>\n<body>\n<div class=\"container\">\n");
    page.push_str(&render_nav());
    page.push_str("\n<main>\n");

    if stories.is_empty() {
        for _ in 0..SKELETON_ROWS {
            page.push_str("<article aria-busy=\"true\"></article>\n");
        }
    } else {
        for story in stories {
            page.push_str(&render_article(story, now));
            page.push('\n');
        }
    }

    page.push_str("</main>\n");
    page.push_str(&render_load_more(busy));
    page.push_str("\n</div>\n</body>\n</html>\n");
    page
}
