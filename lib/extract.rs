//! Chapter extraction
//!
//! Content location runs through an ordered list of strategies. The selector
//! strategy is correct whenever the container element exists; the marker
//! strategy recovers pages where the container attribute was dropped but the
//! body still sits between two stable literal tokens.

use crate::{
    chapter::{ChapterRecord, Content, EXTRACTION_FAILED, TITLE_PLACEHOLDER},
    error::Error,
    site::SiteProfile,
};
use reqwest::Url;
use scraper::{Html, Selector};

#[derive(Clone, Debug)]
pub struct ChapterExtractor {
    profile: SiteProfile,
}

/// Inputs shared by every content strategy
struct Context<'a> {
    raw: &'a str,
    document: &'a Html,
    profile: &'a SiteProfile,

    /// Raw-markup offset just past the title text, when one was found
    search_from: usize,
}

/// Tried in order; the first strategy that yields content wins
static STRATEGIES: &[(&str, fn(&Context) -> Option<Content>)] =
    &[("selector", select_container), ("markers", slice_markers)];

impl ChapterExtractor {
    /// Creates an extractor bound to an immutable site profile
    pub fn new(profile: SiteProfile) -> Self {
        ChapterExtractor { profile }
    }

    /// Turns one fetched document into a chapter record.
    ///
    /// Title and link lookups never fail; content degrades to the sentinel
    /// when every strategy is exhausted, so a retrieved page always yields a
    /// record. `source_url` is left empty for the caller.
    pub fn extract(&self, raw: &str, fetch_url: &str) -> Result<ChapterRecord, Error> {
        let document = Html::parse_document(raw);

        let title = self.title(&document);
        let search_from = title
            .as_deref()
            .and_then(|t| raw.find(t).map(|at| at + t.len()))
            .unwrap_or(0);

        let ctx = Context {
            raw,
            document: &document,
            profile: &self.profile,
            search_from,
        };
        let mut content = None;
        for (name, strategy) in STRATEGIES {
            match strategy(&ctx) {
                Some(found) => {
                    log::debug!("content located by {} strategy", name);
                    content = Some(found);
                    break;
                }
                None => log::debug!("{} strategy found nothing", name),
            }
        }
        let content = content.unwrap_or_else(|| {
            log::warn!("every content strategy failed for {}", fetch_url);
            Content::Text(EXTRACTION_FAILED.into())
        });

        let base = Url::parse(fetch_url).ok();
        let next_url = find_link(&document, base.as_ref(), self.profile.next_label())?;
        let prev_url = find_link(&document, base.as_ref(), self.profile.prev_label())?;

        Ok(ChapterRecord {
            title: title.unwrap_or_else(|| TITLE_PLACEHOLDER.into()),
            content,
            next_url,
            prev_url,
            source_url: String::new(),
        })
    }

    /// First heading text, trimmed. A missing or malformed selector degrades
    /// to None rather than failing the whole record.
    fn title(&self, document: &Html) -> Option<String> {
        let selector = match Selector::parse(self.profile.title_selector()) {
            Ok(selector) => selector,
            Err(e) => {
                log::warn!("bad title selector: {}", e);
                return None;
            }
        };
        let heading = document.select(&selector).next()?;
        let text = heading.text().collect::<Vec<_>>().join("");
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Selector strategy: inner markup of the first content-container match
fn select_container(ctx: &Context) -> Option<Content> {
    let selector = match Selector::parse(ctx.profile.content_selector()) {
        Ok(selector) => selector,
        Err(e) => {
            log::warn!("bad content selector: {}", e);
            return None;
        }
    };
    let container = ctx.document.select(&selector).next()?;
    Some(Content::Html(container.inner_html().trim().to_string()))
}

/// Marker strategy: the raw-markup substring between the first start marker
/// at or after the title and the first end marker after it
fn slice_markers(ctx: &Context) -> Option<Content> {
    let start_marker = ctx.profile.start_marker();
    let end_marker = ctx.profile.end_marker();
    if start_marker.is_empty() || end_marker.is_empty() {
        return None;
    }
    let start =
        ctx.raw[ctx.search_from..].find(start_marker)? + ctx.search_from + start_marker.len();
    let end = ctx.raw[start..].find(end_marker)? + start;
    Some(Content::Text(tidy_text(&ctx.raw[start..end])))
}

/// Normalizes non-breaking spaces in marker-sliced text. Four in a row is
/// how the site indents a fresh paragraph, so those become a paragraph
/// break; stragglers become plain spaces.
fn tidy_text(text: &str) -> String {
    text.replace("&nbsp;&nbsp;&nbsp;&nbsp;", "\n\n")
        .replace("\u{a0}\u{a0}\u{a0}\u{a0}", "\n\n")
        .replace("&nbsp;", " ")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}

/// First anchor whose exact text equals the label, resolved against the
/// fetch URL. Absence is not an error; it means "no such page".
fn find_link(document: &Html, base: Option<&Url>, label: &str) -> Result<Option<String>, Error> {
    let selector = Selector::parse("a")?;
    for anchor in document.select(&selector) {
        let text = anchor.text().collect::<Vec<_>>().join("");
        if text.trim() != label {
            continue;
        }
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        let resolved = match base {
            Some(base) => base.join(href).ok(),
            None => Url::parse(href).ok(),
        };
        match resolved {
            Some(url) => return Ok(Some(url.to_string())),
            None => log::warn!("could not resolve {} link href {}", label, href),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    static FETCH_URL: &str = "https://www.piaotia.com/html/0/757/11485522.html";

    static CHAPTER_PAGE: &str = r#"<html><head><title>示例</title></head><body>
<h1><a href="index.html">示例书</a> 第十一章 夜行</h1>
<div class="toplink"><a href="index.html">返回书页</a></div>
<div id="content">&nbsp;&nbsp;&nbsp;&nbsp;第一段正文。<br /><br />&nbsp;&nbsp;&nbsp;&nbsp;第二段正文。</div>
<div class="bottomlink">
<a href="11485521.html">上一章</a>
<a href="index.html">返回书页</a>
<a href="11485523.html">下一章</a>
</div>
<div class="footer">（快捷键 ←）（快捷键 →）</div>
</body></html>"#;

    fn extractor() -> ChapterExtractor {
        ChapterExtractor::new(SiteProfile::default())
    }

    #[test]
    fn selector_strategy_keeps_inner_markup() {
        let record = extractor().extract(CHAPTER_PAGE, FETCH_URL).unwrap();
        assert_eq!(
            record.content,
            Content::Html(
                "&nbsp;&nbsp;&nbsp;&nbsp;第一段正文。<br><br>&nbsp;&nbsp;&nbsp;&nbsp;第二段正文。"
                    .into()
            )
        );
        assert_eq!(record.title, "示例书 第十一章 夜行");
    }

    #[test]
    fn marker_strategy_recovers_text_when_selector_misses() {
        // Same page shape with the container id dropped
        let page = CHAPTER_PAGE.replace("id=\"content\"", "class=\"body\"");
        let record = extractor().extract(&page, FETCH_URL).unwrap();
        match &record.content {
            Content::Text(text) => {
                // The slice runs from past the first 返回书页 after the title
                // up to the 快捷键 footer, nbsp-normalized.
                assert!(text.contains("第一段正文。"));
                assert!(text.contains("\n\n第二段正文。"));
                assert!(!text.contains("&nbsp;"));
                assert!(text.contains("下一章"));
            }
            Content::Html(_) => panic!("expected text content"),
        }
    }

    #[test]
    fn marker_search_starts_after_the_title() {
        // A start marker before the heading must not open the slice early.
        let page = concat!(
            "<html><body><a href=\"index.html\">返回书页</a>",
            "<h1>第一章</h1>",
            "<p>返回书页</p>正文在此&nbsp;快捷键</body></html>"
        );
        let record = extractor().extract(page, FETCH_URL).unwrap();
        assert_eq!(record.content, Content::Text("</p>正文在此".into()));
    }

    #[test]
    fn exhausted_strategies_yield_the_sentinel() {
        let page = "<html><body><h1>第一章</h1><p>无正文标记</p></body></html>";
        let record = extractor().extract(page, FETCH_URL).unwrap();
        assert!(record.content.is_sentinel());
        assert_eq!(record.title, "第一章");
    }

    #[test]
    fn missing_heading_uses_the_placeholder() {
        let page = "<html><body><p>没有标题</p></body></html>";
        let record = extractor().extract(page, FETCH_URL).unwrap();
        assert_eq!(record.title, TITLE_PLACEHOLDER);
    }

    #[test]
    fn links_resolve_against_the_fetch_url() {
        let record = extractor().extract(CHAPTER_PAGE, FETCH_URL).unwrap();
        assert_eq!(
            record.next_url.as_deref(),
            Some("https://www.piaotia.com/html/0/757/11485523.html")
        );
        assert_eq!(
            record.prev_url.as_deref(),
            Some("https://www.piaotia.com/html/0/757/11485521.html")
        );
    }

    #[test]
    fn parent_relative_hrefs_follow_rfc_join() {
        let page = r#"<html><body><a href="../11485523.html">下一章</a></body></html>"#;
        let record = extractor().extract(page, FETCH_URL).unwrap();
        assert_eq!(
            record.next_url.as_deref(),
            Some("https://www.piaotia.com/html/0/11485523.html")
        );
    }

    #[test]
    fn link_lookup_is_independent_of_content_outcome() {
        let page = r#"<html><body><a href="11485523.html">下一章</a></body></html>"#;
        let record = extractor().extract(page, FETCH_URL).unwrap();
        assert!(record.content.is_sentinel());
        assert_eq!(
            record.next_url.as_deref(),
            Some("https://www.piaotia.com/html/0/757/11485523.html")
        );
        assert_eq!(record.prev_url, None);
    }

    #[test]
    fn anchor_text_must_match_exactly() {
        let page = r#"<html><body><a href="a.html">去下一章节</a></body></html>"#;
        let record = extractor().extract(page, FETCH_URL).unwrap();
        assert_eq!(record.next_url, None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extractor().extract(CHAPTER_PAGE, FETCH_URL).unwrap();
        let second = extractor().extract(CHAPTER_PAGE, FETCH_URL).unwrap();
        assert_eq!(first, second);
    }
}
