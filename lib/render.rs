//! Themed document rendering
//!
//! Produces the complete HTML document the reader view displays: the chapter
//! body inside a pre-wrap container, styled by theme and font size.

use crate::{
    chapter::{ChapterRecord, Content},
    prefs::{Theme, clamp_font_size},
};

/// Background and text colors for a theme
fn palette(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Dark => ("#121212", "#FFFFFF"),
        Theme::Light => ("#FFFFFF", "#000000"),
    }
}

/// Formats a chapter record into a themed HTML document.
///
/// Markup content is inserted as-is; text content is escaped, with the
/// fallback tier's paragraph breaks turned into explicit line breaks. The
/// title is always escaped.
pub fn render(record: &ChapterRecord, theme: Theme, font_size: f64) -> String {
    let (background, foreground) = palette(theme);
    let font_size = clamp_font_size(font_size);
    let body = match &record.content {
        Content::Html(markup) => markup.clone(),
        Content::Text(text) => html_escape::encode_text(text).replace("\n\n", "<br><br>"),
    };
    format!(
        r#"<html>
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
body {{
    font-family: 'Songti SC', 'PingFang SC', sans-serif;
    background-color: {background};
    color: {foreground};
    font-size: {font_size:.1}em;
    line-height: 1.6;
    margin: 20px;
}}
#content {{
    white-space: pre-wrap;
}}
</style>
</head>
<body>
<div id="content">{body}</div>
</body>
</html>
"#,
        title = html_escape::encode_text(&record.title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: Content) -> ChapterRecord {
        ChapterRecord {
            title: "第一章 <测试>".into(),
            content,
            next_url: None,
            prev_url: None,
            source_url: "https://www.piaotia.com/html/0/757/11485522.html".into(),
        }
    }

    #[test]
    fn markup_content_is_inserted_verbatim() {
        let page = render(
            &record(Content::Html("&nbsp;第一段<br><br>第二段".into())),
            Theme::Dark,
            2.0,
        );
        assert!(page.contains("&nbsp;第一段<br><br>第二段"));
        assert!(page.contains("background-color: #121212;"));
        assert!(page.contains("color: #FFFFFF;"));
        assert!(page.contains("font-size: 2.0em;"));
    }

    #[test]
    fn text_content_is_escaped_and_paragraph_broken() {
        let page = render(
            &record(Content::Text("第一段 <b>不是标签</b>\n\n第二段".into())),
            Theme::Light,
            1.5,
        );
        assert!(page.contains("第一段 &lt;b&gt;不是标签&lt;/b&gt;<br><br>第二段"));
        assert!(page.contains("background-color: #FFFFFF;"));
        assert!(page.contains("color: #000000;"));
        assert!(page.contains("font-size: 1.5em;"));
    }

    #[test]
    fn title_is_always_escaped() {
        let page = render(&record(Content::Text("正文".into())), Theme::Dark, 2.0);
        assert!(page.contains("<title>第一章 &lt;测试&gt;</title>"));
    }

    #[test]
    fn font_size_is_clamped_into_range() {
        let page = render(&record(Content::Text("正文".into())), Theme::Dark, 12.0);
        assert!(page.contains("font-size: 4.0em;"));
    }
}
