//! Static HTML output where font size tracks each word's group.

use std::fmt::Write as _;

use crate::config::CloudConfig;
use crate::rank::RankedWord;

/// Font size in points for `group`: `min_font + group * increment`.
#[must_use]
pub fn font_size(group: usize, cfg: &CloudConfig) -> usize {
    cfg.min_font.saturating_add(group.saturating_mul(cfg.increment))
}

/// Renders a complete HTML document containing one sized `<span>` per word.
///
/// Words are emitted in the order given, separated by single spaces. Groups at or beyond
/// `num_groups` have no stylesheet class but still carry their computed inline size.
#[must_use]
pub fn render_html(words: &[RankedWord], cfg: &CloudConfig) -> String {
    let body = words
        .iter()
        .map(|word| format_word(word, cfg))
        .collect::<Vec<_>>()
        .join(" ");
    let mut page = start_page(cfg);
    page.push_str(&body);
    page.push_str(END_PAGE);
    page
}

/// Renders a single word element.
#[must_use]
pub fn format_word(word: &RankedWord, cfg: &CloudConfig) -> String {
    format!(
        "<span class=\"group{}\" style=\"font-size: {}pt\">{}</span>",
        word.group,
        font_size(word.group, cfg),
        escape_html(&word.word)
    )
}

fn start_page(cfg: &CloudConfig) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{}</title>", escape_html(&cfg.title));
    page.push_str("<style>\n");
    page.push_str(".cloud { line-height: 1.6; text-align: center; }\n");
    for group in 0..cfg.num_groups {
        let _ = writeln!(
            page,
            ".group{group} {{ font-size: {}pt; }}",
            font_size(group, cfg)
        );
    }
    page.push_str("</style>\n</head>\n<body>\n");
    let _ = writeln!(page, "<h1>{}</h1>", escape_html(&cfg.title));
    page.push_str("<div class=\"cloud\">\n");
    page
}

const END_PAGE: &str = "\n</div>\n</body>\n</html>\n";

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_follows_group_formula() {
        let cfg = CloudConfig::default();
        assert_eq!(font_size(0, &cfg), 6);
        assert_eq!(font_size(2, &cfg), 14);
        let cfg = CloudConfig::builder()
            .min_font(10)
            .increment(3)
            .build()
            .expect("config");
        assert_eq!(font_size(4, &cfg), 22);
    }

    #[test]
    fn words_render_in_given_order_with_sizes() {
        let cfg = CloudConfig::default();
        let words = vec![RankedWord::new("bird", 2), RankedWord::new("cat", 0)];
        let html = render_html(&words, &cfg);
        assert!(html.contains(
            "<span class=\"group2\" style=\"font-size: 14pt\">bird</span> \
             <span class=\"group0\" style=\"font-size: 6pt\">cat</span>"
        ));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn stylesheet_has_one_class_per_group() {
        let cfg = CloudConfig::builder().num_groups(3).build().expect("config");
        let html = render_html(&[], &cfg);
        assert!(html.contains(".group0 { font-size: 6pt; }"));
        assert!(html.contains(".group2 { font-size: 14pt; }"));
        assert!(!html.contains(".group3"));
    }

    #[test]
    fn out_of_range_group_keeps_inline_size() {
        let cfg = CloudConfig::builder().num_groups(2).build().expect("config");
        let html = render_html(&[RankedWord::new("huge", 5)], &cfg);
        assert!(html.contains("style=\"font-size: 26pt\">huge</span>"));
    }

    #[test]
    fn empty_cloud_is_a_valid_shell() {
        let html = render_html(&[], &CloudConfig::default());
        assert!(html.contains("<div class=\"cloud\">"));
        assert!(!html.contains("<span"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn markup_in_words_is_escaped() {
        let html = format_word(&RankedWord::new("a<b&c", 0), &CloudConfig::default());
        assert!(html.contains(">a&lt;b&amp;c</span>"));
    }
}
