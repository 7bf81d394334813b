//! Description cleanup: HTML to plain text, then ASCII only.
//!
//! The feed ships descriptions as HTML. We keep the visible text nodes,
//! trimmed and joined with one space, and drop every non-ASCII character
//! outright (no transliteration, no placeholder).

use scraper::{Html, Node};

/// Elements whose text content is never rendered.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Elements html5ever keeps as one raw text node. Their content may still
/// hold markup, so it is parsed again.
const REPARSED_ELEMENTS: &[&str] = &[
    "noscript",
    "textarea",
    "iframe",
    "title",
    "xmp",
    "noembed",
    "noframes",
    "plaintext",
];

/// Strip markup and non-ASCII characters from `raw`. Never fails; malformed
/// HTML is parsed best-effort.
pub fn normalize(raw: &str) -> String {
    strip_non_ascii(&html_to_text(raw))
}

/// Text content of an HTML fragment: each text node trimmed, empty ones
/// dropped, the rest joined with a single space.
pub fn html_to_text(raw: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect_text(raw, &mut parts);
    parts.join(" ")
}

fn collect_text(raw: &str, parts: &mut Vec<String>) {
    if raw.is_empty() {
        return;
    }
    let fragment = Html::parse_fragment(raw);

    for node in fragment.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
        });
        if hidden {
            continue;
        }
        let reparse = node
            .parent()
            .and_then(|p| p.value().as_element())
            .is_some_and(|e| REPARSED_ELEMENTS.contains(&e.name()));
        // Recursion only follows tags present in `text`, so depth is bounded by its length.
        if reparse && text.contains('<') {
            collect_text(text, parts);
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }
}

/// Remove every character outside the ASCII range.
pub fn strip_non_ascii(s: &str) -> String {
    s.chars().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_removed_and_space_joined() {
        assert_eq!(normalize("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(normalize("<p>Build <i>stuff</i></p>"), "Build stuff");
    }

    #[test]
    fn non_ascii_deleted_not_replaced() {
        assert_eq!(normalize("Café €"), "Caf ");
        assert_eq!(normalize("naïve résumé"), "nave rsum");
    }

    #[test]
    fn empty_and_plain_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("plain text"), "plain text");
        assert_eq!(normalize("   padded   "), "padded");
    }

    #[test]
    fn block_elements_become_single_spaces() {
        let html = "<h2>About</h2>\n<ul>\n  <li>Rust</li>\n  <li>Go</li>\n</ul>";
        assert_eq!(normalize(html), "About Rust Go");
    }

    #[test]
    fn inner_whitespace_of_a_text_node_is_kept() {
        assert_eq!(normalize("<p>two  spaces</p>"), "two  spaces");
    }

    #[test]
    fn entities_decoded() {
        assert_eq!(normalize("<p>R&amp;D &lt;team&gt;</p>"), "R&D <team>");
        // &nbsp; decodes to U+00A0, which is not ASCII.
        assert_eq!(normalize("a&nbsp;b"), "ab");
    }

    #[test]
    fn script_and_style_text_skipped() {
        let html = "<style>p { color: red }</style><p>Visible</p><script>alert(1)</script>";
        assert_eq!(normalize(html), "Visible");
    }

    #[test]
    fn comments_skipped() {
        assert_eq!(normalize("<p>a<!-- hidden -->b</p>"), "a b");
    }

    #[test]
    fn malformed_html_tolerated() {
        assert_eq!(normalize("<p>open <b>never closed"), "open never closed");
        assert_eq!(normalize("<div><p>x</div>y"), "x y");
    }

    #[test]
    fn noscript_content_is_parsed() {
        assert_eq!(
            normalize("<p>Apply</p><noscript><p>Enable <b>JS</b></p></noscript>"),
            "Apply Enable JS"
        );
    }

    #[test]
    fn textarea_content_is_parsed() {
        assert_eq!(normalize("<textarea><b>x</b></textarea>"), "x");
    }

    #[test]
    fn iframe_content_is_parsed() {
        assert_eq!(normalize("<iframe><i>y</i></iframe>z"), "y z");
    }

    #[test]
    fn title_content_is_parsed() {
        assert_eq!(normalize("<title><b>t</b></title>"), "t");
    }

    #[test]
    fn xmp_content_is_parsed() {
        assert_eq!(normalize("<xmp><p>code</p></xmp>"), "code");
    }

    #[test]
    fn noembed_and_noframes_content_is_parsed() {
        assert_eq!(normalize("<noembed><em>a</em></noembed>"), "a");
        assert_eq!(normalize("<noframes><em>b</em></noframes>"), "b");
    }

    #[test]
    fn plaintext_content_is_parsed() {
        assert_eq!(normalize("<plaintext><b>rest</b>"), "rest");
    }

    #[test]
    fn nested_raw_text_elements_are_parsed() {
        assert_eq!(
            normalize("<noscript><textarea><b>deep</b></textarea></noscript>"),
            "deep"
        );
    }

    #[test]
    fn raw_text_without_markup_is_kept() {
        assert_eq!(normalize("<title>  Job title </title>"), "Job title");
    }

    #[test]
    fn crlf_inside_text_becomes_lf() {
        assert_eq!(normalize("a\r\nb"), "a\nb");
    }

    #[test]
    fn text_emptied_by_ascii_filter() {
        assert_eq!(normalize("<p>日本語</p>"), "");
    }
}
