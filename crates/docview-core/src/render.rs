//! Markdown to HTML conversion.
//!
//! Rendering is plain CommonMark via `pulldown-cmark`, with two adjustments
//! applied on the event stream:
//!
//! - fenced code blocks become `<pre><code class="language-LANG">` with the
//!   code escaped and otherwise untouched. The page runs Prism on load, which
//!   picks the grammar from that class.
//! - raw HTML and script-capable link and image targets from the provider are
//!   neutralized. Hover text comes from arbitrary language servers and the
//!   panel has scripts enabled.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// URL schemes that are dropped from link and image targets.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Renders optional markdown to an HTML fragment.
///
/// `None` (no hover information) yields an empty string.
///
/// # Examples
///
/// ```
/// use docview_core::render::render_markdown;
///
/// assert_eq!(render_markdown(None), "");
///
/// let html = render_markdown(Some("```python\nprint(1)\n```"));
/// assert_eq!(html, "<pre><code class=\"language-python\">print(1)\n</code></pre>\n");
/// ```
pub fn render_markdown(markdown: Option<&str>) -> String {
    let Some(markdown) = markdown else {
        return String::new();
    };

    let parser = Parser::new_ext(
        markdown,
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
    );

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, HighlightHook::new(parser));
    out
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
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

/// Builds the markup for one fenced block.
fn code_block_html(language: &str, code: &str) -> String {
    if language.is_empty() {
        format!("<pre><code>{}</code></pre>\n", escape_html(code))
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            escape_html(language),
            escape_html(code)
        )
    }
}

/// The language is the first word of the fence's info string.
fn fence_language(info: &str) -> &str {
    info.split_whitespace().next().unwrap_or("")
}

fn is_blocked_url(url: &str) -> bool {
    let trimmed = url.trim_start().to_ascii_lowercase();
    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| trimmed.starts_with(scheme))
}

/// Event adapter that collects fenced blocks and sanitizes the stream.
struct HighlightHook<I> {
    inner: I,
    /// Language and buffered text of the fenced block being read.
    fenced: Option<(String, String)>,
}

impl<I> HighlightHook<I> {
    fn new(inner: I) -> Self {
        Self {
            inner,
            fenced: None,
        }
    }
}

impl<'a, I> Iterator for HighlightHook<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.inner.next()?;

            if let Some((language, code)) = self.fenced.as_mut() {
                match event {
                    Event::Text(text) => {
                        code.push_str(&text);
                        continue;
                    }
                    Event::End(TagEnd::CodeBlock) => {
                        let html = code_block_html(language, code);
                        self.fenced = None;
                        return Some(Event::Html(html.into()));
                    }
                    _ => continue,
                }
            }

            return Some(match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    self.fenced = Some((fence_language(&info).to_string(), String::new()));
                    continue;
                }
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) if is_blocked_url(&dest_url) => {
                    tracing::debug!("dropping blocked link target in hover text");
                    Event::Start(Tag::Link {
                        link_type,
                        dest_url: CowStr::Borrowed(""),
                        title,
                        id,
                    })
                }
                Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) if is_blocked_url(&dest_url) => {
                    tracing::debug!("dropping blocked image source in hover text");
                    Event::Start(Tag::Image {
                        link_type,
                        dest_url: CowStr::Borrowed(""),
                        title,
                        id,
                    })
                }
                other => other,
            });
        }
    }
}
