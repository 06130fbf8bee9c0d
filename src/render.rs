use std::fmt;

use chrono::Local;
use once_cell::sync::Lazy;
use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag};
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use v_htmlescape::escape;

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

const HIGHLIGHT_THEME: &str = "base16-ocean.dark";

/// Class-based output keeps the highlighting styleable from the page CSS.
fn highlight_class_style() -> ClassStyle {
    ClassStyle::SpacedPrefixed { prefix: "hl-" }
}

#[derive(Debug)]
pub enum RenderError {
    MissingTheme(&'static str),
    ThemeCss(syntect::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingTheme(name) => write!(f, "highlight theme {} unavailable", name),
            RenderError::ThemeCss(err) => write!(f, "highlight theme css failed: {}", err),
        }
    }
}

impl std::error::Error for RenderError {}

/// Renders report markdown to an HTML fragment. Soft line breaks are
/// promoted to hard breaks so single newlines in the report survive, and
/// fenced code blocks come out highlighted with a copy button attached.
pub fn render_fragment(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events: Vec<Event<'_>> = Vec::new();
    let mut code_block: Option<(String, String)> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(lang) => lang.trim().to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code_block = Some((language, String::new()));
            }
            Event::End(Tag::CodeBlock(_)) => {
                if let Some((language, source)) = code_block.take() {
                    events.push(Event::Html(code_block_html(&language, &source).into()));
                }
            }
            Event::Text(text) => {
                if let Some((_, source)) = code_block.as_mut() {
                    source.push_str(&text);
                } else {
                    events.push(Event::Text(text));
                }
            }
            Event::SoftBreak => events.push(Event::HardBreak),
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, events.into_iter());
    output
}

/// Builds a standalone report page. Highlight CSS generation is the one
/// fallible step; when it fails the page degrades to the raw markdown in a
/// preformatted block so a report is shown in either case.
pub fn render_report_page(topic: &str, markdown: &str) -> String {
    match render_document(topic, markdown) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("[!] Falling back to raw report view: {}", err);
            fallback_page(topic, markdown)
        }
    }
}

fn render_document(topic: &str, markdown: &str) -> Result<String, RenderError> {
    let highlight_css = highlight_css()?;
    let body = render_fragment(markdown);
    Ok(page_shell(topic, &body, &highlight_css, COPY_SCRIPT))
}

/// Raw rendition used when document assembly fails.
pub fn fallback_page(topic: &str, markdown: &str) -> String {
    let body = format!("<pre class=\"report-raw\">{}</pre>", escape(markdown));
    page_shell(topic, &body, "", "")
}

fn highlight_css() -> Result<String, RenderError> {
    let themes = ThemeSet::load_defaults();
    let theme = themes
        .themes
        .get(HIGHLIGHT_THEME)
        .ok_or(RenderError::MissingTheme(HIGHLIGHT_THEME))?;
    css_for_theme_with_class_style(theme, highlight_class_style()).map_err(RenderError::ThemeCss)
}

fn code_block_html(language: &str, source: &str) -> String {
    let class_attr = if language.is_empty() {
        String::new()
    } else {
        format!(" class=\"language-{}\"", escape(language))
    };

    format!(
        "<div class=\"code-block\"><button class=\"copy-btn\" type=\"button\">Copy</button><pre><code{}>{}</code></pre></div>\n",
        class_attr,
        highlight_block(language, source)
    )
}

/// Highlights one fenced block; fence tags syntect does not know pass
/// through as escaped plain text.
fn highlight_block(language: &str, source: &str) -> String {
    let syntax = match SYNTAXES.find_syntax_by_token(language) {
        Some(syntax) if !language.is_empty() => syntax,
        _ => return escape(source).to_string(),
    };

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, highlight_class_style());
    for line in LinesWithEndings::from(source) {
        if generator
            .parse_html_for_line_which_includes_newline(line)
            .is_err()
        {
            return escape(source).to_string();
        }
    }
    generator.finalize()
}

const COPY_SCRIPT: &str = r#"document.querySelectorAll('.copy-btn').forEach((btn) => {
    btn.addEventListener('click', () => {
        const code = btn.parentElement.querySelector('code');
        navigator.clipboard.writeText(code.innerText).then(() => {
            btn.textContent = 'Copied!';
            setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
        });
    });
});"#;

fn page_shell(topic: &str, body: &str, highlight_css: &str, script: &str) -> String {
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Research Report — {topic}</title>
    <style>
        :root {{
            color-scheme: dark;
        }}
        body {{
            margin: 0;
            font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: radial-gradient(circle at top, #0f172a, #020617 60%);
            color: #e2e8f0;
        }}
        main {{
            width: min(860px, 94vw);
            margin: 3rem auto;
            background: rgba(15, 23, 42, 0.85);
            border: 1px solid rgba(148, 163, 184, 0.18);
            border-radius: 18px;
            padding: 2.5rem 2.75rem;
        }}
        header h1 {{
            margin: 0;
            font-size: clamp(1.6rem, 3vw, 2.2rem);
            font-weight: 600;
        }}
        header p {{
            margin: 0.35rem 0 0;
            color: #94a3b8;
        }}
        article a {{
            color: #7dd3fc;
        }}
        article table {{
            border-collapse: collapse;
            margin: 1rem 0;
        }}
        article th, article td {{
            border: 1px solid rgba(148, 163, 184, 0.35);
            padding: 0.4rem 0.8rem;
        }}
        article blockquote {{
            border-left: 3px solid #38bdf8;
            margin-left: 0;
            padding-left: 1rem;
            color: #94a3b8;
        }}
        .code-block {{
            position: relative;
            margin: 1rem 0;
        }}
        .code-block pre {{
            background: #0b1120;
            border: 1px solid rgba(148, 163, 184, 0.25);
            border-radius: 10px;
            padding: 1rem;
            overflow-x: auto;
        }}
        .copy-btn {{
            position: absolute;
            top: 0.5rem;
            right: 0.5rem;
            background: rgba(56, 189, 248, 0.15);
            color: #7dd3fc;
            border: 1px solid rgba(56, 189, 248, 0.4);
            border-radius: 6px;
            padding: 0.25rem 0.7rem;
            cursor: pointer;
        }}
        .report-raw {{
            white-space: pre-wrap;
            background: #0b1120;
            border-radius: 10px;
            padding: 1rem;
        }}
        footer {{
            margin-top: 2rem;
            color: #64748b;
            font-size: 0.85rem;
        }}
{highlight_css}
    </style>
</head>
<body>
    <main>
        <header>
            <h1>Research Report</h1>
            <p>{topic}</p>
        </header>
        <article>
{body}
        </article>
        <footer>Generated {generated} by ResearchDesk</footer>
    </main>
    <script>{script}</script>
</body>
</html>
"##,
        topic = escape(topic),
        body = body,
        highlight_css = highlight_css,
        generated = generated,
        script = script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render_fragment("# Title\n\nBody");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn promotes_soft_breaks_to_hard_breaks() {
        let html = render_fragment("line one\nline two");
        assert!(html.contains("<br />"));
    }

    #[test]
    fn code_blocks_get_copy_buttons_and_language_classes() {
        let html = render_fragment("```rust\nfn main() {}\n```");
        assert!(html.contains("class=\"copy-btn\""));
        assert!(html.contains("class=\"language-rust\""));
        assert!(html.contains("hl-"));
    }

    #[test]
    fn unknown_fence_language_passes_through_escaped() {
        let html = render_fragment("```madeuplang\n<danger> & co\n```");
        assert!(html.contains("&lt;danger&gt; &amp; co"));
        assert!(!html.contains("<danger>"));
        // Still gets the copy affordance.
        assert!(html.contains("class=\"copy-btn\""));
    }

    #[test]
    fn tables_render_when_enabled() {
        let html = render_fragment("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn report_page_contains_rendered_body_and_copy_ack_script() {
        let page = render_report_page("Rust futures", "# Title\n\nBody");
        assert!(page.contains("<h1>Title</h1>"));
        assert!(page.contains("Rust futures"));
        assert!(page.contains("setTimeout(() => { btn.textContent = 'Copy'; }, 2000)"));
    }

    #[test]
    fn fallback_page_shows_escaped_raw_markdown() {
        let page = fallback_page("topic", "# raw <not html>");
        assert!(page.contains("report-raw"));
        assert!(page.contains("# raw &lt;not html&gt;"));
    }

    #[test]
    fn page_title_escapes_the_topic() {
        let page = render_report_page("<script>alert(1)</script>", "Body");
        assert!(!page.contains("<script>alert(1)</script>"));
    }
}
