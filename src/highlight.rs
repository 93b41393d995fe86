use pulldown_cmark::CodeBlockKind;
use pulldown_cmark::CowStr;
use pulldown_cmark::Event;
use pulldown_cmark::Tag;
use pulldown_cmark::TagEnd;

use folio_config::SyntaxHighlight;

const WRAP_STYLE: &str = "overflow-x: auto; white-space: pre-wrap; word-wrap: break-word;";

/// Code block formatting; the actual colouring is deferred to the frontend highlighter,
/// which keys off the theme attribute and language class emitted here.
#[derive(Debug, Clone)]
pub(crate) struct CodeFormatter {
    config: SyntaxHighlight,
}

impl CodeFormatter {
    pub(crate) fn new(config: SyntaxHighlight) -> Self {
        Self { config }
    }

    pub(crate) fn format(&self, code: &str, lang: Option<&str>) -> String {
        let code = html_escape(code);
        let style = if self.config.wrap {
            format!(" style=\"{WRAP_STYLE}\"")
        } else {
            String::new()
        };
        let theme = html_escape(&self.config.theme);
        match lang.filter(|l| self.config.has_lang(l)) {
            Some(lang) => format!(
                "<pre data-theme=\"{theme}\"{style}><code class=\"language-{}\">{code}</code></pre>\n",
                html_escape(&lang.to_ascii_lowercase())
            ),
            None => {
                if let Some(lang) = lang {
                    log::debug!("`{lang}` is not a configured highlight language, rendering as plain text");
                }
                format!("<pre data-theme=\"{theme}\"{style}><code>{code}</code></pre>\n")
            }
        }
    }

    /// Replace each code block in `events` by its formatted HTML.
    pub(crate) fn decorate<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut decorated = Vec::with_capacity(events.len());
        let mut block: Option<(Option<String>, String)> = None;
        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(|l| l.to_owned())
                        }
                        CodeBlockKind::Indented => None,
                    };
                    block = Some((lang, String::new()));
                }
                Event::Text(text) if block.is_some() => {
                    if let Some((_, code)) = block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = block.take() {
                        let html = self.format(&code, lang.as_deref());
                        decorated.push(Event::Html(CowStr::from(html)));
                    }
                }
                event => decorated.push(event),
            }
        }
        decorated
    }
}

fn html_escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\'' => result.push_str("&#39;"),
            '"' => result.push_str("&quot;"),
            '&' => result.push_str("&amp;"),
            c => result.push(c),
        }
    }
    result
}
