use pulldown_cmark::Event;
use pulldown_cmark::Tag;
use pulldown_cmark::TagEnd;

use crate::error::Result;
use crate::mark::Transform;
use crate::mark::Tree;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Estimated reading duration of a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: u32,
}

impl ReadingTime {
    /// `max(1, ceil(words / words_per_minute))`; a speed of `0` is read as `1`.
    pub fn from_words(words: usize, words_per_minute: u32) -> Self {
        let speed = words_per_minute.max(1) as usize;
        let minutes = words.div_ceil(speed).max(1);
        Self {
            words,
            minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
        }
    }

    pub fn label(&self) -> String {
        format!("{} min read", self.minutes)
    }
}

/// Count words across a parsed document.
///
/// Every literal value counts: text, inline code, code blocks, raw HTML and image alt
/// text.  Inline containers (emphasis, links, ...) do not split a word; block
/// boundaries and line breaks do.
pub fn count_words<'a, 'e: 'a>(events: impl IntoIterator<Item = &'a Event<'e>>) -> usize {
    let mut counter = WordCounter::default();
    for event in events {
        match event {
            Event::Text(text)
            | Event::Code(text)
            | Event::Html(text)
            | Event::InlineHtml(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text)
            | Event::FootnoteReference(text) => counter.push(text),
            Event::Start(tag) if is_inline(tag) => {}
            Event::End(tag) if is_inline_end(*tag) => {}
            Event::Start(_)
            | Event::End(_)
            | Event::SoftBreak
            | Event::HardBreak
            | Event::Rule
            | Event::TaskListMarker(_) => counter.split(),
        }
    }
    counter.words
}

fn is_inline(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn is_inline_end(tag: TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image
    )
}

#[derive(Default)]
struct WordCounter {
    words: usize,
    in_word: bool,
}

impl WordCounter {
    fn push(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.in_word = false;
            } else if !self.in_word {
                self.in_word = true;
                self.words += 1;
            }
        }
    }

    fn split(&mut self) {
        self.in_word = false;
    }
}

/// Markdown transform attaching `reading_time` and `reading_time_label` to the document data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingTimeTransform {
    words_per_minute: u32,
}

impl ReadingTimeTransform {
    pub const NAME: &'static str = "reading-time";

    pub fn new(words_per_minute: u32) -> Self {
        Self { words_per_minute }
    }

    pub fn from_options(options: &folio_config::Options) -> Result<Self> {
        let words_per_minute = match options.get("words_per_minute") {
            None => DEFAULT_WORDS_PER_MINUTE,
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    anyhow::format_err!(
                        "`{}` option `words_per_minute` must be a non-negative integer, got {:?}",
                        Self::NAME,
                        value
                    )
                })?,
        };
        Ok(Self::new(words_per_minute))
    }

    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }
}

impl Default for ReadingTimeTransform {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}

impl Transform for ReadingTimeTransform {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn transform(&self, tree: &mut Tree<'_>) -> Result<()> {
        let words = count_words(tree.events.iter());
        let time = ReadingTime::from_words(words, self.words_per_minute);
        log::trace!("{} words, {}", time.words, time.label());
        tree.front.data.insert(
            "reading_time".into(),
            liquid_core::Value::scalar(i64::from(time.minutes)),
        );
        tree.front.data.insert(
            "reading_time_label".into(),
            liquid_core::Value::scalar(time.label()),
        );
        Ok(())
    }
}
