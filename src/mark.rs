use std::fmt;

use anyhow::Context as _;
use pulldown_cmark as cmark;
use relative_path::RelativePath;
use relative_path::RelativePathBuf;

use folio_config::Document;
use folio_config::Frontmatter;
use folio_config::RemarkPlugin;

use crate::error::Result;
use crate::highlight::CodeFormatter;
use crate::permalink::Permalinks;
use crate::reading_time::count_words;
use crate::reading_time::ReadingTime;
use crate::reading_time::ReadingTimeTransform;
use crate::relative_images::RelativeImages;

/// A parsed document as seen by transforms.
#[derive(Debug, Clone)]
pub struct Tree<'s> {
    pub events: Vec<cmark::Event<'s>>,
    pub front: Frontmatter,
    /// Source path, relative to the project root.
    pub rel_path: RelativePathBuf,
}

/// Rewrites a parsed document before it is rendered.
///
/// Transforms run in registration order and must not depend on other documents.
pub trait Transform: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn transform(&self, tree: &mut Tree<'_>) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub front: Frontmatter,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct MarkdownBuilder {
    pub remark_plugins: Vec<RemarkPlugin>,
    pub extend_default_plugins: bool,
    pub syntax_highlight: folio_config::SyntaxHighlight,
}

impl MarkdownBuilder {
    pub fn from_config(config: folio_config::Markdown) -> Self {
        Self {
            remark_plugins: config.remark_plugins,
            extend_default_plugins: config.extend_default_plugins,
            syntax_highlight: config.syntax_highlight,
        }
    }

    pub fn build(self, permalinks: &Permalinks) -> Result<Markdown> {
        let transforms = self
            .remark_plugins
            .iter()
            .map(|plugin| resolve_transform(plugin, permalinks))
            .collect::<Result<Vec<_>>>()?;
        let reading_time = match self
            .remark_plugins
            .iter()
            .find(|plugin| plugin.name.as_str() == ReadingTimeTransform::NAME)
        {
            Some(plugin) => ReadingTimeTransform::from_options(&plugin.options)?,
            None => ReadingTimeTransform::default(),
        };
        Ok(Markdown {
            transforms,
            reading_time,
            extend_default_plugins: self.extend_default_plugins,
            code: CodeFormatter::new(self.syntax_highlight),
        })
    }
}

fn resolve_transform(plugin: &RemarkPlugin, permalinks: &Permalinks) -> Result<Box<dyn Transform>> {
    let transform: Box<dyn Transform> = match plugin.name.as_str() {
        ReadingTimeTransform::NAME => Box::new(ReadingTimeTransform::from_options(&plugin.options)?),
        RelativeImages::NAME => Box::new(RelativeImages::from_options(&plugin.options, permalinks)?),
        name => anyhow::bail!(
            "Unknown markdown transform `{}`, expected one of: {}, {}",
            name,
            ReadingTimeTransform::NAME,
            RelativeImages::NAME
        ),
    };
    Ok(transform)
}

/// The markdown pipeline: ordered transforms followed by rendering.
#[derive(Debug)]
pub struct Markdown {
    transforms: Vec<Box<dyn Transform>>,
    reading_time: ReadingTimeTransform,
    extend_default_plugins: bool,
    code: CodeFormatter,
}

impl Markdown {
    pub fn transforms(&self) -> impl Iterator<Item = &str> + '_ {
        self.transforms.iter().map(|t| t.name())
    }

    fn options(&self) -> cmark::Options {
        if self.extend_default_plugins {
            cmark::Options::ENABLE_FOOTNOTES
                | cmark::Options::ENABLE_TABLES
                | cmark::Options::ENABLE_STRIKETHROUGH
                | cmark::Options::ENABLE_TASKLISTS
                | cmark::Options::ENABLE_SMART_PUNCTUATION
        } else {
            cmark::Options::empty()
        }
    }

    pub fn parse<'s>(&self, content: &'s str, front: Frontmatter, rel_path: &RelativePath) -> Tree<'s> {
        let front = front.merge_path(rel_path);
        let events = cmark::Parser::new_ext(content, self.options()).collect();
        Tree {
            events,
            front,
            rel_path: rel_path.to_owned(),
        }
    }

    pub fn transform(&self, tree: &mut Tree<'_>) -> Result<()> {
        for transform in &self.transforms {
            transform
                .transform(tree)
                .with_context(|| format!("`{}` failed on {}", transform.name(), tree.rel_path))?;
        }
        Ok(())
    }

    pub fn render(&self, tree: Tree<'_>) -> Processed {
        let Tree { events, front, .. } = tree;
        let mut html = String::new();
        cmark::html::push_html(&mut html, self.code.decorate(events).into_iter());
        Processed { front, html }
    }

    /// Reading time of a body, at the configured reading speed.
    pub fn reading_time(&self, content: &str) -> ReadingTime {
        let events: Vec<_> = cmark::Parser::new_ext(content, self.options()).collect();
        ReadingTime::from_words(count_words(&events), self.reading_time.words_per_minute())
    }

    /// Parse, transform and render one document.
    pub fn process(&self, document: &Document, rel_path: &RelativePath) -> Result<Processed> {
        log::debug!("Processing {rel_path}");
        let mut tree = self.parse(document.content(), document.front().clone(), rel_path);
        self.transform(&mut tree)?;
        Ok(self.render(tree))
    }
}

#[cfg(test)]
mod test {
    use folio_config::Blog;
    use folio_config::Site;
    use liquid_core::ValueView;

    use super::*;

    fn permalinks() -> Permalinks {
        Permalinks::new(&Site::default(), &Blog::default())
    }

    fn markdown(config: folio_config::Markdown) -> Markdown {
        MarkdownBuilder::from_config(config).build(&permalinks()).unwrap()
    }

    #[derive(Debug)]
    struct Record(&'static str);

    impl Transform for Record {
        fn name(&self) -> &str {
            self.0
        }

        fn transform(&self, tree: &mut Tree<'_>) -> Result<()> {
            let seen = match tree.front.data.get("order") {
                Some(v) => format!("{},{}", v.to_kstr(), self.0),
                None => self.0.to_owned(),
            };
            tree.front
                .data
                .insert("order".into(), liquid_core::Value::scalar(seen));
            Ok(())
        }
    }

    #[test]
    fn default_pipeline() {
        let md = markdown(folio_config::Markdown::default());
        let names: Vec<_> = md.transforms().collect();
        assert_eq!(names, ["reading-time", "relative-images"]);
    }

    #[test]
    fn unknown_transform_is_rejected() {
        let mut config = folio_config::Markdown::default();
        config.remark_plugins.push(RemarkPlugin::new("remark-toc"));
        let err = MarkdownBuilder::from_config(config)
            .build(&permalinks())
            .unwrap_err();
        assert!(err.to_string().contains("remark-toc"));
    }

    #[test]
    fn transforms_run_in_order() {
        let md = Markdown {
            transforms: vec![Box::new(Record("b")), Box::new(Record("a")), Box::new(Record("c"))],
            reading_time: ReadingTimeTransform::default(),
            extend_default_plugins: true,
            code: CodeFormatter::new(Default::default()),
        };
        let doc = Document::parse("text").unwrap();
        let processed = md.process(&doc, RelativePath::new("x.md")).unwrap();
        let order = processed.front.data.get("order").unwrap().to_kstr().to_string();
        assert_eq!(order, "b,a,c");
    }

    #[test]
    fn process_attaches_reading_time() {
        let md = markdown(folio_config::Markdown::default());
        let doc = Document::parse("---\ntitle: Hello\n---\nSome *short* text.\n").unwrap();
        let processed = md.process(&doc, RelativePath::new("posts/hello.md")).unwrap();
        assert_eq!(processed.front.title.as_deref(), Some("Hello"));
        assert_eq!(processed.front.slug.as_deref(), Some("hello"));
        let data = &processed.front.data;
        assert_eq!(data.get("reading_time"), Some(&liquid_core::Value::scalar(1_i64)));
        assert_eq!(
            data.get("reading_time_label"),
            Some(&liquid_core::Value::scalar("1 min read"))
        );
        assert_eq!(processed.html, "<p>Some <em>short</em> text.</p>\n");
    }

    #[test]
    fn reading_time_counts_whole_document() {
        let body = "word ".repeat(201);
        let md = markdown(folio_config::Markdown::default());
        let doc = Document::parse(&body).unwrap();
        let processed = md.process(&doc, RelativePath::new("long.md")).unwrap();
        assert_eq!(
            processed.front.data.get("reading_time"),
            Some(&liquid_core::Value::scalar(2_i64))
        );
    }

    #[test]
    fn extend_default_plugins_toggles_gfm() {
        let source = "~~gone~~";
        let md = markdown(folio_config::Markdown::default());
        let doc = Document::parse(source).unwrap();
        let html = md.process(&doc, RelativePath::new("a.md")).unwrap().html;
        assert_eq!(html, "<p><del>gone</del></p>\n");

        let config = folio_config::Markdown {
            extend_default_plugins: false,
            ..Default::default()
        };
        let md = markdown(config);
        let html = md.process(&doc, RelativePath::new("a.md")).unwrap().html;
        assert_eq!(html, "<p>~~gone~~</p>\n");
    }

    #[test]
    fn reading_time_uses_configured_speed() {
        let body = "word ".repeat(150);
        let md = markdown(folio_config::Markdown::default());
        assert_eq!(md.reading_time(&body).minutes, 1);

        let mut config = folio_config::Markdown::default();
        config.remark_plugins[0] = RemarkPlugin::new("reading-time").with_option(
            "words_per_minute",
            serde_yaml::Value::Number(100_u64.into()),
        );
        let md = markdown(config);
        let time = md.reading_time(&body);
        assert_eq!(time.words, 150);
        assert_eq!(time.minutes, 2);
    }
}
