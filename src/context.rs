use std::collections::BTreeMap;
use std::path;

use anyhow::Context as _;
use liquid_core::model::KString;

use folio_config::Blog;
use folio_config::Build;
use folio_config::Config;
use folio_config::Site;
use folio_config::Switches;

use crate::error::Result;
use crate::mark::Markdown;
use crate::mark::MarkdownBuilder;
use crate::permalink::Permalinks;

/// Everything resolved from the project file, built once and passed to each consumer.
#[derive(Debug)]
pub struct Context {
    pub root: path::PathBuf,
    pub site: Site,
    pub switches: Switches,
    pub blog: Blog,
    pub build: Build,
    /// `build.alias`, resolved against `root`.
    pub alias: BTreeMap<KString, path::PathBuf>,
    pub permalinks: Permalinks,
    pub markdown: Markdown,
}

impl Context {
    pub fn from_config(config: Config) -> Result<Self> {
        let Config {
            root,
            site,
            switches,
            blog,
            build,
        } = config;

        let root = if root.as_os_str().is_empty() {
            path::PathBuf::from(".")
        } else {
            root
        };
        let root = dunce::canonicalize(&root)
            .with_context(|| format!("Failed to resolve project root {}", root.display()))?;

        let alias = build
            .alias
            .iter()
            .map(|(symbol, rel)| {
                let abs = rel.to_logical_path(&root);
                log::trace!("Alias `{symbol}` -> {}", abs.display());
                (symbol.clone(), abs)
            })
            .collect();

        let permalinks = Permalinks::new(&site, &blog);
        let markdown = MarkdownBuilder::from_config(build.markdown.clone()).build(&permalinks)?;

        Ok(Self {
            root,
            site,
            switches,
            blog,
            build,
            alias,
            permalinks,
            markdown,
        })
    }

    /// Source path relative to the project root, when it lives under it.
    pub fn rel_path(&self, file: &path::Path) -> Option<relative_path::RelativePathBuf> {
        let file = dunce::canonicalize(file).ok()?;
        let rel = file.strip_prefix(&self.root).ok()?;
        relative_path::RelativePathBuf::from_path(rel).ok()
    }
}
