use pulldown_cmark::CowStr;
use pulldown_cmark::Event;
use pulldown_cmark::Tag;

use crate::error::Result;
use crate::mark::Transform;
use crate::mark::Tree;
use crate::permalink::Permalinks;

/// Rewrite relative image references to base-prefixed paths next to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeImages {
    enabled: bool,
    permalinks: Permalinks,
}

impl RelativeImages {
    pub const NAME: &'static str = "relative-images";

    pub fn new(permalinks: Permalinks) -> Self {
        Self {
            enabled: true,
            permalinks,
        }
    }

    pub fn from_options(options: &folio_config::Options, permalinks: &Permalinks) -> Result<Self> {
        let enabled = match options.get("relativeImages") {
            None => true,
            Some(value) => value.as_bool().ok_or_else(|| {
                anyhow::format_err!(
                    "`{}` option `relativeImages` must be a boolean, got {:?}",
                    Self::NAME,
                    value
                )
            })?,
        };
        Ok(Self {
            enabled,
            permalinks: permalinks.clone(),
        })
    }

    fn resolve(&self, doc: &relative_path::RelativePath, url: &str) -> String {
        let dir = doc.parent().unwrap_or_else(|| relative_path::RelativePath::new(""));
        let resolved = dir.join_normalized(url);
        self.permalinks.relative(resolved.as_str())
    }
}

impl Transform for RelativeImages {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn transform(&self, tree: &mut Tree<'_>) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        for event in tree.events.iter_mut() {
            if let Event::Start(Tag::Image { dest_url, .. }) = event {
                if is_relative(dest_url) {
                    let resolved = self.resolve(&tree.rel_path, dest_url);
                    log::trace!("Rewriting image `{dest_url}` to `{resolved}`");
                    *dest_url = CowStr::from(resolved);
                }
            }
        }
        Ok(())
    }
}

fn is_relative(url: &str) -> bool {
    if url.is_empty() || url.starts_with('/') || url.starts_with('#') {
        return false;
    }
    // `scheme:` before any path separator marks an absolute URL (`https:`, `data:`, ...)
    match url.find(':') {
        Some(colon) => url.find('/').is_some_and(|slash| slash < colon),
        None => true,
    }
}
