use std::path;

use crate::args;
use crate::error::*;

/// Print the route of a page, post, category or tag
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct PermalinkArgs {
    /// Slug to route
    #[arg(default_value = "")]
    pub(crate) slug: String,

    #[arg(long, value_enum, default_value_t = folio::PermalinkKind::Post)]
    pub(crate) kind: folio::PermalinkKind,

    /// Listing page number: of the blog index for `page`, of the listing for `category` and `tag`
    #[arg(long, value_name = "N")]
    pub(crate) page: Option<usize>,

    /// Print the absolute URL
    #[arg(long)]
    pub(crate) canonical: bool,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl PermalinkArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let context = self.config.load_context()?;
        let permalinks = &context.permalinks;

        if let Some(section) = blog_section(self.kind, self.page) {
            if !context.blog.is_enabled(section) {
                log::warn!("The `{}` blog section is disabled", section.as_str());
            }
        }

        let route = match (self.kind, self.page) {
            (folio::PermalinkKind::Page, Some(page)) => permalinks.blog_page(page),
            (folio::PermalinkKind::Category, Some(page)) => permalinks.category_page(&self.slug, page),
            (folio::PermalinkKind::Tag, Some(page)) => permalinks.tag_page(&self.slug, page),
            (kind, _) => permalinks.permalink(&self.slug, kind),
        };
        let route = if self.canonical {
            permalinks.canonical(&route)
        } else {
            route
        };
        println!("{route}");

        Ok(())
    }
}

fn blog_section(kind: folio::PermalinkKind, page: Option<usize>) -> Option<folio_config::Section> {
    match kind {
        folio::PermalinkKind::Page => page.map(|_| folio_config::Section::Blog),
        folio::PermalinkKind::Post => Some(folio_config::Section::Post),
        folio::PermalinkKind::Category => Some(folio_config::Section::Category),
        folio::PermalinkKind::Tag => Some(folio_config::Section::Tag),
    }
}

/// Estimate reading time of markdown documents
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ReadingTimeArgs {
    /// Markdown files or directories to walk
    #[arg(required = true)]
    pub(crate) paths: Vec<path::PathBuf>,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl ReadingTimeArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let context = self.config.load_context()?;
        for file in folio::files::markdown_files(&self.paths)? {
            let content = folio::files::read_file(&file)?;
            let document = folio_config::Document::parse(&content)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            let time = context.markdown.reading_time(document.content());
            println!("{}: {} ({} words)", file.display(), time.label(), time.words);
        }

        Ok(())
    }
}

/// Run the markdown pipeline over one document
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ProcessArgs {
    /// Markdown file
    pub(crate) file: path::PathBuf,

    /// Also print the rendered body
    #[arg(long)]
    pub(crate) html: bool,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl ProcessArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let context = self.config.load_context()?;
        let content = folio::files::read_file(&self.file)?;
        let document = folio_config::Document::parse(&content)
            .with_context(|| format!("Failed to parse {}", self.file.display()))?;
        let rel_path = context.rel_path(&self.file).ok_or_else(|| {
            anyhow::format_err!(
                "{} is outside of the project root {}",
                self.file.display(),
                context.root.display()
            )
        })?;

        let processed = context.markdown.process(&document, &rel_path)?;
        println!("{}", processed.front);
        if self.html {
            println!("---");
            print!("{}", processed.html);
        }

        Ok(())
    }
}
