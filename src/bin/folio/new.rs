use std::path;

use crate::args;
use crate::error::*;

/// Create a folio project
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        folio::create_new_project(&self.directory)
            .with_context(|| "Could not create a new folio project")?;
        log::info!("Created new project at {}", self.directory.display());

        Ok(())
    }
}

/// Create a draft post
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct NewArgs {
    /// Title of the post
    pub(crate) title: String,

    /// Directory for the post, relative to the project root
    #[arg(long, value_name = "DIR", default_value = folio::DEFAULT_POSTS_DIR)]
    pub(crate) dir: path::PathBuf,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl NewArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let context = self.config.load_context()?;
        let dir = context.root.join(&self.dir);
        let file = folio::create_new_post(&self.title, &dir)
            .with_context(|| format!("Could not create post {:?}", self.title))?;
        if let Some(rel) = context.rel_path(&file) {
            let slug = rel.file_stem().unwrap_or_default();
            let route = context
                .permalinks
                .permalink(slug, folio::PermalinkKind::Post);
            log::info!(
                "Post will be served at {}",
                context.permalinks.canonical(&route)
            );
        }

        Ok(())
    }
}
