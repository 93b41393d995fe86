use std::path;

use crate::args;
use crate::error::*;

/// Write the build descriptor consumed by the site generator
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ExportArgs {
    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<path::PathBuf>,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl ExportArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let context = self.config.load_context()?;
        let descriptor = folio::BuildDescriptor::new(&context);
        let json = descriptor.to_json()?;

        match self.output.as_deref() {
            Some(output) => {
                std::fs::write(output, format!("{json}\n"))
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                log::info!("Wrote build descriptor to {}", output.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
