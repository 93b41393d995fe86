use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the markdown transforms, in the order they run
    Transforms {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints resolved path aliases
    Alias {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                println!("{config}");
            }
            Self::Transforms { config } => {
                let context = config.load_context()?;
                for name in context.markdown.transforms() {
                    println!("{name}");
                }
            }
            Self::Alias { config } => {
                let context = config.load_context()?;
                for (symbol, path) in &context.alias {
                    println!("{symbol} = {}", path.display());
                }
            }
        }

        Ok(())
    }
}
