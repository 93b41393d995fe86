#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod args;
mod debug;
mod error;
mod export;
mod inspect;
mod new;

use clap::Parser;

use crate::error::Result;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    args::init_logging(cli.verbose.log_level_filter());

    match cli.command.run() {
        Ok(()) => Ok(()),
        Err(err) => {
            log::error!("{err:#}");
            Err(proc_exit::Code::FAILURE.as_exit())
        }
    }
}

/// Static site configuration toolkit
#[derive(Clone, Debug, clap::Parser)]
#[command(name = "folio", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Init(new::InitArgs),
    New(new::NewArgs),
    Export(export::ExportArgs),
    Permalink(inspect::PermalinkArgs),
    ReadingTime(inspect::ReadingTimeArgs),
    Process(inspect::ProcessArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::New(cmd) => cmd.run(),
            Self::Export(cmd) => cmd.run(),
            Self::Permalink(cmd) => cmd.run(),
            Self::ReadingTime(cmd) => cmd.run(),
            Self::Process(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
