use std::env;
use std::io::Write;
use std::path;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _folio.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<folio::Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            folio::Config::from_file(config_path)
                .with_context(|| format!("Error reading config file {}", config_path.display()))?
        } else {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            folio::Config::from_cwd(cwd)?
        };
        Ok(config)
    }

    pub(crate) fn load_context(&self) -> Result<folio::Context> {
        let config = self.load_config()?;
        folio::Context::from_config(config)
    }
}

pub(crate) fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.write_style(match colorchoice::ColorChoice::global() {
        colorchoice::ColorChoice::Auto => env_logger::WriteStyle::Auto,
        colorchoice::ColorChoice::AlwaysAnsi | colorchoice::ColorChoice::Always => {
            env_logger::WriteStyle::Always
        }
        colorchoice::ColorChoice::Never => env_logger::WriteStyle::Never,
    });

    if level <= log::LevelFilter::Info {
        builder.format(|buf, record| {
            let style = level_style(record.level());
            let level = record.level().to_string().to_lowercase();
            writeln!(buf, "{style}[{level}]{style:#} {}", record.args())
        });
    } else {
        builder.format(|buf, record| {
            let style = level_style(record.level());
            let level = record.level().to_string().to_lowercase();
            writeln!(
                buf,
                "{} {style}[{level}]{style:#} {}: {}",
                buf.timestamp_millis(),
                record.module_path().unwrap_or_default(),
                record.args()
            )
        });
    }

    builder.init();
}

fn level_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default().bold(),
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug => anstyle::AnsiColor::Cyan.on_default(),
        log::Level::Trace => anstyle::Style::new().dimmed(),
    }
}
