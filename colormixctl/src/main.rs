use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colormix_config::{ConfigLoader, MixerConfig, loader::load_env_file};
use colormix_core::{LabelFormat, MixerScreen};
use colormix_model::{Color, Language};
use colormixctl::{Session, render::write_screen};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "colormixctl",
    about = "Mix colors by averaging their red, green, blue and alpha channels"
)]
struct Cli {
    /// Config file (TOML or JSON); overrides COLORMIX_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dotenv file to load before reading the environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    /// Display language
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,
    /// How picked colors and the mix are labelled
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add each color, print the result and the color rows
    Mix {
        /// `#RGB`, `#RRGGBB`, `#RRGGBBAA` or `r,g,b[,a]` floats in 0..=1
        #[arg(required = true)]
        colors: Vec<Color>,
    },
    /// Read commands (add, remove, lang, show, clear, quit) one per line
    Run {
        /// Script file; stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    Ru,
    En,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Hex,
    Percent,
}

impl From<LangArg> for Language {
    fn from(val: LangArg) -> Self {
        match val {
            LangArg::Ru => Language::Russian,
            LangArg::En => Language::English,
        }
    }
}

impl From<FormatArg> for LabelFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Hex => LabelFormat::Hex,
            FormatArg::Percent => LabelFormat::Percent,
        }
    }
}

fn load_config(cli: &Cli) -> Result<MixerConfig> {
    load_env_file(cli.env_file.as_deref())
        .context("failed to load dotenv file")?;

    let mut loader = ConfigLoader::from_env();
    if let Some(path) = &cli.config {
        loader = loader.with_path(path);
    }
    let mut config = loader
        .load()
        .context("failed to load configuration")?
        .config;

    if let Some(lang) = cli.lang {
        config.language = lang.into();
    }
    if let Some(format) = cli.format {
        config.label_format = format.into();
    }
    Ok(config)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Initialize tracing subscriber; stdout is reserved for rendered rows
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!(?config, "starting colormixctl");
    let screen =
        MixerScreen::new(config.language, config.label_format.namer());

    match cli.command {
        Command::Mix { colors } => {
            let mut screen = screen;
            for color in colors {
                screen.pick_color(color)?;
            }
            write_screen(&mut io::stdout().lock(), &screen)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { script } => {
            let mut session = Session::new(screen, io::stdout().lock());
            let summary = match script {
                Some(path) => {
                    let file = File::open(&path).with_context(|| {
                        format!("failed to open script {}", path.display())
                    })?;
                    session.run(BufReader::new(file), io::stderr())?
                }
                None => session.run(io::stdin().lock(), io::stderr())?,
            };

            if summary.failed > 0 {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
