use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use design_dna::{
    DesignDna, DesignMode, SiteDesign, background_pattern_css_for_kind, css_variables,
    google_fonts_url, layout_classes, unique_combinations,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_KEYWORD: &str = "Free Government Phone";

#[derive(Parser)]
#[command(name = "design-dna", about = "Deterministic design identities per domain")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct SiteArgs {
    /// Site domain, e.g. example.com
    domain: String,
    /// Target keyword
    #[arg(default_value = DEFAULT_KEYWORD)]
    keyword: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved design as JSON
    Resolve {
        #[command(flatten)]
        site: SiteArgs,
        #[arg(long, value_enum, default_value = "basic")]
        mode: DesignMode,
    },
    /// Print the CSS custom-property block
    Css {
        #[command(flatten)]
        site: SiteArgs,
        #[arg(long, value_enum, default_value = "basic")]
        mode: DesignMode,
    },
    /// Print the Google Fonts stylesheet URL
    FontsUrl {
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Print the advanced layout class tokens as JSON
    Classes {
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Print the CSS for a background pattern
    Pattern {
        /// Pattern token: dots, grid, waves, gradient-mesh, noise or none
        kind: String,
        /// Tint colour as six-digit hex
        color: String,
    },
    /// Print how many distinct designs a mode can produce
    Combinations {
        #[arg(long, value_enum, default_value = "basic")]
        mode: DesignMode,
    },
    /// Resolve a site from its JSON configuration file
    Site {
        config: PathBuf,
    },
}

fn resolve(site: &SiteArgs, mode: DesignMode) -> DesignDna {
    DesignDna::resolve(&site.domain, &site.keyword, mode)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { site, mode } => {
            println!("{}", resolve(&site, mode).to_json_pretty()?);
        }
        Command::Css { site, mode } => {
            print!("{}", css_variables(&resolve(&site, mode)));
        }
        Command::FontsUrl { site } => {
            println!("{}", google_fonts_url(resolve(&site, DesignMode::Basic).fonts()));
        }
        Command::Classes { site } => {
            let classes = layout_classes(&resolve(&site, DesignMode::Advanced));
            println!("{}", serde_json::to_string_pretty(&classes)?);
        }
        Command::Pattern { kind, color } => {
            println!("{}", background_pattern_css_for_kind(&kind, &color));
        }
        Command::Combinations { mode } => {
            println!("{}", unique_combinations(mode));
        }
        Command::Site { config } => {
            let json = fs::read_to_string(&config)
                .with_context(|| format!("reading {}", config.display()))?;
            let site = SiteDesign::from_json(&json)
                .with_context(|| format!("parsing {}", config.display()))?;

            tracing::info!(
                domain = site.config().domain(),
                url = %site.config().site_url(),
                "loaded site"
            );

            println!("{}", site.dna().to_json_pretty()?);
            println!();
            print!("{}", site.css_variables());
            println!("{}", site.google_fonts_url());

            let pattern = site.background_pattern_css();
            if !pattern.is_empty() {
                println!("{pattern}");
            }
        }
    }

    Ok(())
}
