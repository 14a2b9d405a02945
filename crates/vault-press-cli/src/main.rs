use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use std::{path::PathBuf, process};
use vault_press_config::Config;
use vault_press_engine::{MERMAID_SCRIPT_SRC, PublishOptions, PublishReport, publish};

/// Publish an Obsidian vault as plain markdown.
///
/// Rewrites every markdown file under ROOT in place: wiki links become
/// markdown links under --url-base, mermaid fences become embeddable divs,
/// `[!NOTE]` becomes a note glyph and `%%comments%%` are removed. Files with
/// `:` in their path are renamed. Run it on a checkout or a copy.
#[derive(Debug, Parser)]
#[command(name = "vault-press", version)]
struct Cli {
    /// Vault directory (defaults to `vault_path` in the config file)
    root: Option<PathBuf>,

    /// Prefix for rewritten link URLs, e.g. /knowledge
    #[arg(long, value_name = "URL")]
    url_base: Option<String>,

    /// Skip directories whose name matches PATTERN (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    excludes: Vec<String>,

    /// Script tag source for the mermaid renderer
    #[arg(long, value_name = "URL")]
    mermaid_src: Option<String>,

    /// Config file to use instead of ~/.config/vault-press/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn load_config(&self) -> Result<Option<Config>> {
        match &self.config {
            Some(path) => {
                let config = Config::load_from_path(path)?;
                if config.is_none() {
                    bail!("Config file not found: {}", path.display());
                }
                Ok(config)
            }
            None => Ok(Config::load()?),
        }
    }

    /// Merge arguments over config values.
    fn into_options(self, config: Option<Config>) -> Result<PublishOptions> {
        let config = config.unwrap_or_default();

        let Some(vault_root) = self.root.or(config.vault_path) else {
            bail!(
                "No vault directory given and no vault_path in {}",
                Config::config_path().display()
            );
        };

        let mut options = PublishOptions::new(
            vault_root,
            self.url_base.or(config.url_base).unwrap_or_default(),
        );
        options.excludes = config.exclude;
        options.excludes.extend(self.excludes);
        options.mermaid_script_src = self
            .mermaid_src
            .or(config.mermaid_script_src)
            .unwrap_or_else(|| MERMAID_SCRIPT_SRC.to_string());
        options.dry_run = self.dry_run;
        Ok(options)
    }
}

fn print_report(report: &PublishReport, dry_run: bool) {
    for doc in &report.published {
        let links = if doc.unresolved_links() > 0 {
            format!(
                "{} links, {} unresolved",
                doc.links.len(),
                doc.unresolved_links()
            )
        } else {
            format!("{} links", doc.links.len())
        };
        if doc.is_renamed() {
            println!("{} -> {} ({links})", doc.source, doc.output);
        } else {
            println!("{} ({links})", doc.source);
        }
    }

    for failure in &report.failures {
        eprintln!("Error: {}: {}", failure.document, failure.error);
    }

    let verb = if dry_run { "Would publish" } else { "Published" };
    println!(
        "{verb} {} documents, skipped {} other files, {} failed, {} unresolved links",
        report.published.len(),
        report.skipped.len(),
        report.failures.len(),
        report.unresolved_links()
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level())
        .init();

    let config = cli.load_config()?;
    let options = cli.into_options(config)?;
    log::info!("Vault: {}", options.vault_root.display());

    let report = publish(&options)
        .with_context(|| format!("Failed to publish {}", options.vault_root.display()))?;
    print_report(&report, options.dry_run);

    if !report.is_success() {
        process::exit(1);
    }
    Ok(())
}
