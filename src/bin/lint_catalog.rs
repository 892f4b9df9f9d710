//! Catalog lint binary - checks that every key exists in both languages
//!
//! Usage:
//!   cargo run --bin lint-catalog                         # Lint the embedded catalog
//!   cargo run --bin lint-catalog -- --strict             # Also fail on warnings
//!   cargo run --bin lint-catalog -- --en a.json --ar b.json  # Lint files being edited
//!
//! Exits with status 1 when the catalog has errors (or warnings with --strict).

use anyhow::{bail, Context, Result};
use awards_site::i18n::{Catalog, CatalogValidator, Language};
use std::fs;
use tracing::{error, info, warn};

struct LintArgs {
    strict: bool,
    en: Option<String>,
    ar: Option<String>,
}

impl LintArgs {
    fn parse() -> Result<Self> {
        let mut args = LintArgs {
            strict: false,
            en: None,
            ar: None,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--strict" => args.strict = true,
                "--en" => args.en = Some(iter.next().context("--en requires a path")?),
                "--ar" => args.ar = Some(iter.next().context("--ar requires a path")?),
                other => bail!("Unknown argument: {}", other),
            }
        }
        Ok(args)
    }
}

fn load_catalog(args: &LintArgs) -> Result<Catalog> {
    match (&args.en, &args.ar) {
        (None, None) => Ok(Catalog::get().clone()),
        (Some(en_path), Some(ar_path)) => {
            let en = fs::read_to_string(en_path)
                .with_context(|| format!("Failed to read {}", en_path))?;
            let ar = fs::read_to_string(ar_path)
                .with_context(|| format!("Failed to read {}", ar_path))?;
            Ok(Catalog::from_sources(&[
                (Language::ENGLISH, en.as_str()),
                (Language::ARABIC, ar.as_str()),
            ])?)
        }
        _ => bail!("--en and --ar must be given together"),
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lint_catalog=info".parse()?),
        )
        .init();

    let args = LintArgs::parse()?;
    let catalog = load_catalog(&args)?;

    for language in Language::all() {
        info!("{}: {} keys", language.name(), catalog.len(language));
    }

    let report = CatalogValidator::validate(&catalog);
    for message in &report.errors {
        error!("{}", message);
    }
    for message in &report.warnings {
        warn!("{}", message);
    }

    if report.has_errors() || (args.strict && report.has_warnings()) {
        error!(
            "Catalog lint failed: {} errors, {} warnings",
            report.errors.len(),
            report.warnings.len()
        );
        std::process::exit(1);
    }

    info!("✓ Catalog is consistent");
    Ok(())
}
