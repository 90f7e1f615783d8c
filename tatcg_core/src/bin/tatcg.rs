//! `tatcg` - site tooling: locale probes, catalog checks, form validation.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tatcg_core::catalog::{CatalogSource, DirCatalogSource};
use tatcg_core::form::{ContactDraft, validate};
use tatcg_core::{LocaleConfig, LocaleScheme, SiteConfig};

#[derive(Parser, Debug)]
#[command(name = "tatcg", version, about = "TAT Consulting Group site tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the locale a request would be served in
    Resolve {
        /// Requested locale tag (omit to get the default)
        locale: Option<String>,
        #[arg(long, value_parser = parse_scheme)]
        scheme: Option<LocaleScheme>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show what the locale middleware does with a path
    Route {
        path: String,
        /// Locale hint from the client
        #[arg(long)]
        prefer: Option<String>,
        #[arg(long, value_parser = parse_scheme)]
        scheme: Option<LocaleScheme>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Check that every configured locale has a complete catalog
    Check {
        #[arg(long, default_value = "messages")]
        messages: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run the contact form validator over a draft
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long = "service-interest", default_value = "")]
        service_interest: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Emit errors as a JSON object keyed by field
        #[arg(long)]
        json: bool,
    },
}

fn parse_scheme(raw: &str) -> Result<LocaleScheme, String> {
    raw.parse().map_err(|e: tatcg_core::LocaleError| e.to_string())
}

fn locale_config(scheme: Option<LocaleScheme>, config: Option<&Path>) -> LocaleConfig {
    match (scheme, config) {
        (Some(scheme), _) => scheme.config(),
        (None, Some(path)) => SiteConfig::load_or_default(path).locale_config(),
        (None, None) => LocaleConfig::regional(),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Resolve {
            locale,
            scheme,
            config,
        } => {
            let locales = locale_config(scheme, config.as_deref());
            println!("{}", locales.resolve(locale.as_deref()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Route {
            path,
            prefer,
            scheme,
            config,
        } => {
            let locales = locale_config(scheme, config.as_deref());
            println!("{}", locales.route_path(&path, prefer.as_deref()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { messages, config } => check_catalogs(&messages, config.as_deref()),
        Command::Validate {
            name,
            email,
            phone,
            company,
            service_interest,
            message,
            json,
        } => {
            let draft = ContactDraft {
                name,
                email,
                phone,
                company,
                service_interest,
                message,
            };
            let errors = validate(&draft);
            if json {
                let map: serde_json::Map<String, serde_json::Value> = errors
                    .iter()
                    .map(|(field, issue)| (field.to_string(), issue.to_string().into()))
                    .collect();
                let out = serde_json::to_string_pretty(&map).context("serialize errors")?;
                println!("{out}");
            } else if errors.is_valid() {
                println!("ok");
            } else {
                for (field, issue) in errors.iter() {
                    println!("{field}: {issue}");
                }
            }
            Ok(if errors.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}

fn check_catalogs(messages: &Path, config: Option<&Path>) -> Result<ExitCode> {
    let site = match config {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::default(),
    };
    let locales = site.locale_config();
    let source = DirCatalogSource::new(messages);

    let reference = source
        .load(locales.default_locale())
        .with_context(|| format!("default catalog in {}", messages.display()))?;

    let mut problems = 0usize;
    for tag in locales.locales() {
        match source.load(tag) {
            Ok(catalog) => {
                let missing = catalog.missing_from(&reference);
                if missing.is_empty() {
                    println!("[ok] {tag} ({} keys)", catalog.len());
                } else {
                    problems += missing.len();
                    println!("[missing] {tag}: {}", missing.join(", "));
                }
            }
            Err(e) => {
                problems += 1;
                println!("[error] {e}");
            }
        }
    }

    if problems == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{problems} problem(s) found");
        Ok(ExitCode::FAILURE)
    }
}
