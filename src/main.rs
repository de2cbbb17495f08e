mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod rubric;
mod sources;
mod store;
mod telemetry;
mod types;

use crate::error::{PartnerFitError, Result};
use crate::sources::catalog::Catalog;
use crate::sources::{CompanySource, Credentials, SearchQuery, SocialSource, WebsiteSource};
use crate::store::AnalysisStore;
use crate::types::config::PartnerFitConfig;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn load_catalog(
    flag: Option<&Path>,
    workdir: &Path,
    config: &PartnerFitConfig,
) -> Result<Catalog> {
    match flag {
        Some(path) => Catalog::load(path),
        None => match config.catalog_path() {
            Some(path) => Catalog::load(&workdir.join(path)),
            None => Ok(Catalog::demo()),
        },
    }
}

fn resolve_query(args: &cli::SearchArgs, config: &PartnerFitConfig) -> Result<SearchQuery> {
    let defaults = config.search_query()?;
    Ok(SearchQuery {
        query: args.query.clone().unwrap_or(defaults.query),
        location: args.location.clone().or(defaults.location),
        industry: args.industry.clone().or(defaults.industry),
        min_size: args.min_size.unwrap_or(defaults.min_size),
    })
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    let config = config::load_config(&cli.workdir)?.unwrap_or_default();
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        config.log_level(),
    ))?;

    match cli.command {
        cli::Commands::Criteria => {
            print!("{}", rubric::render_criteria());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Search(cmd) => {
            let catalog = load_catalog(cli.catalog.as_deref(), &cli.workdir, &config)?;
            let query = resolve_query(&cmd.search, &config)?;
            let companies = catalog.search(&query);

            if companies.is_empty() {
                eprintln!("warning: no companies found; try adjusting the search criteria");
                return Ok(exit_code::WARNINGS);
            }

            println!("found {} potential partners:", companies.len());
            for company in &companies {
                println!(
                    "- {} ({}) [{}, {} employees, founded {}]",
                    company.name,
                    company.website,
                    company.location,
                    company.employees,
                    company.founded
                );
                println!("  {}", company.description);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Analyze(cmd) => {
            let catalog = load_catalog(cli.catalog.as_deref(), &cli.workdir, &config)?;
            let candidates = if cmd.companies.is_empty() {
                catalog.search(&resolve_query(&cmd.search, &config)?)
            } else {
                let everyone = catalog.search(&SearchQuery::default());
                cmd.companies
                    .iter()
                    .map(|name| {
                        everyone
                            .iter()
                            .find(|company| &company.name == name)
                            .cloned()
                            .ok_or_else(|| PartnerFitError::CompanyNotFound(name.clone()))
                    })
                    .collect::<Result<Vec<_>>>()?
            };

            let credentials = Credentials::from_env();
            let mut store = AnalysisStore::new();
            for company in &candidates {
                if store.get(&company.name).is_some() {
                    continue;
                }
                let website = catalog.website_signals(&company.website);
                let social = catalog.social_signals(&company.name, credentials.as_ref());
                let analysis =
                    analyze::evaluate(Some(company), website.as_ref(), social.as_ref())?;
                store.insert(analysis);
            }

            if store.is_empty() {
                eprintln!("warning: no companies found; try adjusting the search criteria");
                return Ok(exit_code::WARNINGS);
            }
            tracing::info!(analyses = store.len(), "ranking analyses");

            let format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => config
                    .report_format()
                    .and_then(report::OutputFormat::from_config)
                    .unwrap_or(report::OutputFormat::Md),
            };
            let ranked = store.ranked();
            let rendered = report::render(&ranked, format)?;
            println!("{rendered}");

            if cmd.export {
                let export = report::export::AnalysisExport::new(ranked.clone());
                let path = report::export::write_export(&cli.workdir, &export)?;
                eprintln!("export file: {}", path.display());
            }

            if ranked.iter().all(|analysis| analysis.is_excellent_match()) {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
