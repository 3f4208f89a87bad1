//! Course finder CLI
//!
//! Search destination catalogs, apply to a course, or submit a class
//! enrollment request.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use coursefinder::{
    error::Result,
    models::{Config, Destination, EnrollmentRequest},
    pipeline::{self, Applicant},
    services::{FilterState, HttpSubmitter},
    utils::console,
};

/// coursefinder - Study-abroad course search and application intake
#[derive(Parser, Debug)]
#[command(
    name = "coursefinder",
    version,
    about = "Study-abroad course search and application intake"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress report output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a destination's courses
    Search {
        /// canada, europe, japan, uk or usa
        #[arg(short, long)]
        destination: Destination,

        /// Text matched against course title and institution
        #[arg(long, default_value = "")]
        query: String,

        /// Intake period, e.g. September
        #[arg(long, default_value = "")]
        intake: String,

        /// Study level, e.g. Undergraduate
        #[arg(long, default_value = "")]
        level: String,

        /// Discipline (repeatable)
        #[arg(long = "discipline")]
        disciplines: Vec<String>,

        /// Catalog TOML file instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply to a course
    Apply {
        #[arg(short, long)]
        destination: Destination,

        /// Course id within the catalog
        #[arg(long)]
        course: u32,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        /// Catalog TOML file instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Confirm locally instead of calling the endpoint
        #[arg(long)]
        simulate: bool,
    },

    /// Submit a class enrollment request
    Enroll {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// One of the offered course interests
        #[arg(long)]
        course_interest: String,

        /// Preferred batch, e.g. "Weekend Only"
        #[arg(long, default_value = "")]
        batch: String,

        /// Current level, e.g. "Intermediate"
        #[arg(long, default_value = "")]
        level: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Accept the terms
        #[arg(long)]
        consent: bool,
    },

    /// Validate configuration and catalogs
    Validate,

    /// List destinations and their filter options
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);
    init_logging(cli.verbose, &config.logging.level);
    console::set_quiet(cli.quiet);

    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Search {
            destination,
            query,
            intake,
            level,
            disciplines,
            catalog,
            json,
        } => {
            let catalog = pipeline::load_catalog(destination, catalog.as_deref())?;
            let mut filters = FilterState::new()
                .with_search(query)
                .with_intake(intake)
                .with_level(level);
            for discipline in &disciplines {
                filters.toggle_discipline(discipline);
            }
            pipeline::run_search(&catalog, &filters, json)?;
        }

        Command::Apply {
            destination,
            course,
            name,
            email,
            phone,
            catalog,
            simulate,
        } => {
            let catalog = pipeline::load_catalog(destination, catalog.as_deref())?;
            let submitter = pipeline::application_submitter(&config, simulate)?;
            let applicant = Applicant { name, email, phone };
            pipeline::run_apply(&config, catalog, course, &applicant, submitter).await?;
        }

        Command::Enroll {
            full_name,
            email,
            phone,
            course_interest,
            batch,
            level,
            message,
            consent,
        } => {
            let request = EnrollmentRequest {
                full_name,
                email,
                phone,
                course_interest,
                preferred_batch: batch,
                current_level: level,
                message,
                consent,
            };
            for (label, value, options) in request.unlisted_choices() {
                log::warn!(
                    "'{}' is not one of the offered {} options: {}",
                    value,
                    label,
                    options.join(", ")
                );
            }
            let submitter = Arc::new(HttpSubmitter::new(&config.submission)?);
            pipeline::run_enroll(&config, request, submitter).await?;
        }

        Command::Validate => {
            pipeline::run_validate(&config)?;
        }

        Command::Info => {
            pipeline::run_info()?;
        }
    }

    Ok(())
}
