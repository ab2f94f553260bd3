use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage::config::hypertension_labels_from_env_value;
use triage::SpecialtyRecommender;

mod commands;

#[derive(Parser)]
#[command(name = "pocket-doctor")]
#[command(about = "Pocket Doctor lab triage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every item of an OCR lab-result file
    Triage {
        /// Lab-result JSON file
        labs: PathBuf,
    },
    /// Recommend specialties for a patient profile
    Recommend {
        /// Profile JSON file
        profile: PathBuf,
    },
    /// Filter a clinic directory
    Clinics {
        /// Clinic directory JSON file
        clinics: PathBuf,
        /// Only clinics offering this specialty (exact name)
        #[arg(long)]
        specialty: Option<String>,
        /// Case-insensitive text to find in name or address
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Correct one lab value and show its new classification
    Correct {
        /// Lab-result JSON file
        labs: PathBuf,
        /// Zero-based item index
        index: usize,
        /// Corrected value, optionally with a unit (e.g. "180 mg/dL")
        value: String,
    },
    /// List stored analyses
    History {
        /// History JSON file
        history: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pocket_wire=warn".parse()?)
                .add_directive("pocket_doctor=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Some(Commands::Triage { labs }) => commands::triage(&labs)?,
        Some(Commands::Recommend { profile }) => {
            let cfg = hypertension_labels_from_env_value(
                std::env::var("POCKET_DOCTOR_HYPERTENSION_LABELS").ok(),
            )?;
            tracing::info!(
                labels = ?cfg.hypertension_labels(),
                "hypertension labels configured"
            );
            commands::recommend(&profile, &SpecialtyRecommender::new(cfg))?
        }
        Some(Commands::Clinics {
            clinics,
            specialty,
            query,
        }) => commands::clinics(&clinics, specialty.as_deref(), &query)?,
        Some(Commands::Correct { labs, index, value }) => {
            commands::correct(&labs, index, &value)?
        }
        Some(Commands::History { history }) => commands::history(&history)?,
        None => "Use 'pocket-doctor --help' for commands".to_string(),
    };

    println!("{output}");
    Ok(())
}
