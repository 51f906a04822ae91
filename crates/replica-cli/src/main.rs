//! Replica CLI: submit a product replication request from the command line.
//!
//! Reads DATABASE_URL and the storage settings from the environment (or .env).

use anyhow::Context;
use clap::{Parser, Subcommand};
use replica_core::models::{DraftField, ImageMode};
use replica_core::Config;
use replica_services::{
    create_storage, ImageResolver, SubmissionForm, SubmissionRepository, SubmitOutcome,
};
use replica_cli::{init_tracing, load_image, rows_json};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "replica", about = "Product replication request CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a replication request
    Submit {
        /// Product image to upload
        #[arg(long, conflicts_with = "url")]
        image: Option<PathBuf>,
        /// Link to the product instead of an image
        #[arg(long)]
        url: Option<String>,
        /// Budget, a plain decimal number
        #[arg(long, default_value = "")]
        budget: String,
        /// Preferred material
        #[arg(long, default_value = "")]
        material: String,
        /// Extra comments
        #[arg(long, default_value = "")]
        comments: String,
        /// Contact name
        #[arg(long, default_value = "")]
        name: String,
        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Apply database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.is_production());

    match cli.command {
        Commands::Migrate => {
            let pool = replica_db::connect(&config).await?;
            replica_db::run_migrations(&pool).await?;
            println!("Migrations applied");
        }
        Commands::Submit {
            image,
            url,
            budget,
            material,
            comments,
            name,
            phone,
        } => {
            config.validate()?;
            let storage = create_storage(&config)
                .await
                .context("Failed to initialize storage")?;
            let pool = replica_db::connect(&config).await?;
            let form = SubmissionForm::new(
                ImageResolver::new(storage),
                Arc::new(SubmissionRepository::new(pool)),
            );

            if let Some(url) = url {
                form.on_mode_change(ImageMode::Url);
                form.on_field_change(DraftField::ProductUrl, url);
            }
            if let Some(path) = image {
                form.on_image_select(load_image(&path).await?);
            }
            form.on_field_change(DraftField::Budget, budget);
            form.on_field_change(DraftField::Material, material);
            form.on_field_change(DraftField::Comments, comments);
            form.on_field_change(DraftField::Name, name);
            form.on_field_change(DraftField::Phone, phone);

            match form.on_submit().await {
                SubmitOutcome::Submitted {
                    acknowledgment,
                    rows,
                } => {
                    println!("{}", acknowledgment);
                    println!("{}", rows_json(&rows)?);
                }
                SubmitOutcome::Failed { message } => anyhow::bail!(message),
                SubmitOutcome::Ignored => anyhow::bail!("A submission is already in progress"),
            }
        }
    }

    Ok(())
}
