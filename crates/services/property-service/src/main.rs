//! Property Service - command-line access to the listing store.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use common::ApiResponse;
use domain::{PageRequest, PropertyFilter, PropertySort, SortDirection, SortField};
use property_service_lib::config::PropertyServiceConfig;
use property_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "property-service")]
#[command(about = "Property listing data access")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Check database connectivity
    Check,
    /// Show one listing with location and author
    Show { id: Uuid },
    /// List a page of listings
    List {
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        district: Option<String>,
        /// Only listings for sale
        #[arg(long, conflicts_with = "rent")]
        sale: bool,
        /// Only listings for rent
        #[arg(long)]
        rent: bool,
        /// Only published and approved listings
        #[arg(long)]
        live: bool,
        #[arg(long, default_value = "0")]
        skip: u64,
        /// Page size (0 uses the configured default)
        #[arg(long, default_value = "0")]
        limit: u64,
        /// Sort key: date, price or area
        #[arg(long, default_value = "date")]
        sort: SortField,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
    },
    /// Publish and approve a listing
    Approve { id: Uuid },
    /// Delete a listing and its notices
    Delete {
        id: Uuid,
        /// Account deleting its own listing
        #[arg(long, default_value = "")]
        author: String,
        /// Delete regardless of owner
        #[arg(long)]
        admin: bool,
    },
    /// Raise a warn against a listing
    Warn { id: Uuid, content: String },
    /// List notifications of an account
    Informs {
        owner: String,
        #[arg(long)]
        unread: bool,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

fn print_response<T: Serialize>(response: &ApiResponse<T>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PropertyServiceConfig::from_env();
    tracing::debug!("Configuration loaded");

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            property_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::Check => {
            property_service_lib::check_database(&config).await?;
        }
        Commands::Show { id } => {
            let api = property_service_lib::connect(&config).await?;
            print_response(&api.get_property(&PropertyFilter::by_id(id)).await)?;
        }
        Commands::List {
            author,
            city,
            district,
            sale,
            rent,
            live,
            skip,
            limit,
            sort,
            asc,
        } => {
            let api = property_service_lib::connect(&config).await?;
            let mut filter = PropertyFilter {
                city_id: city,
                district_id: district,
                is_sale: match (sale, rent) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                ..Default::default()
            };
            if let Some(author) = author {
                filter = filter.owned_by(author);
            }
            if live {
                filter = filter.live();
            }
            let direction = if asc {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            };
            let page = PageRequest {
                skip,
                limit,
                sort: PropertySort::new(sort, direction),
            };
            print_response(&api.get_base_properties(&filter, page).await)?;
        }
        Commands::Approve { id } => {
            let api = property_service_lib::connect(&config).await?;
            print_response(&api.approve_property(id).await)?;
        }
        Commands::Delete { id, author, admin } => {
            let api = property_service_lib::connect(&config).await?;
            print_response(&api.delete_property(id, &author, admin).await)?;
        }
        Commands::Warn { id, content } => {
            let api = property_service_lib::connect(&config).await?;
            print_response(&api.warn_property(id, &content).await)?;
        }
        Commands::Informs { owner, unread } => {
            let api = property_service_lib::connect(&config).await?;
            print_response(&api.list_informs(&owner, unread).await)?;
        }
    }

    Ok(())
}
