//! hotel-store maintenance binary
//!
//! Opens a data directory and reports on its contents.

use clap::{Parser, Subcommand};
use hotel_store::{Config, ReservationStore, TimeInterval};
use tracing_subscriber::{fmt, EnvFilter};

/// hotel-store inspector
#[derive(Parser, Debug)]
#[command(name = "hotel-store")]
#[command(about = "Inspect hotel reservation record files")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./hotel_data")]
    data_dir: String,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print account, room, and reservation counts
    Summary,

    /// List accounts with role and reservation count
    Accounts,

    /// List the room catalog
    Rooms,

    /// List rooms free for a date range
    Available {
        /// First day (MM/dd/yyyy)
        #[arg(long)]
        from: String,

        /// Last day, inclusive (MM/dd/yyyy)
        #[arg(long)]
        to: String,
    },

    /// Create empty record files if none exist
    Init,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let default_filter = if args.verbose {
        "info,hotel_store=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(true).init();

    tracing::debug!("hotel-store v{}", hotel_store::VERSION);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .load_on_open(!matches!(args.command, Commands::Init))
        .build();

    let store = match ReservationStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(code) = run(&store, args.command) {
        std::process::exit(code);
    }
}

fn run(store: &ReservationStore, command: Commands) -> Result<(), i32> {
    if !matches!(command, Commands::Init) && !store.last_load_succeeded() {
        tracing::error!(
            "Could not load records from {} (run `init` to create them)",
            store.data_dir().display()
        );
        return Err(1);
    }

    match command {
        Commands::Summary => {
            println!("accounts:     {}", store.account_count());
            println!("rooms:        {}", store.list_rooms().len());
            println!("reservations: {}", store.reservation_count());
        }
        Commands::Accounts => {
            for account in store.list_accounts() {
                println!(
                    "{:<16} {:<24} {:<8} {}",
                    account.username(),
                    account.name(),
                    account.role().as_str(),
                    account.reservations().len()
                );
            }
        }
        Commands::Rooms => {
            for room in store.list_rooms() {
                println!("{:>4}  {:>5}", room.number(), room.nightly_rate());
            }
        }
        Commands::Available { from, to } => {
            let interval = TimeInterval::parse(&from, &to).map_err(|e| {
                tracing::error!("Invalid date range: {}", e);
                2
            })?;
            for room in store.available_rooms(&interval) {
                println!("{:>4}  {:>5}", room.number(), room.nightly_rate());
            }
        }
        Commands::Init => {
            if store.accounts_path().exists() || store.reservations_path().exists() {
                tracing::info!("Record files already exist in {}", store.data_dir().display());
                return Ok(());
            }
            if !store.save_to_storage() {
                return Err(1);
            }
            tracing::info!("Created empty record files in {}", store.data_dir().display());
        }
    }

    Ok(())
}
