//! jndb CLI
//!
//! Command-line interface for inspecting and editing a jndb storage file.

use clap::{Parser, Subcommand};
use jndb::{Config, Connection, Table};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// jndb CLI
#[derive(Parser, Debug)]
#[command(name = "jndb-cli")]
#[command(about = "CLI for the jndb JSON document store")]
#[command(version)]
struct Args {
    /// Directory holding the storage file
    #[arg(short, long, default_value = Config::DEFAULT_PATH)]
    path: String,

    /// Storage file name
    #[arg(short, long, default_value = Config::DEFAULT_FILE_NAME)]
    file_name: String,

    /// Table to operate on (required by key-level commands)
    #[arg(short, long)]
    table: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set (parsed as JSON, stored as a string otherwise)
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// Check whether a key exists
    Has {
        /// The key to check
        key: String,
    },

    /// Number of keys in the table
    Count,

    /// Print the whole table
    All,

    /// Print the table as a list of single-entry objects
    Array,

    /// List all tables
    Tables,

    /// Drop a table
    Drop {
        /// The table to drop
        name: String,
    },
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,jndb=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> jndb::Result<()> {
    let config = Config::builder()
        .path(&args.path)
        .file_name(&args.file_name)
        .build();

    let mut db = Connection::open(config)?;
    tracing::debug!("Storage file: {}", db.path().display());

    match &args.command {
        Commands::Tables => return print_json(&db.tables()?),
        Commands::Drop { name } => {
            db.drop_table(name)?;
            println!("OK");
            return Ok(());
        }
        _ => {}
    }

    if let Some(table) = &args.table {
        db.use_table(table)?;
    }

    match args.command {
        Commands::Get { key } => match db.fetch(key)? {
            Some(value) => print_json(&value)?,
            None => println!("(nil)"),
        },
        Commands::Set { key, value } => {
            db.insert(key, parse_value(&value))?;
            println!("OK");
        }
        Commands::Del { key } => {
            db.delete(key)?;
            println!("OK");
        }
        Commands::Has { key } => println!("{}", db.has(key)?),
        Commands::Count => println!("{}", db.count()?),
        Commands::All => print_json(&db.fetch_all()?)?,
        Commands::Array => print_json::<Vec<Table>>(&db.fetch_array()?)?,
        Commands::Tables | Commands::Drop { .. } => {}
    }

    Ok(())
}

/// Parse a value argument as JSON, falling back to a plain string
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print_json<T: serde::Serialize>(value: &T) -> jndb::Result<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| jndb::JndbError::Serialization(e.to_string()))?;
    println!("{}", out);
    Ok(())
}
