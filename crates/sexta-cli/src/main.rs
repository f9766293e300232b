use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use sexta_core::credentials::temp_password;
use sexta_importer::reader::RowParse;
use sexta_importer::{pipeline, reader};
use sexta_models::ImportSummary;
use sexta_supabase::{SupabaseAdminClient, SupabaseConfig};

mod logging;

#[derive(Parser)]
#[command(name = "sexta-admin")]
#[command(about = "Sexta admin tools - import personnel records into Supabase", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import users from a semicolon-delimited roster CSV into Supabase
    ImportUsers {
        /// Path to the roster CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Profile table name (overrides SUPABASE_USERS_TABLE)
        #[arg(long)]
        table: Option<String>,

        /// Normalize and print every record without calling Supabase
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Preview normalized records (inferred gender, derived credentials)
    /// without touching Supabase
    Preview {
        /// Path to the roster CSV
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ImportUsers {
            file,
            table,
            dry_run,
            yes,
        } => {
            if dry_run {
                handle_preview(&file);
            } else {
                handle_import(&file, table, yes).await;
            }
        }
        Commands::Preview { file } => handle_preview(&file),
    }
}

fn read_rows_or_exit(file: &Path) -> Vec<RowParse> {
    match reader::read_source_file(file) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("❌ Error reading {}: {}", file.display(), e);
            std::process::exit(1);
        }
    }
}

fn handle_preview(file: &Path) {
    let rows = read_rows_or_exit(file);

    println!("Previewing {} records from {}\n", rows.len(), file.display());

    for (row, normalized) in pipeline::preview(&rows) {
        match normalized {
            Ok(user) => {
                println!(
                    "[{}] {} | RUT: {} | Gender: {} | Status: {} | Email: {} | Password: {}",
                    row,
                    user.full_name,
                    user.rut,
                    user.gender,
                    user.marital_status.as_str(),
                    user.email,
                    user.password
                );
            }
            Err(e) => println!("[{}] ❌ {}", row, e),
        }
    }

    println!("\nNo changes were made. Edit the CSV (e.g. add a 'gender' column) to correct any inference before importing.");
}

async fn handle_import(file: &Path, table: Option<String>, yes: bool) {
    let config = match SupabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            eprintln!("   Set SUPABASE_URL and SUPABASE_SERVICE_KEY (service role key, not the anon key).");
            std::process::exit(1);
        }
    };

    let rows = read_rows_or_exit(file);
    if rows.is_empty() {
        println!("No records found in {}", file.display());
        return;
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Import {} users into Supabase? Re-running is not safe: account creation is not idempotent",
                rows.len()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmed {
            println!("Import cancelled.");
            return;
        }
    }

    let mut client = SupabaseAdminClient::new(config);
    if let Some(table) = table {
        client = client.with_users_table(table);
    }

    tracing::info!(file = %file.display(), rows = rows.len(), "starting import");
    let reporter = pipeline::run_import(rows, &client, &client).await;

    for outcome in reporter.outcomes() {
        if outcome.success {
            println!("✅ [{}] {} ({})", outcome.row, outcome.full_name, outcome.rut);
        } else {
            let stage = outcome
                .stage
                .map(|s| s.to_string())
                .unwrap_or_else(|| "row".to_string());
            let rollback = if outcome.rolled_back {
                " [auth account rolled back]"
            } else {
                ""
            };
            println!(
                "❌ [{}] {} ({}) failed at {}: {}{}",
                outcome.row,
                outcome.full_name,
                outcome.rut,
                stage,
                outcome.error.as_deref().unwrap_or("unknown error"),
                rollback
            );
        }
    }

    print_summary(reporter.summary());

    if reporter.summary().failed > 0 {
        std::process::exit(1);
    }
}

fn print_summary(summary: ImportSummary) {
    let line = "=".repeat(60);
    println!("\n{}", line);
    println!("IMPORT SUMMARY");
    println!("{}", line);
    println!("✅ Users created: {}", summary.created);
    println!("❌ Users failed: {}", summary.failed);
    println!("📊 Total processed: {}", summary.total);
    println!("{}", line);
    println!("\n⚠️  Users must change their password on first login.");
    println!("    Temporary password: RUT without separators + \"2026\"");
    println!(
        "    Example: RUT 8726935-3 → password {}",
        temp_password("8726935-3")
    );
}
