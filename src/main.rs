use clap::{Parser, Subcommand};
use perfice_ui::cli_messages;
use perfice_ui::consts::cli_consts::DISPLAY_DECIMALS;
use perfice_ui::logging::init_cli_logger;
use perfice_ui::math::{calculate_progress_safe, number_to_max_decimals};
use perfice_ui::session::{
    HistoryCommand, StorageCommand, run_history_command, run_storage_command, run_tui_mode,
    setup_session,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Storage file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the terminal UI
    Start {
        /// Paint the theme background instead of using the terminal's
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Inspect or edit the local storage file
    #[command(subcommand)]
    Storage(StorageCommand),
    /// Record or list significant correlations
    #[command(subcommand)]
    History(HistoryCommand),
    /// Print FIRST / TOTAL, or 0 when TOTAL is zero
    Progress {
        #[arg(allow_negative_numbers = true)]
        first: f64,
        #[arg(allow_negative_numbers = true)]
        total: f64,
        /// Maximum number of decimals
        #[arg(long, default_value_t = DISPLAY_DECIMALS)]
        decimals: usize,
    },
    /// Print a number with at most N decimals
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Maximum number of decimals
        #[arg(long, default_value_t = DISPLAY_DECIMALS)]
        decimals: usize,
    },
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        cli_messages::print_error("Command failed", Some(&e.to_string()));
        exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::Start { with_background } => {
            let session = setup_session(args.storage)?;
            run_tui_mode(session, with_background)
        }
        Command::Storage(command) => {
            init_cli_logger();
            let session = setup_session(args.storage)?;
            run_storage_command(&session, command)
        }
        Command::History(command) => {
            init_cli_logger();
            let session = setup_session(args.storage)?;
            run_history_command(&session, command)
        }
        Command::Progress {
            first,
            total,
            decimals,
        } => {
            let progress = calculate_progress_safe(first, total);
            println!("{}", number_to_max_decimals(progress, decimals));
            Ok(())
        }
        Command::Format { value, decimals } => {
            println!("{}", number_to_max_decimals(value, decimals));
            Ok(())
        }
    }
}
