use atm::application::session::SessionController;
use atm::domain::account::default_seed;
use atm::domain::ports::AccountStoreBox;
use atm::infrastructure::in_memory::InMemoryAccountStore;
use atm::interfaces::console::ConsoleTerminal;
use atm::interfaces::csv::account_writer::AccountWriter;
use atm::interfaces::csv::seed_reader::SeedReader;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed accounts CSV file (name,id,balance). Uses the built-in accounts if omitted.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Print the final ledger as CSV after shutdown
    #[arg(long)]
    report: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    // Diagnostics go to stderr; stdout belongs to the customer.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let seed = match cli.seed {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            SeedReader::new(file).entries().into_diagnostic()?
        }
        None => default_seed(),
    };
    let ledger: AccountStoreBox = Box::new(InMemoryAccountStore::with_seed(seed));

    let mut controller = SessionController::new(ledger);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = ConsoleTerminal::new(stdin.lock(), stdout.lock());
    controller.run(&mut terminal).into_diagnostic()?;
    drop(terminal);

    if cli.report {
        let ledger = controller.into_ledger();
        let mut writer = AccountWriter::new(stdout.lock());
        writer
            .write_accounts(ledger.all_accounts())
            .into_diagnostic()?;
    }

    Ok(())
}
