use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use budgetbuddy::{
    Snapshot, UserId,
    logging::setup_logging,
    mock::{generate_mock_transactions, mock_goals},
    stores::{GoalStore, MemoryStore, TransactionStore, snapshot},
    timezone::today_in,
};

/// A utility for creating a mock backend snapshot for manual testing of BudgetBuddy reports.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the JSON snapshot to.
    #[arg(long, short)]
    output_path: String,

    /// How many transactions to generate.
    #[arg(long, short, default_value_t = 50)]
    count: usize,

    /// Seed for the random generator, a random seed is used if omitted.
    #[arg(long, short)]
    seed: Option<u64>,

    /// The canonical timezone used to decide what "today" is.
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// The user ID written into every row.
    #[arg(long, default_value = "demo-user")]
    user_id: String,
}

/// Create a backend snapshot populated with mock transactions and goals.
fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'snapshot.json').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'snapshot.json').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let today = today_in(&args.timezone)?;
    let user = UserId::new(args.user_id);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Generating {} transactions...", args.count);

    let mut store = MemoryStore::new();
    for transaction in generate_mock_transactions(args.count, today, &mut rng) {
        store.create(&user, transaction.to_builder())?;
    }
    for goal in mock_goals(today) {
        store.create_goal(&user, goal.to_builder())?;
    }

    let snapshot: Snapshot = snapshot(&store, &user)?;

    println!("Writing snapshot to {output_path:#?}");
    snapshot.save_backend_file(output_path, &user)?;

    println!("Success!");

    Ok(())
}
