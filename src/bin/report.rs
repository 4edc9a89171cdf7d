use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use budgetbuddy::{
    FinancialSummary, Snapshot, Timeframe, format::format_currency, logging::setup_logging,
    summarise, timezone::today_in,
};

/// Print the financial summary of a BudgetBuddy backend snapshot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a backend JSON snapshot.
    #[arg(long, short)]
    snapshot_path: PathBuf,

    /// How many months the monthly spending report covers.
    #[arg(long, short, default_value_t = Timeframe::default())]
    timeframe: Timeframe,

    /// The canonical timezone used to decide what "today" is, e.g. "Pacific/Auckland".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// How to print the summary.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();
    let args = Args::parse();

    let today = today_in(&args.timezone)?;
    let snapshot = Snapshot::load_backend_file(&args.snapshot_path)?;
    let summary = summarise(&snapshot, args.timeframe, today);

    tracing::info!(
        "Summarised {} transactions and {} goals as of {today}",
        snapshot.transactions.len(),
        snapshot.goals.len()
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print!("{}", render_text(&summary)),
    }

    Ok(())
}

fn render_text(summary: &FinancialSummary) -> String {
    let mut lines = vec![
        format!("Financial summary as of {}", summary.today),
        String::new(),
        format!("{:<24}{:>16}", "Total income", format_currency(summary.totals.income)),
        format!("{:<24}{:>16}", "Total expenses", format_currency(summary.totals.expense)),
        format!("{:<24}{:>16}", "Net", format_currency(summary.net)),
        format!("{:<24}{:>16}", "Total saved", format_currency(summary.total_saved)),
        String::new(),
        format!("Monthly spending ({})", summary.timeframe.label()),
    ];

    for month in &summary.monthly_spending {
        lines.push(format!(
            "  {:<22}{:>16}",
            month.label,
            format_currency(month.total_expense)
        ));
    }
    lines.push(format!(
        "  {:<22}{:>16}",
        "Average",
        format_currency(summary.average_monthly_spending)
    ));

    lines.push(String::new());
    lines.push("Spending by category".to_owned());
    if summary.expenses_by_category.is_empty() {
        lines.push("  No expenses".to_owned());
    }
    for share in &summary.expenses_by_category {
        lines.push(format!(
            "  {:<22}{:>16}{:>6}%",
            share.category,
            format_currency(share.amount),
            share.percent
        ));
    }

    lines.push(String::new());
    lines.push("Savings goals".to_owned());
    if summary.goals.is_empty() {
        lines.push("  No goals".to_owned());
    }
    for goal in &summary.goals {
        lines.push(format!(
            "  {:<22}{:>16} of {:<14}{:>4}%",
            goal.name,
            format_currency(goal.saved_amount),
            format_currency(goal.target_amount),
            goal.percent
        ));
    }

    lines.push(String::new());
    lines.push("Recent transactions".to_owned());
    for transaction in &summary.recent_transactions {
        let amount = if transaction.is_expense() {
            -transaction.amount
        } else {
            transaction.amount
        };

        lines.push(format!(
            "  {}  {:<16}{:>16}  {}",
            transaction.date,
            transaction.category,
            format_currency(amount),
            transaction.description
        ));
    }

    lines.join("\n") + "\n"
}
