use analytics::{Advisory, MetricsEngine, SalesReport};
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use core_types::{DealInputs, DealInputsDraft};
use exporter::{Exporter, format_currency, format_percent};
use notifier::StubMailer;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Salescope application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from an optional .env file.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = configuration::load_config()?;
    tracing::debug!(?config, "Configuration loaded.");

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Calculate(args) => handle_calculate(args, &config),
        Commands::Export(args) => handle_export(args, &config),
        Commands::Send(args) => handle_send(args, &config),
        Commands::Serve => web_server::run_server(config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A sales win-rate calculator: derive, report and share your deal metrics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the win-rate metrics and print them as a table.
    Calculate(InputArgs),
    /// Calculate the metrics and export a printable report document.
    Export(ExportArgs),
    /// Calculate, export, and "send" the report to an email address (stub transport).
    Send(SendArgs),
    /// Run the HTTP API server.
    Serve,
}

#[derive(Args)]
struct InputArgs {
    /// Number of deals won in the period.
    #[arg(long)]
    deals_won: u64,

    /// Total deals closed in the period (won + lost).
    #[arg(long)]
    total_deals: u64,

    /// Total revenue generated by the won deals.
    #[arg(long)]
    total_revenue: Decimal,

    /// Average days from first contact to close (display only).
    #[arg(long)]
    avg_sales_cycle: Option<Decimal>,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    inputs: InputArgs,
}

#[derive(Args)]
struct SendArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Recipient email address.
    #[arg(long)]
    to: String,
}

impl InputArgs {
    fn validate(&self) -> anyhow::Result<DealInputs> {
        let draft = DealInputsDraft {
            deals_won: Some(self.deals_won),
            total_deals: Some(self.total_deals),
            total_revenue: Some(self.total_revenue),
            avg_sales_cycle_days: self.avg_sales_cycle,
        };
        draft.validate().map_err(|e| anyhow::anyhow!(e))
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn derive(inputs: &DealInputs) -> (SalesReport, Advisory) {
    let report = MetricsEngine::new().calculate(inputs);
    let advisory = Advisory::for_report(&report);
    (report, advisory)
}

fn handle_calculate(args: InputArgs, config: &configuration::Config) -> anyhow::Result<()> {
    let inputs = args.validate()?;
    let (report, advisory) = derive(&inputs);

    print_report(&inputs, &report, &advisory, &config.report.currency_symbol);
    Ok(())
}

fn handle_export(args: ExportArgs, config: &configuration::Config) -> anyhow::Result<()> {
    let inputs = args.inputs.validate()?;
    let (report, advisory) = derive(&inputs);

    print_report(&inputs, &report, &advisory, &config.report.currency_symbol);

    let exporter = Exporter::new(config.report.clone());
    let path = exporter.export(&inputs, &report, &advisory)?;
    println!("\nReport document written to {}", path.display());
    Ok(())
}

fn handle_send(args: SendArgs, config: &configuration::Config) -> anyhow::Result<()> {
    if !notifier::is_plausible_email(&args.to) {
        anyhow::bail!("'{}' is not a valid email address", args.to);
    }

    let inputs = args.inputs.validate()?;
    let (report, advisory) = derive(&inputs);

    let exporter = Exporter::new(config.report.clone());
    let path = exporter.export(&inputs, &report, &advisory)?;

    let mailer = StubMailer::new(&config.notifier);
    mailer.send_report(&args.to, &path)?;

    println!("Report sent to {} (stub transport, no real delivery)", args.to);
    Ok(())
}

/// Prints the metrics table and the advisory texts to the terminal.
fn print_report(
    inputs: &DealInputs,
    report: &SalesReport,
    advisory: &Advisory,
    currency_symbol: &str,
) {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Win Rate".to_string(),
        format_percent(report.win_rate_pct),
    ]);
    table.add_row(vec![
        "Average Deal Value".to_string(),
        format_currency(report.avg_deal_value, currency_symbol),
    ]);
    table.add_row(vec![
        "Average Deal Size".to_string(),
        format_currency(report.avg_deal_size, currency_symbol),
    ]);
    table.add_row(vec![
        "Total Revenue".to_string(),
        format_currency(report.total_revenue, currency_symbol),
    ]);
    table.add_row(vec![
        "Lost Opportunities Value".to_string(),
        format_currency(report.lost_opportunities_value, currency_symbol),
    ]);
    table.add_row(vec![
        "Deals Won / Lost".to_string(),
        format!("{} / {}", inputs.deals_won(), inputs.deals_lost()),
    ]);

    println!("{table}");
    println!("\n{}", advisory.win_rate_message());
    println!("{}", advisory.opportunity_message());
}
