use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use personance::cli::{
    handle_budget_command, handle_config, handle_dashboard, handle_init, handle_record_command,
    handle_wealth, BudgetCommands, CliContext, RecordCommands, ViewArgs,
};
use personance::config::{PersonancePaths, Settings, StoreBackend};
use personance::logging::init_tracing;
use personance::models::UserId;
use personance::storage::open_store;
use personance::{Activity, PersonanceError};

#[derive(Parser)]
#[command(
    name = "personance",
    version,
    about = "Budgets, cash flow and net worth from your financial records",
    long_about = "Personance turns income, expense, asset and liability records into \
                  budget progress, cash flow, net worth and goal tracking, shown as \
                  terminal tables or exported as JSON, YAML or CSV."
)]
struct Cli {
    /// User whose records to read (defaults to the configured user)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Record store to use: json, csv or memory
    #[arg(long, global = true)]
    store: Option<StoreBackend>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and settings
    Init {
        /// Load a sample month of data
        #[arg(long)]
        demo: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Cash flow, passive income, debts and recent transactions
    #[command(alias = "dash")]
    Dashboard(ViewArgs),

    /// Net worth, its changes and the asset allocation
    Wealth(ViewArgs),

    /// Budget plan and progress
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Add and list records
    #[command(subcommand, alias = "rec")]
    Record(RecordCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = PersonancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let backend = match cli.store {
        Some(backend) => backend,
        None => settings.resolve_store_backend()?,
    };
    let user = cli
        .user
        .map(UserId::new)
        .unwrap_or_else(|| settings.default_user_id());

    let Some(command) = cli.command else {
        println!("Personance - personal-finance summaries");
        println!();
        println!("Run 'personance --help' for usage information.");
        println!("Run 'personance init --demo' to load sample data.");
        return Ok(());
    };

    let activity = command.activity();
    let store = open_store(backend, &paths)
        .map_err(PersonanceError::from)
        .map_err(report(activity))?;
    let ctx = CliContext {
        paths,
        settings,
        store,
        user,
    };

    let result = match command {
        Commands::Init { demo } => handle_init(&ctx, demo),
        Commands::Config => handle_config(&ctx),
        Commands::Dashboard(args) => handle_dashboard(&ctx, args),
        Commands::Wealth(args) => handle_wealth(&ctx, args),
        Commands::Budget(cmd) => handle_budget_command(&ctx, cmd),
        Commands::Record(cmd) => handle_record_command(&ctx, cmd),
    };

    result.map_err(report(activity))?;
    Ok(())
}

impl Commands {
    fn activity(&self) -> Activity {
        match self {
            Commands::Init { .. } => Activity::Update,
            Commands::Config | Commands::Dashboard(_) | Commands::Wealth(_) => Activity::Summary,
            Commands::Budget(cmd) => cmd.activity(),
            Commands::Record(cmd) => cmd.activity(),
        }
    }
}

/// Log the full error and turn it into the message shown to the user
fn report(activity: Activity) -> impl Fn(PersonanceError) -> anyhow::Error {
    move |err| {
        tracing::error!(error = %err, ?activity, "command failed");
        anyhow::anyhow!(err.user_message(activity))
    }
}
