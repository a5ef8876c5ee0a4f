use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayblock-cli", version, about = "Dayblock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Energy schedule and slot scoring
    Energy {
        #[command(subcommand)]
        action: commands::energy::EnergyAction,
    },
    /// Conflict checks for proposed blocks
    Check {
        #[command(subcommand)]
        action: commands::check::CheckAction,
    },
    /// Reminder computation
    Remind {
        #[command(subcommand)]
        action: commands::remind::RemindAction,
    },
    /// Weekly goal progress
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Slot suggestions for a task
    Suggest {
        #[command(subcommand)]
        action: commands::suggest::SuggestAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Energy { action } => commands::energy::run(action),
        Commands::Check { action } => commands::check::run(action),
        Commands::Remind { action } => commands::remind::run(action),
        Commands::Goals { action } => commands::goals::run(action),
        Commands::Suggest { action } => commands::suggest::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
