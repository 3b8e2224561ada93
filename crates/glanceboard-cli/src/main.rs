use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "glanceboard", version, about = "Glanceboard calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dates in view for a zoom level
    Window(commands::ViewArgs),
    /// Lay out a snapshot file
    Layout {
        #[command(flatten)]
        args: commands::layout::LayoutArgs,
    },
    /// Count items active in the current view
    Active {
        #[command(flatten)]
        args: commands::active::ActiveArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GLANCEBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Window(args) => commands::window::run(args),
        Commands::Layout { args } => commands::layout::run(args),
        Commands::Active { args } => commands::active::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
