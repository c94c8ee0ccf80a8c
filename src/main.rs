use clap::Parser;
use tenantforge::cli::{self, CheckCommand, Cli, Commands};
use tenantforge::config::Config;
use tenantforge::error::Result;
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Check commands validate configuration themselves and skip logging init.
    if let Commands::Check(CheckCommand::Config(args)) = &cli.command {
        return cli::check::execute_config(&args.config);
    }

    let config = Config::load(config_path(&cli.command))?;
    config.init_logging();
    info!("tenantforge starting");

    let orchestrator = cli::build_orchestrator(&config)?;

    match cli.command {
        Commands::Provision(args) => cli::provision::execute(&orchestrator, args).await,
        Commands::User(args) => cli::user::execute(&orchestrator, args).await,
        Commands::Members(args) => cli::members::execute(&orchestrator, args).await,
        Commands::AddMember(args) => cli::members::execute_add(&orchestrator, args).await,
        Commands::Kubeconfig(args) => cli::kubeconfig::execute(&orchestrator, args).await,
        Commands::Login(args) => cli::user::execute_login(&orchestrator, args).await,
        Commands::Check(_) => unreachable!("handled above"),
    }
}

fn config_path(command: &Commands) -> &std::path::Path {
    match command {
        Commands::Provision(args) => &args.config,
        Commands::User(args) => &args.config,
        Commands::Members(args) => &args.config,
        Commands::AddMember(args) => &args.config,
        Commands::Kubeconfig(args) => &args.config,
        Commands::Login(args) => &args.config,
        Commands::Check(CheckCommand::Config(args)) => &args.config,
    }
}
