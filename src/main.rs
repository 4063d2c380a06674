use clap::Parser;
use prompt_gallery::cli::{
    handle_build, handle_intro, handle_leaderboard, handle_search, handle_show, Cli, Commands,
    Context,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let context = || Context::load(&cli.config, cli.data.clone());

    let result = match cli.command {
        Commands::Build { out, filter } => {
            context().and_then(|ctx| handle_build(&ctx, out, filter))
        }
        Commands::Search { term, json } => {
            context().and_then(|ctx| handle_search(&ctx, term, json))
        }
        Commands::Leaderboard { limit, json } => {
            context().and_then(|ctx| handle_leaderboard(&ctx, limit, json))
        }
        Commands::Show { id, json } => context().and_then(|ctx| handle_show(&ctx, id, json)),
        Commands::Intro { reset } => handle_intro(reset),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
