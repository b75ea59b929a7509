use body_echo::args::{Commands, CLI};
use body_echo::run_server;
use clap::Parser;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up a tracing subscriber
    let subscriber = Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set the global tracing subscriber");

    let cli = CLI::parse();
    match cli.command {
        Commands::Serve { host, port } => run_server(host, port).await,
    }
}
