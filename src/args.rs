use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(name = "Body Echo Service", version = "0")]
#[command(disable_help_subcommand = true)]
pub struct CLI {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Runs the echo server")]
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}
