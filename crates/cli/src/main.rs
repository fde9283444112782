use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
use commands::{execute_serve_command, ServeArgs};

#[derive(Parser)]
#[command(name = "fruitd")]
#[command(about = "Fruitd - minimal fruit catalog HTTP service")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the fruit catalog server
    Serve(ServeCommandArgs),
}

#[derive(Args)]
pub struct ServeCommandArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,
    /// Host address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            let serve_args = ServeArgs {
                port: args.port,
                host: args.host,
            };
            execute_serve_command(serve_args).await
        }
    }
}
