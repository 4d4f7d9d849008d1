use clap::{Parser, Subcommand};

/// MediaGW — server-side proxy for generative image/video providers
#[derive(Parser)]
#[command(name = "mediagw", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gateway server
    Serve {
        /// Port to bind; defaults to MEDIAGW_PORT
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Sign and print a provider token, for checking the configured
    /// video credentials without issuing a generation
    Token,
}
