use clap::{Parser, Subcommand};

/// Job roles HTTP API
#[derive(Debug, Parser)]
#[command(name = "job-roles-api", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply pending migrations, then serve the API (default)
    Serve {
        /// Overrides HOST
        #[arg(long)]
        host: Option<String>,

        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Apply pending migrations and exit
    Migrate,
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}
