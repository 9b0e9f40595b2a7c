use crate::commands::{inspect::InspectArgs, prepare::PrepareArgs};

pub mod inspect;
pub mod prepare;

/// Subcommands for versechipper.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary and batches, and report statistics.
    Prepare(PrepareArgs),

    /// Print the first batches, decoded to text.
    Inspect(InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Prepare(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
