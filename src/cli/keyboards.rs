//! Lists the named keyboards a change-keyboard key can target.

use crate::cli::common::{print_json, CliResult};
use crate::models::NamedKeyboard;
use clap::Args;

/// List named keyboard destinations
#[derive(Debug, Clone, Args)]
pub struct KeyboardsArgs {
    /// Output as JSON array
    #[arg(long)]
    pub json: bool,
}

impl KeyboardsArgs {
    /// Execute the keyboards command
    pub fn execute(&self) -> CliResult<()> {
        let names: Vec<&str> = NamedKeyboard::ALL.iter().map(|k| k.name()).collect();

        if self.json {
            return print_json(&names);
        }

        for name in names {
            println!("{name}");
        }
        Ok(())
    }
}
