//! Chips command handler: shows or resets the saved balance.

use crate::bank::ChipBank;
use crate::config;
use crate::error::CliError;
use std::io::Write;
use std::path::Path;

pub fn handle_chips_command(reset: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let config = config::load()?;
    execute_chips(&config.chips_file, reset, out)
}

fn execute_chips(path: &Path, reset: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let mut bank = ChipBank::open(path)?;
    if reset {
        bank.reset();
        bank.save()?;
        writeln!(out, "Chips reset.")?;
    }
    writeln!(out, "Balance: {}", bank.balance())?;
    Ok(())
}
