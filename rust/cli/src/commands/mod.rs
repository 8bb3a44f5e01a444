//! Command handler modules for the felt CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in, never opened by the handler
//! - Errors propagated as `CliError`

pub mod cfg;
pub mod chips;
pub mod deal;
pub mod eval;
pub mod play;

pub use cfg::handle_cfg_command;
pub use chips::handle_chips_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
