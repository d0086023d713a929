//! Subcommands of the `hexapawn` binary

pub mod play;
pub mod train;
