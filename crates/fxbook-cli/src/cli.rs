//! Process-level argument definitions.
//!
//! The interactive commands themselves (`new`, `cancel`, ...) are read from
//! stdin by the REPL; clap only covers connection configuration, fixed for
//! the process lifetime.

use clap::Parser;

/// fxbook - interactive FX order book client
///
/// Connects to a remote order service and reads commands from stdin.
/// Type 'help' at the prompt for the command reference.
#[derive(Debug, Parser)]
#[command(name = "fxbook", version, about = "Interactive FX order book client")]
pub struct Cli {
    /// Base URL of the order service.
    #[arg(long, default_value = "http://localhost:8888")]
    pub base_url: String,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Connection timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub connect_timeout_ms: u64,
}
