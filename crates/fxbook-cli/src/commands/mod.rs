//! One module per interactive command. Each `run` validates its tokens,
//! talks to the gateway where needed, and returns the rendered output; all
//! printing happens in the REPL.

mod cancel;
mod help;
mod new_order;
mod orders;
mod rates;
mod summary;

use fxbook_core::{OrderGateway, PairUniverse};
use time::OffsetDateTime;

use crate::error::CommandError;

/// Result of one successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Rendered output; the session continues.
    Continue(String),
    /// Rendered output; the session terminates.
    Exit(String),
}

/// Route a tokenized line to its handler. `name` is the lowercased first
/// token; `tokens` includes it.
pub async fn dispatch(
    name: &str,
    tokens: &[&str],
    gateway: &dyn OrderGateway,
    pairs: &PairUniverse,
) -> Result<CommandOutcome, CommandError> {
    match name {
        "new" => {
            let today = OffsetDateTime::now_utc().date();
            new_order::run(tokens, gateway, pairs, today)
                .await
                .map(CommandOutcome::Continue)
        }
        "cancel" => cancel::run(tokens, gateway).await.map(CommandOutcome::Continue),
        "rates" => rates::run(gateway).await.map(CommandOutcome::Continue),
        "orders" => orders::run(gateway).await.map(CommandOutcome::Continue),
        "summary" => summary::run(gateway).await.map(CommandOutcome::Continue),
        "help" => Ok(CommandOutcome::Continue(help::render())),
        "exit" => Ok(CommandOutcome::Exit(String::from("Goodbye!"))),
        _ => Err(CommandError::Unknown {
            name: name.to_owned(),
        }),
    }
}
