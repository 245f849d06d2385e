//! Interactive read-eval-print loop.
//!
//! One command is processed fully, including any blocking gateway call,
//! before the next line is read. The running flag is the only mutable
//! state; only `exit` and end-of-input clear it.

use std::io::{self, Write};
use std::sync::Arc;

use fxbook_core::{OrderGateway, PairUniverse};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{self, CommandOutcome};
use crate::error::CommandError;

pub struct Repl {
    gateway: Arc<dyn OrderGateway>,
    pairs: PairUniverse,
    running: bool,
}

impl Repl {
    pub fn new(gateway: Arc<dyn OrderGateway>, pairs: PairUniverse) -> Self {
        Self {
            gateway,
            pairs,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read lines from stdin until `exit` or end-of-input.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while self.running {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            self.process_line(line.trim()).await;
        }
        Ok(())
    }

    /// Tokenize and dispatch one input line. Blank lines are no-ops;
    /// command failures are reported and never end the session.
    pub async fn process_line(&mut self, input: &str) {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return;
        };
        let name = first.to_ascii_lowercase();

        match commands::dispatch(&name, &tokens, self.gateway.as_ref(), &self.pairs).await {
            Ok(CommandOutcome::Continue(text)) => println!("{text}"),
            Ok(CommandOutcome::Exit(text)) => {
                println!("{text}");
                self.running = false;
            }
            Err(CommandError::Unknown { name }) => {
                eprintln!("Unknown command: {name}");
                println!("Type 'help' for available commands.");
            }
            Err(error) => eprintln!("Command failed: {error}"),
        }
    }
}
