/// Static usage text for every command.
pub fn render() -> String {
    [
        "Available commands:",
        "new [buy|sell] <investment ccy> <counter ccy> <limit> <validity>",
        "Example: new buy EUR SEK 1.14 31.12.2025",
        "cancel <ID>",
        "Example: cancel 5",
        "rates - Show current exchange rates",
        "orders - Show all orders sorted by currency pair and distance to market rate",
        "summary - Show order summary grouped by currency and type",
        "help - Show this help message",
        "exit - Exit the application",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_every_command() {
        let text = render();
        for name in ["new", "cancel", "rates", "orders", "summary", "help", "exit"] {
            assert!(text.contains(name), "help must mention '{name}'");
        }
    }
}
