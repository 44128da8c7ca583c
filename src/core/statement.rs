use crate::core::ledger::LedgerEntry;
use crate::core::monetary::format_amount;
use rust_decimal::Decimal;

pub const NO_MOVEMENTS: &str = "No transactions were made.";

const HEADER: &str = "================ STATEMENT ================";
const FOOTER: &str = "===========================================";

/// Render the transaction log in order, followed by the balance.
pub fn render_statement(balance: Decimal, transaction_log: &[LedgerEntry]) -> String {
    let mut lines = vec![HEADER.to_string()];
    if transaction_log.is_empty() {
        lines.push(NO_MOVEMENTS.to_string());
    } else {
        lines.extend(transaction_log.iter().map(|entry| entry.to_string()));
    }
    lines.push(String::new());
    lines.push(format!("Balance: {}", format_amount(balance)));
    lines.push(FOOTER.to_string());
    lines.join("\n")
}
