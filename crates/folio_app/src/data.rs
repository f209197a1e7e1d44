//! Static portfolio list, compiled into the binary.

use anyhow::Context;

static PORTFOLIOS_JSON: &str = include_str!("portfolios.json");

/// The immutable, ordered portfolio list. Parsed once at startup and never
/// mutated afterwards.
pub fn portfolio_links() -> anyhow::Result<Vec<String>> {
    serde_json::from_str(PORTFOLIOS_JSON).context("embedded portfolio list is malformed")
}
