use url::Url;

/// Caption pre-filled into the share intent alongside the portfolio URL.
pub const SHARE_CAPTION: &str = "Check out this amazing portfolio";

const SHARE_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Builds the pre-filled social share intent for a portfolio URL.
///
/// The caller never observes a result from the intent; this only has to
/// produce a well-encoded link for the platform to open.
pub fn share_intent_url(portfolio_url: &str, caption: &str) -> String {
    // The base is a constant absolute URL, so parsing cannot fail.
    let mut intent = Url::parse(SHARE_INTENT_BASE).unwrap_or_else(|_| unreachable!());
    intent
        .query_pairs_mut()
        .append_pair("text", caption)
        .append_pair("url", portfolio_url);
    intent.into()
}
