use std::fmt;

use reqwest::Url;

/* Processor is the logic center of the bot.
 * It turns the raw text received by the handler into a canonical NSE symbol,
 * and builds the link to the insight site for it.
 * It never talks to Telegram. Crafting and sending messages stays in the handler.
 */

pub const EXCHANGE_SUFFIX: &str = ".NS";
const SEARCH_PATH: &str = "search";
const SYMBOL_PARAM: &str = "symbol";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
}

/* A validated ticker listed on the NSE.
 * The ticker is always uppercase and purely alphabetic, without the exchange suffix.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    ticker: String,
}

impl Symbol {
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    // Ticker with the exchange suffix, e.g. TCS.NS
    pub fn qualified(&self) -> String {
        format!("{}{EXCHANGE_SUFFIX}", self.ticker)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

/* Normalizes user input into a symbol.
 * Returns Ok(None) for blank input, which the bot ignores without replying.
 * The exchange suffix is stripped once if present and always added back,
 * so normalizing an already normalized symbol gives the same symbol.
 */
pub fn normalize_symbol(text: &str) -> Result<Option<Symbol>, ProcessError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let compact: String = text
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let ticker = compact.strip_suffix(EXCHANGE_SUFFIX).unwrap_or(compact.as_str());

    if ticker.is_empty() || !ticker.chars().all(char::is_alphabetic) {
        return Err(ProcessError::InvalidSymbol(text.to_string()));
    }

    Ok(Some(Symbol {
        ticker: ticker.to_string(),
    }))
}

/* Builds the search link for a symbol on the insight site.
 * Any path on the base URL is kept, and the search page is appended under it.
 */
pub fn search_url(base_url: &Url, symbol: &Symbol) -> Url {
    let mut url = base_url.clone();
    let path = format!("{}/{SEARCH_PATH}", base_url.path().trim_end_matches('/'));
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);
    url.query_pairs_mut()
        .append_pair(SYMBOL_PARAM, &symbol.qualified());
    url
}

#[cfg(test)]
mod tests {
    use reqwest::Url;

    use super::{normalize_symbol, search_url, ProcessError};

    fn normalized(text: &str) -> String {
        normalize_symbol(text).unwrap().unwrap().qualified()
    }

    #[test]
    fn test_normalize_lowercase() {
        let symbol = normalize_symbol("tcs").unwrap().unwrap();
        assert_eq!(symbol.ticker(), "TCS");
        assert_eq!(symbol.qualified(), "TCS.NS");
        assert_eq!(symbol.to_string(), "TCS.NS");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalized("  infy  "), "INFY.NS");
        assert_eq!(normalized("bajaj finance"), "BAJAJFINANCE.NS");
        assert_eq!(normalized("\tRel iance\n"), "RELIANCE.NS");
    }

    #[test]
    fn test_normalize_existing_suffix() {
        assert_eq!(normalized("RELIANCE.NS"), "RELIANCE.NS");
        assert_eq!(normalized("reliance.ns"), "RELIANCE.NS");
        assert_eq!(normalized("reliance .ns"), "RELIANCE.NS");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["tcs", " Infy ", "hdfc bank", "RELIANCE.NS", "wipro.ns"] {
            let once = normalized(input);
            assert_eq!(normalized(&once), once);
        }
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_symbol(""), Ok(None));
        assert_eq!(normalize_symbol("   \n\t"), Ok(None));
    }

    #[test]
    fn test_normalize_invalid() {
        assert_eq!(
            normalize_symbol("TCS123"),
            Err(ProcessError::InvalidSymbol("TCS123".to_string()))
        );
        assert!(normalize_symbol("M&M").is_err());
        assert!(normalize_symbol("TCS.BO").is_err());
        assert!(normalize_symbol(".NS").is_err());
        // Suffix is only stripped once.
        assert!(normalize_symbol("TCS.NS.NS").is_err());
    }

    #[test]
    fn test_search_url() {
        let base = Url::parse("https://pathly-labs-insight.onrender.com").unwrap();
        let symbol = normalize_symbol("tcs").unwrap().unwrap();
        assert_eq!(
            search_url(&base, &symbol).as_str(),
            "https://pathly-labs-insight.onrender.com/search?symbol=TCS.NS"
        );
    }

    #[test]
    fn test_search_url_keeps_base_path() {
        let symbol = normalize_symbol("infy").unwrap().unwrap();

        let base = Url::parse("http://localhost:8000/").unwrap();
        assert_eq!(
            search_url(&base, &symbol).as_str(),
            "http://localhost:8000/search?symbol=INFY.NS"
        );

        let base = Url::parse("https://example.com/insight/?ref=bot").unwrap();
        assert_eq!(
            search_url(&base, &symbol).as_str(),
            "https://example.com/insight/search?symbol=INFY.NS"
        );
    }
}
