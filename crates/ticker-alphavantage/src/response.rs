//! Extraction of the current price from a `GLOBAL_QUOTE` response body.

use serde_json::Value;

use ticker_core::{Error, PriceLookup};

pub const GLOBAL_QUOTE_KEY: &str = "Global Quote";
pub const PRICE_KEY: &str = "05. price";

const ERROR_MESSAGE_KEY: &str = "Error Message";
const THROTTLE_KEYS: [&str; 2] = ["Note", "Information"];

/// Pull `"Global Quote" -> "05. price"` out of a decoded response body.
///
/// A quote object without a price (Alpha Vantage answers unknown symbols with
/// `{"Global Quote": {}}`) is `NoData`. Error and throttling payloads, which
/// replace the quote object entirely, are reported as errors.
///
/// # Errors
///
/// `Error::Rejected` for an `"Error Message"` payload and `Error::RateLimited`
/// for a `"Note"` or `"Information"` payload.
pub fn parse_global_quote(body: &Value) -> Result<PriceLookup, Error> {
    if let Some(quote) = body.get(GLOBAL_QUOTE_KEY) {
        let price = quote
            .get(PRICE_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);
        return Ok(price.map_or(PriceLookup::NoData, PriceLookup::Found));
    }

    if let Some(message) = body.get(ERROR_MESSAGE_KEY) {
        return Err(Error::Rejected(describe(message)));
    }

    if let Some(message) = THROTTLE_KEYS.iter().find_map(|key| body.get(*key)) {
        return Err(Error::RateLimited(describe(message)));
    }

    Ok(PriceLookup::NoData)
}

fn describe(message: &Value) -> String {
    message
        .as_str()
        .map_or_else(|| message.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_price() {
        let body = json!({
            "Global Quote": {
                "01. symbol": "IBM",
                "05. price": "142.37",
                "07. latest trading day": "2024-05-03"
            }
        });
        assert_eq!(
            parse_global_quote(&body).unwrap(),
            PriceLookup::Found("142.37".to_string())
        );
    }

    #[test]
    fn empty_quote_is_no_data() {
        let body = json!({ "Global Quote": {} });
        assert_eq!(parse_global_quote(&body).unwrap(), PriceLookup::NoData);
    }

    #[test]
    fn non_string_price_is_no_data() {
        let body = json!({ "Global Quote": { "05. price": 142.37 } });
        assert_eq!(parse_global_quote(&body).unwrap(), PriceLookup::NoData);
    }

    #[test]
    fn unrelated_body_is_no_data() {
        assert_eq!(parse_global_quote(&json!({})).unwrap(), PriceLookup::NoData);
        assert_eq!(parse_global_quote(&json!([])).unwrap(), PriceLookup::NoData);
    }

    #[test]
    fn error_message_is_rejected() {
        let body = json!({ "Error Message": "Invalid API call." });
        let err = parse_global_quote(&body).unwrap_err();
        assert!(matches!(err, Error::Rejected(ref m) if m == "Invalid API call."));
    }

    #[test]
    fn note_is_rate_limited() {
        let body = json!({ "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute." });
        assert!(matches!(
            parse_global_quote(&body),
            Err(Error::RateLimited(_))
        ));
    }

    #[test]
    fn information_is_rate_limited() {
        let body = json!({ "Information": "You have reached the daily rate limit." });
        let err = parse_global_quote(&body).unwrap_err();
        assert_eq!(err.code(), "rate_limited");
    }
}
