/*
[INPUT]:  Base path, endpoint name, optional pair/pool list, ordered parameters
[OUTPUT]: Path + query strings and form-encoded bodies
[POS]:    HTTP layer - request building shared by public and private clients
[UPDATE]: When URL layout or parameter encoding changes
*/

use url::form_urlencoded;

/// Ordered string parameters used for query strings and signed form bodies.
///
/// Keys keep their insertion order; `set` on an existing key replaces the value
/// in place so the encoded output stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert a value, overwriting an existing entry without moving it
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Insert only when a value is present
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First required key that is absent or empty
    pub fn missing<'a>(&self, required: &[&'a str]) -> Option<&'a str> {
        required
            .iter()
            .copied()
            .find(|key| self.get(key).is_none_or(str::is_empty))
    }

    /// `application/x-www-form-urlencoded` serialization in insertion order
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FormParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = FormParams::new();
        params.extend(iter);
        params
    }
}

/// Build `{base_path}/{endpoint}[/{pair}][?{options}]`
///
/// The `?` is omitted entirely when there are no options.
pub fn build_path(
    base_path: &str,
    endpoint: &str,
    pair: Option<&str>,
    options: &FormParams,
) -> String {
    let mut path = format!(
        "{}/{}",
        base_path.trim_end_matches('/'),
        endpoint.trim_matches('/')
    );
    if let Some(pair) = pair.filter(|p| !p.is_empty()) {
        path.push('/');
        path.push_str(pair);
    }
    if !options.is_empty() {
        path.push('?');
        path.push_str(&options.encode());
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/3/", "info", None, "/api/3/info")]
    #[case("/api/3/", "ticker", Some("btc_usd"), "/api/3/ticker/btc_usd")]
    #[case("/api/3", "depth", Some("ltc_btc-eth_btc"), "/api/3/depth/ltc_btc-eth_btc")]
    #[case("/api/3/", "trades", Some(""), "/api/3/trades")]
    fn test_build_path_without_options(
        #[case] base: &str,
        #[case] endpoint: &str,
        #[case] pair: Option<&str>,
        #[case] expected: &str,
    ) {
        let path = build_path(base, endpoint, pair, &FormParams::new());
        assert_eq!(path, expected);
        assert!(!path.contains('?'));
    }

    #[test]
    fn test_build_path_single_option() {
        let options = FormParams::new().with("a", "1");
        let path = build_path("/api/3/", "ticker", Some("btc_usd"), &options);
        assert_eq!(path, "/api/3/ticker/btc_usd?a=1");
        assert_eq!(path.matches('?').count(), 1);
    }

    #[test]
    fn test_build_path_is_deterministic() {
        let options = FormParams::new()
            .with("ignore_invalid", "1")
            .with("limit", "150");
        let first = build_path("/api/3/", "depth", Some("btc_usd"), &options);
        let second = build_path("/api/3/", "depth", Some("btc_usd"), &options);
        assert_eq!(first, second);
        assert_eq!(first, "/api/3/depth/btc_usd?ignore_invalid=1&limit=150");
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut params = FormParams::new()
            .with("method", "getInfo")
            .with("nonce", "1");
        params.set("nonce", "2");
        params.set("pair", "btc_usd");

        assert_eq!(params.encode(), "method=getInfo&nonce=2&pair=btc_usd");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let params = FormParams::new()
            .with("address", "a b&c=d")
            .with("coupon", "YOBIT+1/2");
        assert_eq!(params.encode(), "address=a+b%26c%3Dd&coupon=YOBIT%2B1%2F2");
    }

    #[test]
    fn test_encode_round_trips_through_form_parser() {
        let params = FormParams::new()
            .with("method", "Trade")
            .with("pair", "ltc_btc")
            .with("rate", "0.00001")
            .with("address", "x y");
        let encoded = params.encode();

        let decoded: FormParams = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded, params);
        assert_eq!(decoded.encode(), encoded);
    }

    #[test]
    fn test_missing_reports_absent_and_empty_fields() {
        let params = FormParams::new().with("pair", "btc_usd").with("rate", "");
        assert_eq!(params.missing(&["pair", "rate", "amount"]), Some("rate"));
        assert_eq!(params.missing(&["pair"]), None);
        assert_eq!(params.missing(&["amount"]), Some("amount"));
    }
}
