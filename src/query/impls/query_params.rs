use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use crate::common::common::{query_escape, query_unescape, QueryValues};
use crate::query::enums::query_rule::QueryRule;
use crate::query::errors::QueryError;
use crate::query::structs::query_param::QueryParam;
use crate::query::structs::query_params::QueryParams;

impl QueryParams {
    /// Evaluates a rule list against an input map.
    ///
    /// Rules run in declaration order and the output preserves that order.
    /// The first missing `Required` rule aborts with `MissingRequired`.
    pub fn apply(rules: &[QueryRule], input: &HashMap<String, QueryValues>) -> Result<QueryParams, QueryError> {
        let mut params = Vec::with_capacity(rules.len());
        for rule in rules {
            if let Some(param) = rule.process(input)? {
                params.push(param);
            }
        }
        Ok(QueryParams(params))
    }

    /// Renders the sequence as a raw query string.
    ///
    /// Each pair becomes `escape(name)=escape(value)`, joined by `&`. An
    /// empty sequence renders as the empty string.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (index, param) in self.0.iter().enumerate() {
            if index > 0 {
                out.push('&');
            }
            out.push_str(&query_escape(param.name.as_bytes()));
            out.push('=');
            out.push_str(&query_escape(&param.value));
        }
        out
    }

    /// Strict parser for raw query strings.
    ///
    /// Every `&`-separated fragment must contain exactly one `=`; names must
    /// decode to UTF-8. Duplicate names are preserved in input order. This
    /// parser is not on the announce path; it backs tests and the private
    /// prefix round-trip.
    pub fn parse(raw: &str) -> Result<QueryParams, QueryError> {
        let mut params = Vec::new();
        if raw.is_empty() {
            return Ok(QueryParams(params));
        }
        for pair in raw.split('&') {
            let mut parts = pair.split('=');
            let (name_raw, value_raw) = match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(value), None) => (name, value),
                _ => return Err(QueryError::MalformedPair(pair.to_string())),
            };
            let name_bytes = query_unescape(name_raw)
                .map_err(|_| QueryError::MalformedPair(pair.to_string()))?;
            let name = String::from_utf8(name_bytes)
                .map_err(|_| QueryError::MalformedPair(pair.to_string()))?;
            let value = query_unescape(value_raw)
                .map_err(|_| QueryError::MalformedPair(pair.to_string()))?;
            params.push(QueryParam { name, value });
        }
        Ok(QueryParams(params))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}
