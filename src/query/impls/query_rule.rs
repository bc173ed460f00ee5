use std::collections::HashMap;
use crate::common::common::QueryValues;
use crate::query::enums::query_rule::QueryRule;
use crate::query::errors::QueryError;
use crate::query::structs::query_param::QueryParam;

impl QueryRule {
    pub fn required(name: &str) -> QueryRule {
        QueryRule::Required(name.to_string())
    }

    pub fn optional(name: &str) -> QueryRule {
        QueryRule::Optional(name.to_string())
    }

    pub fn fixed(name: &str, value: &[u8]) -> QueryRule {
        QueryRule::Fixed(name.to_string(), value.to_vec())
    }

    /// Name the rule applies to.
    pub fn name(&self) -> &str {
        match self {
            QueryRule::Required(name) => name,
            QueryRule::Optional(name) => name,
            QueryRule::Fixed(name, _) => name,
        }
    }

    /// Evaluates the rule against an input map.
    ///
    /// Duplicate input values for a name resolve to the first one.
    pub fn process(&self, input: &HashMap<String, QueryValues>) -> Result<Option<QueryParam>, QueryError> {
        match self {
            QueryRule::Required(name) => {
                match input.get(name).and_then(|values| values.first()) {
                    None => Err(QueryError::MissingRequired(name.clone())),
                    Some(value) => Ok(Some(QueryParam { name: name.clone(), value: value.clone() })),
                }
            }
            QueryRule::Optional(name) => {
                Ok(input
                    .get(name)
                    .and_then(|values| values.first())
                    .map(|value| QueryParam { name: name.clone(), value: value.clone() }))
            }
            QueryRule::Fixed(name, value) => {
                Ok(Some(QueryParam { name: name.clone(), value: value.clone() }))
            }
        }
    }
}
