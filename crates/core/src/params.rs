use crate::error::ParamError;

/// Numeric values pulled from the query string, in the order they were requested.
///
/// The arity is part of the type, so a caller can never receive fewer values
/// than it asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInputs<const N: usize> {
    values: [f64; N],
}

impl<const N: usize> ParsedInputs<N> {
    pub fn values(&self) -> [f64; N] {
        self.values
    }
}

/// Reads every name in `names` from a raw `application/x-www-form-urlencoded`
/// query string.
///
/// All names must be present and non-empty before any of them is parsed, so a
/// missing value always wins over an invalid one. Values are then parsed in the
/// requested order and the first failure is reported.
pub fn parse_params<const N: usize>(
    query: Option<&str>,
    names: [&str; N],
) -> Result<ParsedInputs<N>, ParamError> {
    let pairs = decode_query(query.unwrap_or_default());

    let mut raw = [""; N];
    for (slot, name) in raw.iter_mut().zip(names) {
        match lookup(&pairs, name) {
            Some(value) if !value.is_empty() => *slot = value,
            _ => {
                return Err(ParamError::MissingParameter {
                    names: names.iter().map(|name| name.to_string()).collect(),
                })
            }
        }
    }

    let mut values = [0.0; N];
    for ((slot, name), value) in values.iter_mut().zip(names).zip(raw) {
        *slot = parse_number(value).ok_or_else(|| ParamError::InvalidNumber {
            name: name.to_string(),
        })?;
    }

    Ok(ParsedInputs { values })
}

fn decode_query(query: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(query).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "query string could not be decoded");
        Vec::new()
    })
}

// First occurrence wins for repeated keys.
fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const AB: [&str; 2] = ["a", "b"];

    #[test]
    fn parses_both_operands_in_order() {
        let inputs = parse_params(Some("b=3&a=5"), AB).unwrap();
        assert_eq!(inputs.values(), [5.0, 3.0]);
    }

    #[test]
    fn accepts_decimals_signs_and_exponents() {
        let inputs = parse_params(Some("a=-2.5&b=1e3"), AB).unwrap();
        assert_eq!(inputs.values(), [-2.5, 1000.0]);

        let inputs = parse_params(Some("a=%2B7&b=.5"), AB).unwrap();
        assert_eq!(inputs.values(), [7.0, 0.5]);
    }

    #[test]
    fn missing_or_empty_values_are_missing() {
        let missing = ParamError::MissingParameter {
            names: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(parse_params(None, AB), Err(missing.clone()));
        assert_eq!(parse_params(Some(""), AB), Err(missing.clone()));
        assert_eq!(parse_params(Some("b=5"), AB), Err(missing.clone()));
        assert_eq!(parse_params(Some("a=5"), AB), Err(missing.clone()));
        assert_eq!(parse_params(Some("a=&b="), AB), Err(missing.clone()));
        assert_eq!(parse_params(Some("a=1&b"), AB), Err(missing));
    }

    #[test]
    fn missing_wins_over_invalid() {
        let err = parse_params(Some("a=oops"), AB).unwrap_err();
        assert!(matches!(err, ParamError::MissingParameter { .. }));
    }

    #[test]
    fn invalid_values_report_first_name() {
        let err = parse_params(Some("a=text&b=5"), AB).unwrap_err();
        assert_eq!(err.to_string(), "parameter 'a' must be a valid number");

        let err = parse_params(Some("a=5&b=text"), AB).unwrap_err();
        assert_eq!(err.to_string(), "parameter 'b' must be a valid number");

        let err = parse_params(Some("a=x&b=y"), AB).unwrap_err();
        assert_eq!(err.to_string(), "parameter 'a' must be a valid number");
    }

    #[test]
    fn rejects_non_finite_literals() {
        for literal in ["inf", "-Infinity", "NaN"] {
            let query = format!("a={literal}&b=1");
            let err = parse_params(Some(&query), AB).unwrap_err();
            assert_eq!(
                err,
                ParamError::InvalidNumber {
                    name: "a".to_string()
                }
            );
        }
    }

    #[test]
    fn repeated_keys_use_first_value() {
        let inputs = parse_params(Some("a=1&a=9&b=2"), AB).unwrap();
        assert_eq!(inputs.values(), [1.0, 2.0]);
    }

    #[test]
    fn no_names_always_succeeds() {
        let inputs = parse_params(Some("anything=here"), []).unwrap();
        assert_eq!(inputs.values().len(), 0);
    }

    #[test]
    fn single_name_yields_single_value() {
        let inputs = parse_params(Some("a=5&b=oops"), ["a"]).unwrap();
        assert_eq!(inputs.values(), [5.0]);

        let err = parse_params(Some("b=1"), ["a"]).unwrap_err();
        assert_eq!(err.to_string(), "query parameter 'a' is required");
    }
}
