use serde::{Deserialize, Deserializer, de};

/// Integer fields sent by the web client arrive either as JSON numbers or as
/// numeric strings taken straight from form inputs.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_i32<E: de::Error>(self) -> Result<i32, E> {
        let value = match self {
            NumberOrString::Number(n) => n,
            NumberOrString::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got \"{}\"", s)))?,
        };

        i32::try_from(value).map_err(|_| E::custom(format!("integer {} is out of range", value)))
    }
}

pub fn lenient_i32_opt<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_i32)
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::lenient_i32_opt;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient_i32_opt")]
        value: Option<i32>,
    }

    fn parse(json: &str) -> Result<Holder, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"value": 4}"#).unwrap().value, Some(4));
        assert_eq!(parse(r#"{"value": " 12 "}"#).unwrap().value, Some(12));
    }

    #[test]
    fn missing_and_null_are_none() {
        assert_eq!(parse(r#"{}"#).unwrap().value, None);
        assert_eq!(parse(r#"{"value": null}"#).unwrap().value, None);
    }

    #[test]
    fn rejects_garbage_and_overflow() {
        assert!(parse(r#"{"value": "abc"}"#).is_err());
        assert!(parse(r#"{"value": 99999999999}"#).is_err());
        assert!(parse(r#"{"value": true}"#).is_err());
    }
}
