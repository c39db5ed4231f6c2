//! Serialization helpers for descriptor fields

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::livecheck::LivecheckUrl;

/// Accept either a single value or a list of values, always store a `Vec`
///
/// Serializes a single-element list back as the bare value so that
/// round-tripped descriptors keep the short form.
pub mod one_or_many {
    use super::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    pub fn serialize<T, S>(values: &[T], serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match values {
            [single] => single.serialize(serializer),
            _ => values.serialize(serializer),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        })
    }
}

impl Serialize for LivecheckUrl {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LivecheckUrl::Download => serializer.serialize_str("url"),
            LivecheckUrl::Custom(url) => serializer.serialize_str(url),
        }
    }
}

impl<'de> Deserialize<'de> for LivecheckUrl {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LivecheckUrlVisitor;

        impl Visitor<'_> for LivecheckUrlVisitor {
            type Value = LivecheckUrl;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("'self', 'url' or an http(s) URL")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<LivecheckUrl, E>
            where
                E: de::Error,
            {
                match value.trim() {
                    "self" | "url" | ":url" => Ok(LivecheckUrl::Download),
                    "" => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
                    other => Ok(LivecheckUrl::Custom(other.to_string())),
                }
            }
        }

        deserializer.deserialize_str(LivecheckUrlVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        #[serde(with = "one_or_many")]
        items: Vec<String>,
    }

    #[test]
    fn test_one_or_many_single() {
        let holder: Holder = serde_yaml::from_str("items: a").unwrap();
        assert_eq!(holder.items, vec!["a"]);
    }

    #[test]
    fn test_one_or_many_list() {
        let holder: Holder = serde_yaml::from_str("items: [a, b]").unwrap();
        assert_eq!(holder.items, vec!["a", "b"]);
    }

    #[test]
    fn test_one_or_many_serializes_single_as_scalar() {
        let holder = Holder {
            items: vec!["a".to_string()],
        };
        let yaml = serde_yaml::to_string(&holder).unwrap();
        assert_eq!(yaml.trim(), "items: a");
    }

    #[test]
    fn test_livecheck_url_forms() {
        for raw in ["self", "url", "':url'"] {
            let parsed: LivecheckUrl = serde_yaml::from_str(raw).unwrap();
            assert_eq!(parsed, LivecheckUrl::Download);
        }

        let parsed: LivecheckUrl =
            serde_yaml::from_str("https://example.com/releases").unwrap();
        assert_eq!(
            parsed,
            LivecheckUrl::Custom("https://example.com/releases".to_string())
        );
    }

    #[test]
    fn test_livecheck_url_empty_rejected() {
        let parsed: std::result::Result<LivecheckUrl, _> = serde_yaml::from_str("''");
        assert!(parsed.is_err());
    }
}
