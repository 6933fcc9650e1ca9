// options record + default substitution
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::core::types::Mode;

pub const DEFAULT_FIRSTNAME: &str = "Default";
pub const DEFAULT_LASTNAME: &str = "Thing";

/// Input for building a `Thing`. Every field is optional and defaults
/// independently of the others.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThingOptions {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "scalar_text")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "scalar_text")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

//all fields definite, only built by `ThingOptions::resolve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub firstname: String,
    pub lastname: String,
    pub mode: Mode,
}

impl ThingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    pub fn with_lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.firstname.is_none() && self.lastname.is_none() && self.mode.is_none()
    }

    //the only place defaults are applied
    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            firstname: self.firstname.unwrap_or_else(|| DEFAULT_FIRSTNAME.to_string()),
            lastname: self.lastname.unwrap_or_else(|| DEFAULT_LASTNAME.to_string()),
            mode: self.mode.unwrap_or_default(),
        }
    }
}

impl From<ResolvedOptions> for ThingOptions {
    fn from(r: ResolvedOptions) -> Self {
        ThingOptions {
            firstname: Some(r.firstname),
            lastname: Some(r.lastname),
            mode: Some(r.mode),
        }
    }
}

//names are text, but a document may spell `42` or `true` bare
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a name as text, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, d: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            d.deserialize_any(TextVisitor)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}
