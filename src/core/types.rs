// naming modes
use std::convert::Infallible;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Selects how a `Thing`'s display name is derived from its first and last name.
///
/// Conversions into `Mode` never fail: any code, name or other scalar outside
/// the known set resolves to `Mode::Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    #[default]
    Default,
    FirstNameOnly,
    FirstNameAbbr,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Default, Mode::FirstNameOnly, Mode::FirstNameAbbr];

    pub fn code(self) -> u8 {
        match self {
            Mode::Default => 0,
            Mode::FirstNameOnly => 1,
            Mode::FirstNameAbbr => 2,
        }
    }

    pub fn from_code(code: i64) -> Mode {
        match code {
            1 => Mode::FirstNameOnly,
            2 => Mode::FirstNameAbbr,
            _ => Mode::Default,
        }
    }

    //accepts "FirstNameAbbr", "first_name_abbr", "first-name-abbr", ...
    pub fn from_name(name: &str) -> Mode {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "firstnameonly" => Mode::FirstNameOnly,
            "firstnameabbr" => Mode::FirstNameAbbr,
            _ => Mode::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Default => "Default",
            Mode::FirstNameOnly => "FirstNameOnly",
            Mode::FirstNameAbbr => "FirstNameAbbr",
        }
    }
}

impl From<i64> for Mode {
    fn from(code: i64) -> Self {
        Mode::from_code(code)
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from_name(s))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//decodes from a variant name or a numeric code, never rejects a scalar
impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ModeVisitor;

        impl<'de> Visitor<'de> for ModeVisitor {
            type Value = Mode;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a mode name or numeric code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Mode, E> {
                Ok(Mode::from_name(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Mode, E> {
                Ok(Mode::from_code(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Mode, E> {
                Ok(i64::try_from(v).map(Mode::from_code).unwrap_or_default())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Mode, E> {
                if v.fract() == 0.0 {
                    Ok(Mode::from_code(v as i64))
                } else {
                    Ok(Mode::Default)
                }
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Mode, E> {
                Ok(Mode::Default)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Mode, E> {
                Ok(Mode::Default)
            }
        }

        deserializer.deserialize_any(ModeVisitor)
    }
}
