// the thing factory
use std::fmt;

use serde::Serialize;

use crate::core::normalize::identifier;
use crate::core::options::{ResolvedOptions, ThingOptions};
use crate::core::types::Mode;

//id and name are fixed at construction, no setters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Thing {
    id: String,
    name: String,
}

impl Thing {
    /// Builds a `Thing`. Total over every input: missing fields take their
    /// defaults and an empty first name abbreviates to nothing.
    pub fn new(options: ThingOptions) -> Self {
        Self::from_resolved(&options.resolve())
    }

    pub fn from_resolved(opts: &ResolvedOptions) -> Self {
        Thing {
            id: identifier(&opts.firstname, &opts.lastname),
            name: display_name(&opts.firstname, &opts.lastname, opts.mode),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_parts(self) -> (String, String) {
        (self.id, self.name)
    }

    //the three demo things
    pub fn samples() -> [Thing; 3] {
        [
            Thing::new(ThingOptions::new().with_firstname("The")),
            Thing::new(
                ThingOptions::new()
                    .with_firstname("Teddy")
                    .with_lastname("Rex")
                    .with_mode(Mode::FirstNameAbbr),
            ),
            Thing::new(
                ThingOptions::new()
                    .with_firstname("What a thing!")
                    .with_mode(Mode::FirstNameOnly),
            ),
        ]
    }
}

pub fn display_name(firstname: &str, lastname: &str, mode: Mode) -> String {
    match mode {
        Mode::FirstNameOnly => firstname.to_string(),
        Mode::FirstNameAbbr => {
            //empty firstname -> empty abbreviation
            let abbr = firstname.chars().next().map(String::from).unwrap_or_default();
            format!("{abbr}. {lastname}")
        }
        Mode::Default => format!("{firstname} {lastname}"),
    }
}

impl Default for Thing {
    fn default() -> Self {
        Thing::new(ThingOptions::default())
    }
}

impl From<ThingOptions> for Thing {
    fn from(options: ThingOptions) -> Self {
        Thing::new(options)
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
