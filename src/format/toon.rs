// TOON decode/encode for options and things
use serde::{Deserialize, Serialize};
use toon_format::{decode_default, encode_default};

use crate::core::error::ThingError;
use crate::core::options::ThingOptions;
use crate::core::thing::Thing;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BatchDoc {
    things: Option<Vec<ThingOptions>>,
}

#[derive(Serialize)]
struct ThingsDoc<'a> {
    things: &'a [Thing],
}

/// Decodes a single options object. Fields missing from the document stay
/// `None` and are defaulted later by `ThingOptions::resolve`.
pub fn decode_options(input: &str) -> Result<ThingOptions, ThingError> {
    let options: ThingOptions =
        decode_default(input).map_err(|e| ThingError::Decode(e.to_string()))?;

    tracing::debug!(
        firstname = options.firstname.is_some(),
        lastname = options.lastname.is_some(),
        mode = options.mode.is_some(),
        "decoded thing options"
    );
    Ok(options)
}

pub fn decode_batch(input: &str) -> Result<Vec<ThingOptions>, ThingError> {
    let doc: BatchDoc = decode_default(input).map_err(|e| ThingError::Decode(e.to_string()))?;
    let things = doc.things.ok_or(ThingError::MissingBatch)?;

    tracing::debug!(count = things.len(), "decoded thing options batch");
    Ok(things)
}

pub fn build_batch(input: &str) -> Result<Vec<Thing>, ThingError> {
    Ok(decode_batch(input)?.into_iter().map(Thing::new).collect())
}

pub fn encode_thing(thing: &Thing) -> Result<String, ThingError> {
    encode_default(thing).map_err(|e| ThingError::Encode(e.to_string()))
}

pub fn encode_things(things: &[Thing]) -> Result<String, ThingError> {
    encode_default(&ThingsDoc { things }).map_err(|e| ThingError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Mode;

    #[test]
    fn decode_full_options() {
        let opts = decode_options("firstname: Teddy\nlastname: Rex\nmode: FirstNameAbbr").unwrap();
        assert_eq!(opts.firstname.as_deref(), Some("Teddy"));
        assert_eq!(opts.lastname.as_deref(), Some("Rex"));
        assert_eq!(opts.mode, Some(Mode::FirstNameAbbr));
        assert_eq!(Thing::new(opts).name(), "T. Rex");
    }

    #[test]
    fn decode_partial_options_leaves_rest_unset() {
        let opts = decode_options("firstname: The").unwrap();
        assert_eq!(opts.firstname.as_deref(), Some("The"));
        assert!(opts.lastname.is_none());
        assert!(opts.mode.is_none());

        let t = Thing::new(opts);
        assert_eq!(t.id(), "the_thing");
        assert_eq!(t.name(), "The Thing");
    }

    #[test]
    fn decode_unknown_mode_name_is_default() {
        let opts = decode_options("firstname: Ada\nmode: Shouting").unwrap();
        assert_eq!(opts.mode, Some(Mode::Default));
        assert_eq!(Thing::new(opts).name(), "Ada Thing");
    }

    #[test]
    fn decode_numeric_mode_codes() {
        let opts = decode_options("firstname: Ada\nmode: 1").unwrap();
        assert_eq!(opts.mode, Some(Mode::FirstNameOnly));

        let opts = decode_options("firstname: Ada\nmode: 9").unwrap();
        assert_eq!(opts.mode, Some(Mode::Default));
    }

    #[test]
    fn decode_numeric_and_bool_names_are_text() {
        let opts = decode_options("firstname: 123\nlastname: Rex").unwrap();
        assert_eq!(opts.firstname.as_deref(), Some("123"));
        assert_eq!(opts.lastname.as_deref(), Some("Rex"));
        assert_eq!(Thing::new(opts).id(), "_rex");

        let opts = decode_options("firstname: true\nlastname: 42").unwrap();
        assert_eq!(opts.firstname.as_deref(), Some("true"));
        assert_eq!(opts.lastname.as_deref(), Some("42"));

        let t = Thing::new(opts);
        assert_eq!(t.name(), "true 42");
        assert_eq!(t.id(), "true_");
    }

    #[test]
    fn decode_bool_mode_is_default() {
        let opts = decode_options("firstname: Ada\nmode: true").unwrap();
        assert_eq!(opts.mode, Some(Mode::Default));
        assert_eq!(Thing::new(opts).name(), "Ada Thing");
    }

    #[test]
    fn decode_batch_builds_every_thing() {
        let doc = "things[2]{firstname,lastname,mode}:\n  Teddy,Rex,FirstNameAbbr\n  The,Thing,Default";
        let things = build_batch(doc).unwrap();
        assert_eq!(things.len(), 2);
        assert_eq!(things[0].name(), "T. Rex");
        assert_eq!(things[1].id(), "the_thing");
    }

    #[test]
    fn decode_batch_without_list_is_an_error() {
        let err = decode_batch("firstname: The").unwrap_err();
        assert!(matches!(err, ThingError::MissingBatch));
    }

    #[test]
    fn encode_thing_carries_id_and_name() {
        let out = encode_thing(&Thing::default()).unwrap();
        assert!(out.contains("default_thing"), "{out}");
        assert!(out.contains("Default Thing"), "{out}");
    }

    #[test]
    fn encode_things_lists_all_samples() {
        let samples = Thing::samples();
        let out = encode_things(&samples).unwrap();
        assert!(out.contains("things"), "{out}");
        for t in &samples {
            assert!(out.contains(t.id()), "{out}");
        }
    }
}
