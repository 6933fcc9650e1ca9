// identifier normalization

/// Lower-cases `raw` and collapses every maximal run of characters outside
/// `a`-`z` into a single `_`.
///
/// Leading and trailing runs are kept, so `"!!"` becomes `"_"` while `""` stays
/// empty.
pub fn normalize_part(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;

    //lower-casing first: 'É' -> 'é' which is still outside a-z
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }

    out
}

/// Builds an identifier from a first and last name.
///
/// Each part is normalized on its own and the two are joined at a single word
/// boundary: `"The"` + `"Thing"` gives `"the_thing"`, but a part that already
/// ends (or starts) in an underscore run shares it, so `"What a thing!"` +
/// `"Thing"` gives `"what_a_thing_thing"`. An empty part contributes nothing.
///
/// The boundary underscore is intentional: plain concatenation would give
/// `"thething"` for `"The"` + `"Thing"`.
pub fn identifier(firstname: &str, lastname: &str) -> String {
    let head = normalize_part(firstname);
    let tail = normalize_part(lastname);

    if head.is_empty() {
        return tail;
    }
    if tail.is_empty() {
        return head;
    }

    let mut id = head;
    match (id.ends_with('_'), tail.strip_prefix('_')) {
        //both sides already carry the boundary, keep one
        (true, Some(rest)) => id.push_str(rest),
        (true, None) => id.push_str(&tail),
        (false, Some(_)) => id.push_str(&tail),
        (false, None) => {
            id.push('_');
            id.push_str(&tail);
        }
    }
    id
}

#[cfg(test)]
pub(crate) fn is_identifier(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}
