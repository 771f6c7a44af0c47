//! Space/dash normalization for topic and note names.

/// Converts a user-supplied name to its on-disk form.
///
/// - Trims surrounding whitespace
/// - Replaces each whitespace character with a hyphen
/// - Collapses consecutive hyphens
/// - Trims leading/trailing hyphens
///
/// Case and all other characters are preserved.
///
/// # Examples
///
/// ```
/// use nook::infra::dashify;
///
/// assert_eq!(dashify("Project X"), "Project-X");
/// assert_eq!(dashify("  Kickoff   Call "), "Kickoff-Call");
/// assert_eq!(dashify(""), "");
/// ```
pub fn dashify(name: &str) -> String {
    let mut collapsed = String::with_capacity(name.len());
    let mut prev_was_hyphen = false;
    for c in name.trim().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' {
            if !prev_was_hyphen {
                collapsed.push(c);
            }
            prev_was_hyphen = true;
        } else {
            collapsed.push(c);
            prev_was_hyphen = false;
        }
    }

    collapsed.trim_matches('-').to_string()
}

/// Converts an on-disk name back to display form by turning hyphens into spaces.
///
/// This is lossy: a literal hyphen in the original name reads back as a space.
pub fn undashify(name: &str) -> String {
    name.replace('-', " ")
}
