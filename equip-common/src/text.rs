//! display text helpers

/// Strips brackets and quotes from list-like serialized text, e.g.
/// `["R1","R2"]` -> `R1,R2`. Some service fields carry their list syntax
/// straight into the payload.
pub fn strip_list_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}
