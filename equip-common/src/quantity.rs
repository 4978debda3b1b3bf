//! suggested quantity helpers

/// Drops everything but ascii digits from a magnitude input. The editable
/// magnitude is integer-only.
pub fn sanitize_magnitude(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Composes the stored `suggestedQuantity` string from a magnitude and the
/// asset's own measure unit. An empty magnitude composes the empty string,
/// never `"NaN <unit>"`.
pub fn compose_quantity(magnitude: &str, unit: &str) -> String {
    if magnitude.is_empty() {
        return String::new();
    }
    format!("{} {}", magnitude, unit).trim().to_string()
}

/// Leading integer digits of a composed quantity string, e.g. `"5 L"` -> `"5"`.
pub fn magnitude_of(quantity: &str) -> String {
    quantity
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect()
}
