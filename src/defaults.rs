/// Cascading default resolution.
///
/// Returns the payload of `value` when it is present and not equal to any
/// entry in `skip`, otherwise `fallback`. `skip` lists the extra "empty"
/// representations for the field at hand (empty string, `"1"` units, ...).
///
/// A value equal to the fallback is still the value, this selects a
/// fallback, it does not deduplicate.
pub fn with_default<T: PartialEq>(value: Option<T>, fallback: Option<T>, skip: &[T]) -> Option<T> {
    match value {
        Some(value) if !skip.contains(&value) => Some(value),
        _ => fallback,
    }
}
