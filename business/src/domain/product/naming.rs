use std::collections::HashSet;

use super::errors::ProductError;
use super::policies::NameSuffix;

/// Returns `name` unchanged when it is free, otherwise the first of
/// `name` + 1, `name` + 2, ... (formatted by `suffix`) that appears nowhere in
/// `existing`.
///
/// Every candidate is distinct, so at most `existing.len() + 1` candidates are
/// tried. Callers reject blank names before getting here; a blank name is
/// reported as [`ProductError::NameEmpty`].
pub fn uniquify_name<S: AsRef<str>>(
    name: &str,
    existing: &[S],
    suffix: NameSuffix,
) -> Result<String, ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }

    let taken: HashSet<&str> = existing.iter().map(AsRef::as_ref).collect();
    if !taken.contains(name) {
        return Ok(name.to_string());
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = suffix.apply(name, counter);
        if !taken.contains(candidate.as_str()) {
            return Ok(candidate);
        }
        counter += 1;
    }
}
