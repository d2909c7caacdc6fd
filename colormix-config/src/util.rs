use std::collections::HashMap;

/// Look up `name` in a captured environment, treating blank values as unset.
pub fn non_empty_var<'a>(
    vars: &'a HashMap<String, String>,
    name: &str,
) -> Option<&'a str> {
    vars.get(name)
        .map(|raw| raw.trim())
        .filter(|trimmed| !trimmed.is_empty())
}
