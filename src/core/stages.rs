use std::collections::HashSet;

/// Merges comma-separated stage lists into one, keeping the first occurrence
/// of each token. `None` and blank values are skipped; tokens are trimmed and
/// empty tokens dropped.
pub fn merge_stages<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged: Vec<&str> = Vec::new();

    for value in values.into_iter().flatten() {
        for token in value.split(',').map(str::trim) {
            if !token.is_empty() && seen.insert(token) {
                merged.push(token);
            }
        }
    }

    merged.join(",")
}
