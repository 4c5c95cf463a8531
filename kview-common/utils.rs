#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Joins non-empty items with `", "`.\
/// Returns `None` when there is nothing left to join.
pub fn join_non_empty<I, S>(items: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for item in items {
        let item = item.as_ref();
        if item.is_empty() {
            continue;
        }

        if !result.is_empty() {
            result.push_str(", ");
        }

        result.push_str(item);
    }

    if result.is_empty() { None } else { Some(result) }
}

/// Returns `Some` with the string slice if it is not empty.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
