use regex::Regex;

/// Returns every `<time>` value found in `gpx`, in document order,
/// duplicates included.
///
/// The capture is non-greedy, so each `<time>` pairs with the **nearest**
/// following `</time>`, never skipping past one to reach a later one. A
/// start marker with no closing marker after it yields no field.
pub(crate) fn time_fields(gpx: &str) -> Vec<&str> {
    let re: Regex = Regex::new(r"<time>(.*?)</time>").unwrap();
    re.captures_iter(gpx)
        .filter_map(|caps| caps.get(1))
        .map(|value| value.as_str())
        .collect()
}
