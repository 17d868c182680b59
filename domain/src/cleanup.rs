/// Strip bullet artifacts left over from PDF extraction, collapse all
/// whitespace runs (newlines included) to single spaces, and trim.
pub fn clean_response(raw: &str) -> String {
    raw.replace('\u{2022}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
