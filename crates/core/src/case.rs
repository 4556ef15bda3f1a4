/// Converts a mixed-case identifier to its underscore-delimited lowercase
/// form.
///
/// A separator is inserted before each uppercase letter that follows a
/// lowercase letter or digit. A run of consecutive uppercase letters counts
/// as one word; the run splits before its last letter when a lowercase letter
/// follows (`HTTPStatus` -> `http_status`). Input that is already in
/// delimited lowercase form comes back unchanged.
pub fn to_delimited_lowercase(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut converted = String::with_capacity(text.len() + 4);

    for (index, &current) in chars.iter().enumerate() {
        if index > 0 && current.is_uppercase() {
            let previous = chars[index - 1];
            let word_boundary = previous.is_lowercase() || previous.is_ascii_digit();
            let run_boundary = previous.is_uppercase()
                && chars.get(index + 1).is_some_and(|next| next.is_lowercase());
            if word_boundary || run_boundary {
                converted.push('_');
            }
        }
        converted.extend(current.to_lowercase());
    }

    converted
}
