use wordsmith_core::LeetTable;

/// Apply every leet substitution in table order.
///
/// Each key is replaced across the whole string before the next key runs, so
/// output of an earlier substitution is visible to later ones.
pub fn leet(value: &str, table: &LeetTable) -> String {
    let mut current = value.to_string();
    for (key, substitute) in table.entries() {
        if current.contains(key) {
            current = current.replace(key, substitute);
        }
    }
    current
}

/// Uppercase the first letter of each whitespace-separated word, lowercase the rest.
pub fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            titled.push(ch);
        } else if at_word_start {
            at_word_start = false;
            titled.extend(ch.to_uppercase());
        } else {
            titled.extend(ch.to_lowercase());
        }
    }
    titled
}

/// Reverse by characters.
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}
