//! Class token editing on a raw `className` string.
//!
//! Used when an element exposes no token list. Tokens are whitespace
//! separated and compared whole, so removing `hidden` leaves `unhidden` alone.

#[cfg(test)]
#[path = "class_list_test.rs"]
mod class_list_test;

pub fn has_class(class_name: &str, token: &str) -> bool {
    class_name.split_whitespace().any(|t| t == token)
}

/// Append `token` unless it is already present.
pub fn add_class(class_name: &str, token: &str) -> String {
    if has_class(class_name, token) {
        return class_name.to_owned();
    }
    let trimmed = class_name.trim_end();
    if trimmed.trim_start().is_empty() {
        token.to_owned()
    } else {
        format!("{trimmed} {token}")
    }
}

/// Strip every occurrence of `token`.
pub fn remove_class(class_name: &str, token: &str) -> String {
    if !has_class(class_name, token) {
        return class_name.to_owned();
    }
    class_name
        .split_whitespace()
        .filter(|t| *t != token)
        .collect::<Vec<_>>()
        .join(" ")
}
