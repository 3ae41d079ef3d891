//! Name cleaning: strips contact details and ID numbers that end up glued to a
//! candidate name, then collapses whitespace.

use crate::extraction::patterns::{CNIC, EMAIL, PHONE_LOOSE};

/// Removes email, phone and CNIC shaped substrings from `name`, in that order,
/// and collapses whitespace runs to single spaces.
///
/// Removal repeats until none of the three patterns matches. A removal can
/// splice two digit fragments into a fresh phone-shaped run, and a single pass
/// would leave it behind.
///
/// Accepts `&str` or `Option<&str>`; empty and absent input both yield `""`.
pub fn clean_name<'a>(name: impl Into<Option<&'a str>>) -> String {
    let Some(name) = name.into() else {
        return String::new();
    };
    if name.is_empty() {
        return String::new();
    }

    let mut current = name.to_string();
    loop {
        let stripped = strip_pass(&current);
        if stripped.len() == current.len() {
            break;
        }
        current = stripped;
    }

    current.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_pass(input: &str) -> String {
    let without_email = EMAIL.replace_all(input, "");
    let without_phone = PHONE_LOOSE.replace_all(&without_email, "");
    CNIC.replace_all(&without_phone, "").into_owned()
}
