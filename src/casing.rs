//! String casing helpers for display labels

/// Uppercase the first character of a string, leave the rest unchanged
/// Empty input returns an empty string
pub fn capitalise_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Display form of an identifier-like string (`SOME_ENUM_VALUE`, `SomeEnumValue`).
///
/// Only the first character is uppercased; underscores and interior casing
/// come back untouched. Matches the long-standing behaviour of the web
/// front-ends consuming this crate, which render the raw identifier with a
/// capital. See [`enum_to_label`] for the spaced, lowercased form.
pub fn enum_to_nice_string(s: &str) -> String {
    capitalise_first_char(s)
}

/// Humanised label for an identifier-like string: underscores become spaces,
/// a space is inserted before each uppercase letter, the result is trimmed,
/// lowercased, then capitalised.
///
/// # Example
/// ```rust
/// use web_display_formatting::casing::enum_to_label;
///
/// assert_eq!(enum_to_label("SomeEnumValue"), "Some enum value");
/// assert_eq!(enum_to_label("some_value"), "Some value");
/// ```
pub fn enum_to_label(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if c == '_' {
            spaced.push(' ');
        } else if c.is_uppercase() {
            spaced.push(' ');
            spaced.push(c);
        } else {
            spaced.push(c);
        }
    }
    capitalise_first_char(&spaced.trim().to_lowercase())
}

#[easy_ext::ext(CasingExt)]
pub impl<T: AsRef<str>> T {
    /// See [`capitalise_first_char`]
    fn capitalise_first(&self) -> String {
        capitalise_first_char(self.as_ref())
    }

    /// See [`enum_to_label`]
    fn label(&self) -> String {
        enum_to_label(self.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capitalise_empty() {
        assert_eq!(capitalise_first_char(""), "");
    }

    #[test]
    fn capitalise_lowercase() {
        assert_eq!(capitalise_first_char("hello"), "Hello");
    }

    #[test]
    fn capitalise_is_idempotent() {
        assert_eq!(capitalise_first_char("Hello"), "Hello");
    }

    #[test]
    fn capitalise_leaves_rest_alone() {
        assert_eq!(capitalise_first_char("hELLO world"), "HELLO world");
    }

    #[test]
    fn capitalise_unicode_first_char() {
        assert_eq!(capitalise_first_char("école"), "École");
    }

    #[test]
    fn nice_string_keeps_underscores() {
        assert_eq!(enum_to_nice_string("SOME_ENUM_VALUE"), "SOME_ENUM_VALUE");
        assert_eq!(enum_to_nice_string("some_value"), "Some_value");
    }

    #[test]
    fn label_splits_pascal_case() {
        assert_eq!(enum_to_label("SomeEnumValue"), "Some enum value");
    }

    #[test]
    fn label_splits_snake_case() {
        assert_eq!(enum_to_label("some_value"), "Some value");
    }

    #[test]
    fn ext_methods_delegate() {
        assert_eq!("hello".capitalise_first(), "Hello");
        assert_eq!(String::from("other_value").label(), "Other value");
    }
}
