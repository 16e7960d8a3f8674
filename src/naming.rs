//! Output file naming helpers.
//!
//! Android resource names must be lower snake_case; iOS asset stems follow
//! the PascalCase convention used by Xcode-generated catalogs.

/// Convert an arbitrary file stem to lower snake_case.
pub fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_lower = false;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = ch.is_lowercase() || ch.is_numeric();
        } else if !out.ends_with('_') && !out.is_empty() {
            out.push('_');
            prev_lower = false;
        }
    }
    out.trim_end_matches('_').to_string()
}

/// Convert an arbitrary file stem to PascalCase.
pub fn to_pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = true;
    let mut prev_lower = false;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower {
                upper_next = true;
            }
            if upper_next {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            upper_next = false;
            prev_lower = ch.is_lowercase() || ch.is_numeric();
        } else {
            upper_next = true;
            prev_lower = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_handles_separators_and_camel_humps() {
        assert_eq!(to_snake_case("logo"), "logo");
        assert_eq!(to_snake_case("my-app icon"), "my_app_icon");
        assert_eq!(to_snake_case("MyAppIcon"), "my_app_icon");
        assert_eq!(to_snake_case("icon_2x"), "icon_2x");
    }

    #[test]
    fn pascal_case_handles_separators_and_camel_humps() {
        assert_eq!(to_pascal_case("logo"), "Logo");
        assert_eq!(to_pascal_case("my-app icon"), "MyAppIcon");
        assert_eq!(to_pascal_case("myAppIcon"), "MyAppIcon");
    }
}
