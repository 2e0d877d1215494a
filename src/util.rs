use regex::Regex;
use std::sync::OnceLock;

/// Escape a string for use inside a quoted WML value.
///
/// WML has no backslash escapes; an embedded `"` is written as `""`.
pub fn escape_string(s: &str) -> String {
    s.replace('"', "\"\"")
}

/// Prefix every non-empty line of `text` with `depth` tab characters.
///
/// Empty lines are left alone so blank separators inside a raw block
/// don't pick up trailing whitespace.
pub fn indent_string(text: &str, depth: usize) -> String {
    static LINE_START: OnceLock<Regex> = OnceLock::new();
    if depth == 0 {
        return text.to_string();
    }
    let re = LINE_START.get_or_init(|| Regex::new(r"(?m)^([^\n])").expect("static regex"));
    let prefix = "\t".repeat(depth);
    re.replace_all(text, format!("{}$1", prefix).as_str())
        .into_owned()
}
