//! Ordered `key = value` accumulator with the newline-stripping guard.

use std::fmt;

/// Remove every line break from `value`.
///
/// Stripped, not escaped: Samba has no escape syntax for directive
/// values, and a surviving line break would start a new directive.
pub fn strip_newlines(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// An ordered list of Samba directives.
///
/// Keys and values are newline-stripped on insertion, so whatever is
/// rendered is exactly one line per directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    entries: Vec<(String, String)>,
}

impl Directives {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key = value`.
    pub fn push(&mut self, key: &str, value: impl AsRef<str>) -> &mut Self {
        self.entries
            .push((strip_newlines(key), strip_newlines(value.as_ref())));
        self
    }

    /// Append `key = value` when `value` is present and not blank.
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.push(key, v);
        }
        self
    }

    /// Append `key = yes|no`.
    pub fn push_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.push(key, if value { "yes" } else { "no" })
    }

    /// Append every directive of `other`, preserving order.
    pub fn extend(&mut self, other: Directives) -> &mut Self {
        self.entries.extend(other.entries);
        self
    }

    /// Number of directives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no directive has been pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render one `key = value` line per directive, each prefixed by
    /// `indent` and terminated by `\n`.
    pub fn render(&self, indent: &str) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(indent);
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Directives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_strips_line_breaks() {
        let mut d = Directives::new();
        d.push("valid users", "bob\nwrite list = mallory\r");
        assert_eq!(d.render(""), "valid users = bobwrite list = mallory\n");
        assert_eq!(d.render("").lines().count(), 1);
    }

    #[test]
    fn test_push_opt_skips_blank() {
        let mut d = Directives::new();
        d.push_opt("force user", None)
            .push_opt("force group", Some("   "))
            .push_opt("comment", Some("hi"));
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("comment"), Some("hi"));
    }

    #[test]
    fn test_render_indents_every_line() {
        let mut d = Directives::new();
        d.push("path", "/mnt/a").push_bool("guest ok", false);
        assert_eq!(d.render("  "), "  path = /mnt/a\n  guest ok = no\n");
        assert_eq!(d.to_string(), "path = /mnt/a\nguest ok = no\n");
    }
}
