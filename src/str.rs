//! Text helpers shared by the node renderers: identifier quoting, string
//! literal escaping, qualified-name joining, and the inline diagnostic
//! marker for values no renderer knows about.

use std::fmt;

/// Keywords that force quoting when used as a bare identifier. This is the
/// fully-reserved subset of the PostgreSQL keyword list; unreserved keywords
/// are legal identifiers and stay unquoted.
const RESERVED_KEYWORDS: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc",
    "asymmetric", "both", "case", "cast", "check", "collate", "column",
    "constraint", "create", "current_catalog", "current_date", "current_role",
    "current_time", "current_timestamp", "current_user", "default",
    "deferrable", "desc", "distinct", "do", "else", "end", "except", "false",
    "fetch", "for", "foreign", "from", "grant", "group", "having", "in",
    "initially", "intersect", "into", "lateral", "leading", "limit",
    "localtime", "localtimestamp", "not", "null", "offset", "on", "only",
    "or", "order", "placing", "primary", "references", "returning", "select",
    "session_user", "some", "symmetric", "system_user", "table", "then",
    "to", "trailing", "true", "union", "unique", "user", "using", "variadic",
    "when", "where", "window", "with",
];

/// Returns true when `name` can appear in SQL text without double quotes:
/// starts with a lowercase letter or underscore, continues with lowercase
/// letters, digits, underscores or `$`, and is not a reserved keyword.
fn is_simple_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$') {
        return false;
    }
    !RESERVED_KEYWORDS.contains(&name)
}

/// Renders an identifier, double-quoting it (with embedded quotes doubled)
/// unless it is simple enough to stand bare.
pub fn quote_identifier(name: &str) -> String {
    if is_simple_identifier(name) {
        name.to_string()
    } else {
        let mut out = String::with_capacity(name.len() + 2);
        out.push('"');
        for c in name.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
        out
    }
}

/// Renders a string constant as a single-quoted SQL literal. Embedded single
/// quotes are doubled; strings containing backslashes use the `E''` escape
/// form so the backslash survives reparsing under any `standard_conforming_strings`
/// setting.
pub fn string_literal(value: &str) -> String {
    let escape = value.contains('\\');
    let mut out = String::with_capacity(value.len() + 2);
    if escape {
        out.push('E');
    }
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\\' if escape => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Joins the parts of a possibly-qualified name with `.`, quoting each part
/// as needed. Empty parts are skipped so optional catalog/schema prefixes
/// collapse cleanly.
pub fn qualified_name<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('.');
        }
        out.push_str(&quote_identifier(part));
    }
    out
}

/// Renders a code block (function or `do` body) with dollar quoting, falling
/// back through alternative tags when the body itself contains the tag, and
/// to a plain string literal as a last resort.
pub fn dollar_quote(body: &str) -> String {
    for tag in ["$$", "$body$", "$fn$"] {
        if !body.contains(tag) {
            return format!("{tag}{body}{tag}");
        }
    }
    string_literal(body)
}

/// Formats the diagnostic marker emitted when a renderer meets a value it
/// has no syntax for (unknown flag bits, out-of-range discriminants).
///
/// Rendering never fails: the marker lands inline in the produced SQL so a
/// batch render completes and the gap is visible in the output rather than
/// silently mis-rendered.
pub fn unknown_value(what: &str, value: impl fmt::Display) -> String {
    format!("<<unknown {what}: {value}>>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_identifiers_stay_bare() {
        assert_eq!(quote_identifier("users"), "users");
        assert_eq!(quote_identifier("_tmp1"), "_tmp1");
        assert_eq!(quote_identifier("a$b"), "a$b");
    }

    #[test]
    fn identifiers_needing_quotes_get_them() {
        assert_eq!(quote_identifier("Users"), "\"Users\"");
        assert_eq!(quote_identifier("select"), "\"select\"");
        assert_eq!(quote_identifier("my table"), "\"my table\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
        assert_eq!(quote_identifier("1st"), "\"1st\"");
        assert_eq!(quote_identifier(""), "\"\"");
    }

    #[test]
    fn string_literals_escape_quotes() {
        assert_eq!(string_literal("abc"), "'abc'");
        assert_eq!(string_literal("it's"), "'it''s'");
        assert_eq!(string_literal("a\\b"), "E'a\\\\b'");
    }

    #[test]
    fn qualified_names_skip_empty_parts() {
        assert_eq!(qualified_name(["", "public", "users"]), "public.users");
        assert_eq!(qualified_name(["db", "S chema", "t"]), "db.\"S chema\".t");
    }

    #[test]
    fn unknown_marker_is_detectable() {
        let marker = unknown_value("trigger event", 0x40);
        assert!(marker.contains("<<unknown"));
        assert!(marker.contains("64"));
    }
}
