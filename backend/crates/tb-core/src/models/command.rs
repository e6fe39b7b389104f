use serde::Serialize;

/// A free-text instruction for the tracker's command grammar.
///
/// Immutable once built. The target issue travels separately in
/// [`CommandRequest`](crate::CommandRequest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// `<DisplayName> <value>`, quoting the value when the grammar needs it
    pub fn field(display_name: &str, value: &str) -> Self {
        Self(format!("{} {}", display_name, quote_value(value)))
    }

    /// `<phrase> <target>` with runs of whitespace in the phrase collapsed.
    /// An empty phrase falls back to `default_phrase`.
    pub fn link(phrase: Option<&str>, default_phrase: &str, target: &str) -> Self {
        let collapse = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");

        let phrase = phrase.map(collapse).filter(|p| !p.is_empty());
        let phrase = phrase.unwrap_or_else(|| collapse(default_phrase));

        Self(format!("{} {}", phrase, target))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrap in double quotes when the value contains whitespace or a quote;
/// embedded quotes are backslash-escaped.
pub fn quote_value(value: &str) -> String {
    if value.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
