//! Activity text with a named system placeholder.

/// Free text that may reference the target system as `{system}`.
///
/// Any other `{...}` sequence is left as written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Template(String);

impl Template {
    pub const SYSTEM: &'static str = "{system}";

    const LEGACY_PHRASE: &'static str = "target system";

    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Converts text written with the literal phrase "target system" (any
    /// case) to the placeholder form.
    pub fn from_legacy(text: &str) -> Self {
        let lowered = text.to_ascii_lowercase();
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        while let Some(offset) = lowered[cursor..].find(Self::LEGACY_PHRASE) {
            let start = cursor + offset;
            out.push_str(&text[cursor..start]);
            out.push_str(Self::SYSTEM);
            cursor = start + Self::LEGACY_PHRASE.len();
        }
        out.push_str(&text[cursor..]);
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_placeholder(&self) -> bool {
        self.0.contains(Self::SYSTEM)
    }

    /// Renders the text with `system` in place of every `{system}`.
    pub fn render(&self, system: &str) -> String {
        let mut out = String::with_capacity(self.0.len() + system.len());
        let mut rest = self.0.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            match tail.find('}') {
                Some(close) if &tail[1..close] == "system" => {
                    out.push_str(system);
                    rest = &tail[close + 1..];
                }
                _ => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self(text)
    }
}
