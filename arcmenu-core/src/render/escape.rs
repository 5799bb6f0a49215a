//! Markup escaping for untrusted entry text.

use std::fmt::{self, Display};

/// Text that has been escaped for embedding in markup.
///
/// The only way to build one is [`EscapedText::escape`], so a descriptor
/// field of this type cannot carry raw host text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct EscapedText(String);

impl EscapedText {
    /// Escapes `& < > " '`, which makes the result safe both as element
    /// text and inside a quoted attribute.
    pub fn escape(raw: &str) -> Self {
        Self(html_escape::encode_quoted_attribute(raw).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EscapedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_markup_characters() {
        let escaped =
            EscapedText::escape(r#"<img src=x onerror="alert('&')">"#);
        assert_eq!(
            escaped.as_str(),
            "&lt;img src=x onerror=&quot;alert(&#x27;&amp;&#x27;)&quot;&gt;"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(EscapedText::escape("Buy Burger ($5)").as_str(), "Buy Burger ($5)");
    }
}
