//! Synchronized three-format message rendering.
//!
//! Every notification is rendered in three parallel representations: plain
//! text (email alternative part), HTML (email body), and chat markup
//! (WhatsApp). [`MessageBuilder`] appends to all three at once so the
//! formats cannot drift apart; section renderers return a finished
//! [`Rendered`] triple that the composer folds together.

/// A message fragment in all three output formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub html: String,
    pub chat: String,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.html.is_empty() && self.chat.is_empty()
    }

    /// Append another fragment, separating the plain-text and chat forms
    /// with a blank line when both sides are non-empty.
    pub fn push(&mut self, other: &Rendered) {
        if other.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        if !self.chat.is_empty() {
            self.chat.push('\n');
        }
        self.text.push_str(&other.text);
        self.html.push_str(&other.html);
        self.chat.push_str(&other.chat);
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Builds a [`Rendered`] fragment, writing every element to all three
/// formats in one call.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    text: String,
    html: String,
    chat: String,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section heading: underlined in text, `<h3>` in HTML, bold in chat.
    pub fn heading(&mut self, title: &str) -> &mut Self {
        self.text.push_str(title);
        self.text.push('\n');
        self.text.push_str(&"-".repeat(title.chars().count()));
        self.text.push('\n');

        self.html.push_str("<h3>");
        self.html.push_str(&escape_html(title));
        self.html.push_str("</h3>\n");

        self.chat.push('*');
        self.chat.push_str(title);
        self.chat.push_str("*\n");
        self
    }

    /// One line of body content.
    pub fn line(&mut self, content: &str) -> &mut Self {
        self.text.push_str(content);
        self.text.push('\n');

        self.html.push_str("<p>");
        self.html.push_str(&escape_html(content));
        self.html.push_str("</p>\n");

        self.chat.push_str(content);
        self.chat.push('\n');
        self
    }

    /// One indented bullet item.
    pub fn item(&mut self, content: &str) -> &mut Self {
        self.text.push_str("  - ");
        self.text.push_str(content);
        self.text.push('\n');

        self.html.push_str("<p>&bull; ");
        self.html.push_str(&escape_html(content));
        self.html.push_str("</p>\n");

        self.chat.push_str("- ");
        self.chat.push_str(content);
        self.chat.push('\n');
        self
    }

    /// Blank separator line in the text and chat forms.
    pub fn blank(&mut self) -> &mut Self {
        self.text.push('\n');
        self.chat.push('\n');
        self
    }

    pub fn finish(self) -> Rendered {
        Rendered {
            text: self.text,
            html: self.html,
            chat: self.chat,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_appears_in_all_three_formats() {
        let mut builder = MessageBuilder::new();
        builder.heading("Flight Details");
        let rendered = builder.finish();

        assert!(rendered.text.starts_with("Flight Details\n--------------\n"));
        assert_eq!(rendered.html, "<h3>Flight Details</h3>\n");
        assert_eq!(rendered.chat, "*Flight Details*\n");
    }

    #[test]
    fn lines_and_items_stay_in_sync() {
        let mut builder = MessageBuilder::new();
        builder.line("AA 100").item("Seat 2A");
        let rendered = builder.finish();

        assert_eq!(rendered.text, "AA 100\n  - Seat 2A\n");
        assert_eq!(rendered.html, "<p>AA 100</p>\n<p>&bull; Seat 2A</p>\n");
        assert_eq!(rendered.chat, "AA 100\n- Seat 2A\n");
    }

    #[test]
    fn html_is_escaped() {
        let mut builder = MessageBuilder::new();
        builder.line("Smith & Co <VIP>");
        let rendered = builder.finish();

        assert!(rendered.html.contains("Smith &amp; Co &lt;VIP&gt;"));
        // The text and chat forms keep the raw characters.
        assert!(rendered.text.contains("Smith & Co <VIP>"));
        assert!(rendered.chat.contains("Smith & Co <VIP>"));
    }

    #[test]
    fn escape_html_covers_quotes() {
        assert_eq!(
            escape_html(r#"a"b'c"#),
            "a&quot;b&#39;c"
        );
    }

    #[test]
    fn push_separates_fragments() {
        let mut first = MessageBuilder::new();
        first.line("one");
        let mut combined = first.finish();

        let mut second = MessageBuilder::new();
        second.line("two");
        combined.push(&second.finish());

        assert_eq!(combined.text, "one\n\ntwo\n");
        assert_eq!(combined.chat, "one\n\ntwo\n");
        assert_eq!(combined.html, "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn push_ignores_empty_fragments() {
        let mut base = Rendered::default();
        base.push(&Rendered::default());
        assert!(base.is_empty());

        let mut builder = MessageBuilder::new();
        builder.line("content");
        base.push(&builder.finish());
        assert_eq!(base.text, "content\n");
    }
}
