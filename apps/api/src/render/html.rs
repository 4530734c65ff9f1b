//! Escaping markup writer used by every template.
//!
//! User-supplied strings only reach the output through [`Html::text`], which
//! escapes `& < > " '`. [`Html::raw`] is reserved for template-owned literals.

use std::borrow::Cow;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[derive(Debug, Default)]
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends template-owned markup verbatim.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Appends escaped user text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    /// `<tag class="class">`; an empty class emits a bare tag.
    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        if class.is_empty() {
            self.buf.push('<');
            self.buf.push_str(tag);
            self.buf.push('>');
        } else {
            self.buf.push_str(&format!("<{tag} class=\"{class}\">"));
        }
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str(&format!("</{tag}>"));
        self
    }

    /// A complete element wrapping escaped text.
    pub fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class).text(text).close(tag)
    }

    /// Like [`Html::element`] but emits nothing for blank text.
    pub fn element_if(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        if !text.trim().is_empty() {
            self.element(tag, class, text);
        }
        self
    }

    /// Non-blank parts joined by an escaped separator.
    pub fn joined<'a, I>(&mut self, parts: I, separator: &str) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut first = true;
        for part in parts.into_iter().filter(|p| !p.trim().is_empty()) {
            if !first {
                self.text(separator);
            }
            self.text(part);
            first = false;
        }
        self
    }

    /// `<ul class="class"><li>..</li></ul>` over the non-blank items; nothing if none remain.
    pub fn list(&mut self, class: &str, items: &[String]) -> &mut Self {
        let mut items = items.iter().filter(|i| !i.trim().is_empty()).peekable();
        if items.peek().is_none() {
            return self;
        }
        self.open("ul", class);
        for item in items {
            self.element("li", "", item);
        }
        self.close("ul")
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// True when the string carries something worth rendering.
pub fn present(text: &str) -> bool {
    !text.trim().is_empty()
}

/// True when at least one entry of a string list is non-blank.
pub fn any_present(items: &[String]) -> bool {
    items.iter().any(|item| present(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_text_borrowed() {
        assert!(matches!(escape("Rust & Go"), Cow::Owned(_)));
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_element_escapes_text_but_not_tags() {
        let mut html = Html::new();
        html.element("p", "note", "a < b");
        assert_eq!(html.finish(), r#"<p class="note">a &lt; b</p>"#);
    }

    #[test]
    fn test_element_if_skips_blank() {
        let mut html = Html::new();
        html.element_if("p", "", "  ");
        assert!(html.is_empty());
    }

    #[test]
    fn test_joined_skips_blank_parts() {
        let mut html = Html::new();
        html.joined(["a@b.com", "", "Boston"], " | ");
        assert_eq!(html.finish(), "a@b.com | Boston");
    }

    #[test]
    fn test_list_omits_empty_list() {
        let mut html = Html::new();
        html.list("items", &["".to_string(), " ".to_string()]);
        assert!(html.is_empty());

        let mut html = Html::new();
        html.list("items", &["One".to_string()]);
        assert_eq!(html.finish(), r#"<ul class="items"><li>One</li></ul>"#);
    }
}
