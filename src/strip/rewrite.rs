//! Textual removal of inline `fontFamily` declarations
//!
//! A fragment is `fontFamily`, a colon, a single- or double-quoted value that
//! stays on one line, and an optional trailing comma. It only counts when it
//! starts the text or follows whitespace, a comma or an opening brace; that
//! preceding character is left in place. Whitespace after the fragment is
//! consumed with it.
//!
//! After removal the whole text is normalized:
//!
//! - `{,` becomes `{`
//! - a comma followed (ignoring whitespace) by `}` or `]` is dropped
//! - `{]` or `[]` followed by a comma collapses to the opener
//!
//! Content without fragments is returned untouched, so the normalization never
//! runs on files that have nothing to remove.

use regex::Regex;

/// Result of rewriting one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub replacements: usize,
}

impl Rewrite {
    pub fn is_changed(&self) -> bool {
        self.replacements > 0
    }
}

pub struct FontFamilyRewriter {
    fragment: Regex,
    dangling_comma: Regex,
    stray_bracket: Regex,
}

impl FontFamilyRewriter {
    pub fn new() -> Self {
        Self {
            fragment: Regex::new(r#"fontFamily\s*:\s*(?:"[^"\n]*"|'[^'\n]*')\s*(?:,\s*)?"#)
                .expect("valid regex"),
            dangling_comma: Regex::new(r",\s*(?P<closer>[}\]])").expect("valid regex"),
            stray_bracket: Regex::new(r"(?P<opener>[{\[])\]\s*,").expect("valid regex"),
        }
    }

    pub fn rewrite(&self, content: &str) -> Rewrite {
        let mut output = String::with_capacity(content.len());
        let mut copied_up_to = 0;
        let mut replacements = 0;

        for fragment in self.fragment.find_iter(content) {
            if !has_boundary(content, fragment.start()) {
                continue;
            }
            output.push_str(&content[copied_up_to..fragment.start()]);
            copied_up_to = fragment.end();
            replacements += 1;
        }

        if replacements == 0 {
            return Rewrite {
                content: content.to_string(),
                replacements,
            };
        }

        output.push_str(&content[copied_up_to..]);
        Rewrite {
            content: self.normalize_punctuation(&output),
            replacements,
        }
    }

    pub fn normalize_punctuation(&self, text: &str) -> String {
        let text = text.replace("{,", "{");
        let text = self.dangling_comma.replace_all(&text, "${closer}");
        self.stray_bracket
            .replace_all(&text, "${opener}")
            .into_owned()
    }
}

impl Default for FontFamilyRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// A fragment counts only after start of text, whitespace, `,` or `{`
fn has_boundary(content: &str, start: usize) -> bool {
    match content[..start].chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || c == ',' || c == '{',
    }
}
