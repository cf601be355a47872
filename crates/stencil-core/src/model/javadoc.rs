//! Documentation blocks.

/// A documentation block: free text followed by tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Javadoc {
    text: String,
    tags: Vec<JavadocTag>,
}

impl Javadoc {
    pub fn of(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: JavadocTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn add_tag(&mut self, tag: JavadocTag) {
        self.tags.push(tag);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[JavadocTag] {
        &self.tags
    }
}

/// A tagged annotation such as `@param id the identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavadocTag {
    name: String,
    value: Option<String>,
    text: Option<String>,
}

impl JavadocTag {
    /// Creates a tag with a name and free text (`@since 2.0`).
    pub fn of(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            text: Some(text.into()),
        }
    }

    /// Creates a tag with a name, a value and free text.
    pub fn with_value(
        name: impl Into<String>,
        value: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            text: Some(text.into()),
        }
    }

    /// `@param <name> <text>`
    pub fn param(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_value("param", name, text)
    }

    /// `@return <text>`
    pub fn returns(text: impl Into<String>) -> Self {
        Self::of("return", text)
    }

    /// `@see <reference>`
    pub fn see(reference: impl Into<String>) -> Self {
        Self {
            name: "see".to_string(),
            value: Some(reference.into()),
            text: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
