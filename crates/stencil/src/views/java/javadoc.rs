use stencil_core::{
    Fragment, RenderError, combine,
    format::SPACE,
    model::{Javadoc, JavadocTag},
};

use crate::{generator::Generator, registry::View};

const OPEN: &str = "/**";
const LINE: &str = " *";
const CLOSE: &str = " */";

/// Renders a `/** ... */` block: the text lines, a separator line, then one
/// line per tag. A block with no text and no tags renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavadocView;

impl View<Javadoc> for JavadocView {
    fn render(&self, generator: &Generator, javadoc: &Javadoc) -> Result<Fragment, RenderError> {
        let mut lines: Vec<String> = javadoc.text().lines().map(comment_line).collect();

        let tags = generator
            .on_each(javadoc.tags())
            .collect::<Result<Vec<_>, _>>()?;
        let tags: Vec<String> = tags.into_iter().flatten().collect();

        if lines.is_empty() && tags.is_empty() {
            return Ok(Fragment::Absent);
        }
        if !lines.is_empty() && !tags.is_empty() {
            lines.push(LINE.to_string());
        }
        lines.extend(tags.iter().flat_map(|tag| tag.lines()).map(comment_line));

        let nl = generator.formatting().newline();
        Ok(Fragment::present(format!(
            "{OPEN}{nl}{}{nl}{CLOSE}",
            lines.join(nl)
        )))
    }
}

/// A ` * text` line; blank text yields a bare ` *`.
fn comment_line(text: &str) -> String {
    let text = text.trim_end();
    if text.is_empty() {
        LINE.to_string()
    } else {
        format!("{LINE} {text}")
    }
}

/// Renders `@name value text`, omitting whichever parts are missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavadocTagView;

impl View<JavadocTag> for JavadocTagView {
    fn render(&self, _generator: &Generator, tag: &JavadocTag) -> Result<Fragment, RenderError> {
        Ok(combine::join(
            [
                Fragment::present(format!("@{}", tag.name())),
                tag.value().map(String::from).into(),
                tag.text().map(String::from).into(),
            ],
            SPACE,
        ))
    }
}
