use stencil_core::{Fragment, RenderError, format::EMPTY, model::Statement};

use crate::{generator::Generator, registry::View};

/// Renders statements.
///
/// A simple statement renders its text verbatim. A composite statement
/// renders its children back to back with nothing in between; with no
/// children it renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementView;

impl View<Statement> for StatementView {
    fn render(&self, generator: &Generator, statement: &Statement) -> Result<Fragment, RenderError> {
        match statement {
            Statement::Simple(text) => Ok(Fragment::present(text.as_str())),
            Statement::Composite(children) => generator.join_each(children, EMPTY),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::views::java;
    use stencil_core::model::{NodeKind, Type};

    fn generator() -> Generator {
        Generator::new(Arc::new(java::registry()))
    }

    #[test]
    fn test_simple_is_verbatim() {
        let statement = Statement::of("  return x; ");
        assert_eq!(generator().on(&statement), Ok(Fragment::present("  return x; ")));
    }

    #[test]
    fn test_composite_concatenates_children() {
        let statement = Statement::composite([Statement::of("a();"), Statement::of("b();")]);
        assert_eq!(generator().on(&statement), Ok(Fragment::present("a();b();")));
    }

    #[test]
    fn test_empty_composite_is_absent() {
        let statement = Statement::composite([]);
        assert_eq!(generator().on(&statement), Ok(Fragment::Absent));
    }

    #[test]
    fn test_nested_composites() {
        let statement = Statement::composite([
            Statement::composite([]),
            Statement::composite([Statement::of("a();\n")]),
            Statement::of("b();"),
        ]);
        assert_eq!(generator().on(&statement), Ok(Fragment::present("a();\nb();")));
    }

    #[test]
    fn test_rejects_non_statement() {
        let mut registry = java::registry();
        registry.install_view::<Statement, _>(NodeKind::TYPE, StatementView);
        let generator = Generator::new(Arc::new(registry));

        let ty = Type::of("int");
        let err = generator.on(&ty).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnexpectedNode {
                expected: "Statement",
                found: NodeKind::TYPE,
            }
        );
    }
}
