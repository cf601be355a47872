use stencil_core::{
    Fragment, RenderError, combine,
    format::{COMMA_SPACE, SEMICOLON, SPACE},
    model::{Field, Method, NodeKind, Parameter},
};

use super::{THROWS, TYPE_PARAMETERS, modifier_list, with_javadoc};
use crate::{generator::Generator, registry::View};

/// Renders a method.
///
/// A method with an empty return type name renders as a constructor. A
/// method without a body ends in `;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodView;

impl View<Method> for MethodView {
    fn render(&self, generator: &Generator, method: &Method) -> Result<Fragment, RenderError> {
        let params = generator.join_each(method.params(), COMMA_SPACE)?;
        let signature = format!("{}({})", method.name(), params.text_or_empty());

        let head = combine::join(
            [
                modifier_list(method.modifiers()),
                generator.join_each_with(method.generics(), TYPE_PARAMETERS)?,
                generator.on(method.return_type())?,
                Fragment::present(signature),
                generator.join_each_with(method.throws(), THROWS)?,
            ],
            SPACE,
        )
        .text_or_empty();

        let text = match method.body() {
            None => format!("{head}{SEMICOLON}"),
            Some(statements) => {
                let formatting = generator.formatting();
                let body = generator.join_each(statements, formatting.newline())?;
                format!("{head} {}", formatting.block(&body))
            }
        };
        with_javadoc(generator, method.javadoc(), text)
    }
}

/// Renders a field declaration: modifiers, type, name and initializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldView;

impl View<Field> for FieldView {
    fn render(&self, generator: &Generator, field: &Field) -> Result<Fragment, RenderError> {
        let declaration = combine::join(
            [
                modifier_list(field.modifiers()),
                generator.on_required(field.ty(), NodeKind::FIELD, "type")?,
                Fragment::present(field.name()),
            ],
            SPACE,
        )
        .text_or_empty();

        let text = match field.initializer() {
            Some(initializer) => format!("{declaration} = {initializer}{SEMICOLON}"),
            None => format!("{declaration}{SEMICOLON}"),
        };
        with_javadoc(generator, field.javadoc(), text)
    }
}

/// Renders a parameter: modifiers, type and name. A parameter without a
/// type is malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterView;

impl View<Parameter> for ParameterView {
    fn render(&self, generator: &Generator, param: &Parameter) -> Result<Fragment, RenderError> {
        Ok(combine::join(
            [
                modifier_list(param.modifiers()),
                generator.on_required(param.ty(), NodeKind::PARAMETER, "type")?,
                Fragment::present(param.name()),
            ],
            SPACE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::views::java;
    use stencil_core::model::{Generic, Javadoc, Modifier, Statement, Type};

    fn generator() -> Generator {
        Generator::new(Arc::new(java::registry()))
    }

    #[test]
    fn test_abstract_method_without_body() {
        let method = Method::of("size", Type::of("int"))
            .with_modifier(Modifier::Public)
            .with_modifier(Modifier::Abstract);

        assert_eq!(
            generator().on(&method),
            Ok(Fragment::present("public abstract int size();"))
        );
    }

    #[test]
    fn test_full_signature_with_body() {
        let method = Method::of("find", Type::of("T"))
            .with_modifier(Modifier::Public)
            .with_generic(Generic::of("T"))
            .with_param(Parameter::of("id", Type::of("long")).with_modifier(Modifier::Final))
            .with_param(Parameter::of("type", Type::of("Class").with_generic(Generic::of_type(Type::of("T")))))
            .with_throws(Type::of("java.io.IOException"))
            .with_throws(Type::of("SQLException"))
            .with_statement("check(id);")
            .with_statement(Statement::composite([Statement::of("return "), Statement::of("load(id);")]));

        let expected = "public <T> T find(final long id, Class<T> type) throws java.io.IOException, SQLException {\n    check(id);\n    return load(id);\n}";
        assert_eq!(generator().on(&method), Ok(Fragment::present(expected)));
    }

    #[test]
    fn test_constructor_and_empty_body() {
        let method = Method::of("User", Type::of(""))
            .with_modifier(Modifier::Public)
            .with_body([]);

        assert_eq!(generator().on(&method), Ok(Fragment::present("public User() {\n}")));
    }

    #[test]
    fn test_method_with_javadoc() {
        let method = Method::of("run", Type::of("void"))
            .with_javadoc(Javadoc::of("Runs it."))
            .with_body([Statement::of("go();")]);

        assert_eq!(
            generator().on(&method),
            Ok(Fragment::present("/**\n * Runs it.\n */\nvoid run() {\n    go();\n}"))
        );
    }

    #[test]
    fn test_field_with_initializer() {
        let field = Field::of("MAX", Type::of("int"))
            .with_modifier(Modifier::Private)
            .with_modifier(Modifier::Static)
            .with_modifier(Modifier::Final)
            .with_initializer("10");

        assert_eq!(
            generator().on(&field),
            Ok(Fragment::present("private static final int MAX = 10;"))
        );
    }

    #[test]
    fn test_missing_type_is_malformed() {
        let field = Field::new("broken");
        assert_eq!(
            generator().on(&field),
            Err(RenderError::malformed(NodeKind::FIELD, "type is missing"))
        );

        let method = Method::of("m", Type::of("void")).with_param(Parameter::new("p"));
        assert_eq!(
            generator().on(&method),
            Err(RenderError::malformed(NodeKind::PARAMETER, "type is missing"))
        );
    }
}
