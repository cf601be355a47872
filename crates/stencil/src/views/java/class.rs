use indexmap::IndexSet;

use stencil_core::{
    Fragment, RenderError, combine,
    format::SPACE,
    model::{Class, Field, Generic, Interface, Javadoc, Method, Modifier},
};

use super::{EXTENDS, IMPLEMENTS, TYPE_PARAMETERS, modifier_list, with_javadoc};
use crate::{generator::Generator, registry::View};

/// The parts shared by class and interface declarations.
struct Declaration<'a> {
    keyword: &'static str,
    name: &'a str,
    modifiers: &'a IndexSet<Modifier>,
    generics: &'a [Generic],
    fields: &'a [Field],
    methods: &'a [Method],
    javadoc: Option<&'a Javadoc>,
}

impl Declaration<'_> {
    /// Render with the given `extends`/`implements` clauses, each of which
    /// may be absent.
    fn render(
        &self,
        generator: &Generator,
        clauses: [Fragment; 2],
    ) -> Result<Fragment, RenderError> {
        let generics = generator.join_each_with(self.generics, TYPE_PARAMETERS)?;
        let [extends, implements] = clauses;

        let head = combine::join(
            [
                modifier_list(self.modifiers),
                Fragment::present(self.keyword),
                Fragment::present(format!("{}{}", self.name, generics)),
                extends,
                implements,
            ],
            SPACE,
        )
        .text_or_empty();

        let formatting = generator.formatting();
        let blank_line = formatting.blank_line();
        let fields = generator.join_each(self.fields, formatting.newline())?;
        let methods = generator.join_each(self.methods, &blank_line)?;
        let body = combine::join([fields, methods], &blank_line);

        let text = format!("{head} {}", formatting.block(&body));
        with_javadoc(generator, self.javadoc, text)
    }
}

/// Renders a class declaration with its fields and methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassView;

impl View<Class> for ClassView {
    fn render(&self, generator: &Generator, class: &Class) -> Result<Fragment, RenderError> {
        let extends = generator
            .on_optional(class.supertype())?
            .map(|supertype| format!("extends {supertype}"));
        let implements = generator.join_each_with(class.interfaces(), IMPLEMENTS)?;

        Declaration {
            keyword: "class",
            name: class.name(),
            modifiers: class.modifiers(),
            generics: class.generics(),
            fields: class.fields(),
            methods: class.methods(),
            javadoc: class.javadoc(),
        }
        .render(generator, [extends, implements])
    }
}

/// Renders an interface declaration; its supertypes form the `extends`
/// clause.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceView;

impl View<Interface> for InterfaceView {
    fn render(&self, generator: &Generator, interface: &Interface) -> Result<Fragment, RenderError> {
        let extends = generator.join_each_with(interface.supertypes(), EXTENDS)?;

        Declaration {
            keyword: "interface",
            name: interface.name(),
            modifiers: interface.modifiers(),
            generics: interface.generics(),
            fields: interface.fields(),
            methods: interface.methods(),
            javadoc: interface.javadoc(),
        }
        .render(generator, [extends, Fragment::Absent])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::views::java;
    use stencil_core::{
        format::Formatting,
        model::{Statement, Type},
    };

    fn generator() -> Generator {
        Generator::new(Arc::new(java::registry()))
    }

    #[test]
    fn test_empty_class() {
        let class = Class::new("Empty");
        assert_eq!(generator().on(&class), Ok(Fragment::present("class Empty {\n}")));
    }

    #[test]
    fn test_class_header_clauses() {
        let class = Class::new("Repo")
            .with_modifier(Modifier::Public)
            .with_modifier(Modifier::Abstract)
            .with_generic(Generic::of("T"))
            .with_supertype(Type::of("Base").with_generic(Generic::of_type(Type::of("T"))))
            .with_interface(Type::of("Closeable"))
            .with_interface(Type::of("Iterable").with_generic(Generic::of_type(Type::of("T"))));

        assert_eq!(
            generator().on(&class),
            Ok(Fragment::present(
                "public abstract class Repo<T> extends Base<T> implements Closeable, Iterable<T> {\n}"
            ))
        );
    }

    #[test]
    fn test_class_body_layout() {
        let class = Class::new("Point")
            .with_field(Field::of("x", Type::of("int")).with_modifier(Modifier::Private))
            .with_field(Field::of("y", Type::of("int")).with_modifier(Modifier::Private))
            .with_method(Method::of("x", Type::of("int")).with_statement("return x;"))
            .with_method(Method::of("y", Type::of("int")).with_statement(Statement::of("return y;")));

        let expected = "class Point {\n    private int x;\n    private int y;\n\n    int x() {\n        return x;\n    }\n\n    int y() {\n        return y;\n    }\n}";
        assert_eq!(generator().on(&class), Ok(Fragment::present(expected)));
    }

    #[test]
    fn test_interface_extends_list() {
        let interface = Interface::new("Store")
            .with_modifier(Modifier::Public)
            .with_supertype(Type::of("AutoCloseable"))
            .with_supertype(Type::of("Flushable"))
            .with_method(Method::of("flush", Type::of("void")));

        assert_eq!(
            generator().on(&interface),
            Ok(Fragment::present(
                "public interface Store extends AutoCloseable, Flushable {\n    void flush();\n}"
            ))
        );
    }

    #[test]
    fn test_configured_indent() {
        let generator = generator().with_formatting(Formatting::new("\t", "\n"));
        let class = Class::new("A").with_field(Field::of("b", Type::of("int")));

        assert_eq!(generator.on(&class), Ok(Fragment::present("class A {\n\tint b;\n}")));
    }
}
