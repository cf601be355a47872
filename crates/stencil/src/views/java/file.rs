use indexmap::IndexSet;
use log::debug;

use stencil_core::{
    Fragment, RenderError, combine,
    format::SEMICOLON,
    model::{File, Import},
};

use crate::{
    generator::{Generator, IMPLICIT_PACKAGE, ImportScope},
    registry::View,
};

/// Renders a whole compilation unit.
///
/// The package declaration comes from the file name's directories. The
/// import block drops duplicates and imports that Java makes implicit.
/// Declarations are rendered with a generator scoped to the file's
/// imports and separated by blank lines. A non-empty file ends with a
/// newline; an empty one renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileView;

impl View<File> for FileView {
    fn render(&self, generator: &Generator, file: &File) -> Result<Fragment, RenderError> {
        let formatting = generator.formatting();
        let newline = formatting.newline();
        let blank_line = formatting.blank_line();
        let package = file.package();

        let mut imports = IndexSet::new();
        for import in file
            .imports()
            .iter()
            .filter(|import| needs_import(import, package.as_deref()))
        {
            if let Fragment::Present(line) = generator.on(import)? {
                imports.insert(line);
            }
        }
        debug!(
            file = file.name(),
            imports = imports.len(),
            declarations = file.declarations().len();
            "Rendering file"
        );

        let scoped = generator.scoped(ImportScope::for_file(file));
        let declarations = scoped.join_each(file.declarations(), &blank_line)?;

        let text = combine::join(
            [
                package.map(|package| format!("package {package}{SEMICOLON}")).into(),
                combine::join(imports.into_iter().map(Fragment::Present), newline),
                declarations,
            ],
            &blank_line,
        );
        Ok(text.map(|text| format!("{text}{newline}")))
    }
}

/// Static imports are always kept. Type imports are dropped for types
/// without a package, in `java.lang`, or in the file's own package.
fn needs_import(import: &Import, package: Option<&str>) -> bool {
    if import.is_static() {
        return true;
    }
    match import.ty().package() {
        None => false,
        Some(imported) => imported != IMPLICIT_PACKAGE && Some(imported) != package,
    }
}

/// Renders `import a.b.C;` or `import static a.b.C.member;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportView;

impl View<Import> for ImportView {
    fn render(&self, _generator: &Generator, import: &Import) -> Result<Fragment, RenderError> {
        let name = import.ty().name();
        Ok(Fragment::present(match import.static_member() {
            Some(member) => format!("import static {name}.{member}{SEMICOLON}"),
            None => format!("import {name}{SEMICOLON}"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::views::java;
    use stencil_core::model::{Class, Field, Generic, Interface, Method, Modifier, Type};

    fn generator() -> Generator {
        Generator::new(Arc::new(java::registry()))
    }

    #[test]
    fn test_import_lines() {
        let plain = Import::of(Type::of("java.util.List"));
        let fixed = Import::of_static(Type::of("org.junit.Assert"), "assertEquals");

        assert_eq!(generator().on(&plain), Ok(Fragment::present("import java.util.List;")));
        assert_eq!(
            generator().on(&fixed),
            Ok(Fragment::present("import static org.junit.Assert.assertEquals;"))
        );
    }

    #[test]
    fn test_empty_file_is_absent() {
        assert_eq!(generator().on(&File::of("Empty.java")), Ok(Fragment::Absent));
    }

    #[test]
    fn test_import_block_filters_and_dedups() {
        let file = File::of("com/acme/User.java")
            .with_import(Import::of(Type::of("java.util.List")))
            .with_import(Import::of(Type::of("java.lang.String")))
            .with_import(Import::of(Type::of("com.acme.Role")))
            .with_import(Import::of(Type::of("int")))
            .with_import(Import::of(Type::of("java.util.List").with_generic(Generic::of_type(Type::of("T")))))
            .with_import(Import::of_static(Type::of("java.lang.Math"), "max"))
            .with_declaration(Class::new("User"));

        let expected = "package com.acme;\n\nimport java.util.List;\nimport static java.lang.Math.max;\n\nclass User {\n}\n";
        assert_eq!(generator().on(&file), Ok(Fragment::present(expected)));
    }

    #[test]
    fn test_declarations_use_file_scope() {
        let file = File::of("com/acme/Users.java")
            .with_import(Import::of(Type::of("java.util.List")))
            .with_declaration(
                Interface::new("Users").with_modifier(Modifier::Public).with_method(
                    Method::of(
                        "all",
                        Type::of("java.util.List").with_generic(Generic::of_type(Type::of("com.acme.User"))),
                    ),
                ),
            )
            .with_declaration(
                Class::new("Cache").with_field(Field::of("users", Type::of("java.util.Map"))),
            );

        let expected = "package com.acme;\n\n\
                        import java.util.List;\n\n\
                        public interface Users {\n    List<User> all();\n}\n\n\
                        class Cache {\n    java.util.Map users;\n}\n";
        assert_eq!(generator().on(&file), Ok(Fragment::present(expected)));
    }

    #[test]
    fn test_root_file_has_no_package() {
        let file = File::of("Main.java").with_declaration(Class::new("Main"));
        assert_eq!(generator().on(&file), Ok(Fragment::present("class Main {\n}\n")));
    }
}
