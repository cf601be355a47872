//! Example: Rendering a file from a hand-built model
//!
//! This example builds a small model tree directly, without a model
//! document, and prints the rendered Java source.

use stencil::{
    Engine,
    config::AppConfig,
    model::{Class, Field, File, Import, Javadoc, JavadocTag, Method, Modifier, Parameter, Statement, Type},
    parse_type,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new(AppConfig::default())?;

    let names = parse_type("java.util.List<String>")?;

    let greeter = Class::new("Greeter")
        .with_modifier(Modifier::Public)
        .with_javadoc(Javadoc::of("Greets everyone it knows."))
        .with_field(
            Field::of("names", names.clone())
                .with_modifier(Modifier::Private)
                .with_modifier(Modifier::Final),
        )
        .with_method(
            Method::of("Greeter", Type::of(""))
                .with_modifier(Modifier::Public)
                .with_param(Parameter::of("names", names))
                .with_statement("this.names = names;"),
        )
        .with_method(
            Method::of("greet", parse_type("void")?)
                .with_modifier(Modifier::Public)
                .with_javadoc(Javadoc::of("Prints one line per name.").with_tag(JavadocTag::see("System#out")))
                .with_body([Statement::composite([
                    Statement::of("for (String name : names) {\n"),
                    Statement::of("    System.out.println(\"Hello, \" + name);\n"),
                    Statement::of("}"),
                ])]),
        );

    let file = File::of("org/example/Greeter.java")
        .with_import(Import::of(parse_type("java.util.List")?))
        .with_declaration(greeter);

    let meta = engine.render_meta(file)?;
    println!("// {}", meta.path());
    print!("{}", meta.result());

    engine.stop()?;
    Ok(())
}
