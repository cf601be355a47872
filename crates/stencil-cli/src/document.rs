//! Model documents.
//!
//! A model document is a TOML file listing the files to generate. Types
//! are written as type expressions (`java.util.Map<K, List<V>>`) and parsed
//! with [`stencil_parser`]; statements are strings or nested arrays of
//! statements.
//!
//! ```toml
//! [[file]]
//! name = "com/acme/User.java"
//! imports = ["java.util.List", { type = "java.util.Objects", member = "requireNonNull" }]
//!
//! [[file.declaration]]
//! kind = "class"
//! name = "User"
//! modifiers = ["public"]
//!
//! [[file.declaration.field]]
//! name = "roles"
//! type = "java.util.List<String>"
//! modifiers = ["private", "final"]
//!
//! [[file.declaration.method]]
//! name = "roles"
//! returns = "java.util.List<String>"
//! body = ["return roles;"]
//! ```

use std::str::FromStr;

use indexmap::IndexSet;
use log::{debug, trace};
use serde::Deserialize;

use stencil::{
    StencilError,
    model::{
        Class, Field, File, Generic, Import, Interface, Javadoc, JavadocTag, Method, Modifier,
        Parameter, Statement, Type,
    },
    parse_generic, parse_type,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[serde(default, rename = "file")]
    files: Vec<FileDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileDoc {
    name: String,
    #[serde(default)]
    imports: Vec<ImportDoc>,
    #[serde(default, rename = "declaration")]
    declarations: Vec<DeclarationDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportDoc {
    Type(String),
    Static {
        #[serde(rename = "type")]
        ty: String,
        member: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum DeclarationDoc {
    Class(ClassDoc),
    Interface(InterfaceDoc),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassDoc {
    name: String,
    #[serde(default)]
    modifiers: Vec<String>,
    #[serde(default)]
    generics: Vec<String>,
    extends: Option<String>,
    #[serde(default)]
    implements: Vec<String>,
    #[serde(default, rename = "field")]
    fields: Vec<FieldDoc>,
    #[serde(default, rename = "method")]
    methods: Vec<MethodDoc>,
    javadoc: Option<JavadocDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InterfaceDoc {
    name: String,
    #[serde(default)]
    modifiers: Vec<String>,
    #[serde(default)]
    generics: Vec<String>,
    #[serde(default)]
    extends: Vec<String>,
    #[serde(default, rename = "field")]
    fields: Vec<FieldDoc>,
    #[serde(default, rename = "method")]
    methods: Vec<MethodDoc>,
    javadoc: Option<JavadocDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDoc {
    name: String,
    #[serde(rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    modifiers: Vec<String>,
    initializer: Option<String>,
    javadoc: Option<JavadocDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MethodDoc {
    name: String,
    /// Omitted for constructors.
    returns: Option<String>,
    #[serde(default)]
    modifiers: Vec<String>,
    #[serde(default)]
    generics: Vec<String>,
    #[serde(default)]
    params: Vec<ParameterDoc>,
    #[serde(default)]
    throws: Vec<String>,
    /// Omitted for abstract and interface methods.
    body: Option<Vec<StatementDoc>>,
    javadoc: Option<JavadocDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterDoc {
    name: String,
    #[serde(rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    modifiers: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatementDoc {
    Simple(String),
    Composite(Vec<StatementDoc>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JavadocDoc {
    Text(String),
    Full {
        #[serde(default)]
        text: String,
        #[serde(default)]
        tags: Vec<TagDoc>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TagDoc {
    name: String,
    value: Option<String>,
    text: Option<String>,
}

/// Parse a model document into the files it describes.
///
/// # Errors
///
/// Returns [`StencilError::Model`] for malformed TOML, an unknown modifier
/// or a document without files, and [`StencilError::Parse`] for a type
/// expression that does not parse.
pub fn parse_document(source: &str) -> Result<Vec<File>, StencilError> {
    let document: Document = toml::from_str(source)
        .map_err(|err| StencilError::Model(format!("invalid model document: {err}")))?;

    if document.files.is_empty() {
        return Err(StencilError::Model(
            "model document does not declare any `[[file]]`".to_string(),
        ));
    }
    debug!(files = document.files.len(); "Parsed model document");

    document.files.into_iter().map(translate_file).collect()
}

fn translate_file(doc: FileDoc) -> Result<File, StencilError> {
    trace!(file = doc.name; "Translating file");
    let mut file = File::of(doc.name);

    for import in doc.imports {
        let import = match import {
            ImportDoc::Type(ty) => Import::of(ty_expr(&ty)?),
            ImportDoc::Static { ty, member } => Import::of_static(ty_expr(&ty)?, member),
        };
        file.add_import(import);
    }

    for declaration in doc.declarations {
        match declaration {
            DeclarationDoc::Class(class) => file.add_declaration(translate_class(class)?),
            DeclarationDoc::Interface(interface) => {
                file.add_declaration(translate_interface(interface)?)
            }
        }
    }
    Ok(file)
}

fn translate_class(doc: ClassDoc) -> Result<Class, StencilError> {
    let mut class = Class::new(doc.name);
    for modifier in modifiers(&doc.modifiers)? {
        class = class.with_modifier(modifier);
    }
    for generic in doc.generics {
        class = class.with_generic(generic_expr(&generic)?);
    }
    if let Some(supertype) = doc.extends {
        class = class.with_supertype(ty_expr(&supertype)?);
    }
    for interface in doc.implements {
        class = class.with_interface(ty_expr(&interface)?);
    }
    for field in doc.fields {
        class.add_field(translate_field(field)?);
    }
    for method in doc.methods {
        class.add_method(translate_method(method)?);
    }
    if let Some(javadoc) = doc.javadoc {
        class = class.with_javadoc(translate_javadoc(javadoc));
    }
    Ok(class)
}

fn translate_interface(doc: InterfaceDoc) -> Result<Interface, StencilError> {
    let mut interface = Interface::new(doc.name);
    for modifier in modifiers(&doc.modifiers)? {
        interface = interface.with_modifier(modifier);
    }
    for generic in doc.generics {
        interface = interface.with_generic(generic_expr(&generic)?);
    }
    for supertype in doc.extends {
        interface = interface.with_supertype(ty_expr(&supertype)?);
    }
    for field in doc.fields {
        interface = interface.with_field(translate_field(field)?);
    }
    for method in doc.methods {
        interface.add_method(translate_method(method)?);
    }
    if let Some(javadoc) = doc.javadoc {
        interface = interface.with_javadoc(translate_javadoc(javadoc));
    }
    Ok(interface)
}

fn translate_field(doc: FieldDoc) -> Result<Field, StencilError> {
    let mut field = Field::new(doc.name);
    if let Some(ty) = doc.ty {
        field = field.with_type(ty_expr(&ty)?);
    }
    for modifier in modifiers(&doc.modifiers)? {
        field = field.with_modifier(modifier);
    }
    if let Some(initializer) = doc.initializer {
        field = field.with_initializer(initializer);
    }
    if let Some(javadoc) = doc.javadoc {
        field = field.with_javadoc(translate_javadoc(javadoc));
    }
    Ok(field)
}

fn translate_method(doc: MethodDoc) -> Result<Method, StencilError> {
    let return_type = match doc.returns {
        Some(ty) => ty_expr(&ty)?,
        None => Type::of(""),
    };
    let mut method = Method::of(doc.name, return_type);
    for modifier in modifiers(&doc.modifiers)? {
        method = method.with_modifier(modifier);
    }
    for generic in doc.generics {
        method = method.with_generic(generic_expr(&generic)?);
    }
    for param in doc.params {
        let mut parameter = Parameter::new(param.name);
        if let Some(ty) = param.ty {
            parameter = parameter.with_type(ty_expr(&ty)?);
        }
        for modifier in modifiers(&param.modifiers)? {
            parameter = parameter.with_modifier(modifier);
        }
        method = method.with_param(parameter);
    }
    for ty in doc.throws {
        method = method.with_throws(ty_expr(&ty)?);
    }
    if let Some(body) = doc.body {
        method = method.with_body(body.into_iter().map(translate_statement));
    }
    if let Some(javadoc) = doc.javadoc {
        method = method.with_javadoc(translate_javadoc(javadoc));
    }
    Ok(method)
}

fn translate_statement(doc: StatementDoc) -> Statement {
    match doc {
        StatementDoc::Simple(text) => Statement::of(text),
        StatementDoc::Composite(children) => {
            Statement::composite(children.into_iter().map(translate_statement))
        }
    }
}

fn translate_javadoc(doc: JavadocDoc) -> Javadoc {
    match doc {
        JavadocDoc::Text(text) => Javadoc::of(text),
        JavadocDoc::Full { text, tags } => tags.into_iter().fold(Javadoc::of(text), |javadoc, tag| {
            javadoc.with_tag(match (tag.value, tag.text) {
                (Some(value), text) => JavadocTag::with_value(tag.name, value, text.unwrap_or_default()),
                (None, text) => JavadocTag::of(tag.name, text.unwrap_or_default()),
            })
        }),
    }
}

fn modifiers(names: &[String]) -> Result<IndexSet<Modifier>, StencilError> {
    names
        .iter()
        .map(|name| Modifier::from_str(name).map_err(|err| StencilError::Model(err.to_string())))
        .collect()
}

fn ty_expr(source: &str) -> Result<Type, StencilError> {
    parse_type(source).map_err(|err| StencilError::new_parse_error(err, source))
}

fn generic_expr(source: &str) -> Result<Generic, StencilError> {
    parse_generic(source).map_err(|err| StencilError::new_parse_error(err, source))
}
