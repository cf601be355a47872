//! Methods, fields and parameters.

use indexmap::IndexSet;

use super::{Generic, Javadoc, Modifier, Statement, Type};

/// A field declaration.
///
/// The type is optional while a translator is still assembling the field;
/// rendering a field without one is a malformed-model error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: Option<Type>,
    modifiers: IndexSet<Modifier>,
    initializer: Option<String>,
    javadoc: Option<Javadoc>,
}

impl Field {
    /// Creates an untyped field; set the type with [`Field::with_type`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            modifiers: IndexSet::new(),
            initializer: None,
            javadoc: None,
        }
    }

    /// Creates a field with a name and a type.
    pub fn of(name: impl Into<String>, ty: Type) -> Self {
        Self::new(name).with_type(ty)
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Sets the initializer expression, rendered after ` = `.
    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    /// Modifiers in insertion order.
    pub fn modifiers(&self) -> &IndexSet<Modifier> {
        &self.modifiers
    }

    pub fn initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    ty: Option<Type>,
    modifiers: IndexSet<Modifier>,
}

impl Parameter {
    /// Creates an untyped parameter; set the type with [`Parameter::with_type`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            modifiers: IndexSet::new(),
        }
    }

    pub fn of(name: impl Into<String>, ty: Type) -> Self {
        Self::new(name).with_type(ty)
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    pub fn modifiers(&self) -> &IndexSet<Modifier> {
        &self.modifiers
    }
}

/// A method declaration.
///
/// A method without a body is abstract (or an interface method) and
/// renders with a trailing semicolon. A method with an empty body renders
/// an empty block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    return_type: Type,
    modifiers: IndexSet<Modifier>,
    generics: Vec<Generic>,
    params: Vec<Parameter>,
    throws: Vec<Type>,
    javadoc: Option<Javadoc>,
    body: Option<Vec<Statement>>,
}

impl Method {
    pub fn of(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            return_type,
            modifiers: IndexSet::new(),
            generics: Vec::new(),
            params: Vec::new(),
            throws: Vec::new(),
            javadoc: None,
            body: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Appends a method-level type parameter.
    pub fn with_generic(mut self, generic: Generic) -> Self {
        self.generics.push(generic);
        self
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_throws(mut self, ty: Type) -> Self {
        self.throws.push(ty);
        self
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    /// Appends a statement, giving the method a body if it had none.
    pub fn with_statement(mut self, statement: impl Into<Statement>) -> Self {
        self.body
            .get_or_insert_with(Vec::new)
            .push(statement.into());
        self
    }

    /// Gives the method a body, which may be empty.
    pub fn with_body(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.body = Some(statements.into_iter().collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn modifiers(&self) -> &IndexSet<Modifier> {
        &self.modifiers
    }

    pub fn generics(&self) -> &[Generic] {
        &self.generics
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn throws(&self) -> &[Type] {
        &self.throws
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }

    /// The body statements, or `None` for a bodiless method.
    pub fn body(&self) -> Option<&[Statement]> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_statement_creates_body() {
        let method = Method::of("run", Type::of("void"));
        assert!(method.body().is_none());

        let method = method.with_statement("a();").with_statement("b();");
        assert_eq!(
            method.body(),
            Some(&[Statement::of("a();"), Statement::of("b();")][..])
        );
    }

    #[test]
    fn test_empty_body_is_not_bodiless() {
        let method = Method::of("noop", Type::of("void")).with_body([]);
        assert_eq!(method.body(), Some(&[][..]));
    }

    #[test]
    fn test_modifiers_keep_insertion_order_without_duplicates() {
        let field = Field::of("ID", Type::of("int"))
            .with_modifier(Modifier::Static)
            .with_modifier(Modifier::Public)
            .with_modifier(Modifier::Static);

        let modifiers: Vec<_> = field.modifiers().iter().copied().collect();
        assert_eq!(modifiers, vec![Modifier::Static, Modifier::Public]);
    }

    #[test]
    fn test_untyped_parameter() {
        let param = Parameter::new("value");
        assert!(param.ty().is_none());
    }
}
