//! Class and interface declarations.

use indexmap::IndexSet;

use super::{Field, Generic, Javadoc, Method, Modifier, Type};

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    modifiers: IndexSet<Modifier>,
    generics: Vec<Generic>,
    supertype: Option<Type>,
    interfaces: Vec<Type>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    javadoc: Option<Javadoc>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: IndexSet::new(),
            generics: Vec::new(),
            supertype: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            javadoc: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn with_generic(mut self, generic: Generic) -> Self {
        self.generics.push(generic);
        self
    }

    /// Sets the class this one extends.
    pub fn with_supertype(mut self, supertype: Type) -> Self {
        self.supertype = Some(supertype);
        self
    }

    /// Appends an implemented interface.
    pub fn with_interface(mut self, interface: Type) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> &IndexSet<Modifier> {
        &self.modifiers
    }

    pub fn generics(&self) -> &[Generic] {
        &self.generics
    }

    pub fn supertype(&self) -> Option<&Type> {
        self.supertype.as_ref()
    }

    pub fn interfaces(&self) -> &[Type] {
        &self.interfaces
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    modifiers: IndexSet<Modifier>,
    generics: Vec<Generic>,
    supertypes: Vec<Type>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    javadoc: Option<Javadoc>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: IndexSet::new(),
            generics: Vec::new(),
            supertypes: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            javadoc: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn with_generic(mut self, generic: Generic) -> Self {
        self.generics.push(generic);
        self
    }

    /// Appends an extended interface.
    pub fn with_supertype(mut self, supertype: Type) -> Self {
        self.supertypes.push(supertype);
        self
    }

    /// Appends a constant.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> &IndexSet<Modifier> {
        &self.modifiers
    }

    pub fn generics(&self) -> &[Generic] {
        &self.generics
    }

    pub fn supertypes(&self) -> &[Type] {
        &self.supertypes
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }
}

/// A top-level declaration in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(Class),
    Interface(Interface),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => class.name(),
            Self::Interface(interface) => interface.name(),
        }
    }
}

impl From<Class> for Declaration {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<Interface> for Declaration {
    fn from(interface: Interface) -> Self {
        Self::Interface(interface)
    }
}
