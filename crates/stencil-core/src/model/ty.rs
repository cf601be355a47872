//! Type references and generic arguments.

/// A reference to a type, with optional generic arguments and array
/// dimensions.
///
/// Type arguments are [`Generic`]s, which in turn hold types, so arbitrary
/// nesting such as `Map<K, List<Pair<K, V>>>` is expressible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    name: String,
    generics: Vec<Generic>,
    array_dimension: usize,
}

impl Type {
    /// Creates a type reference by (possibly fully qualified) name.
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            array_dimension: 0,
        }
    }

    /// Appends a generic argument.
    pub fn with_generic(mut self, generic: Generic) -> Self {
        self.generics.push(generic);
        self
    }

    /// Sets the number of array dimensions (`[]` suffixes).
    pub fn with_array_dimension(mut self, dimension: usize) -> Self {
        self.array_dimension = dimension;
        self
    }

    /// Appends a generic argument in place.
    pub fn add_generic(&mut self, generic: Generic) {
        self.generics.push(generic);
    }

    /// The name as given, possibly fully qualified.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generics(&self) -> &[Generic] {
        &self.generics
    }

    pub fn array_dimension(&self) -> usize {
        self.array_dimension
    }

    /// The last segment of the name (`List` for `java.util.List`).
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(_, simple)| simple)
    }

    /// Everything before the last segment (`java.util` for `java.util.List`).
    pub fn package(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(package, _)| package)
    }
}

/// Direction of a generic bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoundType {
    #[default]
    Extends,
    Super,
}

impl BoundType {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Extends => "extends",
            Self::Super => "super",
        }
    }
}

/// A generic parameter or argument.
///
/// The lower bound is the declared name (`T`, or `?` for a wildcard); the
/// upper bounds are the types it is constrained by. A generic without a
/// lower bound and with a single upper bound is a plain type argument, as
/// in `List<String>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Generic {
    lower_bound: Option<String>,
    upper_bounds: Vec<Type>,
    bound_type: BoundType,
}

impl Generic {
    /// Creates a type parameter or wildcard with the given name.
    pub fn of(lower_bound: impl Into<String>) -> Self {
        Self {
            lower_bound: Some(lower_bound.into()),
            ..Self::default()
        }
    }

    /// Creates a plain type argument.
    pub fn of_type(ty: Type) -> Self {
        Self {
            upper_bounds: vec![ty],
            ..Self::default()
        }
    }

    /// Creates an unbounded wildcard (`?`).
    pub fn wildcard() -> Self {
        Self::of("?")
    }

    /// Appends an upper bound.
    pub fn with_upper_bound(mut self, ty: Type) -> Self {
        self.upper_bounds.push(ty);
        self
    }

    /// Sets whether the bounds are `extends` or `super` bounds.
    pub fn with_bound_type(mut self, bound_type: BoundType) -> Self {
        self.bound_type = bound_type;
        self
    }

    pub fn lower_bound(&self) -> Option<&str> {
        self.lower_bound.as_deref()
    }

    pub fn upper_bounds(&self) -> &[Type] {
        &self.upper_bounds
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_and_package() {
        let ty = Type::of("java.util.List");
        assert_eq!(ty.simple_name(), "List");
        assert_eq!(ty.package(), Some("java.util"));

        let primitive = Type::of("int");
        assert_eq!(primitive.simple_name(), "int");
        assert_eq!(primitive.package(), None);
    }

    #[test]
    fn test_nested_generics() {
        let pair = Type::of("Pair")
            .with_generic(Generic::of_type(Type::of("K")))
            .with_generic(Generic::of_type(Type::of("V")));
        let boxed = Type::of("Box").with_generic(Generic::of_type(pair.clone()));

        assert_eq!(boxed.generics()[0].upper_bounds(), &[pair]);
        assert_eq!(boxed.generics()[0].lower_bound(), None);
    }

    #[test]
    fn test_bounded_generic() {
        let generic = Generic::wildcard()
            .with_upper_bound(Type::of("Number"))
            .with_bound_type(BoundType::Super);
        assert_eq!(generic.lower_bound(), Some("?"));
        assert_eq!(generic.bound_type().keyword(), "super");
    }
}
