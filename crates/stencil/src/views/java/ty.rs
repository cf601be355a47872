use stencil_core::{
    Fragment, RenderError, combine,
    model::{Generic, Type},
};

use super::TYPE_PARAMETERS;
use crate::{generator::Generator, registry::View};

const ARRAY: &str = "[]";
const BOUND_SEPARATOR: &str = " & ";

/// Renders a type reference, shortened against the generator's import
/// scope. A type with an empty name renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeView;

impl View<Type> for TypeView {
    fn render(&self, generator: &Generator, ty: &Type) -> Result<Fragment, RenderError> {
        if ty.name().is_empty() {
            return Ok(Fragment::Absent);
        }

        let arguments = generator.join_each_with(ty.generics(), TYPE_PARAMETERS)?;
        let mut text = generator.scope().short_name(ty).to_string();
        text.push_str(arguments.as_str().unwrap_or_default());
        text.push_str(&ARRAY.repeat(ty.array_dimension()));
        Ok(Fragment::present(text))
    }
}

/// Renders a generic parameter or argument.
///
/// `T`, `T extends A & B` and `? super X` when a lower bound is present,
/// otherwise the bounds alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericView;

impl View<Generic> for GenericView {
    fn render(&self, generator: &Generator, generic: &Generic) -> Result<Fragment, RenderError> {
        let bounds = generator.join_each(generic.upper_bounds(), BOUND_SEPARATOR)?;

        let Some(lower) = generic.lower_bound() else {
            return Ok(bounds);
        };
        let keyword = generic.bound_type().keyword();
        Ok(combine::join(
            [
                Fragment::present(lower),
                bounds.map(|bounds| format!("{keyword} {bounds}")),
            ],
            " ",
        ))
    }
}
