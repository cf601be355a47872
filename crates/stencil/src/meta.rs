//! Rendered output paired with the model it came from.

use stencil_core::model::File;

/// A model together with what was produced from it.
///
/// File writers receive `Meta<File, String>` values so they can derive the
/// output path from the model and write the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta<M, R> {
    model: M,
    result: R,
}

impl<M, R> Meta<M, R> {
    pub fn new(model: M, result: R) -> Self {
        Self { model, result }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn result(&self) -> &R {
        &self.result
    }

    pub fn into_parts(self) -> (M, R) {
        (self.model, self.result)
    }

    /// Replace the result, keeping the model.
    pub fn map_result<T, F>(self, f: F) -> Meta<M, T>
    where
        F: FnOnce(R) -> T,
    {
        Meta {
            model: self.model,
            result: f(self.result),
        }
    }
}

impl<R> Meta<File, R> {
    /// The relative output path of the rendered file.
    pub fn path(&self) -> &str {
        self.model.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_result_keeps_model() {
        let meta = Meta::new(File::of("com/acme/A.java"), "class A {}".to_string());
        let meta = meta.map_result(|text| text.len());

        assert_eq!(meta.path(), "com/acme/A.java");
        assert_eq!(*meta.result(), 10);

        let (model, len) = meta.into_parts();
        assert_eq!(model.name(), "com/acme/A.java");
        assert_eq!(len, 10);
    }
}
