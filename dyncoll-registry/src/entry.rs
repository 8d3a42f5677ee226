use crate::error::RegistryError;
use crate::props::PropsStructure;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A registered function: either ready to attach, or a generator that
/// needs a props payload first.
#[derive(Clone)]
pub enum RegistryEntry<F> {
    Function(F),
    WithProps(HookWithProps<F>),
}

/// A hook generator paired with the schema its props must satisfy.
#[derive(Clone)]
pub struct HookWithProps<F> {
    props_structure: PropsStructure,
    generator: Arc<dyn Fn(&Value) -> F + Send + Sync>,
}

impl<F> HookWithProps<F> {
    pub fn new(
        props_structure: PropsStructure,
        generator: impl Fn(&Value) -> F + Send + Sync + 'static,
    ) -> Self {
        Self {
            props_structure,
            generator: Arc::new(generator),
        }
    }

    pub fn props_structure(&self) -> &PropsStructure {
        &self.props_structure
    }

    /// Validates `payload` against the props structure, then runs the
    /// generator. The generator never sees a payload that failed validation.
    pub fn generate(&self, payload: &Value) -> Result<F, RegistryError> {
        self.props_structure.validate(payload)?;
        Ok((self.generator)(payload))
    }
}

impl<F> fmt::Debug for HookWithProps<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookWithProps")
            .field("props_structure", &self.props_structure)
            .finish_non_exhaustive()
    }
}

impl<F> fmt::Debug for RegistryEntry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::WithProps(hook) => f.debug_tuple("WithProps").field(hook).finish(),
        }
    }
}
