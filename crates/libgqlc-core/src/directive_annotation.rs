use crate::types::NamedDirectiveRef;
use crate::Value;
use indexmap::IndexMap;

/// Represents a directive applied to some item in a schema or executable
/// document (as opposed to a directive *definition*).
///
/// Note that `@include` and `@skip` annotations on selections are consumed
/// into [`InclusionConditions`](crate::inclusion::InclusionConditions) by the
/// IR builders; they are not surfaced as `DirectiveAnnotation`s there.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) directive_ref: NamedDirectiveRef,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn directive_ref(&self) -> &NamedDirectiveRef {
        &self.directive_ref
    }

    pub fn name(&self) -> &str {
        self.directive_ref.name()
    }
}
