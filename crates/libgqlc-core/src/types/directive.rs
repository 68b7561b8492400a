use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::SchemaIndex;

/// Represents a
/// [directive definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
/// within some [`SchemaIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl DirectiveDefinition {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl DerefByName for DirectiveDefinition {
    type Source = SchemaIndex;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a SchemaIndex,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.directive_defs.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

pub type NamedDirectiveRef = NamedRef<
    SchemaIndex,
    loc::SourceLocation,
    DirectiveDefinition,
>;
