use crate::loc;
use crate::DirectiveAnnotation;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`SchemaIndex`](crate::schema::SchemaIndex).
///
/// Built-in scalars are represented as dedicated
/// [`GraphQLType`](crate::types::GraphQLType) variants; a `ScalarType` only
/// ever describes a schema-defined scalar (including one shadowing a
/// built-in name via `@specifiedBy`).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) specified_by_url: Option<String>,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The url given in this scalar's `@specifiedBy` annotation, if present.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }
}
