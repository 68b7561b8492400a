use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`SchemaIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// An ordered list of the names of each member type of this union,
    /// retaining the order of the members in the schema.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of the member [`GraphQLType`]s of this union,
    /// retaining the order of the members in the schema.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema SchemaIndex,
    ) -> Vec<&'schema GraphQLType> {
        self.members.values()
            .map(|type_ref| {
                type_ref.deref(schema).expect("type is present in schema")
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
