use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// A [`TypeAnnotation`](crate::types::TypeAnnotation) which annotates a named
/// type (as opposed to a list wrapper).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }

    /// Resolve the [`GraphQLType`] this annotation refers to.
    ///
    /// Panics if the named type is absent from the given [`SchemaIndex`];
    /// builders validate named references before constructing annotations
    /// that outlive them.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema SchemaIndex,
    ) -> &'schema GraphQLType {
        self.type_ref.deref(schema).expect("type is present in schema")
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn type_ref(&self) -> &NamedGraphQLTypeRef {
        &self.type_ref
    }
}
