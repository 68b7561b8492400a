use thiserror::Error;

/// A problem found while cross-validating the full set of types at
/// [`SchemaIndexBuilder::build()`](crate::schema::SchemaIndexBuilder::build)
/// time.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{field_name}` field on the `{parent_type_name}` type is \
        declared with type `{type_name}`, but this type is not defined in \
        the schema."
    )]
    DanglingFieldTypeReference {
        field_name: String,
        parent_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{implementing_type_name}` type declares that it implements \
        `{interface_name}`, but this type is not defined in the schema."
    )]
    DanglingInterfaceReference {
        implementing_type_name: String,
        interface_name: String,
    },

    #[error(
        "The `{union_name}` union declares `{member_name}` as a member, but \
        this type is not defined in the schema."
    )]
    DanglingUnionMemberReference {
        member_name: String,
        union_name: String,
    },

    #[error(
        "The `{implementing_type_name}` type declares that it implements \
        `{implemented_type_name}`, but `{implemented_type_name}` is not an \
        interface type."
    )]
    NonInterfaceImplemented {
        implemented_type_name: String,
        implementing_type_name: String,
    },

    #[error(
        "The `{union_name}` union declares `{member_name}` as a member, but \
        `{member_name}` is not an object type."
    )]
    NonObjectUnionMember {
        member_name: String,
        union_name: String,
    },
}
