use crate::types::GraphQLType;

/// The "kind" of a [`GraphQLType`], detached from any given type's data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool => Self::Bool,
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::Float => Self::Float,
            GraphQLType::ID => Self::ID,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Int => Self::Int,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::String => Self::String,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
