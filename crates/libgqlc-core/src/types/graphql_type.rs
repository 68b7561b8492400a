use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::SchemaIndex;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type.
///
/// Built-in scalar types are represented as dedicated variants; a schema may
/// shadow one of them with an explicit `scalar` declaration carrying a
/// `@specifiedBy` url, in which case the shadowing declaration is stored as a
/// [`GraphQLType::Scalar`] (and counts as a custom scalar).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    pub fn def_location(&self) -> loc::SourceLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String
                => loc::SourceLocation::GraphQLBuiltIn,
            GraphQLType::Enum(t) => t.def_location.clone(),
            GraphQLType::InputObject(t) => t.def_location.clone(),
            GraphQLType::Interface(t) => t.def_location().clone(),
            GraphQLType::Object(t) => t.def_location().clone(),
            GraphQLType::Scalar(t) => t.def_location.clone(),
            GraphQLType::Union(t) => t.def_location.clone(),
        }
    }

    /// The fields selectable on this type, if it is an object or interface
    /// type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Interface(t) => Some(t.fields()),
            GraphQLType::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub fn is_builtin_scalar(&self) -> bool {
        matches!(
            self,
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String,
        )
    }

    /// Indicates whether selection sets may be applied to this type.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_),
        )
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name.as_str(),
            GraphQLType::InputObject(t) => t.name.as_str(),
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name.as_str(),
            GraphQLType::Union(t) => t.name.as_str(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}
impl DerefByName for GraphQLType {
    type Source = SchemaIndex;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a SchemaIndex,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

pub type NamedGraphQLTypeRef = NamedRef<
    SchemaIndex,
    loc::SourceLocation,
    GraphQLType,
>;
