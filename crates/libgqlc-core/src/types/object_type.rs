use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`SchemaIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`loc::SourceLocation`] indicating where this [`ObjectType`] was
    /// defined in the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`ObjectType`],
    /// in the order written in the schema.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`], ordered the same as the field definitions in the
    /// schema (with the implicit `__typename` field appearing first).
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// Whether this [`ObjectType`] implements the given [`InterfaceType`],
    /// directly or transitively.
    pub fn implements_interface(
        &self,
        schema: &SchemaIndex,
        interface: &InterfaceType,
    ) -> bool {
        self.0.implements_interface(schema, interface)
    }

    /// The list of [`InterfaceType`]s directly implemented by this
    /// [`ObjectType`], in schema order.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema SchemaIndex,
    ) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s directly implemented by this
    /// [`ObjectType`].
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
