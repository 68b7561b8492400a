use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`SchemaIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`loc::SourceLocation`] indicating where this [`InterfaceType`]
    /// was defined in the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`InterfaceType`] as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this
    /// [`InterfaceType`], in the order written in the schema.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in schema order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// Whether this [`InterfaceType`] implements the given `InterfaceType`,
    /// directly or transitively.
    pub fn implements_interface(
        &self,
        schema: &SchemaIndex,
        interface: &InterfaceType,
    ) -> bool {
        self.0.implements_interface(schema, interface)
    }

    /// The list of [`InterfaceType`]s directly implemented by this
    /// `InterfaceType`, in schema order.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema SchemaIndex,
    ) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s directly implemented by this
    /// `InterfaceType`.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
