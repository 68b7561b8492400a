use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(
        &self,
        schema: &SchemaIndex,
        interface: &InterfaceType,
    ) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| {
                if iface_ref.name() == interface.name() {
                    true
                } else {
                    iface_ref.deref(schema)
                        .expect("type is present in schema")
                        .as_interface()
                        .expect("type is an interface type")
                        .implements_interface(schema, interface)
                }
            })
    }

    pub fn interfaces<'schema>(
        &self,
        schema: &'schema SchemaIndex,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .map(|iface_ref| {
                iface_ref.deref(schema)
                    .expect("type is present in schema")
                    .as_interface()
                    .expect("type is an interface type")
            })
            .collect()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
