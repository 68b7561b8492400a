use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;

/// The set of behaviors shared by [`ObjectType`](crate::types::ObjectType)
/// and [`InterfaceType`].
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;
    fn description(&self) -> Option<&str>;
    fn directives(&self) -> &Vec<DirectiveAnnotation>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn implements_interface(
        &self,
        schema: &SchemaIndex,
        interface: &InterfaceType,
    ) -> bool;
    fn interfaces<'schema>(
        &self,
        schema: &'schema SchemaIndex,
    ) -> Vec<&'schema InterfaceType>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
