use crate::loc;
use crate::types::TypeAnnotation;

/// A [`TypeAnnotation`] which wraps an inner annotation in a
/// [list type](https://spec.graphql.org/October2021/#sec-List).
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) inner_type_ref: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
