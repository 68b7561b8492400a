use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;

/// Represents a single value defined on some
/// [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl DerefByName for EnumValue {
    type Source = IndexMap<String, EnumValue>;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        values: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        values.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

pub type NamedEnumValueRef = NamedRef<
    IndexMap<String, EnumValue>,
    loc::SourceLocation,
    EnumValue,
>;
