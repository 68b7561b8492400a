use indexmap::IndexMap;
use indexmap::IndexSet;

/// Side table recording, per concrete object type, every response key ever
/// selected against that type (directly or through an interface/union it
/// satisfies) across the whole compiled document set.
///
/// A field gated by `@include`/`@skip` still counts as referenced; a field
/// inside a statically dead type case does not. Emitters use this to decide
/// which properties a generated model for a concrete type must be able to
/// decode.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldCollector {
    referenced_fields: IndexMap<String, IndexSet<String>>,
}
impl FieldCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn merge_from(&mut self, other: FieldCollector) {
        for (type_name, response_keys) in other.referenced_fields {
            self.referenced_fields
                .entry(type_name)
                .or_default()
                .extend(response_keys);
        }
    }

    pub(crate) fn record(
        &mut self,
        concrete_type_name: &str,
        response_key: &str,
    ) {
        self.referenced_fields
            .entry(concrete_type_name.to_string())
            .or_default()
            .insert(response_key.to_string());
    }

    /// The full ConcreteTypeName -> response keys mapping.
    pub fn referenced_fields(&self) -> &IndexMap<String, IndexSet<String>> {
        &self.referenced_fields
    }

    /// The response keys referenced against one concrete object type, if
    /// any were.
    pub fn response_keys(
        &self,
        concrete_type_name: &str,
    ) -> Option<&IndexSet<String>> {
        self.referenced_fields.get(concrete_type_name)
    }
}
