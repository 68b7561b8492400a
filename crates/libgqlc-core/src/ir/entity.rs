/// A single underlying GraphQL object encountered while walking an operation
/// or fragment.
///
/// Two entities describe the same logical response object iff their
/// `field_path`s are equal; type cases narrow an entity's scope without
/// producing a new entity.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Entity {
    pub(crate) field_path: Vec<String>,
    pub(crate) root_type_path: Vec<String>,
}
impl Entity {
    /// The response-key path from the operation/fragment root down to this
    /// entity. Empty for the root entity itself.
    pub fn field_path(&self) -> &[String] {
        self.field_path.as_slice()
    }

    /// The declared type at each step from the response root to this entity,
    /// starting with the operation/fragment root type.
    pub fn root_type_path(&self) -> &[String] {
        self.root_type_path.as_slice()
    }
}
