use crate::schema::SchemaIndex;
use crate::types::GraphQLType;
use indexmap::IndexSet;

/// The closure of every schema type reachable from a compiled document set,
/// split by kind.
///
/// Scalars are split into built-ins and custom scalars; a custom scalar is
/// any schema-declared scalar, including one shadowing a built-in name via
/// `@specifiedBy`. Input object types pull in their field types
/// transitively.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReferencedTypes {
    builtin_scalars: IndexSet<String>,
    custom_scalars: IndexSet<String>,
    enums: IndexSet<String>,
    input_objects: IndexSet<String>,
    interfaces: IndexSet<String>,
    objects: IndexSet<String>,
    unions: IndexSet<String>,
}
impl ReferencedTypes {
    pub(crate) fn from_type_names(
        schema: &SchemaIndex,
        type_names: IndexSet<String>,
    ) -> Self {
        let mut referenced = Self::default();
        let mut pending = type_names.into_iter().collect::<Vec<_>>();
        let mut seen = IndexSet::<String>::new();

        while let Some(type_name) = pending.pop() {
            if !seen.insert(type_name.clone()) {
                continue;
            }
            match schema.type_named(&type_name) {
                Some(GraphQLType::Enum(enum_type)) => {
                    referenced.enums.insert(enum_type.name().to_string());
                },

                Some(GraphQLType::InputObject(inputobj_type)) => {
                    referenced.input_objects.insert(
                        inputobj_type.name().to_string(),
                    );
                    for input_field in inputobj_type.fields().values() {
                        pending.push(
                            input_field.type_annotation()
                                .inner_named_type_ref()
                                .name()
                                .to_string(),
                        );
                    }
                },

                Some(GraphQLType::Interface(iface_type)) => {
                    referenced.interfaces.insert(
                        iface_type.name().to_string(),
                    );
                },

                Some(GraphQLType::Object(obj_type)) => {
                    referenced.objects.insert(obj_type.name().to_string());
                },

                Some(GraphQLType::Scalar(scalar_type)) => {
                    referenced.custom_scalars.insert(
                        scalar_type.name().to_string(),
                    );
                },

                Some(GraphQLType::Union(union_type)) => {
                    referenced.unions.insert(union_type.name().to_string());
                },

                Some(builtin) if builtin.is_builtin_scalar() => {
                    referenced.builtin_scalars.insert(
                        builtin.name().to_string(),
                    );
                },

                _ => (),
            }
        }

        referenced
    }

    pub fn builtin_scalars(&self) -> &IndexSet<String> {
        &self.builtin_scalars
    }

    pub fn custom_scalars(&self) -> &IndexSet<String> {
        &self.custom_scalars
    }

    pub fn enums(&self) -> &IndexSet<String> {
        &self.enums
    }

    pub fn input_objects(&self) -> &IndexSet<String> {
        &self.input_objects
    }

    pub fn interfaces(&self) -> &IndexSet<String> {
        &self.interfaces
    }

    pub fn objects(&self) -> &IndexSet<String> {
        &self.objects
    }

    pub fn unions(&self) -> &IndexSet<String> {
        &self.unions
    }
}
