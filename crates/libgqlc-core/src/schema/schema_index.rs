use crate::schema::SchemaIndexBuilder;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexSet;
use std::collections::HashMap;

/// A fully built, validated, and immutable index over a GraphQL schema's
/// types.
///
/// A `SchemaIndex` is read-only after construction, owns every type it
/// indexes, and is safe to share across any number of concurrent IR builds.
/// All cross-type references are stored by name and resolved through the
/// index on demand.
#[derive(Debug)]
pub struct SchemaIndex {
    pub(crate) directive_defs: HashMap<String, DirectiveDefinition>,
    pub(crate) interface_implementors: HashMap<String, IndexSet<String>>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl SchemaIndex {
    /// Convenience wrapper around [`SchemaIndexBuilder::new()`].
    pub fn builder() -> SchemaIndexBuilder {
        SchemaIndexBuilder::new()
    }

    /// A map from TypeName -> [`GraphQLType`] for all types defined in this
    /// schema (including built-in types).
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// A map from DirectiveName -> [`DirectiveDefinition`] for all directives
    /// defined in this schema (including built-in directives).
    pub fn directive_defs(&self) -> &HashMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// All [`InterfaceType`]s implemented by the named type, directly or
    /// transitively. Returns an empty list for non-composite and union types.
    pub fn interfaces_implemented_by(
        &self,
        type_name: &str,
    ) -> Vec<&InterfaceType> {
        let mut interfaces = vec![];
        let mut seen = IndexSet::<&str>::new();
        let mut pending = match self.types.get(type_name) {
            Some(GraphQLType::Interface(t)) => t.interface_names(),
            Some(GraphQLType::Object(t)) => t.interface_names(),
            _ => return interfaces,
        };

        while let Some(iface_name) = pending.pop() {
            if !seen.insert(iface_name) {
                continue;
            }
            if let Some(GraphQLType::Interface(iface)) =
                self.types.get(iface_name)
            {
                pending.extend(iface.interface_names());
                interfaces.push(iface);
            }
        }

        interfaces
    }

    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().map(|type_ref| {
            type_ref.deref(self).expect("type is present in schema")
        })
    }

    /// The set of concrete object type names a value of the named type could
    /// have at runtime: the type itself for an object type, every transitive
    /// implementor for an interface type, every member for a union type.
    /// Empty for any other kind of type.
    pub fn possible_type_names(&self, type_name: &str) -> IndexSet<&str> {
        let mut possible = IndexSet::new();
        let mut pending = vec![type_name];
        let mut seen = IndexSet::<&str>::new();

        while let Some(name) = pending.pop() {
            if !seen.insert(name) {
                continue;
            }
            match self.types.get(name) {
                Some(GraphQLType::Object(obj)) => {
                    possible.insert(obj.name());
                },

                Some(GraphQLType::Interface(iface)) => {
                    if let Some(implementors) =
                        self.interface_implementors.get(iface.name())
                    {
                        pending.extend(
                            implementors.iter().map(|name| name.as_str()),
                        );
                    }
                },

                Some(GraphQLType::Union(union_type)) => {
                    pending.extend(union_type.member_type_names());
                },

                _ => (),
            }
        }

        possible
    }

    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self).expect("type is present in schema")
    }

    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().map(|type_ref| {
            type_ref.deref(self).expect("type is present in schema")
        })
    }

    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Whether every possible runtime type of `narrow_name` is also a
    /// possible runtime type of `wide_name` (subtype-or-equal).
    ///
    /// This holds when the two names are equal, when `wide_name` is an
    /// interface that `narrow_name` (object or interface) transitively
    /// implements, or when `wide_name` is a union with `narrow_name` among
    /// its members.
    pub fn type_satisfies(&self, narrow_name: &str, wide_name: &str) -> bool {
        if narrow_name == wide_name {
            return true;
        }

        match self.types.get(wide_name) {
            Some(GraphQLType::Interface(wide_iface)) => {
                match self.types.get(narrow_name) {
                    Some(GraphQLType::Interface(t)) =>
                        t.implements_interface(self, wide_iface),
                    Some(GraphQLType::Object(t)) =>
                        t.implements_interface(self, wide_iface),
                    _ => false,
                }
            },

            Some(GraphQLType::Union(wide_union)) => {
                matches!(
                    self.types.get(narrow_name),
                    Some(GraphQLType::Object(_)),
                ) && wide_union.members.contains_key(narrow_name)
            },

            _ => false,
        }
    }

    /// All [`ObjectType`] members of the named union type. Returns an empty
    /// list if the name does not refer to a union type.
    pub fn union_members(&self, union_name: &str) -> Vec<&ObjectType> {
        match self.types.get(union_name) {
            Some(GraphQLType::Union(union_type)) => {
                union_type.member_type_names()
                    .iter()
                    .filter_map(|member_name| {
                        self.types.get(*member_name)
                            .and_then(GraphQLType::as_object)
                    })
                    .collect()
            },
            _ => vec![],
        }
    }
}
