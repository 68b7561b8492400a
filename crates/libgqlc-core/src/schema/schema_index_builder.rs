use crate::ast;
use crate::loc;
use crate::schema::SchemaIndex;
use crate::schema::TypeValidationError;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::DirectiveAnnotationBuilder;
use crate::Value;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

/// Builds an immutable [`SchemaIndex`] from one or more SDL documents.
///
/// ```
/// use libgqlc_core::schema::SchemaIndexBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaIndexBuilder::from_str(
///     None,
///     "type Query { hello: String }",
/// )?
/// .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaIndexBuilder {
    directive_defs: HashMap<String, DirectiveDefinition>,
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    schema_def_location: Option<loc::SourceLocation>,
    subscription_type_name: Option<String>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaIndexBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: HashMap::from(BUILTIN_DIRECTIVE_NAMES.map(
                |name| (name.to_string(), DirectiveDefinition {
                    def_location: loc::SourceLocation::GraphQLBuiltIn,
                    name: name.to_string(),
                }),
            )),
            mutation_type_name: None,
            query_type_name: None,
            schema_def_location: None,
            subscription_type_name: None,
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    /// Consume this [`SchemaIndexBuilder`] to produce a [`SchemaIndex`],
    /// validating all cross-type references in the process.
    pub fn build(self) -> Result<SchemaIndex> {
        let query_type_name = match &self.query_type_name {
            Some(name) => name.clone(),
            None if self.types.contains_key("Query") => "Query".to_string(),
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        };
        let mutation_type_name = self.mutation_type_name.clone().or_else(||
            self.types.contains_key("Mutation").then(|| "Mutation".to_string())
        );
        let subscription_type_name = self.subscription_type_name.clone().or_else(||
            self.types.contains_key("Subscription").then(|| "Subscription".to_string())
        );

        for (operation_name, type_name) in [
            ("query", Some(&query_type_name)),
            ("mutation", mutation_type_name.as_ref()),
            ("subscription", subscription_type_name.as_ref()),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            match self.types.get(type_name) {
                Some(GraphQLType::Object(_)) => (),
                Some(_) => return Err(
                    SchemaBuildError::NonObjectOperationRootType {
                        operation_name: operation_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                ),
                None => return Err(
                    SchemaBuildError::UndefinedOperationRootType {
                        operation_name: operation_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                ),
            }
        }

        let errors = self.validate_types();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let mut interface_implementors =
            HashMap::<String, IndexSet<String>>::new();
        for type_ in self.types.values() {
            let (type_name, interface_names) = match type_ {
                GraphQLType::Interface(t) => (t.name(), t.interface_names()),
                GraphQLType::Object(t) => (t.name(), t.interface_names()),
                _ => continue,
            };
            for iface_name in interface_names {
                interface_implementors
                    .entry(iface_name.to_string())
                    .or_default()
                    .insert(type_name.to_string());
            }
        }

        Ok(SchemaIndex {
            directive_defs: self.directive_defs,
            interface_implementors,
            mutation_type: mutation_type_name.map(|name| {
                NamedGraphQLTypeRef::new(name, loc::SourceLocation::Schema)
            }),
            query_type: NamedGraphQLTypeRef::new(
                query_type_name,
                loc::SourceLocation::Schema,
            ),
            subscription_type: subscription_type_name.map(|name| {
                NamedGraphQLTypeRef::new(name, loc::SourceLocation::Schema)
            }),
            types: self.types,
        })
    }

    /// Convenience for [`SchemaIndexBuilder::new()`] followed by
    /// [`SchemaIndexBuilder::load_str()`].
    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    /// Parse an SDL document and record all of its definitions in this
    /// builder.
    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let doc_ast = ast::schema::parse(content.as_ref())?;

        for def in &doc_ast.definitions {
            use ast::schema::Definition as Def;
            use ast::schema::TypeDefinition as TypeDef;
            match def {
                Def::SchemaDefinition(schema_def) =>
                    self.load_schema_definition(file_path, schema_def)?,

                Def::TypeDefinition(TypeDef::Enum(enum_def)) =>
                    self.load_enum_type(file_path, enum_def)?,

                Def::TypeDefinition(TypeDef::InputObject(inputobj_def)) =>
                    self.load_input_object_type(file_path, inputobj_def)?,

                Def::TypeDefinition(TypeDef::Interface(iface_def)) =>
                    self.load_interface_type(file_path, iface_def)?,

                Def::TypeDefinition(TypeDef::Object(obj_def)) =>
                    self.load_object_type(file_path, obj_def)?,

                Def::TypeDefinition(TypeDef::Scalar(scalar_def)) =>
                    self.load_scalar_type(file_path, scalar_def)?,

                Def::TypeDefinition(TypeDef::Union(union_def)) =>
                    self.load_union_type(file_path, union_def)?,

                Def::DirectiveDefinition(directive_def) =>
                    self.load_directive_definition(file_path, directive_def)?,

                Def::TypeExtension(type_ext) => {
                    let (type_name, pos) = type_extension_target(type_ext);
                    return Err(SchemaBuildError::TypeExtensionsUnsupported {
                        location: loc::SourceLocation::from_schema_ast_position(
                            file_path,
                            pos,
                        ),
                        type_name: type_name.to_string(),
                    });
                },
            }
        }

        Ok(self)
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            // A scalar declaration may shadow a built-in scalar name when it
            // carries a @specifiedBy url; the shadowing declaration becomes a
            // custom scalar.
            let shadows_builtin =
                conflicting_type.is_builtin_scalar()
                    && matches!(
                        &type_,
                        GraphQLType::Scalar(scalar)
                            if scalar.specified_by_url.is_some(),
                    );

            if !shadows_builtin {
                return Err(SchemaBuildError::DuplicateTypeDefinition {
                    type_name: type_name.to_string(),
                    def1: conflicting_type.def_location(),
                    def2: type_loc.to_owned(),
                });
            }
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn build_fields_map(
        &self,
        file_path: Option<&Path>,
        type_name: &str,
        ast_fields: &[ast::schema::Field],
    ) -> Result<IndexMap<String, Field>> {
        let mut fields = IndexMap::from([
            ("__typename".to_string(), Field {
                def_location: loc::SourceLocation::GraphQLBuiltIn,
                description: None,
                directives: vec![],
                name: "__typename".to_string(),
                parameters: IndexMap::new(),
                type_annotation: typename_field_annotation(),
            }),
        ]);

        for ast_field in ast_fields {
            let field_srcloc = loc::SourceLocation::from_schema_ast_position(
                file_path,
                &ast_field.position,
            );

            if let Some(existing) = fields.get(&ast_field.name) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    def1: existing.def_location.to_owned(),
                    def2: field_srcloc,
                    field_name: ast_field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            let mut parameters = IndexMap::new();
            for ast_param in &ast_field.arguments {
                let param_srcloc = field_srcloc.with_ast_position(
                    &ast_param.position,
                );
                parameters.insert(ast_param.name.to_string(), Parameter {
                    default_value: ast_param.default_value.as_ref().map(
                        |value| Value::from_ast(value, &param_srcloc),
                    ),
                    def_location: param_srcloc.to_owned(),
                    name: ast_param.name.to_string(),
                    type_annotation: TypeAnnotation::from_ast_type(
                        &param_srcloc,
                        &ast_param.value_type,
                    ),
                });
            }

            fields.insert(ast_field.name.to_string(), Field {
                description: ast_field.description.clone(),
                directives: DirectiveAnnotationBuilder::from_ast(
                    &field_srcloc,
                    &ast_field.directives,
                ),
                name: ast_field.name.to_string(),
                parameters,
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_srcloc,
                    &ast_field.field_type,
                ),
                def_location: field_srcloc,
            });
        }

        Ok(fields)
    }

    fn load_directive_definition(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );

        if let Some(existing) = self.directive_defs.get(&ast.name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                def1: existing.def_location.to_owned(),
                def2: def_srcloc,
                directive_name: ast.name.to_string(),
            });
        }

        self.directive_defs.insert(ast.name.to_string(), DirectiveDefinition {
            def_location: def_srcloc,
            name: ast.name.to_string(),
        });
        Ok(())
    }

    fn load_enum_type(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::EnumType,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );

        let mut values: IndexMap<String, EnumValue> = IndexMap::new();
        for ast_value in &ast.values {
            let value_srcloc = def_srcloc.with_ast_position(
                &ast_value.position,
            );
            if let Some(existing) = values.get(&ast_value.name) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    def1: existing.def_location.to_owned(),
                    def2: value_srcloc,
                    enum_name: ast.name.to_string(),
                    value_name: ast_value.name.to_string(),
                });
            }
            values.insert(ast_value.name.to_string(), EnumValue {
                description: ast_value.description.clone(),
                directives: DirectiveAnnotationBuilder::from_ast(
                    &value_srcloc,
                    &ast_value.directives,
                ),
                name: ast_value.name.to_string(),
                def_location: value_srcloc,
            });
        }

        self.add_new_type(&ast.name, &def_srcloc, GraphQLType::Enum(
            EnumType {
                description: ast.description.clone(),
                directives: DirectiveAnnotationBuilder::from_ast(
                    &def_srcloc,
                    &ast.directives,
                ),
                name: ast.name.to_string(),
                values,
                def_location: def_srcloc.clone(),
            },
        ))
    }

    fn load_input_object_type(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::InputObjectType,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );

        let mut fields: IndexMap<String, InputField> = IndexMap::new();
        for ast_field in &ast.fields {
            let field_srcloc = def_srcloc.with_ast_position(
                &ast_field.position,
            );
            if let Some(existing) = fields.get(&ast_field.name) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    def1: existing.def_location.to_owned(),
                    def2: field_srcloc,
                    field_name: ast_field.name.to_string(),
                    type_name: ast.name.to_string(),
                });
            }
            fields.insert(ast_field.name.to_string(), InputField {
                default_value: ast_field.default_value.as_ref().map(
                    |value| Value::from_ast(value, &field_srcloc),
                ),
                description: ast_field.description.clone(),
                name: ast_field.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_srcloc,
                    &ast_field.value_type,
                ),
                def_location: field_srcloc,
            });
        }

        self.add_new_type(&ast.name, &def_srcloc, GraphQLType::InputObject(
            InputObjectType {
                description: ast.description.clone(),
                directives: DirectiveAnnotationBuilder::from_ast(
                    &def_srcloc,
                    &ast.directives,
                ),
                fields,
                name: ast.name.to_string(),
                def_location: def_srcloc.clone(),
            },
        ))
    }

    fn load_interface_type(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::InterfaceType,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );
        let data = ObjectOrInterfaceTypeData {
            description: ast.description.clone(),
            directives: DirectiveAnnotationBuilder::from_ast(
                &def_srcloc,
                &ast.directives,
            ),
            fields: self.build_fields_map(file_path, &ast.name, &ast.fields)?,
            interfaces: ast.implements_interfaces.iter().map(|iface_name| {
                NamedGraphQLTypeRef::new(iface_name, def_srcloc.clone())
            }).collect(),
            name: ast.name.to_string(),
            def_location: def_srcloc.clone(),
        };
        self.add_new_type(
            &ast.name,
            &def_srcloc,
            GraphQLType::Interface(InterfaceType(data)),
        )
    }

    fn load_object_type(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::ObjectType,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );
        let data = ObjectOrInterfaceTypeData {
            description: ast.description.clone(),
            directives: DirectiveAnnotationBuilder::from_ast(
                &def_srcloc,
                &ast.directives,
            ),
            fields: self.build_fields_map(file_path, &ast.name, &ast.fields)?,
            interfaces: ast.implements_interfaces.iter().map(|iface_name| {
                NamedGraphQLTypeRef::new(iface_name, def_srcloc.clone())
            }).collect(),
            name: ast.name.to_string(),
            def_location: def_srcloc.clone(),
        };
        self.add_new_type(
            &ast.name,
            &def_srcloc,
            GraphQLType::Object(ObjectType(data)),
        )
    }

    fn load_scalar_type(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::ScalarType,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );

        let specified_by_url = ast.directives.iter()
            .find(|directive| directive.name == "specifiedBy")
            .and_then(|directive| {
                directive.arguments.iter().find_map(|(arg_name, value)| {
                    match value {
                        ast::operation::Value::String(url)
                            if arg_name == "url" => Some(url.to_string()),
                        _ => None,
                    }
                })
            });

        self.add_new_type(&ast.name, &def_srcloc, GraphQLType::Scalar(
            ScalarType {
                description: ast.description.clone(),
                directives: DirectiveAnnotationBuilder::from_ast(
                    &def_srcloc,
                    &ast.directives,
                ),
                name: ast.name.to_string(),
                specified_by_url,
                def_location: def_srcloc.clone(),
            },
        ))
    }

    fn load_schema_definition(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );

        if let Some(first_def_location) = &self.schema_def_location {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                def1: first_def_location.to_owned(),
                def2: def_srcloc,
            });
        }

        self.mutation_type_name = ast.mutation.clone();
        self.query_type_name = ast.query.clone();
        self.schema_def_location = Some(def_srcloc);
        self.subscription_type_name = ast.subscription.clone();
        Ok(())
    }

    fn load_union_type(
        &mut self,
        file_path: Option<&Path>,
        ast: &ast::schema::UnionType,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast.position,
        );

        self.add_new_type(&ast.name, &def_srcloc, GraphQLType::Union(
            UnionType {
                description: ast.description.clone(),
                directives: DirectiveAnnotationBuilder::from_ast(
                    &def_srcloc,
                    &ast.directives,
                ),
                members: ast.types.iter().map(|member_name| (
                    member_name.to_string(),
                    NamedGraphQLTypeRef::new(member_name, def_srcloc.clone()),
                )).collect(),
                name: ast.name.to_string(),
                def_location: def_srcloc.clone(),
            },
        ))
    }

    fn validate_types(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];

        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Interface(iface_type) =>
                    self.validate_object_or_interface_type(
                        &iface_type.0,
                        &mut errors,
                    ),

                GraphQLType::Object(obj_type) =>
                    self.validate_object_or_interface_type(
                        &obj_type.0,
                        &mut errors,
                    ),

                GraphQLType::InputObject(inputobj_type) => {
                    for input_field in inputobj_type.fields.values() {
                        self.validate_field_type_ref(
                            &inputobj_type.name,
                            input_field.name.as_str(),
                            input_field.type_annotation
                                .inner_named_type_ref()
                                .name(),
                            &mut errors,
                        );
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => errors.push(
                                TypeValidationError::NonObjectUnionMember {
                                    member_name: member_name.to_string(),
                                    union_name: union_type.name.to_string(),
                                }
                            ),
                            None => errors.push(
                                TypeValidationError::DanglingUnionMemberReference {
                                    member_name: member_name.to_string(),
                                    union_name: union_type.name.to_string(),
                                }
                            ),
                        }
                    }
                },

                _ => (),
            }
        }

        errors
    }

    fn validate_field_type_ref(
        &self,
        parent_type_name: &str,
        field_name: &str,
        type_name: &str,
        errors: &mut Vec<TypeValidationError>,
    ) {
        if !self.types.contains_key(type_name) {
            errors.push(TypeValidationError::DanglingFieldTypeReference {
                field_name: field_name.to_string(),
                parent_type_name: parent_type_name.to_string(),
                type_name: type_name.to_string(),
            });
        }
    }

    fn validate_object_or_interface_type(
        &self,
        data: &ObjectOrInterfaceTypeData,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for iface_ref in &data.interfaces {
            match self.types.get(iface_ref.name()) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => errors.push(
                    TypeValidationError::NonInterfaceImplemented {
                        implemented_type_name: iface_ref.name().to_string(),
                        implementing_type_name: data.name.to_string(),
                    }
                ),
                None => errors.push(
                    TypeValidationError::DanglingInterfaceReference {
                        implementing_type_name: data.name.to_string(),
                        interface_name: iface_ref.name().to_string(),
                    }
                ),
            }
        }

        for field in data.fields.values() {
            if field.name == "__typename" {
                continue;
            }
            self.validate_field_type_ref(
                &data.name,
                field.name.as_str(),
                field.type_annotation.inner_named_type_ref().name(),
                errors,
            );
        }
    }
}
impl Default for SchemaIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn type_extension_target(
    type_ext: &ast::schema::TypeExtension,
) -> (&str, &graphql_parser::Pos) {
    use ast::schema::TypeExtension as Ext;
    match type_ext {
        Ext::Enum(ext) => (ext.name.as_str(), &ext.position),
        Ext::InputObject(ext) => (ext.name.as_str(), &ext.position),
        Ext::Interface(ext) => (ext.name.as_str(), &ext.position),
        Ext::Object(ext) => (ext.name.as_str(), &ext.position),
        Ext::Scalar(ext) => (ext.name.as_str(), &ext.position),
        Ext::Union(ext) => (ext.name.as_str(), &ext.position),
    }
}

fn typename_field_annotation() -> TypeAnnotation {
    TypeAnnotation::from_ast_type(
        &loc::SourceLocation::GraphQLBuiltIn,
        &ast::operation::Type::NonNullType(Box::new(
            ast::operation::Type::NamedType("String".to_string()),
        )),
    )
}

#[derive(Clone, Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directive definitions with the same name: `{directive_name}`")]
    DuplicateDirectiveDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        directive_name: String,
    },

    #[error(
        "Multiple values with the same name defined on the `{enum_name}` \
        enum: `{value_name}`"
    )]
    DuplicateEnumValueDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        enum_name: String,
        value_name: String,
    },

    #[error(
        "Multiple fields with the same name defined on the `{type_name}` \
        type: `{field_name}`"
    )]
    DuplicateFieldDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Multiple `schema` definitions found in the schema")]
    DuplicateSchemaDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Duplicate type definition: `{type_name}`")]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Type names must not start with `__` (this prefix is reserved for \
        GraphQL introspection types): `{type_name}`"
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("No query operation type defined on this schema")]
    NoQueryOperationTypeDefined,

    #[error(
        "The `{type_name}` type is declared as this schema's \
        {operation_name} root type, but it is not an object type."
    )]
    NonObjectOperationRootType {
        operation_name: String,
        type_name: String,
    },

    #[error("Error parsing schema document: {0}")]
    ParseError(Arc<ast::schema::ParseError>),

    #[error(
        "The schema extends the `{type_name}` type, but type extensions are \
        not supported by this builder."
    )]
    TypeExtensionsUnsupported {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Failure to validate the types of this schema: {errors:?}")]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The `{type_name}` type is declared as this schema's \
        {operation_name} root type, but this type is not defined in the \
        schema."
    )]
    UndefinedOperationRootType {
        operation_name: String,
        type_name: String,
    },
}
impl std::convert::From<ast::schema::ParseError> for SchemaBuildError {
    fn from(value: ast::schema::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
