use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaIndexBuilder;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaIndexBuilder::new().build();

        assert!(schema.is_err());
        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));
    }

    #[test]
    fn load_empty_query_type_str() -> Result<()> {
        let schema = SchemaIndexBuilder::from_str(None, "type Query")?
            .build()?;

        assert_eq!(schema.directive_defs().len(), 4);
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert_eq!(schema.all_types().len(), 6);

        let query_obj_type = schema.query_type()
            .as_object()
            .expect("type is an object type");
        assert_eq!(query_obj_type.name(), "Query");
        assert!(query_obj_type.directives().is_empty());
        assert_eq!(query_obj_type.fields().keys().collect::<Vec<_>>(), vec![
            &"__typename".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn load_all_operation_types_in_single_str() -> Result<()> {
        let schema = SchemaIndexBuilder::from_str(None, concat!(
            "type Mutation\n",
            "type Query\n",
            "type Subscription",
        ))?.build()?;

        assert_eq!(schema.all_types().len(), 8);
        assert_eq!(
            schema.query_type().name(),
            "Query",
        );
        assert_eq!(
            schema.mutation_type().expect("mutation type is defined").name(),
            "Mutation",
        );
        assert_eq!(
            schema.subscription_type().expect("subscription type is defined").name(),
            "Subscription",
        );

        Ok(())
    }

    #[test]
    fn schema_definition_renames_root_types() -> Result<()> {
        let schema = SchemaIndexBuilder::from_str(None, concat!(
            "schema { query: TheQuery }\n",
            "type TheQuery { id: ID }",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "TheQuery");
        Ok(())
    }

    #[test]
    fn duplicate_type_definition() -> Result<()> {
        let result = SchemaIndexBuilder::from_str(None, concat!(
            "type Query { id: ID }\n",
            "type Foo { id: ID }\n",
            "type Foo { name: String }",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition {
                ref type_name,
                ..
            }) if type_name == "Foo",
        ));
        Ok(())
    }

    #[test]
    fn dunder_prefixed_type_name() {
        let result = SchemaIndexBuilder::from_str(None, concat!(
            "type Query { id: ID }\n",
            "type __Foo { id: ID }",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                ref type_name,
                ..
            }) if type_name == "__Foo",
        ));
    }
}

mod type_lookups {
    use super::*;

    fn animal_schema() -> crate::schema::SchemaIndex {
        SchemaIndexBuilder::from_str(
            None,
            r#"
            type Query {
                allAnimals: [Animal!]!
            }

            interface Animal {
                species: String!
            }

            interface Pet implements Animal {
                species: String!
                humanName: String
            }

            type Bird implements Pet & Animal {
                species: String!
                humanName: String
                wingspan: Int!
            }

            type Fish implements Animal {
                species: String!
            }

            type Rock {
                id: ID!
            }

            union ClassroomPet = Bird | Rock
            "#,
        )
        .unwrap()
        .build()
        .unwrap()
    }

    #[test]
    fn interfaces_implemented_by_object_are_transitive() {
        let schema = animal_schema();

        let mut iface_names = schema.interfaces_implemented_by("Bird")
            .iter()
            .map(|iface| iface.name())
            .collect::<Vec<_>>();
        iface_names.sort_unstable();
        assert_eq!(iface_names, vec!["Animal", "Pet"]);
    }

    #[test]
    fn possible_types_of_interface() {
        let schema = animal_schema();

        let possible = schema.possible_type_names("Animal");
        assert!(possible.contains("Bird"));
        assert!(possible.contains("Fish"));
        assert!(!possible.contains("Rock"));
        assert!(!possible.contains("Pet"));
    }

    #[test]
    fn possible_types_of_union_and_object() {
        let schema = animal_schema();

        let possible = schema.possible_type_names("ClassroomPet");
        assert!(possible.contains("Bird"));
        assert!(possible.contains("Rock"));
        assert_eq!(possible.len(), 2);

        let possible = schema.possible_type_names("Rock");
        assert_eq!(possible.len(), 1);
        assert!(possible.contains("Rock"));
    }

    #[test]
    fn type_satisfies_interface_and_union() {
        let schema = animal_schema();

        assert!(schema.type_satisfies("Bird", "Bird"));
        assert!(schema.type_satisfies("Bird", "Pet"));
        assert!(schema.type_satisfies("Bird", "Animal"));
        assert!(schema.type_satisfies("Pet", "Animal"));
        assert!(schema.type_satisfies("Bird", "ClassroomPet"));

        assert!(!schema.type_satisfies("Animal", "Pet"));
        assert!(!schema.type_satisfies("Rock", "Animal"));
        assert!(!schema.type_satisfies("ClassroomPet", "Bird"));
    }

    #[test]
    fn union_members_resolve_to_objects() {
        let schema = animal_schema();

        let member_names = schema.union_members("ClassroomPet")
            .iter()
            .map(|obj| obj.name())
            .collect::<Vec<_>>();
        assert_eq!(member_names, vec!["Bird", "Rock"]);
    }
}

mod scalars {
    use super::*;

    #[test]
    fn custom_scalar_with_specified_by() -> Result<()> {
        let schema = SchemaIndexBuilder::from_str(None, concat!(
            "type Query { time: DateTime }\n",
            "scalar DateTime @specifiedBy(url: \"https://scalars.graphql.org/andimarek/date-time\")",
        ))?.build()?;

        let scalar = schema.type_named("DateTime")
            .and_then(GraphQLType::as_scalar)
            .expect("type is a scalar type");
        assert_eq!(
            scalar.specified_by_url(),
            Some("https://scalars.graphql.org/andimarek/date-time"),
        );
        Ok(())
    }

    #[test]
    fn scalar_shadowing_builtin_requires_specified_by() {
        let shadowed = SchemaIndexBuilder::from_str(None, concat!(
            "type Query { id: ID }\n",
            "scalar String @specifiedBy(url: \"https://example.com/string\")",
        ));
        assert!(shadowed.is_ok());
        let schema = shadowed.unwrap().build().unwrap();
        assert!(matches!(
            schema.type_named("String"),
            Some(GraphQLType::Scalar(_)),
        ));

        let unshadowed = SchemaIndexBuilder::from_str(None, concat!(
            "type Query { id: ID }\n",
            "scalar String",
        ));
        assert!(matches!(
            unshadowed,
            Err(SchemaBuildError::DuplicateTypeDefinition { .. }),
        ));
    }
}

mod validation {
    use super::*;

    #[test]
    fn dangling_interface_reference() {
        let result = SchemaIndexBuilder::from_str(
            None,
            "type Query implements NotDefined { id: ID }",
        ).unwrap().build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { ref errors })
                if errors.contains(
                    &TypeValidationError::DanglingInterfaceReference {
                        implementing_type_name: "Query".to_string(),
                        interface_name: "NotDefined".to_string(),
                    }
                ),
        ));
    }

    #[test]
    fn non_object_union_member() {
        let result = SchemaIndexBuilder::from_str(None, concat!(
            "type Query { id: ID }\n",
            "interface Animal { species: String }\n",
            "union Impossible = Animal",
        )).unwrap().build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { ref errors })
                if errors.contains(
                    &TypeValidationError::NonObjectUnionMember {
                        member_name: "Animal".to_string(),
                        union_name: "Impossible".to_string(),
                    }
                ),
        ));
    }

    #[test]
    fn dangling_field_type_reference() {
        let result = SchemaIndexBuilder::from_str(
            None,
            "type Query { thing: Mystery }",
        ).unwrap().build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { ref errors })
                if errors.contains(
                    &TypeValidationError::DanglingFieldTypeReference {
                        field_name: "thing".to_string(),
                        parent_type_name: "Query".to_string(),
                        type_name: "Mystery".to_string(),
                    }
                ),
        ));
    }

    #[test]
    fn builtin_locations_are_builtin() -> Result<()> {
        let schema = SchemaIndexBuilder::from_str(None, "type Query")?
            .build()?;

        assert_eq!(
            schema.type_named("Boolean").unwrap().def_location(),
            loc::SourceLocation::GraphQLBuiltIn,
        );
        Ok(())
    }
}
