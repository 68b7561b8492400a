use super::utils::animal_schema;
use super::utils::compile_document;
use super::utils::direct_field;
use super::utils::single_operation;
use crate::ir::DocumentCompileError;
use crate::ir::DocumentCompiler;
use crate::ir::FragmentBuildError;
use crate::ir::OperationBuildError;
use crate::ir::OperationKind;
use crate::ir::SelectionSetBuildError;
use crate::schema::SchemaIndexBuilder;

#[test]
fn anonymous_selection_set_compiles_as_query() {
    let schema = animal_schema();
    let document = compile_document(&schema, "{ aField { a } }");

    let operation = single_operation(&document);
    assert_eq!(operation.kind(), OperationKind::Query);
    assert!(operation.name().is_none());
    assert!(operation.referenced_fragments().is_empty());
}

#[test]
fn named_operations_are_addressable() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query GetA { aField { a } }
        query GetAnimals { allAnimals { species } }
        "#,
    );

    assert!(!document.has_errors());
    assert_eq!(document.operations().len(), 2);
    assert!(document.operation_named("GetA").is_some());
    assert!(document.operation_named("GetAnimals").is_some());
    assert!(document.operation_named("Nope").is_none());
}

#[test]
fn mutation_without_mutation_type_is_an_error() {
    let schema = animal_schema();
    let document = compile_document(&schema, "mutation Rename { x }");

    assert!(document.operations().is_empty());
    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Operation { errors, .. }]
            if matches!(
                errors.as_slice(),
                [OperationBuildError::NoMutationTypeDefinedInSchema],
            ),
    ));
}

#[test]
fn operation_variables_are_recorded_in_order() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "query Q($b: Boolean!, $a: String) { aField { a } }",
    );

    let operation = single_operation(&document);
    assert_eq!(
        operation.variables().keys().collect::<Vec<_>>(),
        vec!["b", "a"],
    );
}

#[test]
fn duplicate_variable_names_fail_the_operation() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "query Q($a: Boolean!, $a: Boolean!) { aField { a } }",
    );

    assert!(document.operations().is_empty());
    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Operation { errors, operation_name }]
            if operation_name.as_deref() == Some("Q")
                && matches!(
                    errors.as_slice(),
                    [OperationBuildError::DuplicateVariableName {
                        variable_name,
                        ..
                    }] if variable_name == "a",
                ),
    ));
}

#[test]
fn undefined_variable_type_fails_the_operation() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "query Q($a: Mystery) { aField { a } }",
    );

    assert!(document.operations().is_empty());
    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Operation { errors, .. }]
            if matches!(
                errors.as_slice(),
                [OperationBuildError::UndefinedVariableType {
                    variable_name,
                    ..
                }] if variable_name == "a",
            ),
    ));
}

#[test]
fn undefined_field_fails_only_the_offending_operation() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query Good { aField { a } }
        query Bad { aField { nope } }
        "#,
    );

    // The failing operation contributes its error; the healthy one still
    // compiles.
    assert_eq!(document.operations().len(), 1);
    assert!(document.operation_named("Good").is_some());
    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Operation { errors, operation_name }]
            if operation_name.as_deref() == Some("Bad")
                && matches!(
                    errors.as_slice(),
                    [OperationBuildError::SelectionSetBuildErrors(errs)]
                        if matches!(
                            errs.as_slice(),
                            [SelectionSetBuildError::UndefinedFieldName {
                                undefined_field_name,
                                parent_type_name,
                                ..
                            }] if undefined_field_name == "nope"
                                && parent_type_name == "A",
                        ),
                ),
    ));
}

#[test]
fn failed_operations_leave_no_partial_ir_behind() {
    let schema = animal_schema();
    let good = compile_document(&schema, "query Good { aField { a } }");
    let mixed = compile_document(
        &schema,
        r#"
        query Good { aField { a } }
        query Bad { aField { a nope } }
        "#,
    );

    // The failed build's entities and selection sets are rolled back, so
    // the arena holds exactly what the healthy operation needs.
    assert_eq!(
        mixed.arena().num_selection_sets(),
        good.arena().num_selection_sets(),
    );
    assert_eq!(mixed.arena().num_entities(), good.arena().num_entities());
}

#[test]
fn spread_of_unknown_fragment_is_an_unresolvable_reference() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "query Q { allAnimals { ...Nope } }",
    );

    assert!(document.operations().is_empty());
    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Operation { errors, .. }]
            if matches!(
                errors.as_slice(),
                [OperationBuildError::SelectionSetBuildErrors(errs)]
                    if matches!(
                        errs.as_slice(),
                        [SelectionSetBuildError::UndefinedFragment {
                            fragment_name,
                            ..
                        }] if fragment_name == "Nope",
                    ),
            ),
    ));
}

#[test]
fn fragment_cycle_is_reported_with_its_chain() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query Q { allAnimals { ...First } }

        fragment First on Animal { species ...Second }
        fragment Second on Animal { species ...First }
        "#,
    );

    assert!(document.operations().is_empty());
    assert!(document.fragments().fragments().is_empty());

    let cycle = document.errors().iter().find_map(|error| match error {
        DocumentCompileError::Fragment { errors, .. } =>
            errors.iter().find_map(|error| match error {
                FragmentBuildError::FragmentCycleDetected { cycle_path } =>
                    Some(cycle_path.clone()),
                _ => None,
            }),
        _ => None,
    }).expect("a fragment cycle is reported");
    assert_eq!(cycle, vec!["First", "Second", "First"]);
}

#[test]
fn self_referencing_fragment_is_a_cycle() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "fragment Loop on Animal { species ...Loop }",
    );

    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Fragment { errors, fragment_name }]
            if fragment_name == "Loop"
                && matches!(
                    errors.as_slice(),
                    [FragmentBuildError::FragmentCycleDetected { cycle_path }]
                        if cycle_path == &["Loop", "Loop"],
                ),
    ));
}

#[test]
fn duplicate_fragment_definitions_are_reported() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        fragment Dup on Animal { species }
        fragment Dup on Animal { height { feet } }
        "#,
    );

    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Fragment { errors, fragment_name }]
            if fragment_name == "Dup"
                && matches!(
                    errors.as_slice(),
                    [FragmentBuildError::DuplicateFragmentDefinition { .. }],
                ),
    ));
    // The first definition wins.
    assert!(document.fragments().fragment_named("Dup").is_some());
}

#[test]
fn fragment_on_undefined_type_fails_that_fragment() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "fragment Ghost on Mystery { x }",
    );

    assert!(document.fragments().fragments().is_empty());
    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Fragment { errors, .. }]
            if matches!(
                errors.as_slice(),
                [FragmentBuildError::TypeConditionTypeDoesNotExistInSchema {
                    type_condition_type_name,
                    ..
                }] if type_condition_type_name == "Mystery",
            ),
    ));
}

#[test]
fn fragments_compile_standalone_with_their_own_root() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "fragment AnimalDetails on Animal { species height { feet } }",
    );

    assert!(!document.has_errors());
    let fragment = document.fragments().fragment_named("AnimalDetails")
        .expect("fragment compiles");
    assert_eq!(fragment.type_condition(), "Animal");

    let root_entity = document.arena().entity(fragment.root_entity());
    assert!(root_entity.field_path().is_empty());
    assert_eq!(root_entity.root_type_path(), &["Animal".to_string()]);

    assert!(
        direct_field(&document, fragment.selection_set(), "species")
            .is_some(),
    );
}

#[test]
fn parse_errors_surface_from_compile_str() {
    let schema = animal_schema();
    let result = DocumentCompiler::new(&schema)
        .compile_str("query {", None);

    assert!(matches!(
        result,
        Err(DocumentCompileError::ParseError(_)),
    ));
}

#[test]
fn selecting_children_of_a_scalar_field_is_an_error() {
    let schema = SchemaIndexBuilder::from_str(
        None,
        "type Query { name: String }",
    ).unwrap().build().unwrap();

    let document = compile_document(&schema, "{ name { length } }");

    assert!(document.operations().is_empty());
    assert!(matches!(
        document.errors(),
        [DocumentCompileError::Operation { errors, .. }]
            if matches!(
                errors.as_slice(),
                [OperationBuildError::SelectionSetBuildErrors(errs)]
                    if matches!(
                        errs.as_slice(),
                        [SelectionSetBuildError::UnselectableFieldType {
                            parent_type_name,
                            ..
                        }] if parent_type_name == "String",
                    ),
            ),
    ));
}
