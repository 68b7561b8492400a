use super::utils::animal_schema;
use super::utils::compile_document;
use super::utils::single_operation;

#[test]
fn identifier_is_lowercase_hex_sha256() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "query GetA { aField { a } }",
    );

    let operation = single_operation(&document);
    let identifier = document.operation_identifier(operation);

    assert_eq!(identifier.len(), 64);
    assert!(identifier.chars().all(|c| {
        c.is_ascii_digit() || ('a'..='f').contains(&c)
    }));
}

#[test]
fn identifier_is_deterministic_across_compilations() {
    let schema = animal_schema();
    let source = r#"
        query AllAnimals {
            allAnimals {
                species
                ...HeightDetails
            }
        }

        fragment HeightDetails on Animal {
            height { feet meters }
        }
    "#;

    let first = compile_document(&schema, source);
    let second = compile_document(&schema, source);

    assert_eq!(
        first.operation_identifier(single_operation(&first)),
        second.operation_identifier(single_operation(&second)),
    );
}

#[test]
fn identifier_ignores_authored_whitespace() {
    let schema = animal_schema();
    let compact = compile_document(&schema, "query GetA{aField{a}}");
    let spaced = compile_document(
        &schema,
        "query GetA {\n    aField {\n        a\n    }\n}",
    );

    assert_eq!(
        compact.operation_identifier(single_operation(&compact)),
        spaced.operation_identifier(single_operation(&spaced)),
    );
}

#[test]
fn identifier_is_sensitive_to_transitively_referenced_fragments() {
    let schema = animal_schema();

    // Same operation text in both documents; only the fragment set behind
    // `HeightDetails` differs (one pulls in a second fragment).
    let flat = compile_document(
        &schema,
        r#"
        query AllAnimals { allAnimals { ...HeightDetails } }

        fragment HeightDetails on Animal { height { feet } }
        "#,
    );
    let transitive = compile_document(
        &schema,
        r#"
        query AllAnimals { allAnimals { ...HeightDetails } }

        fragment HeightDetails on Animal { height { feet } ...SpeciesDetails }
        fragment SpeciesDetails on Animal { species }
        "#,
    );

    assert_ne!(
        flat.operation_identifier(single_operation(&flat)),
        transitive.operation_identifier(single_operation(&transitive)),
    );
}

#[test]
fn referenced_fragments_are_transitive_first_encountered_and_deduplicated() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query AllAnimals {
            allAnimals {
                ...AnimalDetails
                friend {
                    ...AnimalName
                }
            }
        }

        fragment AnimalDetails on Animal {
            ...AnimalName
            height { feet }
        }

        fragment AnimalName on Animal {
            species
        }
        "#,
    );

    let operation = single_operation(&document);

    // AnimalDetails pulls AnimalName in transitively; the later direct
    // spread of AnimalName does not add a second entry.
    assert_eq!(
        operation.referenced_fragments(),
        &["AnimalDetails".to_string(), "AnimalName".to_string()],
    );
}

#[test]
fn identifier_is_memoized_per_operation() {
    let schema = animal_schema();
    let document = compile_document(&schema, "query GetA { aField { a } }");

    let operation = single_operation(&document);
    let first = document.operation_identifier(operation);
    let second = document.operation_identifier(operation);

    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));
}
