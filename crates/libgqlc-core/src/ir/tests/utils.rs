use crate::ir::CompiledDocument;
use crate::ir::DocumentCompiler;
use crate::ir::FieldSelection;
use crate::ir::InlineFragmentSelection;
use crate::ir::MergedSelection;
use crate::ir::Operation;
use crate::ir::Selection;
use crate::ir::SelectionSetId;
use crate::schema::SchemaIndex;
use crate::schema::SchemaIndexBuilder;

/// An animal-kingdom schema exercising every polymorphism shape the merge
/// rules care about: interfaces implementing interfaces, objects
/// implementing several interfaces, a union, and a pair of unrelated object
/// types.
pub(super) fn animal_schema() -> SchemaIndex {
    SchemaIndexBuilder::from_str(
        None,
        r#"
        type Query {
            aField: A
            allAnimals: [Animal!]!
        }

        type A {
            a: String!
            b: String!
        }

        type B {
            b: String!
        }

        interface Animal {
            species: String!
            height: Height!
            friend: Animal!
        }

        interface Pet implements Animal {
            species: String!
            height: Height!
            friend: Animal!
            humanName: String
        }

        type Height {
            feet: Int!
            meters: Int!
        }

        type Bird implements Pet & Animal {
            species: String!
            height: Height!
            friend: Animal!
            humanName: String
            wingspan: Int!
        }

        type Cat implements Pet & Animal {
            species: String!
            height: Height!
            friend: Animal!
            humanName: String
            isJellicle: Boolean!
        }

        type Fish implements Animal {
            species: String!
            height: Height!
            friend: Animal!
        }

        union ClassroomPet = Bird | Cat
        "#,
    )
    .unwrap()
    .build()
    .unwrap()
}

pub(super) fn compile_document(
    schema: &SchemaIndex,
    source: &str,
) -> CompiledDocument {
    DocumentCompiler::new(schema)
        .compile_str(source, None)
        .expect("document parses")
}

/// The single operation of a document expected to compile without errors.
pub(super) fn single_operation(document: &CompiledDocument) -> &Operation {
    assert!(
        !document.has_errors(),
        "unexpected compile errors: {:?}",
        document.errors(),
    );
    assert_eq!(document.operations().len(), 1);
    &document.operations()[0]
}

pub(super) fn direct_field<'a>(
    document: &'a CompiledDocument,
    set_id: SelectionSetId,
    response_key: &str,
) -> Option<&'a FieldSelection> {
    document.arena().selection_set(set_id).direct().iter().find_map(
        |selection| match selection {
            Selection::Field(field)
                if field.response_key() == response_key => Some(field),
            _ => None,
        },
    )
}

pub(super) fn direct_type_case<'a>(
    document: &'a CompiledDocument,
    set_id: SelectionSetId,
    type_condition: &str,
) -> Option<&'a InlineFragmentSelection> {
    document.arena().selection_set(set_id).direct().iter().find_map(
        |selection| match selection {
            Selection::InlineFragment(inline)
                if inline.type_condition() == type_condition => Some(inline),
            _ => None,
        },
    )
}

pub(super) fn merged_field<'a>(
    document: &'a CompiledDocument,
    set_id: SelectionSetId,
    response_key: &str,
) -> Option<&'a MergedSelection> {
    document.arena().selection_set(set_id).merged().iter().find(
        |merged| match merged.selection() {
            Selection::Field(field) => field.response_key() == response_key,
            _ => false,
        },
    )
}

/// The response keys of every direct field selection, in order.
pub(super) fn direct_field_keys(
    document: &CompiledDocument,
    set_id: SelectionSetId,
) -> Vec<String> {
    document.arena().selection_set(set_id).direct().iter()
        .filter_map(|selection| match selection {
            Selection::Field(field) =>
                Some(field.response_key().to_string()),
            _ => None,
        })
        .collect()
}
