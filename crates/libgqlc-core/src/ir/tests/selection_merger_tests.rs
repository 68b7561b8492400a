use super::utils::animal_schema;
use super::utils::compile_document;
use super::utils::direct_field;
use super::utils::direct_field_keys;
use super::utils::direct_type_case;
use super::utils::merged_field;
use super::utils::single_operation;
use crate::ir::MergedSource;
use crate::ir::Selection;

#[test]
fn selecting_the_same_field_twice_yields_one_selection() {
    let schema = animal_schema();
    let document = compile_document(&schema, "{ aField { a a } }");

    let operation = single_operation(&document);
    let root = document.arena().selection_set(operation.selection_set());
    let a_field = direct_field(&document, operation.selection_set(), "aField")
        .expect("aField is selected");

    assert_eq!(root.direct().len(), 1);
    let a_set = a_field.selection_set().expect("aField has sub-selections");
    assert_eq!(direct_field_keys(&document, a_set), vec!["a"]);
    assert!(document.arena().selection_set(a_set).merged().is_empty());
}

#[test]
fn distinct_aliases_of_one_field_never_merge() {
    let schema = animal_schema();
    let document = compile_document(&schema, "{ aField { b: a c: a } }");

    let operation = single_operation(&document);
    let a_field = direct_field(&document, operation.selection_set(), "aField")
        .expect("aField is selected");
    let a_set = a_field.selection_set().expect("aField has sub-selections");

    assert_eq!(direct_field_keys(&document, a_set), vec!["b", "c"]);
    let b_field = direct_field(&document, a_set, "b").unwrap();
    let c_field = direct_field(&document, a_set, "c").unwrap();
    assert_eq!(b_field.name(), "a");
    assert_eq!(c_field.name(), "a");
}

#[test]
fn type_case_on_own_type_is_inlined() {
    let schema = animal_schema();
    let document = compile_document(&schema, "{ aField { a ... on A { b } } }");

    let operation = single_operation(&document);
    let a_field = direct_field(&document, operation.selection_set(), "aField")
        .expect("aField is selected");
    let a_set = a_field.selection_set().expect("aField has sub-selections");

    // `... on A` inside an `A`-typed set is not a real narrowing; its
    // selections land directly next to `a`.
    assert_eq!(direct_field_keys(&document, a_set), vec!["a", "b"]);
    assert!(
        document.arena().selection_set(a_set).direct().iter().all(
            |selection| matches!(selection, Selection::Field(_)),
        ),
    );
}

#[test]
fn type_case_covering_every_possible_type_is_inlined() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "{ allAnimals { ... on Bird { ... on Pet { humanName } } } }",
    );

    let operation = single_operation(&document);
    let animals_set =
        direct_field(&document, operation.selection_set(), "allAnimals")
            .expect("allAnimals is selected")
            .selection_set()
            .expect("allAnimals has sub-selections");
    let as_bird = direct_type_case(&document, animals_set, "Bird")
        .expect("Bird type case is kept");

    // Every Bird is a Pet, so the nested Pet case dissolves into the Bird
    // case's own selections.
    assert_eq!(
        direct_field_keys(&document, as_bird.selection_set()),
        vec!["humanName"],
    );
    assert!(
        direct_type_case(&document, as_bird.selection_set(), "Pet").is_none(),
    );
}

#[test]
fn unrelated_type_case_is_kept_but_never_merged() {
    let schema = animal_schema();
    let document = compile_document(&schema, "{ aField { a ... on B { b } } }");

    let operation = single_operation(&document);
    let a_field = direct_field(&document, operation.selection_set(), "aField")
        .expect("aField is selected");
    let a_set_id = a_field.selection_set().expect("aField has sub-selections");
    let a_set = document.arena().selection_set(a_set_id);

    assert_eq!(a_set.direct().len(), 2);
    let as_b = direct_type_case(&document, a_set_id, "B")
        .expect("the statically dead B type case is retained");

    // Neither scope contributes to the other.
    assert!(a_set.merged().is_empty());
    assert!(
        document.arena()
            .selection_set(as_b.selection_set())
            .merged()
            .is_empty(),
    );
    assert_eq!(
        direct_field_keys(&document, as_b.selection_set()),
        vec!["b"],
    );
}

#[test]
fn object_type_case_inherits_from_sibling_interface_case() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "{ allAnimals { ... on Bird { wingspan } ... on Pet { species } } }",
    );

    let operation = single_operation(&document);
    let animals_set =
        direct_field(&document, operation.selection_set(), "allAnimals")
            .expect("allAnimals is selected")
            .selection_set()
            .expect("allAnimals has sub-selections");
    let as_bird = direct_type_case(&document, animals_set, "Bird")
        .expect("Bird type case is kept");
    let as_pet = direct_type_case(&document, animals_set, "Pet")
        .expect("Pet type case is kept");

    // Bird implements Pet, so the Pet scope's `species` applies to every
    // Bird and is pulled into the Bird case with its provenance.
    let merged_species =
        merged_field(&document, as_bird.selection_set(), "species")
            .expect("species is merged into the Bird case");
    assert_eq!(
        merged_species.sources(),
        &[MergedSource::SelectionSet(as_pet.selection_set())],
    );

    // Pet does not implement Bird; nothing flows the other way.
    assert!(
        document.arena()
            .selection_set(as_pet.selection_set())
            .merged()
            .is_empty(),
    );
}

#[test]
fn interface_case_inherits_from_sibling_interface_it_implements() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "{ allAnimals { ... on Pet { humanName } ... on Animal { species } } }",
    );

    let operation = single_operation(&document);
    let animals_set =
        direct_field(&document, operation.selection_set(), "allAnimals")
            .expect("allAnimals is selected")
            .selection_set()
            .expect("allAnimals has sub-selections");

    // `... on Animal` on an Animal-typed set is inlined, so `species` is a
    // direct selection of the allAnimals set and the Pet case merges it
    // from there.
    assert!(direct_field(&document, animals_set, "species").is_some());

    let as_pet = direct_type_case(&document, animals_set, "Pet")
        .expect("Pet type case is kept");
    let merged_species =
        merged_field(&document, as_pet.selection_set(), "species")
            .expect("species is merged into the Pet case");
    assert_eq!(
        merged_species.sources(),
        &[MergedSource::SelectionSet(animals_set)],
    );
}

#[test]
fn nested_field_inherits_from_same_named_field_on_sibling_type_case() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "{ allAnimals { height { feet } ... on Pet { height { meters } } } }",
    );

    let operation = single_operation(&document);
    let animals_set =
        direct_field(&document, operation.selection_set(), "allAnimals")
            .expect("allAnimals is selected")
            .selection_set()
            .expect("allAnimals has sub-selections");
    let outer_height = direct_field(&document, animals_set, "height")
        .expect("height is selected on every animal")
        .selection_set()
        .expect("height has sub-selections");

    let as_pet = direct_type_case(&document, animals_set, "Pet")
        .expect("Pet type case is kept");
    let pet_height =
        direct_field(&document, as_pet.selection_set(), "height")
            .expect("height is selected on pets")
            .selection_set()
            .expect("height has sub-selections");

    // A Pet's height is also the animal's height one level up: the outer
    // `feet` flows down into the Pet branch's `height`.
    assert_eq!(direct_field_keys(&document, pet_height), vec!["meters"]);
    let merged_feet = merged_field(&document, pet_height, "feet")
        .expect("feet is merged into the Pet branch's height");
    assert_eq!(
        merged_feet.sources(),
        &[MergedSource::SelectionSet(outer_height)],
    );

    // The unnarrowed branch cannot see the Pet-only selection.
    assert!(merged_field(&document, outer_height, "meters").is_none());
    assert!(
        document.arena().selection_set(outer_height).merged().is_empty(),
    );
}

#[test]
fn fragment_spread_stays_direct_and_contributes_merged_selections() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query AllAnimals {
            allAnimals {
                ...AnimalDetails
            }
        }

        fragment AnimalDetails on Animal {
            species
        }
        "#,
    );

    let operation = single_operation(&document);
    let root_id = operation.selection_set();
    let root = document.arena().selection_set(root_id);
    let animals_set = match &root.direct()[0] {
        Selection::Field(field) =>
            field.selection_set().expect("allAnimals has sub-selections"),
        other => panic!("unexpected root selection: {other:?}"),
    };

    // The spread remains addressable...
    let animals = document.arena().selection_set(animals_set);
    assert_eq!(animals.direct().len(), 1);
    assert!(matches!(
        &animals.direct()[0],
        Selection::FragmentSpread(spread)
            if spread.fragment_name() == "AnimalDetails",
    ));

    // ...and its selections are additionally folded into `merged` with the
    // fragment as provenance.
    let merged_species = merged_field(&document, animals_set, "species")
        .expect("species is merged from the fragment");
    assert_eq!(
        merged_species.sources(),
        &[MergedSource::Fragment("AnimalDetails".to_string())],
    );
}

#[test]
fn fragment_nested_fields_merge_into_same_named_context_fields() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        {
            allAnimals {
                height { feet }
                ...HeightMeters
            }
        }

        fragment HeightMeters on Animal {
            height { meters }
        }
        "#,
    );

    let operation = single_operation(&document);
    let root_id = operation.selection_set();
    let animals_set = direct_field(&document, root_id, "allAnimals")
        .expect("allAnimals is selected")
        .selection_set()
        .expect("allAnimals has sub-selections");
    let height_set = direct_field(&document, animals_set, "height")
        .expect("height is selected")
        .selection_set()
        .expect("height has sub-selections");

    assert_eq!(direct_field_keys(&document, height_set), vec!["feet"]);
    let merged_meters = merged_field(&document, height_set, "meters")
        .expect("the fragment's nested meters reaches the authored height");
    assert_eq!(
        merged_meters.sources(),
        &[MergedSource::Fragment("HeightMeters".to_string())],
    );
}

#[test]
fn fragment_on_interface_contributes_to_matching_sibling_type_case() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        {
            allAnimals {
                ... on Bird { wingspan }
                ...PetDetails
            }
        }

        fragment PetDetails on Pet {
            humanName
        }
        "#,
    );

    let operation = single_operation(&document);
    let animals_set =
        direct_field(&document, operation.selection_set(), "allAnimals")
            .expect("allAnimals is selected")
            .selection_set()
            .expect("allAnimals has sub-selections");

    // The fragment narrows to Pet, which every Bird satisfies.
    let as_bird = direct_type_case(&document, animals_set, "Bird")
        .expect("Bird type case is kept");
    let merged_human_name =
        merged_field(&document, as_bird.selection_set(), "humanName")
            .expect("humanName is merged into the Bird case");
    assert_eq!(
        merged_human_name.sources(),
        &[MergedSource::Fragment("PetDetails".to_string())],
    );

    // The unnarrowed set does not satisfy Pet.
    assert!(merged_field(&document, animals_set, "humanName").is_none());
}

#[test]
fn duplicate_spreads_of_one_fragment_collapse_to_one() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        {
            allAnimals {
                ...AnimalDetails
                ...AnimalDetails
            }
        }

        fragment AnimalDetails on Animal {
            species
        }
        "#,
    );

    let operation = single_operation(&document);
    let animals_set =
        direct_field(&document, operation.selection_set(), "allAnimals")
            .expect("allAnimals is selected")
            .selection_set()
            .expect("allAnimals has sub-selections");
    let animals = document.arena().selection_set(animals_set);

    assert_eq!(animals.direct().len(), 1);
    let merged_species = merged_field(&document, animals_set, "species")
        .expect("species is merged from the fragment");
    assert_eq!(merged_species.sources().len(), 1);
}

#[test]
fn conditioned_same_type_case_stays_a_conditional_scope() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        "query Q($a: Boolean!) { aField { ... @include(if: $a) { a } } }",
    );

    let operation = single_operation(&document);
    let a_set = direct_field(&document, operation.selection_set(), "aField")
        .expect("aField is selected")
        .selection_set()
        .expect("aField has sub-selections");

    // The conditioned scope is not dissolved into its parent even though
    // its type condition is trivially true.
    let as_a = direct_type_case(&document, a_set, "A")
        .expect("the conditional scope is kept as a type case");
    assert!(as_a.inclusion_conditions().is_some());
    assert_eq!(
        direct_field_keys(&document, as_a.selection_set()),
        vec!["a"],
    );
}

#[test]
fn duplicate_type_cases_combine_their_conditions() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query Q($a: Boolean!) {
            allAnimals {
                ... on Pet @include(if: $a) { humanName }
                ... on Pet { species }
            }
        }
        "#,
    );

    let operation = single_operation(&document);
    let animals_set =
        direct_field(&document, operation.selection_set(), "allAnimals")
            .expect("allAnimals is selected")
            .selection_set()
            .expect("allAnimals has sub-selections");

    // One Pet case; the unconditioned occurrence dominates.
    let animals = document.arena().selection_set(animals_set);
    let pet_cases = animals.direct().iter().filter(|selection| {
        matches!(
            selection,
            Selection::InlineFragment(inline)
                if inline.type_condition() == "Pet",
        )
    }).count();
    assert_eq!(pet_cases, 1);

    let as_pet = direct_type_case(&document, animals_set, "Pet").unwrap();
    assert!(as_pet.inclusion_conditions().is_none());
    assert_eq!(
        direct_field_keys(&document, as_pet.selection_set()),
        vec!["humanName", "species"],
    );
}

#[test]
fn field_occurrences_with_conditions_reduce_per_occurrence_rules() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query Q($a: Boolean!) {
            aField {
                a @include(if: $a) @include(if: $a)
                b @include(if: $a)
                b
            }
        }
        "#,
    );

    let operation = single_operation(&document);
    let a_set = direct_field(&document, operation.selection_set(), "aField")
        .expect("aField is selected")
        .selection_set()
        .expect("aField has sub-selections");

    // Duplicate atoms collapse to one.
    let a_field = direct_field(&document, a_set, "a").unwrap();
    let conditions = a_field.inclusion_conditions()
        .expect("a stays conditional");
    assert_eq!(conditions.alternatives().len(), 1);
    assert_eq!(conditions.alternatives()[0].conditions().len(), 1);

    // An unconditioned occurrence erases the other's conditions.
    let b_field = direct_field(&document, a_set, "b").unwrap();
    assert!(b_field.inclusion_conditions().is_none());
}

#[test]
fn always_false_selections_are_dropped_silently() {
    let schema = animal_schema();
    let document = compile_document(
        &schema,
        r#"
        query Q($a: Boolean!) {
            aField {
                a
                b @include(if: $a) @skip(if: $a)
            }
        }
        "#,
    );

    let operation = single_operation(&document);
    let a_set = direct_field(&document, operation.selection_set(), "aField")
        .expect("aField is selected")
        .selection_set()
        .expect("aField has sub-selections");

    assert_eq!(direct_field_keys(&document, a_set), vec!["a"]);
}
