use crate::ast;
use crate::inclusion::InclusionCondition;
use crate::inclusion::InclusionConditions;
use crate::inclusion::ReducedConditions;

fn directives_of(field_src: &str) -> Vec<ast::operation::Directive> {
    let doc = ast::operation::parse(&format!("{{ {field_src} }}")).unwrap();
    let op_def = match doc.definitions.into_iter().next() {
        Some(ast::operation::Definition::Operation(
            ast::operation::OperationDefinition::SelectionSet(sel_set),
        )) => sel_set,
        other => panic!("unexpected document shape: {other:?}"),
    };
    match op_def.items.into_iter().next() {
        Some(ast::operation::Selection::Field(field)) => field.directives,
        other => panic!("unexpected selection shape: {other:?}"),
    }
}

#[test]
fn no_directives_is_always_included() {
    let reduced = InclusionConditions::from_directives(&directives_of("name"));
    assert_eq!(reduced, ReducedConditions::AlwaysIncluded);
}

#[test]
fn include_variable_produces_one_atom() {
    let reduced = InclusionConditions::from_directives(
        &directives_of("name @include(if: $a)"),
    );

    let ReducedConditions::Conditional(conditions) = reduced else {
        panic!("expected conditional reachability");
    };
    assert_eq!(conditions.alternatives().len(), 1);
    assert_eq!(
        conditions.alternatives()[0].conditions(),
        &[InclusionCondition::Include { variable: "a".to_string() }],
    );
}

#[test]
fn duplicate_include_atoms_reduce_to_one() {
    let reduced = InclusionConditions::from_directives(
        &directives_of("name @include(if: $a) @include(if: $a)"),
    );

    let ReducedConditions::Conditional(conditions) = reduced else {
        panic!("expected conditional reachability");
    };
    assert_eq!(conditions.alternatives().len(), 1);
    assert_eq!(conditions.alternatives()[0].conditions().len(), 1);
}

#[test]
fn literal_conditions_collapse() {
    assert_eq!(
        InclusionConditions::from_directives(
            &directives_of("name @include(if: true) @skip(if: false)"),
        ),
        ReducedConditions::AlwaysIncluded,
    );
    assert!(
        InclusionConditions::from_directives(
            &directives_of("name @include(if: false)"),
        ).is_always_false(),
    );
    assert!(
        InclusionConditions::from_directives(
            &directives_of("name @skip(if: true)"),
        ).is_always_false(),
    );
}

#[test]
fn included_and_skipped_same_variable_is_unreachable() {
    assert!(
        InclusionConditions::from_directives(
            &directives_of("name @include(if: $a) @skip(if: $a)"),
        ).is_always_false(),
    );
}

#[test]
fn unconditioned_occurrence_dominates_disjunction() {
    let conditioned = InclusionConditions::from_directives(
        &directives_of("name @include(if: $a)"),
    );
    let unconditioned = InclusionConditions::from_directives(
        &directives_of("name"),
    );

    assert_eq!(
        conditioned.or(unconditioned),
        ReducedConditions::AlwaysIncluded,
    );
}

#[test]
fn distinct_condition_sets_stay_as_two_alternatives() {
    let include_a = InclusionConditions::from_directives(
        &directives_of("name @include(if: $a)"),
    );
    let skip_a = InclusionConditions::from_directives(
        &directives_of("name @skip(if: $a)"),
    );

    let ReducedConditions::Conditional(conditions) = include_a.or(skip_a) else {
        panic!("expected conditional reachability");
    };
    assert_eq!(conditions.alternatives().len(), 2);
}

#[test]
fn conjoining_contradictory_scopes_is_unreachable() {
    let include_a = InclusionConditions::from_directives(
        &directives_of("name @include(if: $a)"),
    );
    let skip_a = InclusionConditions::from_directives(
        &directives_of("name @skip(if: $a)"),
    );

    assert!(include_a.and(skip_a).is_always_false());
}

#[test]
fn equivalence_ignores_ordering() {
    let ab = InclusionConditions::from_directives(
        &directives_of("name @include(if: $a) @skip(if: $b)"),
    ).into_conditions().unwrap();
    let ba = InclusionConditions::from_directives(
        &directives_of("name @skip(if: $b) @include(if: $a)"),
    ).into_conditions().unwrap();

    assert!(ab.is_equivalent_to(&ba));
}
