use crate::ast;
use crate::inclusion::InclusionConditions;
use crate::inclusion::ReducedConditions;
use crate::ir::scope::ScopeResolver;
use crate::ir::selection::SelectionKey;
use crate::ir::selection_merger::MergeCandidate;
use crate::ir::Entity;
use crate::ir::EntityId;
use crate::ir::FieldCollector;
use crate::ir::FieldSelection;
use crate::ir::FragmentRegistry;
use crate::ir::FragmentSpreadSelection;
use crate::ir::InlineFragmentSelection;
use crate::ir::IrArena;
use crate::ir::MergedSource;
use crate::ir::ScopeDescriptor;
use crate::ir::Selection;
use crate::ir::SelectionSet;
use crate::ir::SelectionSetId;
use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::mem;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<SelectionSetBuildError>>;

/// Builds the `direct` selection sets of one operation or fragment ("unit"),
/// bottom-up, performing field/type-case/fragment-spread deduplication as it
/// goes (the first phase of the merge algorithm; see
/// [`SelectionMerger`](crate::ir::selection_merger::SelectionMerger) for the
/// second).
///
/// The builder accumulates the unit-local state that the second phase and
/// the enclosing compiler need: the merge-candidate table, the ids of every
/// set built for this unit, referenced fragments/types, and the field
/// collector contributions. [`SelectionSetBuilder::finish`] hands these back
/// so the compiler can commit them only if the whole unit built cleanly.
pub(crate) struct SelectionSetBuilder<'a, 'schema> {
    arena: &'a mut IrArena,
    candidates: Vec<MergeCandidate>,
    failed_fragments: &'a HashSet<String>,
    field_collector: FieldCollector,
    file_path: Option<&'a Path>,
    local_sets: Vec<SelectionSetId>,
    referenced_fragments: IndexSet<String>,
    referenced_type_names: IndexSet<String>,
    registry: &'a FragmentRegistry,
    schema: &'schema SchemaIndex,
}

pub(crate) struct BuiltUnit {
    pub(crate) candidates: Vec<MergeCandidate>,
    pub(crate) field_collector: FieldCollector,
    pub(crate) local_sets: Vec<SelectionSetId>,
    pub(crate) referenced_fragments: IndexSet<String>,
    pub(crate) referenced_type_names: IndexSet<String>,
}

impl<'a, 'schema> SelectionSetBuilder<'a, 'schema> {
    pub(crate) fn new(
        schema: &'schema SchemaIndex,
        registry: &'a FragmentRegistry,
        failed_fragments: &'a HashSet<String>,
        arena: &'a mut IrArena,
        file_path: Option<&'a Path>,
    ) -> Self {
        Self {
            arena,
            candidates: vec![],
            failed_fragments,
            field_collector: FieldCollector::new(),
            file_path,
            local_sets: vec![],
            referenced_fragments: IndexSet::new(),
            referenced_type_names: IndexSet::new(),
            registry,
            schema,
        }
    }

    /// Build the root entity and selection set of a unit rooted at the
    /// given composite type.
    pub(crate) fn build_root_selection_set<'doc>(
        &mut self,
        root_type_name: &str,
        ast_sel_set: &'doc ast::operation::SelectionSet,
    ) -> Result<(EntityId, SelectionSetId)> {
        self.referenced_type_names.insert(root_type_name.to_string());

        let entity = self.arena.alloc_entity(Entity {
            field_path: vec![],
            root_type_path: vec![root_type_name.to_string()],
        });
        let scope_path = vec![ScopeDescriptor {
            conditions: None,
            types: vec![root_type_name.to_string()],
        }];

        let items = ast_sel_set.items.iter().collect::<Vec<_>>();
        let set = self.build_selection_set(
            root_type_name,
            entity,
            scope_path,
            &items,
            &loc::SourceLocation::from_execdoc_ast_position(
                self.file_path,
                &ast_sel_set.span.0,
            ),
        )?;

        Ok((entity, set))
    }

    pub(crate) fn finish(self) -> BuiltUnit {
        BuiltUnit {
            candidates: self.candidates,
            field_collector: self.field_collector,
            local_sets: self.local_sets,
            referenced_fragments: self.referenced_fragments,
            referenced_type_names: self.referenced_type_names,
        }
    }

    fn build_selection_set<'doc>(
        &mut self,
        parent_type_name: &str,
        entity: EntityId,
        scope_path: Vec<ScopeDescriptor>,
        items: &[&'doc ast::operation::Selection],
        location: &loc::SourceLocation,
    ) -> Result<SelectionSetId> {
        let parent_type = self.schema.type_named(parent_type_name)
            .expect("type is present in schema");
        if !parent_type.is_composite() {
            return Err(vec![SelectionSetBuildError::UnselectableFieldType {
                location: location.to_owned(),
                parent_type_kind: parent_type.type_kind(),
                parent_type_name: parent_type_name.to_string(),
            }]);
        }

        let mut errors = vec![];
        let mut groups = Groups::default();
        self.collect_selections(
            parent_type_name,
            items,
            &mut groups,
            &mut errors,
        );

        let level_descriptor =
            scope_path.last().expect("scope path is never empty");
        let concrete_type_names = ScopeResolver::new(self.schema)
            .possible_types_of_level(level_descriptor)
            .iter()
            .map(|type_name| type_name.to_string())
            .collect::<Vec<_>>();

        let mut direct = vec![];
        for key in &groups.order {
            match key {
                SelectionKey::Field(response_key) => {
                    let group = groups.fields.shift_remove(response_key)
                        .expect("grouped field is present");
                    if let Some(selection) = self.assemble_field(
                        group,
                        response_key,
                        entity,
                        &scope_path,
                        &concrete_type_names,
                        &mut errors,
                    ) {
                        direct.push(selection);
                    }
                },

                SelectionKey::TypeCase(type_condition) => {
                    let group = groups.type_cases.shift_remove(type_condition)
                        .expect("grouped type case is present");
                    if let Some(selection) = self.assemble_type_case(
                        group,
                        entity,
                        &scope_path,
                        &mut errors,
                    ) {
                        direct.push(selection);
                    }
                },

                SelectionKey::FragmentSpread(fragment_name) => {
                    let group = groups.spreads.shift_remove(fragment_name)
                        .expect("grouped fragment spread is present");
                    direct.push(self.assemble_fragment_spread(
                        group,
                        entity,
                        &scope_path,
                    ));
                },
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let field_path =
            self.arena.entity(entity).field_path().to_vec();
        let set_id = self.arena.alloc_selection_set(SelectionSet {
            direct,
            entity,
            merged: vec![],
            parent_type: parent_type_name.to_string(),
            scope_path: scope_path.clone(),
        });
        self.candidates.push(MergeCandidate {
            origin: MergedSource::SelectionSet(set_id),
            relative_path: field_path,
            scope: scope_path,
            set: set_id,
        });
        self.local_sets.push(set_id);

        Ok(set_id)
    }

    /// Group one authored selection list (plus the contents of any inlined
    /// type cases) by merge key, combining inclusion conditions and child
    /// selection lists as duplicates collapse.
    fn collect_selections<'doc>(
        &mut self,
        parent_type_name: &str,
        items: &[&'doc ast::operation::Selection],
        groups: &mut Groups<'doc>,
        errors: &mut Vec<SelectionSetBuildError>,
    ) {
        for item in items.iter().copied() {
            match item {
                ast::operation::Selection::Field(ast_field) =>
                    self.collect_field(
                        parent_type_name,
                        ast_field,
                        groups,
                        errors,
                    ),

                ast::operation::Selection::InlineFragment(ast_inline) =>
                    self.collect_inline_fragment(
                        parent_type_name,
                        ast_inline,
                        groups,
                        errors,
                    ),

                ast::operation::Selection::FragmentSpread(ast_spread) =>
                    self.collect_fragment_spread(ast_spread, groups, errors),
            }
        }
    }

    fn collect_field<'doc>(
        &mut self,
        parent_type_name: &str,
        ast_field: &'doc ast::operation::Field,
        groups: &mut Groups<'doc>,
        errors: &mut Vec<SelectionSetBuildError>,
    ) {
        let conditions =
            InclusionConditions::from_directives(&ast_field.directives);
        if conditions.is_always_false() {
            // Statically unreachable occurrence: omitted outright.
            return;
        }

        let field_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            &ast_field.position,
        );

        let field_annotation = match self.resolve_field_annotation(
            parent_type_name,
            &ast_field.name,
            &field_srcloc,
        ) {
            Ok(annotation) => annotation,
            Err(error) => {
                errors.push(error);
                return;
            },
        };

        let response_key = ast_field.alias.clone()
            .unwrap_or_else(|| ast_field.name.to_string());

        match groups.fields.get_mut(&response_key) {
            Some(group) => {
                group.conditions = mem::replace(
                    &mut group.conditions,
                    ReducedConditions::NeverIncluded,
                ).or(conditions);
                group.child_items.extend(&ast_field.selection_set.items);
            },
            None => {
                groups.order.push(
                    SelectionKey::Field(response_key.clone()),
                );
                let mut arguments = IndexMap::new();
                for (arg_name, ast_arg_value) in &ast_field.arguments {
                    arguments.insert(
                        arg_name.to_string(),
                        Value::from_ast(ast_arg_value, &field_srcloc),
                    );
                }
                groups.fields.insert(response_key, FieldGroup {
                    alias: ast_field.alias.clone(),
                    arguments,
                    child_items:
                        ast_field.selection_set.items.iter().collect(),
                    conditions,
                    def_location: field_srcloc,
                    field_annotation,
                    name: ast_field.name.to_string(),
                });
            },
        }
    }

    fn collect_fragment_spread(
        &mut self,
        ast_spread: &ast::operation::FragmentSpread,
        groups: &mut Groups<'_>,
        errors: &mut Vec<SelectionSetBuildError>,
    ) {
        let conditions =
            InclusionConditions::from_directives(&ast_spread.directives);
        if conditions.is_always_false() {
            return;
        }

        let spread_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            &ast_spread.position,
        );
        let fragment_name = ast_spread.fragment_name.as_str();

        if self.failed_fragments.contains(fragment_name) {
            errors.push(SelectionSetBuildError::FragmentBuildFailed {
                fragment_name: fragment_name.to_string(),
                location: spread_srcloc,
            });
            return;
        }
        if self.registry.fragment_named(fragment_name).is_none() {
            errors.push(SelectionSetBuildError::UndefinedFragment {
                fragment_name: fragment_name.to_string(),
                location: spread_srcloc,
            });
            return;
        }

        match groups.spreads.get_mut(fragment_name) {
            Some(group) => {
                group.conditions = mem::replace(
                    &mut group.conditions,
                    ReducedConditions::NeverIncluded,
                ).or(conditions);
            },
            None => {
                groups.order.push(SelectionKey::FragmentSpread(
                    fragment_name.to_string(),
                ));
                groups.spreads.insert(
                    fragment_name.to_string(),
                    SpreadGroup {
                        conditions,
                        def_location: spread_srcloc,
                        fragment_name: fragment_name.to_string(),
                    },
                );
            },
        }
    }

    fn collect_inline_fragment<'doc>(
        &mut self,
        parent_type_name: &str,
        ast_inline: &'doc ast::operation::InlineFragment,
        groups: &mut Groups<'doc>,
        errors: &mut Vec<SelectionSetBuildError>,
    ) {
        let conditions =
            InclusionConditions::from_directives(&ast_inline.directives);
        if conditions.is_always_false() {
            return;
        }

        let inline_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            &ast_inline.position,
        );
        let type_condition = match &ast_inline.type_condition {
            Some(ast::operation::TypeCondition::On(type_name)) =>
                type_name.as_str(),
            None => parent_type_name,
        };

        match self.schema.type_named(type_condition) {
            None => {
                errors.push(
                    SelectionSetBuildError::UndefinedTypeConditionType {
                        location: inline_srcloc,
                        type_condition_type_name: type_condition.to_string(),
                    },
                );
                return;
            },
            Some(condition_type) if !condition_type.is_composite() => {
                errors.push(
                    SelectionSetBuildError::NonCompositeTypeCondition {
                        location: inline_srcloc,
                        type_condition_type_kind: condition_type.type_kind(),
                        type_condition_type_name: type_condition.to_string(),
                    },
                );
                return;
            },
            Some(_) => (),
        }

        // An unconditioned type case whose condition is guaranteed true for
        // every possible runtime type of the current node is not a real
        // narrowing: its selections belong directly to the current node.
        if matches!(conditions, ReducedConditions::AlwaysIncluded)
            && ScopeResolver::new(self.schema)
                .type_case_covers(type_condition, parent_type_name)
        {
            let items =
                ast_inline.selection_set.items.iter().collect::<Vec<_>>();
            self.collect_selections(parent_type_name, &items, groups, errors);
            return;
        }

        match groups.type_cases.get_mut(type_condition) {
            Some(group) => {
                group.conditions = mem::replace(
                    &mut group.conditions,
                    ReducedConditions::NeverIncluded,
                ).or(conditions);
                group.items.extend(&ast_inline.selection_set.items);
            },
            None => {
                groups.order.push(SelectionKey::TypeCase(
                    type_condition.to_string(),
                ));
                groups.type_cases.insert(
                    type_condition.to_string(),
                    TypeCaseGroup {
                        conditions,
                        def_location: inline_srcloc,
                        items: ast_inline.selection_set.items.iter().collect(),
                        type_condition: type_condition.to_string(),
                    },
                );
            },
        }
    }

    fn assemble_field<'doc>(
        &mut self,
        group: FieldGroup<'doc>,
        response_key: &str,
        entity: EntityId,
        scope_path: &[ScopeDescriptor],
        concrete_type_names: &[String],
        errors: &mut Vec<SelectionSetBuildError>,
    ) -> Option<Selection> {
        for concrete_type_name in concrete_type_names {
            self.field_collector.record(concrete_type_name, response_key);
        }

        let inner_type_name = group.field_annotation
            .inner_named_type_ref()
            .name()
            .to_string();
        self.referenced_type_names.insert(inner_type_name.clone());

        let field_conditions = group.conditions.into_conditions();

        let child_set = if group.child_items.is_empty() {
            None
        } else {
            let parent_entity = self.arena.entity(entity);
            let mut field_path = parent_entity.field_path().to_vec();
            field_path.push(response_key.to_string());
            let mut root_type_path = parent_entity.root_type_path().to_vec();
            root_type_path.push(inner_type_name.clone());

            let child_entity = self.arena.alloc_entity(Entity {
                field_path,
                root_type_path,
            });
            let mut child_scope = scope_path.to_vec();
            child_scope.push(ScopeDescriptor {
                conditions: field_conditions.clone(),
                types: vec![inner_type_name.clone()],
            });

            match self.build_selection_set(
                &inner_type_name,
                child_entity,
                child_scope,
                &group.child_items,
                &group.def_location,
            ) {
                Ok(set_id) => Some(set_id),
                Err(mut child_errors) => {
                    errors.append(&mut child_errors);
                    return None;
                },
            }
        };

        Some(Selection::Field(FieldSelection {
            alias: group.alias,
            arguments: group.arguments,
            def_location: group.def_location,
            inclusion_conditions: field_conditions,
            name: group.name,
            selection_set: child_set,
            type_annotation: group.field_annotation,
        }))
    }

    fn assemble_fragment_spread(
        &mut self,
        group: SpreadGroup,
        entity: EntityId,
        scope_path: &[ScopeDescriptor],
    ) -> Selection {
        let spread_conditions = group.conditions.into_conditions();
        let registry = self.registry;
        let fragment = registry.fragment_named(&group.fragment_name)
            .expect("fragment is present in registry");

        self.referenced_fragments.insert(group.fragment_name.clone());
        for referenced_name in fragment.referenced_fragments() {
            self.referenced_fragments.insert(referenced_name.to_string());
        }
        self.referenced_type_names.insert(
            fragment.type_condition().to_string(),
        );

        // Import the fragment's merge-candidate table, translated to this
        // spread site: entity paths are prefixed with the site's path, and
        // the fragment's root level is narrowed under the site's scope plus
        // the spread's own inclusion conditions.
        let site_field_path = self.arena.entity(entity).field_path().to_vec();
        let site_level =
            scope_path.last().expect("scope path is never empty");
        for candidate in &fragment.candidate_table {
            let fragment_root_level = candidate.scope.first()
                .expect("candidate scopes are never empty");

            let mut level_types = site_level.types.clone();
            for type_name in &fragment_root_level.types {
                if !level_types.contains(type_name) {
                    level_types.push(type_name.clone());
                }
            }

            let level_conditions =
                ReducedConditions::of(site_level.conditions.clone())
                    .and(ReducedConditions::of(spread_conditions.clone()))
                    .and(ReducedConditions::of(
                        fragment_root_level.conditions.clone(),
                    ));
            if level_conditions.is_always_false() {
                continue;
            }

            let mut scope = scope_path[..scope_path.len() - 1].to_vec();
            scope.push(ScopeDescriptor {
                conditions: level_conditions.into_conditions(),
                types: level_types,
            });
            scope.extend(candidate.scope[1..].iter().cloned());

            let mut relative_path = site_field_path.clone();
            relative_path.extend(candidate.relative_path.iter().cloned());

            self.candidates.push(MergeCandidate {
                origin: candidate.origin.clone(),
                relative_path,
                scope,
                set: candidate.set,
            });
        }

        Selection::FragmentSpread(FragmentSpreadSelection {
            def_location: group.def_location,
            fragment_name: group.fragment_name,
            inclusion_conditions: spread_conditions,
        })
    }

    fn assemble_type_case<'doc>(
        &mut self,
        group: TypeCaseGroup<'doc>,
        entity: EntityId,
        scope_path: &[ScopeDescriptor],
        errors: &mut Vec<SelectionSetBuildError>,
    ) -> Option<Selection> {
        let case_conditions = group.conditions.into_conditions();

        let level_descriptor =
            scope_path.last().expect("scope path is never empty");
        let combined_conditions =
            ReducedConditions::of(level_descriptor.conditions.clone())
                .and(ReducedConditions::of(case_conditions.clone()));
        if combined_conditions.is_always_false() {
            return None;
        }

        let mut case_scope_path =
            scope_path[..scope_path.len() - 1].to_vec();
        case_scope_path.push(level_descriptor.narrowed(
            &group.type_condition,
            combined_conditions.into_conditions(),
        ));

        self.referenced_type_names.insert(group.type_condition.clone());

        let case_set = match self.build_selection_set(
            &group.type_condition,
            entity,
            case_scope_path,
            &group.items,
            &group.def_location,
        ) {
            Ok(set_id) => set_id,
            Err(mut case_errors) => {
                errors.append(&mut case_errors);
                return None;
            },
        };

        Some(Selection::InlineFragment(InlineFragmentSelection {
            def_location: group.def_location,
            inclusion_conditions: case_conditions,
            selection_set: case_set,
            type_condition: group.type_condition,
        }))
    }

    fn resolve_field_annotation(
        &self,
        parent_type_name: &str,
        field_name: &str,
        field_srcloc: &loc::SourceLocation,
    ) -> std::result::Result<TypeAnnotation, SelectionSetBuildError> {
        if field_name == "__typename" {
            return Ok(typename_annotation());
        }

        let parent_type = self.schema.type_named(parent_type_name)
            .expect("type is present in schema");
        let field = match parent_type {
            GraphQLType::Interface(iface_type) =>
                iface_type.fields().get(field_name),
            GraphQLType::Object(obj_type) =>
                obj_type.fields().get(field_name),
            _ => None,
        };

        field
            .map(|field| field.type_annotation().clone())
            .ok_or_else(|| SelectionSetBuildError::UndefinedFieldName {
                location: field_srcloc.to_owned(),
                parent_type_name: parent_type_name.to_string(),
                undefined_field_name: field_name.to_string(),
            })
    }
}

#[derive(Debug, Default)]
struct Groups<'doc> {
    fields: IndexMap<String, FieldGroup<'doc>>,
    order: Vec<SelectionKey>,
    spreads: IndexMap<String, SpreadGroup>,
    type_cases: IndexMap<String, TypeCaseGroup<'doc>>,
}

#[derive(Debug)]
struct FieldGroup<'doc> {
    alias: Option<String>,
    arguments: IndexMap<String, Value>,
    child_items: Vec<&'doc ast::operation::Selection>,
    conditions: ReducedConditions,
    def_location: loc::SourceLocation,
    field_annotation: TypeAnnotation,
    name: String,
}

#[derive(Debug)]
struct SpreadGroup {
    conditions: ReducedConditions,
    def_location: loc::SourceLocation,
    fragment_name: String,
}

#[derive(Debug)]
struct TypeCaseGroup<'doc> {
    conditions: ReducedConditions,
    def_location: loc::SourceLocation,
    items: Vec<&'doc ast::operation::Selection>,
    type_condition: String,
}

fn typename_annotation() -> TypeAnnotation {
    TypeAnnotation::Named(NamedTypeAnnotation {
        nullable: false,
        type_ref: NamedGraphQLTypeRef::new(
            "String",
            loc::SourceLocation::GraphQLBuiltIn,
        ),
    })
}

#[derive(Clone, Debug, Error)]
pub enum SelectionSetBuildError {
    #[error(
        "The `{fragment_name}` fragment failed to build, so spreads of it \
        cannot be resolved."
    )]
    FragmentBuildFailed {
        fragment_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "A type condition must name an object, interface, or union type, \
        but `{type_condition_type_name}` is a \
        `{type_condition_type_kind:?}` type."
    )]
    NonCompositeTypeCondition {
        location: loc::SourceLocation,
        type_condition_type_kind: GraphQLTypeKind,
        type_condition_type_name: String,
    },

    #[error(
        "Attempted to select a field named `{undefined_field_name}` on the \
        `{parent_type_name}` type, but `{parent_type_name}` has no such \
        field defined."
    )]
    UndefinedFieldName {
        location: loc::SourceLocation,
        parent_type_name: String,
        undefined_field_name: String,
    },

    #[error(
        "A spread references the `{fragment_name}` fragment, but no \
        fragment with that name is defined in the document set."
    )]
    UndefinedFragment {
        fragment_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "A type condition references the `{type_condition_type_name}` type, \
        but this type is not defined in the schema."
    )]
    UndefinedTypeConditionType {
        location: loc::SourceLocation,
        type_condition_type_name: String,
    },

    #[error(
        "Attempted to select sub-fields on the `{parent_type_name}` type, \
        but `{parent_type_name}` is neither an Object, Interface, nor Union \
        type."
    )]
    UnselectableFieldType {
        location: loc::SourceLocation,
        parent_type_kind: GraphQLTypeKind,
        parent_type_name: String,
    },
}
