use crate::ir::scope::ScopeResolver;
use crate::ir::FragmentRegistry;
use crate::ir::IrArena;
use crate::ir::MergedSelection;
use crate::ir::MergedSource;
use crate::ir::ScopeDescriptor;
use crate::ir::Selection;
use crate::ir::SelectionSet;
use crate::ir::SelectionSetId;
use crate::schema::SchemaIndex;
use std::collections::HashMap;

/// One potential merge source: a selection set, the path of the entity it
/// selects against (relative to the frame it was registered in), and the
/// scope narrowing under which its selections apply.
///
/// Every selection set built for a unit registers itself as a candidate;
/// spreading a fragment imports the fragment's whole exported table,
/// translated to the spread site.
#[derive(Clone, Debug)]
pub(crate) struct MergeCandidate {
    pub(crate) origin: MergedSource,
    pub(crate) relative_path: Vec<String>,
    pub(crate) scope: Vec<ScopeDescriptor>,
    pub(crate) set: SelectionSetId,
}

/// The second phase of the IR build: once every selection set of an
/// operation or fragment has its `direct` selections, walk the unit's sets
/// and pull in the selections of every eligible candidate sharing the same
/// entity field path.
pub(crate) struct SelectionMerger<'a, 'schema> {
    arena: &'a mut IrArena,
    resolver: ScopeResolver<'schema>,
    schema: &'schema SchemaIndex,
}
impl<'a, 'schema> SelectionMerger<'a, 'schema> {
    pub(crate) fn new(
        arena: &'a mut IrArena,
        schema: &'schema SchemaIndex,
    ) -> Self {
        Self {
            arena,
            resolver: ScopeResolver::new(schema),
            schema,
        }
    }

    pub(crate) fn propagate_merged_selections(
        &mut self,
        candidates: &[MergeCandidate],
        local_sets: &[SelectionSetId],
        fragments: &FragmentRegistry,
    ) {
        let mut candidates_by_path =
            HashMap::<&[String], Vec<&MergeCandidate>>::new();
        for candidate in candidates {
            candidates_by_path
                .entry(candidate.relative_path.as_slice())
                .or_default()
                .push(candidate);
        }

        for &target_id in local_sets {
            let (target_path, target_scope) = {
                let target = self.arena.selection_set(target_id);
                (
                    self.arena.entity(target.entity).field_path().to_vec(),
                    target.scope_path.clone(),
                )
            };

            let Some(path_candidates) =
                candidates_by_path.get(target_path.as_slice())
            else {
                continue;
            };

            for candidate in path_candidates {
                if candidate.set == target_id {
                    continue;
                }
                if !self.resolver.is_eligible_source(
                    &candidate.scope,
                    &target_scope,
                ) {
                    continue;
                }

                tracing::trace!(
                    source = ?candidate.set,
                    target = ?target_id,
                    "merging selections from eligible scope",
                );

                let source_selections =
                    self.arena.selection_set(candidate.set).direct.clone();
                for selection in source_selections {
                    match &selection {
                        // A field of an eligible scope applies to every
                        // possible type of the target.
                        Selection::Field(_) => (),

                        // A foreign type case narrows further than the
                        // target; it never materializes as a merged
                        // selection (its contents reach compatible targets
                        // through the case's own registered set).
                        Selection::InlineFragment(_) => continue,

                        // A spread applies wherever the target scope
                        // satisfies the fragment's type condition.
                        Selection::FragmentSpread(spread) => {
                            let applies = fragments
                                .fragment_named(&spread.fragment_name)
                                .is_some_and(|fragment| {
                                    self.spread_applies_to(
                                        fragment.type_condition(),
                                        &target_scope,
                                    )
                                });
                            if !applies {
                                continue;
                            }
                        },
                    }
                    Self::add_merged(
                        self.arena.selection_set_mut(target_id),
                        selection,
                        candidate.origin.clone(),
                    );
                }
            }
        }
    }

    fn add_merged(
        target: &mut SelectionSet,
        selection: Selection,
        source: MergedSource,
    ) {
        let key = selection.merge_key();

        // `direct` already holds a canonical selection for this key; child
        // sets still merge against each other through their own field paths.
        if target.direct.iter().any(|direct| direct.merge_key() == key) {
            return;
        }

        if let Some(existing) = target.merged.iter_mut().find(|merged| {
            merged.selection.merge_key() == key
        }) {
            if !existing.sources.contains(&source) {
                existing.sources.push(source);
            }
            return;
        }

        target.merged.push(MergedSelection {
            selection,
            sources: vec![source],
        });
    }

    fn spread_applies_to(
        &self,
        type_condition: &str,
        target_scope: &[ScopeDescriptor],
    ) -> bool {
        let Some(target_level) = target_scope.last() else {
            return false;
        };
        target_level.types.iter().any(|target_type| {
            self.schema.type_satisfies(target_type, type_condition)
        })
    }
}
