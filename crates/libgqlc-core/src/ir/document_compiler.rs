use crate::ast;
use crate::ir::selection_merger::SelectionMerger;
use crate::ir::selection_set_builder::SelectionSetBuilder;
use crate::ir::CompiledDocument;
use crate::ir::FieldCollector;
use crate::ir::Fragment;
use crate::ir::FragmentRegistry;
use crate::ir::IrArena;
use crate::ir::MergedSource;
use crate::ir::Operation;
use crate::ir::OperationKind;
use crate::ir::ReferencedTypes;
use crate::ir::SelectionSetBuildError;
use crate::ir::Variable;
use crate::loc;
use crate::schema::SchemaIndex;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use crate::DirectiveAnnotationBuilder;
use crate::Value;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::sync::OnceLock;
use thiserror::Error;

/// Compiles a validated executable document against a [`SchemaIndex`],
/// producing a [`CompiledDocument`].
///
/// Fragments are built on first use and memoized in the resulting
/// [`FragmentRegistry`]; each operation/fragment either builds completely or
/// contributes nothing beyond its errors (its partial IR is rolled back), so
/// one malformed definition never poisons the rest of the document set.
pub struct DocumentCompiler<'schema> {
    schema: &'schema SchemaIndex,
}
impl<'schema> DocumentCompiler<'schema> {
    pub fn new(schema: &'schema SchemaIndex) -> Self {
        Self { schema }
    }

    /// Compile every operation and fragment definition in the document.
    ///
    /// Failures are collected in [`CompiledDocument::errors`] rather than
    /// aborting the whole document set.
    pub fn compile(
        &self,
        document: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> CompiledDocument {
        let mut compilation = Compilation {
            arena: IrArena::new(),
            errors: vec![],
            failed_fragments: HashSet::new(),
            field_collector: FieldCollector::new(),
            file_path,
            fragment_defs: IndexMap::new(),
            operations: vec![],
            referenced_type_names: IndexSet::new(),
            registry: FragmentRegistry::new(),
            schema: self.schema,
        };

        let mut operation_defs = vec![];
        for def in &document.definitions {
            match def {
                ast::operation::Definition::Fragment(frag_def) =>
                    compilation.index_fragment_definition(frag_def),
                ast::operation::Definition::Operation(op_def) =>
                    operation_defs.push(op_def),
            }
        }

        // Every fragment must be fully built (including its own merged
        // selections and referenced-fragment set) before anything that
        // spreads it; dependencies are resolved depth-first with an
        // in-progress marker for cycle detection.
        let fragment_names = compilation.fragment_defs.keys()
            .cloned()
            .collect::<Vec<_>>();
        for fragment_name in fragment_names {
            compilation.resolve_fragment(&fragment_name, &mut vec![]);
        }

        for op_def in operation_defs {
            compilation.build_operation(op_def);
        }

        CompiledDocument {
            arena: compilation.arena,
            errors: compilation.errors,
            field_collector: compilation.field_collector,
            fragments: compilation.registry,
            operations: compilation.operations,
            referenced_types: ReferencedTypes::from_type_names(
                self.schema,
                compilation.referenced_type_names,
            ),
        }
    }

    /// Parse and compile an executable document from source text.
    pub fn compile_str(
        &self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<CompiledDocument, DocumentCompileError> {
        let document = ast::operation::parse(content.as_ref())
            .map_err(|error| DocumentCompileError::ParseError(
                Arc::new(error),
            ))?;
        Ok(self.compile(&document, file_path))
    }
}

struct Compilation<'schema, 'doc> {
    arena: IrArena,
    errors: Vec<DocumentCompileError>,
    failed_fragments: HashSet<String>,
    field_collector: FieldCollector,
    file_path: Option<&'doc Path>,
    fragment_defs: IndexMap<String, &'doc ast::operation::FragmentDefinition>,
    operations: Vec<Operation>,
    referenced_type_names: IndexSet<String>,
    registry: FragmentRegistry,
    schema: &'schema SchemaIndex,
}
impl<'schema, 'doc> Compilation<'schema, 'doc> {
    fn index_fragment_definition(
        &mut self,
        frag_def: &'doc ast::operation::FragmentDefinition,
    ) {
        if let Some(first_def) = self.fragment_defs.get(&frag_def.name) {
            self.errors.push(DocumentCompileError::Fragment {
                errors: vec![
                    FragmentBuildError::DuplicateFragmentDefinition {
                        first_def_location:
                            loc::SourceLocation::from_execdoc_ast_position(
                                self.file_path,
                                &first_def.position,
                            ),
                        fragment_name: frag_def.name.to_string(),
                        second_def_location:
                            loc::SourceLocation::from_execdoc_ast_position(
                                self.file_path,
                                &frag_def.position,
                            ),
                    },
                ],
                fragment_name: frag_def.name.to_string(),
            });
            return;
        }

        self.fragment_defs.insert(frag_def.name.to_string(), frag_def);
    }

    /// Build the named fragment if it has not been built (or failed)
    /// already, building everything it spreads first.
    fn resolve_fragment(&mut self, name: &str, visiting: &mut Vec<String>) {
        if self.registry.fragment_named(name).is_some()
            || self.failed_fragments.contains(name)
        {
            return;
        }

        // Spreads naming unknown fragments are reported at the spread site.
        let Some(frag_def) = self.fragment_defs.get(name).copied() else {
            return;
        };

        if let Some(cycle_start) =
            visiting.iter().position(|visited| visited == name)
        {
            let mut cycle_path = visiting[cycle_start..].to_vec();
            cycle_path.push(name.to_string());
            for fragment_name in &cycle_path {
                self.failed_fragments.insert(fragment_name.to_string());
            }
            self.errors.push(DocumentCompileError::Fragment {
                errors: vec![FragmentBuildError::FragmentCycleDetected {
                    cycle_path,
                }],
                fragment_name: name.to_string(),
            });
            return;
        }

        visiting.push(name.to_string());
        for spread_name in collect_spread_names(&frag_def.selection_set) {
            self.resolve_fragment(&spread_name, visiting);
        }
        visiting.pop();

        // The dependency walk may have found this fragment participating in
        // a cycle.
        if self.failed_fragments.contains(name) {
            return;
        }

        self.build_fragment(name, frag_def);
    }

    fn build_fragment(
        &mut self,
        name: &str,
        frag_def: &'doc ast::operation::FragmentDefinition,
    ) {
        let fragdef_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            &frag_def.position,
        );
        let ast::operation::TypeCondition::On(type_condition) =
            &frag_def.type_condition;

        match self.schema.type_named(type_condition) {
            None => {
                self.fail_fragment(
                    name,
                    FragmentBuildError::TypeConditionTypeDoesNotExistInSchema {
                        fragment_name: name.to_string(),
                        fragment_src_location: fragdef_srcloc,
                        type_condition_type_name: type_condition.to_string(),
                    },
                );
                return;
            },
            Some(condition_type) if !condition_type.is_composite() => {
                self.fail_fragment(
                    name,
                    FragmentBuildError::InvalidFragmentTypeConditionTypeKind {
                        fragment_name: name.to_string(),
                        invalid_type_kind: condition_type.type_kind(),
                        invalid_type_name: type_condition.to_string(),
                    },
                );
                return;
            },
            Some(_) => (),
        }

        let directives = DirectiveAnnotationBuilder::from_ast(
            &fragdef_srcloc,
            &frag_def.directives,
        );

        let checkpoint = self.arena.checkpoint();
        let mut builder = SelectionSetBuilder::new(
            self.schema,
            &self.registry,
            &self.failed_fragments,
            &mut self.arena,
            self.file_path,
        );
        let result = builder.build_root_selection_set(
            type_condition,
            &frag_def.selection_set,
        );
        let unit = builder.finish();

        match result {
            Ok((root_entity, selection_set)) => {
                SelectionMerger::new(&mut self.arena, self.schema)
                    .propagate_merged_selections(
                        &unit.candidates,
                        &unit.local_sets,
                        &self.registry,
                    );

                // Exported candidates carry fragment provenance so spread
                // sites can attribute merged selections to this fragment
                // (or to a fragment this one spreads).
                let candidate_table = unit.candidates.into_iter()
                    .map(|mut candidate| {
                        if let MergedSource::SelectionSet(_) = candidate.origin {
                            candidate.origin =
                                MergedSource::Fragment(name.to_string());
                        }
                        candidate
                    })
                    .collect();

                self.field_collector.merge_from(unit.field_collector);
                self.referenced_type_names.extend(unit.referenced_type_names);
                self.registry.fragments.insert(name.to_string(), Fragment {
                    candidate_table,
                    def_location: fragdef_srcloc,
                    definition: frag_def.clone(),
                    directives,
                    name: name.to_string(),
                    referenced_fragments:
                        unit.referenced_fragments.into_iter().collect(),
                    root_entity,
                    selection_set,
                    type_condition: type_condition.to_string(),
                });
                tracing::debug!(fragment = name, "compiled fragment");
            },

            Err(selection_set_errors) => {
                self.arena.rollback_to(checkpoint);
                self.fail_fragment(
                    name,
                    FragmentBuildError::SelectionSetBuildErrors(
                        selection_set_errors,
                    ),
                );
            },
        }
    }

    fn build_operation(
        &mut self,
        op_def: &'doc ast::operation::OperationDefinition,
    ) {
        let details = match self.operation_details(op_def) {
            Ok(details) => details,
            Err(error) => {
                self.errors.push(DocumentCompileError::Operation {
                    errors: vec![error],
                    operation_name: operation_name_of(op_def),
                });
                return;
            },
        };

        let opdef_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            details.pos,
        );
        let directives = DirectiveAnnotationBuilder::from_ast(
            &opdef_srcloc,
            details.directives,
        );

        let mut errors = vec![];
        let mut variable_type_names = vec![];
        let mut variables = IndexMap::<String, Variable>::new();
        for ast_var_def in details.variables {
            let vardef_srcloc =
                opdef_srcloc.with_ast_position(&ast_var_def.position);
            let type_annotation = TypeAnnotation::from_ast_type(
                &vardef_srcloc,
                &ast_var_def.var_type,
            );

            if let Some(var_def) = variables.get(ast_var_def.name.as_str()) {
                errors.push(OperationBuildError::DuplicateVariableName {
                    variable_definition1: var_def.def_location().to_owned(),
                    variable_definition2: vardef_srcloc,
                    variable_name: ast_var_def.name.to_string(),
                });
                continue;
            }

            let var_type_name =
                type_annotation.inner_named_type_ref().name().to_string();
            if self.schema.type_named(&var_type_name).is_none() {
                errors.push(OperationBuildError::UndefinedVariableType {
                    location: vardef_srcloc,
                    variable_name: ast_var_def.name.to_string(),
                });
                continue;
            }
            variable_type_names.push(var_type_name);

            let default_value = ast_var_def.default_value.as_ref().map(
                |value| Value::from_ast(value, &vardef_srcloc),
            );
            variables.insert(ast_var_def.name.to_string(), Variable {
                default_value,
                name: ast_var_def.name.to_string(),
                type_annotation,
                def_location: vardef_srcloc,
            });
        }

        let checkpoint = self.arena.checkpoint();
        let mut builder = SelectionSetBuilder::new(
            self.schema,
            &self.registry,
            &self.failed_fragments,
            &mut self.arena,
            self.file_path,
        );
        let result = builder.build_root_selection_set(
            &details.root_type_name,
            details.selection_set,
        );
        let unit = builder.finish();

        match result {
            Ok((root_entity, selection_set)) if errors.is_empty() => {
                SelectionMerger::new(&mut self.arena, self.schema)
                    .propagate_merged_selections(
                        &unit.candidates,
                        &unit.local_sets,
                        &self.registry,
                    );

                self.field_collector.merge_from(unit.field_collector);
                self.referenced_type_names.extend(unit.referenced_type_names);
                self.referenced_type_names.extend(variable_type_names);
                self.operations.push(Operation {
                    def_location: opdef_srcloc,
                    definition: op_def.clone(),
                    directives,
                    identifier: OnceLock::new(),
                    kind: details.kind,
                    name: details.name.cloned(),
                    referenced_fragments:
                        unit.referenced_fragments.into_iter().collect(),
                    root_entity,
                    selection_set,
                    variables,
                });
                tracing::debug!(
                    operation = ?operation_name_of(op_def),
                    "compiled operation",
                );
            },

            Ok(_) => {
                self.arena.rollback_to(checkpoint);
                self.errors.push(DocumentCompileError::Operation {
                    errors,
                    operation_name: operation_name_of(op_def),
                });
            },

            Err(selection_set_errors) => {
                self.arena.rollback_to(checkpoint);
                errors.push(OperationBuildError::SelectionSetBuildErrors(
                    selection_set_errors,
                ));
                self.errors.push(DocumentCompileError::Operation {
                    errors,
                    operation_name: operation_name_of(op_def),
                });
            },
        }
    }

    fn fail_fragment(&mut self, name: &str, error: FragmentBuildError) {
        self.failed_fragments.insert(name.to_string());
        self.errors.push(DocumentCompileError::Fragment {
            errors: vec![error],
            fragment_name: name.to_string(),
        });
    }

    fn operation_details(
        &self,
        op_def: &'doc ast::operation::OperationDefinition,
    ) -> Result<OperationDetails<'doc>, OperationBuildError> {
        use ast::operation::OperationDefinition as OpDef;

        static NO_DIRECTIVES: Vec<ast::operation::Directive> = Vec::new();
        static NO_VARIABLES: Vec<ast::operation::VariableDefinition> =
            Vec::new();

        Ok(match op_def {
            OpDef::SelectionSet(sel_set) => OperationDetails {
                directives: &NO_DIRECTIVES,
                kind: OperationKind::Query,
                name: None,
                pos: &sel_set.span.0,
                root_type_name: self.schema.query_type().name().to_string(),
                selection_set: sel_set,
                variables: &NO_VARIABLES,
            },

            OpDef::Query(query) => OperationDetails {
                directives: &query.directives,
                kind: OperationKind::Query,
                name: query.name.as_ref(),
                pos: &query.position,
                root_type_name: self.schema.query_type().name().to_string(),
                selection_set: &query.selection_set,
                variables: &query.variable_definitions,
            },

            OpDef::Mutation(mutation) => OperationDetails {
                directives: &mutation.directives,
                kind: OperationKind::Mutation,
                name: mutation.name.as_ref(),
                pos: &mutation.position,
                root_type_name: self.schema.mutation_type()
                    .ok_or(OperationBuildError::NoMutationTypeDefinedInSchema)?
                    .name()
                    .to_string(),
                selection_set: &mutation.selection_set,
                variables: &mutation.variable_definitions,
            },

            OpDef::Subscription(subscription) => OperationDetails {
                directives: &subscription.directives,
                kind: OperationKind::Subscription,
                name: subscription.name.as_ref(),
                pos: &subscription.position,
                root_type_name: self.schema.subscription_type()
                    .ok_or(
                        OperationBuildError::NoSubscriptionTypeDefinedInSchema,
                    )?
                    .name()
                    .to_string(),
                selection_set: &subscription.selection_set,
                variables: &subscription.variable_definitions,
            },
        })
    }
}

struct OperationDetails<'doc> {
    directives: &'doc Vec<ast::operation::Directive>,
    kind: OperationKind,
    name: Option<&'doc String>,
    pos: &'doc ast::AstPos,
    root_type_name: String,
    selection_set: &'doc ast::operation::SelectionSet,
    variables: &'doc Vec<ast::operation::VariableDefinition>,
}

fn collect_spread_names(
    sel_set: &ast::operation::SelectionSet,
) -> IndexSet<String> {
    fn walk(
        sel_set: &ast::operation::SelectionSet,
        spread_names: &mut IndexSet<String>,
    ) {
        for selection in &sel_set.items {
            match selection {
                ast::operation::Selection::Field(field) =>
                    walk(&field.selection_set, spread_names),
                ast::operation::Selection::FragmentSpread(spread) => {
                    spread_names.insert(spread.fragment_name.to_string());
                },
                ast::operation::Selection::InlineFragment(inline) =>
                    walk(&inline.selection_set, spread_names),
            }
        }
    }

    let mut spread_names = IndexSet::new();
    walk(sel_set, &mut spread_names);
    spread_names
}

fn operation_name_of(
    op_def: &ast::operation::OperationDefinition,
) -> Option<String> {
    use ast::operation::OperationDefinition as OpDef;
    match op_def {
        OpDef::Mutation(mutation) => mutation.name.clone(),
        OpDef::Query(query) => query.name.clone(),
        OpDef::SelectionSet(_) => None,
        OpDef::Subscription(subscription) => subscription.name.clone(),
    }
}

#[derive(Clone, Debug, Error)]
pub enum DocumentCompileError {
    #[error("Failure to build the `{fragment_name}` fragment: {errors:?}")]
    Fragment {
        errors: Vec<FragmentBuildError>,
        fragment_name: String,
    },

    #[error("Failure to build operation {operation_name:?}: {errors:?}")]
    Operation {
        errors: Vec<OperationBuildError>,
        operation_name: Option<String>,
    },

    #[error("Error parsing executable document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),
}

#[derive(Clone, Debug, Error)]
pub enum FragmentBuildError {
    #[error("Duplicate fragment definition: `{fragment_name}`")]
    DuplicateFragmentDefinition {
        first_def_location: loc::SourceLocation,
        fragment_name: String,
        second_def_location: loc::SourceLocation,
    },

    #[error("Fragment cycle detected: {}", cycle_path.join(" → "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error(
        "Fragment type conditions must name an object, interface, or union \
        type, but `{invalid_type_name}` is a `{invalid_type_kind:?}` type."
    )]
    InvalidFragmentTypeConditionTypeKind {
        fragment_name: String,
        invalid_type_kind: GraphQLTypeKind,
        invalid_type_name: String,
    },

    #[error("Failure to build the selection set for this fragment: {0:?}")]
    SelectionSetBuildErrors(Vec<SelectionSetBuildError>),

    #[error(
        "The `{fragment_name}` fragment declares its type condition as \
        `{type_condition_type_name}`, but this type is not defined in the \
        schema."
    )]
    TypeConditionTypeDoesNotExistInSchema {
        fragment_name: String,
        fragment_src_location: loc::SourceLocation,
        type_condition_type_name: String,
    },
}

#[derive(Clone, Debug, Error)]
pub enum OperationBuildError {
    #[error(
        "Found multiple variables defined with the same name on this \
        operation: `{variable_name}`"
    )]
    DuplicateVariableName {
        variable_definition1: loc::SourceLocation,
        variable_definition2: loc::SourceLocation,
        variable_name: String,
    },

    #[error("No Mutation type defined on this schema")]
    NoMutationTypeDefinedInSchema,

    #[error("No Subscription type defined on this schema")]
    NoSubscriptionTypeDefinedInSchema,

    #[error("Failure to build the selection set for this operation: {0:?}")]
    SelectionSetBuildErrors(Vec<SelectionSetBuildError>),

    #[error(
        "The type named for variable `{variable_name}` is not defined in \
        the schema for this operation"
    )]
    UndefinedVariableType {
        location: loc::SourceLocation,
        variable_name: String,
    },
}
