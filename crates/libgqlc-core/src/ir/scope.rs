use crate::inclusion::InclusionConditions;
use crate::schema::SchemaIndex;
use indexmap::IndexSet;

/// The type-narrowing steps and active inclusion conditions at one entity
/// level of a selection tree (e.g. `[Animal, Pet, Cat]` inside nested type
/// cases).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScopeDescriptor {
    pub(crate) conditions: Option<InclusionConditions>,
    pub(crate) types: Vec<String>,
}
impl ScopeDescriptor {
    pub fn conditions(&self) -> Option<&InclusionConditions> {
        self.conditions.as_ref()
    }

    /// Produce the descriptor for a type case nested under this scope.
    pub(crate) fn narrowed(
        &self,
        type_name: &str,
        conditions: Option<InclusionConditions>,
    ) -> Self {
        let mut types = self.types.clone();
        if !types.iter().any(|name| name == type_name) {
            types.push(type_name.to_string());
        }
        Self { conditions, types }
    }

    pub fn types(&self) -> &[String] {
        self.types.as_slice()
    }
}

/// Decides whether one scope's selections are eligible to merge into
/// another; the single rule behind every merge direction (ancestor type
/// case, sibling interface, same-named field on a compatible sibling branch,
/// and fragment-into-spreading-context).
pub(crate) struct ScopeResolver<'schema> {
    schema: &'schema SchemaIndex,
}
impl<'schema> ScopeResolver<'schema> {
    pub(crate) fn new(schema: &'schema SchemaIndex) -> Self {
        Self { schema }
    }

    /// Whether the named type condition is guaranteed to hold for every
    /// possible runtime type of `parent_type_name` (in which case a type
    /// case on it is not a real narrowing and can be inlined).
    pub(crate) fn type_case_covers(
        &self,
        condition_type_name: &str,
        parent_type_name: &str,
    ) -> bool {
        if condition_type_name == parent_type_name {
            return true;
        }

        let parent_possible =
            self.schema.possible_type_names(parent_type_name);
        if parent_possible.is_empty() {
            return false;
        }

        let condition_possible =
            self.schema.possible_type_names(condition_type_name);
        parent_possible.iter().all(|type_name| {
            condition_possible.contains(type_name)
        })
    }

    /// Whether a selection set with scope path `candidate` may contribute
    /// its selections into a selection set with scope path `target`.
    ///
    /// At every entity level: each of the candidate's narrowing types must
    /// be satisfied by one of the target's narrowing types (declared
    /// subtype-or-equal; mere possible-type overlap is not enough), the
    /// target must be statically reachable (a dead type case never receives
    /// merged selections), and the candidate's inclusion conditions must be
    /// absent or equivalent to the target's.
    pub(crate) fn is_eligible_source(
        &self,
        candidate: &[ScopeDescriptor],
        target: &[ScopeDescriptor],
    ) -> bool {
        if candidate.len() != target.len() {
            return false;
        }

        candidate.iter().zip(target.iter()).all(|(cand_level, target_level)| {
            self.level_types_eligible(cand_level, target_level)
                && Self::level_conditions_eligible(cand_level, target_level)
        })
    }

    fn level_conditions_eligible(
        cand_level: &ScopeDescriptor,
        target_level: &ScopeDescriptor,
    ) -> bool {
        match (&cand_level.conditions, &target_level.conditions) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(cand_conds), Some(target_conds)) =>
                cand_conds.is_equivalent_to(target_conds),
        }
    }

    fn level_types_eligible(
        &self,
        cand_level: &ScopeDescriptor,
        target_level: &ScopeDescriptor,
    ) -> bool {
        if self.possible_types_of_level(target_level).is_empty() {
            return false;
        }

        cand_level.types.iter().all(|cand_type| {
            target_level.types.iter().any(|target_type| {
                self.schema.type_satisfies(target_type, cand_type)
            })
        })
    }

    /// The concrete object types a runtime value could have at one scope
    /// level: the intersection of the possible types of every narrowing
    /// step. Empty for a statically dead type case.
    pub(crate) fn possible_types_of_level(
        &self,
        level: &ScopeDescriptor,
    ) -> IndexSet<&'schema str> {
        let mut types = level.types.iter();
        let Some(first) = types.next() else {
            return IndexSet::new();
        };

        let mut possible = self.schema.possible_type_names(first);
        for type_name in types {
            let narrower = self.schema.possible_type_names(type_name);
            possible.retain(|name| narrower.contains(name));
        }
        possible
    }
}
