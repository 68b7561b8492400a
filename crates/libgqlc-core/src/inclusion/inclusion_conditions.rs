use crate::ast;

/// A single `@include`/`@skip` atom over a named operation variable.
///
/// Literal arguments (`@include(if: true)`, `@skip(if: false)`, and their
/// always-false duals) never survive into an `InclusionCondition`; they are
/// collapsed while the enclosing [`InclusionConjunction`] is reduced.
#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd,
    serde::Deserialize, serde::Serialize,
)]
pub enum InclusionCondition {
    Include { variable: String },
    Skip { variable: String },
}
impl InclusionCondition {
    pub fn variable(&self) -> &str {
        match self {
            Self::Include { variable } => variable.as_str(),
            Self::Skip { variable } => variable.as_str(),
        }
    }
}

/// A conjunction of [`InclusionCondition`]s: the selection is included only
/// when every atom holds.
///
/// Invariant: atoms are deduplicated and no variable appears both included
/// and skipped (such a conjunction is impossible and is dropped during
/// reduction).
#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd,
    serde::Deserialize, serde::Serialize,
)]
pub struct InclusionConjunction {
    pub(crate) conditions: Vec<InclusionCondition>,
}
impl InclusionConjunction {
    pub fn conditions(&self) -> &[InclusionCondition] {
        self.conditions.as_slice()
    }

    fn is_impossible(&self) -> bool {
        self.conditions.iter().any(|cond| match cond {
            InclusionCondition::Include { variable } =>
                self.conditions.contains(&InclusionCondition::Skip {
                    variable: variable.to_string(),
                }),
            InclusionCondition::Skip { .. } => false,
        })
    }

    fn normalized(&self) -> Self {
        let mut conditions = self.conditions.clone();
        conditions.sort();
        conditions.dedup();
        Self { conditions }
    }
}

/// A normalized disjunction of [`InclusionConjunction`]s: the selection is
/// included when at least one alternative holds.
///
/// An unconditioned selection carries no `InclusionConditions` at all
/// (`Option::None` wherever conditions are stored), and a selection whose
/// conditions reduce to always-false is omitted from its selection set
/// entirely; both states are expressed by [`ReducedConditions`] during
/// construction.
#[derive(
    Clone, Debug, Eq, Hash, PartialEq,
    serde::Deserialize, serde::Serialize,
)]
pub struct InclusionConditions {
    pub(crate) alternatives: Vec<InclusionConjunction>,
}
impl InclusionConditions {
    pub fn alternatives(&self) -> &[InclusionConjunction] {
        self.alternatives.as_slice()
    }

    /// Conjoin two condition sets (used when an outer conditioned scope
    /// nests an inner conditioned selection): the cross-product of the two
    /// disjunctions, with impossible combinations dropped.
    pub(crate) fn and_with(&self, other: &InclusionConditions) -> ReducedConditions {
        let mut alternatives = vec![];
        for left in &self.alternatives {
            for right in &other.alternatives {
                let mut conditions = left.conditions.clone();
                for condition in &right.conditions {
                    if !conditions.contains(condition) {
                        conditions.push(condition.clone());
                    }
                }
                let conjunction = InclusionConjunction { conditions };
                if conjunction.is_impossible() {
                    continue;
                }
                if !alternatives.iter().any(|existing: &InclusionConjunction| {
                    existing.normalized() == conjunction.normalized()
                }) {
                    alternatives.push(conjunction);
                }
            }
        }

        if alternatives.is_empty() {
            ReducedConditions::NeverIncluded
        } else {
            ReducedConditions::Conditional(Self { alternatives })
        }
    }

    /// Extract the `@include`/`@skip` conditions from one authored
    /// occurrence's directive list, reduced per the rules above.
    pub(crate) fn from_directives(
        directives: &[ast::operation::Directive],
    ) -> ReducedConditions {
        let mut conditions = vec![];
        for directive in directives {
            let is_include = match directive.name.as_str() {
                "include" => true,
                "skip" => false,
                _ => continue,
            };

            let if_arg = directive.arguments.iter().find_map(|(name, value)| {
                (name == "if").then_some(value)
            });

            let condition = match if_arg {
                Some(ast::operation::Value::Boolean(literal)) => {
                    if *literal == is_include {
                        // @include(if: true) / @skip(if: false): no-op.
                        continue;
                    }
                    // @include(if: false) / @skip(if: true): unreachable.
                    return ReducedConditions::NeverIncluded;
                },

                Some(ast::operation::Value::Variable(variable)) =>
                    if is_include {
                        InclusionCondition::Include {
                            variable: variable.to_string(),
                        }
                    } else {
                        InclusionCondition::Skip {
                            variable: variable.to_string(),
                        }
                    },

                _ => continue,
            };

            if !conditions.contains(&condition) {
                conditions.push(condition);
            }
        }

        if conditions.is_empty() {
            return ReducedConditions::AlwaysIncluded;
        }

        let conjunction = InclusionConjunction { conditions };
        if conjunction.is_impossible() {
            ReducedConditions::NeverIncluded
        } else {
            ReducedConditions::Conditional(Self {
                alternatives: vec![conjunction],
            })
        }
    }

    /// Set-wise equality, ignoring atom and alternative ordering.
    pub fn is_equivalent_to(&self, other: &InclusionConditions) -> bool {
        self.normalized() == other.normalized()
    }

    fn normalized(&self) -> Self {
        let mut alternatives = self.alternatives.iter()
            .map(InclusionConjunction::normalized)
            .collect::<Vec<_>>();
        alternatives.sort();
        alternatives.dedup();
        Self { alternatives }
    }

    /// Add `other`'s alternatives as additional reachability paths for the
    /// same selection, deduplicating equivalent conjunctions.
    pub(crate) fn or_with(&mut self, other: &InclusionConditions) {
        for conjunction in &other.alternatives {
            if !self.alternatives.iter().any(|existing| {
                existing.normalized() == conjunction.normalized()
            }) {
                self.alternatives.push(conjunction.clone());
            }
        }
    }
}

/// The result of reducing a set of inclusion conditions: unconditionally
/// included, unconditionally excluded, or conditional on variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReducedConditions {
    AlwaysIncluded,
    Conditional(InclusionConditions),
    NeverIncluded,
}
impl ReducedConditions {
    /// Conjunction of two reachability requirements.
    pub(crate) fn and(self, other: ReducedConditions) -> ReducedConditions {
        match (self, other) {
            (Self::NeverIncluded, _) | (_, Self::NeverIncluded) =>
                Self::NeverIncluded,
            (Self::AlwaysIncluded, other) => other,
            (this, Self::AlwaysIncluded) => this,
            (Self::Conditional(left), Self::Conditional(right)) =>
                left.and_with(&right),
        }
    }

    pub fn is_always_false(&self) -> bool {
        matches!(self, Self::NeverIncluded)
    }

    /// The stored form of these conditions: `None` for unconditioned.
    ///
    /// Callers must handle [`ReducedConditions::NeverIncluded`] before this
    /// point (the selection is omitted outright).
    pub(crate) fn into_conditions(self) -> Option<InclusionConditions> {
        match self {
            Self::AlwaysIncluded | Self::NeverIncluded => None,
            Self::Conditional(conditions) => Some(conditions),
        }
    }

    pub(crate) fn of(conditions: Option<InclusionConditions>) -> Self {
        match conditions {
            None => Self::AlwaysIncluded,
            Some(conditions) => Self::Conditional(conditions),
        }
    }

    /// Disjunction of two occurrences' reachability: used when the same
    /// field/type-case/spread is authored more than once. An unconditioned
    /// occurrence dominates.
    pub(crate) fn or(self, other: ReducedConditions) -> ReducedConditions {
        match (self, other) {
            (Self::AlwaysIncluded, _) | (_, Self::AlwaysIncluded) =>
                Self::AlwaysIncluded,
            (Self::NeverIncluded, other) => other,
            (this, Self::NeverIncluded) => this,
            (Self::Conditional(mut left), Self::Conditional(right)) => {
                left.or_with(&right);
                Self::Conditional(left)
            },
        }
    }
}
