use crate::inclusion::InclusionConditions;
use crate::ir::SelectionSetId;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// One canonical selection within a [`SelectionSet`](crate::ir::SelectionSet).
///
/// The GraphQL selection grammar is closed, so this is a closed tagged union
/// matched exhaustively; there is no open extensibility here.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpreadSelection),
    InlineFragment(InlineFragmentSelection),
}
impl Selection {
    pub fn inclusion_conditions(&self) -> Option<&InclusionConditions> {
        match self {
            Self::Field(field) => field.inclusion_conditions.as_ref(),
            Self::FragmentSpread(spread) => spread.inclusion_conditions.as_ref(),
            Self::InlineFragment(inline) => inline.inclusion_conditions.as_ref(),
        }
    }

    /// The key under which this selection is deduplicated within its
    /// selection set: response key for fields, type-condition name for
    /// inline fragments, fragment name for spreads.
    pub(crate) fn merge_key(&self) -> SelectionKey {
        match self {
            Self::Field(field) =>
                SelectionKey::Field(field.response_key().to_string()),
            Self::FragmentSpread(spread) =>
                SelectionKey::FragmentSpread(spread.fragment_name.to_string()),
            Self::InlineFragment(inline) =>
                SelectionKey::TypeCase(inline.type_condition.to_string()),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum SelectionKey {
    Field(String),
    FragmentSpread(String),
    TypeCase(String),
}

/// A single canonical field selection: exactly one per response key within
/// the effective selections of a set.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) inclusion_conditions: Option<InclusionConditions>,
    pub(crate) name: String,
    pub(crate) selection_set: Option<SelectionSetId>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn inclusion_conditions(&self) -> Option<&InclusionConditions> {
        self.inclusion_conditions.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The alias under which this field's value appears in a response, or
    /// the field name if no alias was specified.
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn selection_set(&self) -> Option<SelectionSetId> {
        self.selection_set
    }

    /// The field's declared type as annotated in the schema.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// A named-fragment spread. The spread holds only the fragment's name; the
/// [`Fragment`](crate::ir::Fragment) itself is stored once in the
/// [`FragmentRegistry`](crate::ir::FragmentRegistry) and shared by every
/// spread site.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadSelection {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fragment_name: String,
    pub(crate) inclusion_conditions: Option<InclusionConditions>,
}
impl FragmentSpreadSelection {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }

    pub fn inclusion_conditions(&self) -> Option<&InclusionConditions> {
        self.inclusion_conditions.as_ref()
    }
}

/// A type case: a nested selection set scoped to a more specific type than
/// its enclosing set (`... on T { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) inclusion_conditions: Option<InclusionConditions>,
    pub(crate) selection_set: SelectionSetId,
    pub(crate) type_condition: String,
}
impl InlineFragmentSelection {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn inclusion_conditions(&self) -> Option<&InclusionConditions> {
        self.inclusion_conditions.as_ref()
    }

    pub fn selection_set(&self) -> SelectionSetId {
        self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
