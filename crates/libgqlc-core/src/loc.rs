use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [`Pos`](graphql_parser::Pos), except it
/// also records which file (if any) the position refers to.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}

/// Indicates where some item was defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Defined somewhere within an executable document whose position was not
    /// recorded.
    ExecutableDocument,

    /// Defined implicitly by the GraphQL specification itself (e.g. built-in
    /// scalar types and built-in directives).
    GraphQLBuiltIn,

    /// Defined at a specific position within a schema or executable document.
    Position(FilePosition),

    /// Defined somewhere within the schema whose position was not recorded.
    Schema,
}
impl SourceLocation {
    pub(crate) fn from_execdoc_ast_position(
        file_path: Option<&Path>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::Position(FilePosition::from_pos(file_path, *pos))
    }

    pub(crate) fn from_schema_ast_position(
        file_path: Option<&Path>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::Position(FilePosition::from_pos(file_path, *pos))
    }

    /// Produce a new [`SourceLocation`] within the same file as `self` but at
    /// a different AST position.
    pub(crate) fn with_ast_position(&self, pos: &graphql_parser::Pos) -> Self {
        match self {
            Self::Position(file_pos) => Self::Position(FilePosition {
                col: pos.column,
                file: file_pos.file.clone(),
                line: pos.line,
            }),
            other => other.clone(),
        }
    }
}
