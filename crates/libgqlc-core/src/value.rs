use crate::ast;
use crate::ir::Variable;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::types::EnumValue;
use indexmap::IndexMap;

/// A GraphQL value as written in an executable document (e.g. a field
/// argument or a variable's default value).
///
/// Variable and enum-value references are stored as named references and can
/// be resolved against the relevant variable map or
/// [`EnumType`](crate::types::EnumType) on demand.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    EnumValue(crate::types::NamedEnumValueRef),
    Float(f64),
    Int(ast::Number),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    VarRef(crate::ir::NamedVariableRef),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(
        ast_value: &ast::operation::Value,
        position: &loc::SourceLocation,
    ) -> Self {
        match ast_value {
            ast::operation::Value::Variable(var_name) =>
                Value::VarRef(
                    Variable::named_ref(var_name, position.to_owned()),
                ),

            ast::operation::Value::Int(value) =>
                Value::Int(value.clone()),

            ast::operation::Value::Float(value) =>
                Value::Float(*value),

            ast::operation::Value::String(value) =>
                Value::String(value.clone()),

            ast::operation::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::operation::Value::Null =>
                Value::Null,

            ast::operation::Value::Enum(value) =>
                Value::EnumValue(
                    EnumValue::named_ref(value, position.to_owned()),
                ),

            ast::operation::Value::List(values) =>
                Value::List(values.iter().map(|ast_value|
                    Value::from_ast(ast_value, position)
                ).collect()),

            ast::operation::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value, position))
                ).collect()),
        }
    }
}
