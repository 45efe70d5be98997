use thiserror::Error;

pub type PlotConfigResult<T> = Result<T, PlotConfigError>;

#[derive(Debug, Error)]
pub enum PlotConfigError {
    #[error("unknown {collection} type `{type_name}`")]
    UnknownType {
        collection: &'static str,
        type_name: String,
    },

    #[error("index {index} is out of range for {collection} (len={len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Reason an edit was ignored.
///
/// Rejections never abort editing: the previous valid value stays in place and
/// no change is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("`{input}` is not a finite number")]
    NotANumber { input: String },

    #[error("`{input}` is not one of the field options")]
    NotAnOption { input: String },

    #[error("`{input}` is not a boolean")]
    NotABoolean { input: String },

    #[error("an empty value is not accepted here")]
    EmptyValue,

    #[error("field `{name}` is not part of the schema")]
    UnknownField { name: String },

    #[error("field `{name}` is not active")]
    InactiveField { name: String },

    #[error("field `{name}` is disabled")]
    DisabledField { name: String },

    #[error("field `{name}` is required")]
    RequiredField { name: String },

    #[error("field `{name}` is already active")]
    DuplicateField { name: String },

    #[error("`{kind}` fields do not accept this input")]
    UnsupportedInput { kind: String },

    #[error("list entry {index} does not exist")]
    MissingListEntry { index: usize },

    #[error("`{type_name}` is not a valid choice for this slot")]
    InvalidType { type_name: String },

    #[error("every schema field is already active")]
    Exhausted,
}
