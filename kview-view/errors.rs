/// Possible errors from building view components.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// Navigation entry has no title.
    #[error("navigation title cannot be empty")]
    EmptyTitle,

    /// Table row has a cell for a column the table does not declare.
    #[error("column '{0}' is not declared in the table")]
    UnknownColumn(String),
}
