use thiserror::Error;

use crate::core::table::Column;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("missing column `{column}`")]
    MissingColumn { column: Column },

    #[error("the settlement table has no rows")]
    EmptyInput,

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let error = EngineError::MissingColumn { column: Column::ImbalanceCostAbsolute };
        assert_eq!(error.to_string(), "missing column `imbalanceCostAbsolute`");
    }
}
