use crate::error::DdlResult;

/// Base trait for DDL statement builders.
pub trait DdlStatement {
    /// Build the SQL string.
    ///
    /// Never fails: problems recorded while building are ignored here.
    fn build_sql(&self) -> String;

    /// Debug helper.
    fn to_sql(&self) -> String {
        self.build_sql()
    }

    /// Validate builder state.
    fn validate(&self) -> DdlResult<()> {
        Ok(())
    }

    /// Validate, then build the SQL string.
    fn try_to_sql(&self) -> DdlResult<String> {
        self.validate()?;
        Ok(self.build_sql())
    }
}
