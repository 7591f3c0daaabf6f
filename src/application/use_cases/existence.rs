//! Existence Check
//!
//! Pre-conditions run by mutating use cases before they touch the
//! repository. The check and the write are not atomic: two requests can both
//! pass and then race on the write, so the store's own constraints remain the
//! source of truth and these checks only produce friendlier errors early.

use std::sync::Arc;

use crate::domain::gateways::{ExistenceCheckSpec, Validation};
use crate::shared::errors::{AppError, ErrorTemplate};

#[derive(Clone)]
pub struct ExistenceCheck {
    validation: Arc<dyn Validation>,
}

impl ExistenceCheck {
    #[must_use]
    pub fn new(validation: Arc<dyn Validation>) -> Self {
        Self { validation }
    }

    /// Whether the record described by `spec` exists
    ///
    /// # Errors
    ///
    /// Propagates the validation query's Infrastructure-layer error.
    pub async fn exists(&self, spec: &ExistenceCheckSpec) -> Result<bool, AppError> {
        self.validation.record_exists(spec).await
    }

    /// Fail with `already_exists` when the value in `spec` is taken
    ///
    /// # Errors
    ///
    /// Returns `already_exists` or the validation query's error.
    pub async fn ensure_available(
        &self,
        spec: &ExistenceCheckSpec,
        already_exists: &ErrorTemplate,
    ) -> Result<(), AppError> {
        if self.validation.validate_existence(spec).await? {
            tracing::warn!(
                table = spec.table,
                column = spec.id_column,
                code = already_exists.code(),
                "Value already taken"
            );
            return Err(already_exists
                .to_error()
                .push_message(format!("{}: {}", spec.id_column, spec.id_value)));
        }
        Ok(())
    }

    /// Fail with `missing` when the record in `spec` does not exist
    ///
    /// # Errors
    ///
    /// Returns `missing` or the validation query's error.
    pub async fn ensure_present(
        &self,
        spec: &ExistenceCheckSpec,
        missing: &ErrorTemplate,
    ) -> Result<(), AppError> {
        if !self.exists(spec).await? {
            tracing::warn!(
                table = spec.table,
                id = %spec.id_value,
                code = missing.code(),
                "Record missing"
            );
            return Err(missing.to_error());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::validation::MockValidation;
    use crate::shared::errors::{ErrorLayer, UNKNOWN};

    const SKU_TAKEN: ErrorTemplate =
        ErrorTemplate::new(ErrorLayer::UseCase, "ERR_SKU_ALREADY_EXIST", "SKU taken", 409);
    const SKU_MISSING: ErrorTemplate =
        ErrorTemplate::new(ErrorLayer::UseCase, "ERR_SKU_NOT_FOUND", "SKU missing", 404);

    fn spec() -> ExistenceCheckSpec {
        ExistenceCheckSpec::new("skus", "code", "SKU-1")
    }

    #[tokio::test]
    async fn should_reject_taken_value() {
        let mut validation = MockValidation::new();
        validation
            .expect_validate_existence()
            .times(1)
            .returning(|_| Ok(true));

        let check = ExistenceCheck::new(Arc::new(validation));
        let err = check.ensure_available(&spec(), &SKU_TAKEN).await.unwrap_err();

        assert!(SKU_TAKEN.matches(&err));
        assert_eq!(err.http_status(), 409);
        assert_eq!(err.messages(), ["code: SKU-1".to_string()]);
    }

    #[tokio::test]
    async fn should_accept_free_value() {
        let mut validation = MockValidation::new();
        validation
            .expect_validate_existence()
            .returning(|_| Ok(false));

        let check = ExistenceCheck::new(Arc::new(validation));
        tokio_test::assert_ok!(check.ensure_available(&spec(), &SKU_TAKEN).await);
    }

    #[tokio::test]
    async fn should_reject_missing_record() {
        let mut validation = MockValidation::new();
        validation.expect_record_exists().returning(|_| Ok(false));

        let check = ExistenceCheck::new(Arc::new(validation));
        let err = check.ensure_present(&spec(), &SKU_MISSING).await.unwrap_err();

        assert!(SKU_MISSING.matches(&err));
        assert_eq!(err.layer(), ErrorLayer::UseCase);
    }

    #[tokio::test]
    async fn should_propagate_query_failure() {
        let mut validation = MockValidation::new();
        validation
            .expect_record_exists()
            .returning(|_| Err(UNKNOWN.to_error().with_function("RecordExists")));

        let check = ExistenceCheck::new(Arc::new(validation));
        let err = check.ensure_present(&spec(), &SKU_MISSING).await.unwrap_err();

        assert!(err.is_unknown());
        assert_eq!(err.layer(), ErrorLayer::Infrastructure);
        assert_eq!(err.function(), "RecordExists");
    }
}
