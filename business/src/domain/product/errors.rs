#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_fields")]
    MissingFields,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.empty_field")]
    EmptyField,
    #[error("product.empty_patch")]
    EmptyPatch,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
