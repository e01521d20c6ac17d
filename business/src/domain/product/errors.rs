#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("product.negative_price")]
    NegativePrice,
}
