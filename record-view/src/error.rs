/// Errors raised while constructing a [`crate::WindowedRecordView`].
///
/// Nothing after construction fails: unresolved pages read as absent.
#[derive(Debug, thiserror::Error)]
pub enum ViewError<E> {
    #[error("failed to decode record set schema: {0}")]
    Schema(E),
    #[error("batch size must be greater than zero")]
    ZeroBatchSize,
}
