#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to compress page content: {0}")]
    Compress(#[source] std::io::Error),

    #[error("PDF object {0} was reserved but never written")]
    MissingObject(usize),
}
