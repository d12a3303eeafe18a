#[derive(Debug, thiserror::Error)]
pub enum DidarError {
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error("record source unavailable: {0}")]
  SourceError(String),
  #[error("matching run aborted")]
  Aborted,
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}
