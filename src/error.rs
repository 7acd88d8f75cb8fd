use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("truncated or non-hex percent escape at byte {0} of query value")]
    PercentEscape(usize),

    #[error("percent-decoded query value is not valid utf-8")]
    DecodedUtf8(#[from] std::string::FromUtf8Error),

    #[error("malformed response payload: {0}")]
    Payload(#[from] serde_json::Error),
}
