mod client;
mod error;

pub use client::{SummarizeBackend, SummarizeClient};
pub use error::{
    extract_error_detail, SubmitError, EMPTY_INPUT_MESSAGE, GENERIC_SERVER_MESSAGE,
    NETWORK_MESSAGE, UNEXPECTED_MESSAGE,
};
