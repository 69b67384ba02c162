use reqwest::Error as ReqwestError;
use std::{fmt, io};

#[derive(Debug)]
pub enum ApiError {
    IoError(io::Error),
    JsonParseError(serde_json::Error),
    ReqwestError(ReqwestError),
    Other(String),
    SessionError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::IoError(e) => write!(f, "IO error: {}", e),
            ApiError::JsonParseError(e) => write!(f, "JSON parse error: {}", e),
            ApiError::ReqwestError(e) => write!(f, "Reqwest error: {}", e),
            ApiError::Other(s) => write!(f, "Other error: {}", s),
            ApiError::SessionError(s) => write!(f, "Session store error: {}", s),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<io::Error> for ApiError {
    fn from(error: io::Error) -> Self {
        ApiError::IoError(error)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::JsonParseError(error)
    }
}

impl From<ReqwestError> for ApiError {
    fn from(error: ReqwestError) -> Self {
        ApiError::ReqwestError(error)
    }
}

impl From<sled::Error> for ApiError {
    fn from(err: sled::Error) -> Self {
        ApiError::SessionError(err.to_string())
    }
}
