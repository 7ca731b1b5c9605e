//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, raster backend decode/draw/encode failures, and the
//! [`Error::Composite`] wrapper that ties a backend failure to the layer it
//! happened on.
use thiserror::Error;

use crate::model::LayerName;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("decode error for '{url}': {reason}")]
    Decode { url: String, reason: String },

    #[error("draw error for '{url}': {reason}")]
    Draw { url: String, reason: String },

    #[error("encode error: {0}")]
    Encode(String),

    #[error("composite failed at layer '{layer}' ({url}): {source}")]
    Composite {
        layer: LayerName,
        url: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap a backend failure with the layer and url it occurred on.
    pub fn composite(layer: impl Into<LayerName>, url: impl Into<String>, source: Error) -> Self {
        Error::Composite {
            layer: layer.into(),
            url: url.into(),
            source: Box::new(source),
        }
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn composite_wrapper_keeps_layer_and_source() {
        let inner = Error::Decode {
            url: "body.png".into(),
            reason: "truncated".into(),
        };
        let err = Error::composite("Body", "body.png", inner);
        match err {
            Error::Composite { layer, url, source } => {
                assert_eq!(layer, "Body");
                assert_eq!(url, "body.png");
                assert!(matches!(*source, Error::Decode { .. }));
            }
            other => panic!("expected Composite, got {other:?}"),
        }
    }
}
