// src/transform.rs
//! Pre/post hooks for encrypting values that are not text or bytes
//!
//! `pre` runs before encryption and must produce a [`Payload`]; `post` runs
//! after decryption on the recovered payload. Errors raised by either hook
//! reach the caller unchanged: the codec only ever adds its own
//! [`CodecError`] through `From`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::error::CodecError;
use crate::payload::Payload;

/// A matched pair of conversions between `Value` and [`Payload`]
pub trait Transform {
    type Value;
    type Error: From<CodecError>;

    fn pre(&self, value: &Self::Value) -> Result<Payload, Self::Error>;

    fn post(&self, payload: Payload) -> Result<Self::Value, Self::Error>;
}

/// [`Transform`] built from two closures
pub struct FnTransform<V, E, Pre, Post> {
    pre: Pre,
    post: Post,
    _marker: PhantomData<fn(V) -> E>,
}

impl<V, E, Pre, Post> FnTransform<V, E, Pre, Post>
where
    Pre: Fn(&V) -> Result<Payload, E>,
    Post: Fn(Payload) -> Result<V, E>,
    E: From<CodecError>,
{
    pub fn new(pre: Pre, post: Post) -> Self {
        Self {
            pre,
            post,
            _marker: PhantomData,
        }
    }
}

impl<V, E, Pre, Post> Transform for FnTransform<V, E, Pre, Post>
where
    Pre: Fn(&V) -> Result<Payload, E>,
    Post: Fn(Payload) -> Result<V, E>,
    E: From<CodecError>,
{
    type Value = V;
    type Error = E;

    fn pre(&self, value: &V) -> Result<Payload, E> {
        (self.pre)(value)
    }

    fn post(&self, payload: Payload) -> Result<V, E> {
        (self.post)(payload)
    }
}

impl<V, E, Pre, Post> fmt::Debug for FnTransform<V, E, Pre, Post> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransform").finish_non_exhaustive()
    }
}

/// Failure of a [`JsonTransform`] round trip
#[derive(Error, Debug)]
pub enum JsonTransformError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `post` was handed a binary payload; JSON frames are always text
    #[error("expected a text payload for JSON, got binary")]
    NotText,
}

/// Encrypt any serde value as JSON text
///
/// Structured values (arrays, maps, structs) are serialized with
/// `serde_json::to_string` before encryption and parsed back after
/// decryption, so the frame is hex text.
pub struct JsonTransform<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonTransform<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonTransform<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonTransform<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for JsonTransform<T> {}

impl<T> fmt::Debug for JsonTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonTransform")
    }
}

impl<T> Transform for JsonTransform<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;
    type Error = JsonTransformError;

    fn pre(&self, value: &T) -> Result<Payload, JsonTransformError> {
        Ok(Payload::Text(serde_json::to_string(value)?))
    }

    fn post(&self, payload: Payload) -> Result<T, JsonTransformError> {
        match payload {
            Payload::Text(s) => Ok(serde_json::from_str(&s)?),
            Payload::Binary(_) => Err(JsonTransformError::NotText),
        }
    }
}
