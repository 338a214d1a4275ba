//! JSON, Base64, signed-Base64 and URL-query conversions for [`Map`]
//!
//! These are the only fallible operations in the crate. Each encode
//! has a plain form returning [`Result`] and a `must_*` form that
//! panics on failure; the traversal accessors never share that
//! failure mode.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use ring::hmac;
use serde_json::Value as Json;

use crate::error::{Error, Result};
use crate::Map;

/// Separates the Base64 payload from its hex signature in the signed
/// form. Outside both alphabets, so splitting on it is unambiguous.
pub const SIGNATURE_SEPARATOR: char = '_';

impl Map {
    /// Parses a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonDecode)
    }

    /// Parses a JSON object, panicking on malformed input.
    ///
    /// # Panics
    ///
    /// Panics when `json` is not a JSON object.
    #[must_use]
    pub fn must_from_json(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(map) => map,
            Err(err) => panic!("pathmap: {err}"),
        }
    }

    /// Decodes a Base64 string produced by [`Map::to_base64`].
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = BASE64_STANDARD.decode(encoded)?;
        let json = String::from_utf8(bytes)?;
        Self::from_json(&json)
    }

    /// Decodes and verifies a signed Base64 string produced by
    /// [`Map::to_signed_base64`] with the same `key`.
    pub fn from_signed_base64(signed: &str, key: &str) -> Result<Self> {
        let (payload, signature) = signed
            .rsplit_once(SIGNATURE_SEPARATOR)
            .ok_or(Error::SignatureMissing)?;
        let tag = hex::decode(signature)?;
        let hmac_key = hmac::Key::new(hmac::HMAC_SHA256, key.as_bytes());
        if hmac::verify(&hmac_key, payload.as_bytes(), &tag).is_err() {
            log::debug!("signed payload failed verification");
            return Err(Error::SignatureMismatch);
        }
        Self::from_base64(payload)
    }

    /// Builds a map from URL query text. Repeated keys collect into an
    /// array, in order of appearance; every value is a string.
    pub fn from_url_query(query: &str) -> Result<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        let mut map = Map::new();
        for (key, value) in pairs {
            match map.inner_mut().get_mut(&key) {
                None => {
                    map.inner_mut().insert(key, Json::String(value));
                }
                Some(Json::Array(values)) => values.push(Json::String(value)),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Json::Array(vec![first, Json::String(value)]);
                }
            }
        }
        Ok(map)
    }

    /// Encodes the map as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::JsonEncode)
    }

    /// Encodes the map as JSON, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics when the tree cannot be serialized.
    #[must_use]
    pub fn must_to_json(&self) -> String {
        match self.to_json() {
            Ok(json) => json,
            Err(err) => panic!("pathmap: {err}"),
        }
    }

    /// Encodes the map as Base64 over its JSON form.
    pub fn to_base64(&self) -> Result<String> {
        Ok(BASE64_STANDARD.encode(self.to_json()?))
    }

    /// Encodes the map as Base64, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics when the tree cannot be serialized.
    #[must_use]
    pub fn must_to_base64(&self) -> String {
        match self.to_base64() {
            Ok(encoded) => encoded,
            Err(err) => panic!("pathmap: {err}"),
        }
    }

    /// Encodes the map as `<base64>_<hex(hmac-sha256)>`, signing the
    /// Base64 text with `key`.
    pub fn to_signed_base64(&self, key: &str) -> Result<String> {
        let payload = self.to_base64()?;
        let hmac_key = hmac::Key::new(hmac::HMAC_SHA256, key.as_bytes());
        let tag = hmac::sign(&hmac_key, payload.as_bytes());
        Ok(format!(
            "{payload}{SIGNATURE_SEPARATOR}{}",
            hex::encode(tag.as_ref())
        ))
    }

    /// Signed-Base64 encode, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics when the tree cannot be serialized.
    #[must_use]
    pub fn must_to_signed_base64(&self, key: &str) -> String {
        match self.to_signed_base64(key) {
            Ok(signed) => signed,
            Err(err) => panic!("pathmap: {err}"),
        }
    }
}
