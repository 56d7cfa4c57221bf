//! Shared decoding helpers for inbound HTTP adapters.
//!
//! Bodies are read as raw bytes and decoded here so every endpoint chooses
//! which error a malformed payload produces, instead of inheriting Actix's
//! default JSON rejection.

use std::fmt;

use actix_web::web;
use pagination::PageRequest;
use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::Deserialize;

use crate::domain::Error;

/// Integer accepted either as a JSON number or as a numeric string.
///
/// Values outside the `i32` range are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenientInt(pub i32);

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LenientIntVisitor;

        impl Visitor<'_> for LenientIntVisitor {
            type Value = LenientInt;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("number or numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                i32::try_from(v).map(LenientInt).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i32::try_from(v).map(LenientInt).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.trim().parse().map(LenientInt).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(LenientIntVisitor)
    }
}

/// Decode a JSON body, reporting any failure through `reject`.
///
/// An empty body is malformed like any other undecodable payload.
pub(crate) fn decode_json<T, F>(body: &web::Bytes, reject: F) -> Result<T, Error>
where
    T: DeserializeOwned,
    F: FnOnce(String) -> Error,
{
    serde_json::from_slice(body).map_err(|err| reject(format!("malformed JSON body: {err}")))
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// Resolve the `page` query parameter.
///
/// Absent or non-numeric values select the first page; numbers below one or
/// beyond the addressable range are rejected as bad requests.
pub(crate) fn page_from_query(query_string: &str) -> Result<PageRequest, Error> {
    let query = web::Query::<PageQuery>::from_query(query_string)
        .map(web::Query::into_inner)
        .unwrap_or_default();
    PageRequest::from_query(query.page.as_deref()).map_err(|err| Error::bad_request(err.to_string()))
}
