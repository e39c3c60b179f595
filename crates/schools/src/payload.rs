//! Normalisation of untyped request input into validated values.
//!
//! A school can be submitted either as a JSON object or as query parameters.
//! Both forms end up as a [`School`] or an [`InvalidInput`] before anything
//! touches the store.

use std::collections::HashMap;

use model::school::School;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("missing or empty name")]
    MissingName,
    #[error("missing or empty address")]
    MissingAddress,
    #[error("missing or invalid latitude")]
    InvalidLatitude,
    #[error("missing or invalid longitude")]
    InvalidLongitude,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

#[derive(Debug)]
pub enum SchoolPayload {
    /// Fields of a JSON object. Values stay untyped until validation, because
    /// coordinates may arrive as numbers or as numeric strings.
    Json(Map<String, Value>),
    Query(HashMap<String, String>),
}

impl SchoolPayload {
    pub fn from_json(body: &[u8]) -> Result<Self, InvalidInput> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Ok(SchoolPayload::Json(fields)),
            Ok(_) => Err(InvalidInput::MalformedBody(
                "expected a JSON object".to_owned(),
            )),
            Err(why) => Err(InvalidInput::MalformedBody(why.to_string())),
        }
    }

    pub fn from_query(params: HashMap<String, String>) -> Self {
        SchoolPayload::Query(params)
    }

    pub fn validate(self) -> Result<School, InvalidInput> {
        match self {
            SchoolPayload::Json(mut fields) => Ok(School {
                name: json_text(fields.remove("name")).ok_or(InvalidInput::MissingName)?,
                address: json_text(fields.remove("address"))
                    .ok_or(InvalidInput::MissingAddress)?,
                latitude: json_coordinate(fields.remove("latitude"))
                    .ok_or(InvalidInput::InvalidLatitude)?,
                longitude: json_coordinate(fields.remove("longitude"))
                    .ok_or(InvalidInput::InvalidLongitude)?,
            }),
            SchoolPayload::Query(mut params) => Ok(School {
                name: params
                    .remove("name")
                    .filter(|name| !name.is_empty())
                    .ok_or(InvalidInput::MissingName)?,
                address: params
                    .remove("address")
                    .filter(|address| !address.is_empty())
                    .ok_or(InvalidInput::MissingAddress)?,
                latitude: params
                    .get("latitude")
                    .and_then(|value| parse_coordinate(value))
                    .ok_or(InvalidInput::InvalidLatitude)?,
                longitude: params
                    .get("longitude")
                    .and_then(|value| parse_coordinate(value))
                    .ok_or(InvalidInput::InvalidLongitude)?,
            }),
        }
    }
}

/// A validated query point for the nearest-neighbor lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn parse(
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self, InvalidInput> {
        Ok(Self {
            latitude: latitude
                .and_then(parse_coordinate)
                .ok_or(InvalidInput::InvalidLatitude)?,
            longitude: longitude
                .and_then(parse_coordinate)
                .ok_or(InvalidInput::InvalidLongitude)?,
        })
    }
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn json_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

fn json_coordinate(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64().filter(|number| number.is_finite()),
        Value::String(text) => parse_coordinate(&text),
        _ => None,
    }
}
