// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Structured-data encoding.
//!
//! Values are written as quoted decimal strings, since native JSON numbers
//! lose precision past 53 bits. Reading accepts a quoted hex or decimal
//! string, or a bare decimal numeral anywhere in the 256-bit range. Bare
//! numerals past 64 bits arrive from `serde_json` as their literal text
//! (its `arbitrary_precision` feature), never as a rounded float.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::I256;

impl Serialize for I256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(&self.to_dec_string())
    }
}

impl<'de> Deserialize<'de> for I256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        deserializer.deserialize_any(I256Visitor)
    }
}

struct I256Visitor;

impl<'de> de::Visitor<'de> for I256Visitor {
    type Value = I256;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal or 0x-prefixed hex integer string, or an integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where E: de::Error
    {
        v.parse::<I256>().map_err(|e| E::custom(format!("invalid I256 '{v}' - {e}")))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(I256::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(I256::from(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(I256::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(I256::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where E: de::Error
    {
        Err(E::custom(format!("invalid I256 {v} - not an integer")))
    }

    // serde_json's exact number token
    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where A: de::MapAccess<'de>
    {
        let number = serde_json::Number::deserialize(de::value::MapAccessDeserializer::new(map))?;
        let text = number.to_string();
        I256::from_dec_str(&text).map_err(|e| de::Error::custom(format!("invalid I256 {text} - {e}")))
    }
}
