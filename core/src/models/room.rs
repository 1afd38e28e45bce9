// SPDX-License-Identifier: GPL-3.0-only

use chrono::{DateTime, NaiveDateTime};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;
use std::fmt;

/// Identifier of a room, used as the key of its list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub i64);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: Price,

    // Sent by the backend, never rendered
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_changed_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_changed_date: Option<NaiveDateTime>,
}

impl Room {
    pub fn new(
        id: i64,
        room_number: impl Into<String>,
        room_type: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: RoomId(id),
            room_number: room_number.into(),
            room_type: room_type.into(),
            price,
            status: None,
            capacity: None,
            created_by: None,
            created_date: None,
            last_changed_by: None,
            last_changed_date: None,
        }
    }
}

/// Formats the room the way it is shown on the list: `room_number - type - $price`
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - ${}",
            self.room_number, self.room_type, self.price
        )
    }
}

/// Price of a room.
///
/// The backend may send either a JSON number or a numeric string (decimals are serialized as
/// `"50.00"`), the text is kept as received so it is displayed without reformatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    text: String,
    amount: f64,
}

impl Price {
    /// Parses a numeric string, returns `None` if it is not a finite number
    pub fn parse(value: &str) -> Option<Self> {
        let text = value.trim();
        let amount = text.parse::<f64>().ok().filter(|amount| amount.is_finite())?;

        Some(Self {
            text: text.to_owned(),
            amount,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self {
            text: value.to_string(),
            amount: value as f64,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Ok(Price::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price {
            text: v.to_string(),
            amount: v as f64,
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }

        Ok(Price {
            text: v.to_string(),
            amount: v,
        })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

/// Ordered rooms as returned by the api
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RoomCollection(Vec<Room>);

impl RoomCollection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Room] {
        &self.0
    }
}

impl From<Vec<Room>> for RoomCollection {
    fn from(rooms: Vec<Room>) -> Self {
        Self(rooms)
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
