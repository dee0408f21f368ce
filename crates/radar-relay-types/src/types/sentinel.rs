/*
[INPUT]:  Literal-typed placeholder fields ("SET")
[OUTPUT]: Unit marker type that only round-trips the literal
[POS]:    Data layer - server-assigned placeholders on unsigned orders
[UPDATE]: When placeholder literals change
*/

use std::fmt;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field the relay fills in itself. Encoded as the literal `"SET"`; any other
/// value fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ServerAssigned;

impl ServerAssigned {
    pub const LITERAL: &'static str = "SET";
}

impl fmt::Display for ServerAssigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::LITERAL)
    }
}

impl Serialize for ServerAssigned {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(Self::LITERAL)
    }
}

impl<'de> Deserialize<'de> for ServerAssigned {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == Self::LITERAL {
            Ok(ServerAssigned)
        } else {
            Err(D::Error::invalid_value(
                Unexpected::Str(&raw),
                &"the server-assigned placeholder \"SET\"",
            ))
        }
    }
}
