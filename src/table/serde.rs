use core::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use super::PieceTable;

impl Serialize for PieceTable {
    #[inline]
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut chunks = self.chunks();

        match (chunks.next(), chunks.next()) {
            (None, _) => serializer.serialize_str(""),
            (Some(chunk), None) => serializer.serialize_str(chunk),
            _ => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for PieceTable {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_string(PieceTableVisitor)
    }
}

struct PieceTableVisitor;

impl Visitor<'_> for PieceTableVisitor {
    type Value = PieceTable;

    #[inline]
    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string")
    }

    #[inline]
    fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
        Ok(PieceTable::from(s))
    }

    #[inline]
    fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
        Ok(PieceTable::from(s))
    }
}
