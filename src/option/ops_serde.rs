//! Serde support: an optional serializes exactly like `Option<S::Storage>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Optional;
use crate::holder::Shape;

impl<S: Shape> Serialize for Optional<S>
where
    S::Storage: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self.holder() {
            Some(holder) => serializer.serialize_some(holder.storage()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, S: Shape> Deserialize<'de> for Optional<S>
where
    S::Storage: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<S::Storage>::deserialize(deserializer).map(Optional::from)
    }
}
