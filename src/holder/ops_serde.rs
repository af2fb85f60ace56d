//! Serde support: a holder serializes as its storage, with no envelope.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::shape::Shape;
use super::Holder;

impl<S: Shape, Tag> Serialize for Holder<S, Tag>
where
    S::Storage: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.storage().serialize(serializer)
    }
}

impl<'de, S: Shape, Tag> Deserialize<'de> for Holder<S, Tag>
where
    S::Storage: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <S::Storage as Deserialize<'de>>::deserialize(deserializer).map(Holder::new)
    }
}
