//! Serde support: an expected serializes exactly like
//! `Result<S::Storage, E::Storage>`, i.e. `{"Ok": v}` or `{"Err": e}` in JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Expected;
use crate::holder::{Holder, Shape};

impl<S: Shape, E: Shape> Serialize for Expected<S, E>
where
    S::Storage: Serialize,
    E::Storage: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.as_holders()
            .map(Holder::storage)
            .map_err(Holder::storage)
            .serialize(serializer)
    }
}

impl<'de, S: Shape, E: Shape> Deserialize<'de> for Expected<S, E>
where
    S::Storage: Deserialize<'de>,
    E::Storage: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Result::<S::Storage, E::Storage>::deserialize(deserializer).map(Expected::from)
    }
}
