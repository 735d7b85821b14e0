use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Block, DynamicBitset};

impl<B: Block> Serialize for DynamicBitset<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de, B: Block> Deserialize<'de> for DynamicBitset<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string
            .parse()
            .map_err(|_| de::Error::custom("failed to parse DynamicBitset"))
    }
}
