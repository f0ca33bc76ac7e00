use core::fmt;

use serde::{Deserialize, Deserializer, de};
use serde::{Serialize, Serializer};

use crate::{Arn, Partition};

impl Serialize for Arn {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Arn {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArnVisitor;

        impl de::Visitor<'_> for ArnVisitor {
            type Value = Arn;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an Amazon Resource Name string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Arn::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ArnVisitor)
    }
}

impl Serialize for Partition {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Partition {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PartitionVisitor;

        impl de::Visitor<'_> for PartitionVisitor {
            type Value = Partition;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a partition value")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Partition::for_value(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PartitionVisitor)
    }
}
