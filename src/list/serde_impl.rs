use std::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::list::List;

/// A list serializes as a plain sequence of its elements, front to back.
impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

/// The most elements reserved up front while deserializing.
const MAX_PREALLOC: usize = 4096;

struct ListVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // The hint comes from the input, so it only bounds the preallocation.
        let mut list = match seq.size_hint() {
            Some(hint) => List::with_capacity(hint.min(MAX_PREALLOC)),
            None => List::new(),
        };
        while let Some(elt) = seq.next_element()? {
            list.push_back(elt);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor {
            marker: PhantomData,
        })
    }
}
