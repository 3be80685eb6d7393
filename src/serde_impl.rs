use crate::s_list::SList;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Serialize> Serialize for SList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct SListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SListVisitor<T> {
    type Value = SList<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = SList::new();
        while let Some(value) = seq.next_element()? {
            list.push_back(value);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SListVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::SList;

    #[test]
    fn json_sequence() {
        let list = SList::from([3, 1, 2]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[3,1,2]");

        let back: SList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
        assert_eq!(back.back(), Ok(&2));
    }

    #[test]
    fn rejects_non_sequence() {
        assert!(serde_json::from_str::<SList<i32>>("{\"a\": 1}").is_err());
    }
}
