mod json;

use std::collections::HashMap;

use bytes::Bytes;

pub use json::{escape_char, escape_string, Style};

/// A decoded bencode value.
///
/// The tree owns its data: strings are `Bytes`, so values decoded from a
/// shared buffer are cheap slices of it rather than copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BencodeNode {
    /// 整型 (`i<digits>e`)
    Int(i64),
    /// 字符串 (`<len>:<bytes>`), not necessarily valid UTF-8
    Str(Bytes),
    /// 列表 (`l<items>e`), order preserved
    List(Vec<BencodeNode>),
    /// 字典 (`d<key><value>...e`)
    ///
    /// The map has no iteration order. Key order is imposed by the encoder.
    Dict(HashMap<Bytes, BencodeNode>),
}

/// The four kinds of bencoded values.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NodeKind {
    Int,
    Str,
    List,
    Dict,
}

impl BencodeNode {
    /// Builds a `Str` node from anything byte-like.
    pub fn str(value: impl AsRef<[u8]>) -> Self {
        BencodeNode::Str(Bytes::copy_from_slice(value.as_ref()))
    }

    /// Builds a `Dict` node from `(key, value)` pairs; later duplicates win.
    pub fn dict<K, I>(entries: I) -> Self
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, BencodeNode)>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (Bytes::copy_from_slice(k.as_ref()), v))
            .collect();

        BencodeNode::Dict(map)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            BencodeNode::Int(_) => NodeKind::Int,
            BencodeNode::Str(_) => NodeKind::Str,
            BencodeNode::List(_) => NodeKind::List,
            BencodeNode::Dict(_) => NodeKind::Dict,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        let BencodeNode::Int(val) = self else {
            return None;
        };

        Some(*val)
    }

    pub fn as_str(&self) -> Option<&[u8]> {
        let BencodeNode::Str(val) = self else {
            return None;
        };

        Some(val.as_ref())
    }

    /// The string value, if it is a `Str` holding valid UTF-8.
    pub fn as_utf8(&self) -> Option<&str> {
        std::str::from_utf8(self.as_str()?).ok()
    }

    pub fn as_list(&self) -> Option<&[BencodeNode]> {
        let BencodeNode::List(items) = self else {
            return None;
        };

        Some(items)
    }

    pub fn as_dict(&self) -> Option<&HashMap<Bytes, BencodeNode>> {
        let BencodeNode::Dict(map) = self else {
            return None;
        };

        Some(map)
    }

    /// Number of items in a `List` or entries in a `Dict`.
    pub fn len(&self) -> Option<usize> {
        match self {
            BencodeNode::List(items) => Some(items.len()),
            BencodeNode::Dict(map) => Some(map.len()),
            _ => None,
        }
    }

    pub fn list_item(&self, index: usize) -> Option<&BencodeNode> {
        self.as_list()?.get(index)
    }

    pub fn list_item_as_int(&self, index: usize) -> Option<i64> {
        self.list_item(index)?.as_int()
    }

    pub fn list_item_as_str(&self, index: usize) -> Option<&[u8]> {
        self.list_item(index)?.as_str()
    }

    /// 在 dict 中查找 key 对应的 value
    pub fn dict_find(&self, key: &[u8]) -> Option<&BencodeNode> {
        self.as_dict()?.get(key)
    }

    pub fn dict_find_as_str(&self, key: &[u8]) -> Option<&[u8]> {
        self.dict_find(key)?.as_str()
    }

    pub fn dict_find_as_int(&self, key: &[u8]) -> Option<i64> {
        self.dict_find(key)?.as_int()
    }

    pub fn dict_find_as_list(&self, key: &[u8]) -> Option<&[BencodeNode]> {
        self.dict_find(key)?.as_list()
    }

    pub fn dict_find_as_dict(&self, key: &[u8]) -> Option<&HashMap<Bytes, BencodeNode>> {
        self.dict_find(key)?.as_dict()
    }
}

impl From<i64> for BencodeNode {
    fn from(val: i64) -> Self {
        BencodeNode::Int(val)
    }
}

impl From<&str> for BencodeNode {
    fn from(val: &str) -> Self {
        BencodeNode::str(val)
    }
}

impl From<&[u8]> for BencodeNode {
    fn from(val: &[u8]) -> Self {
        BencodeNode::str(val)
    }
}

impl From<Vec<u8>> for BencodeNode {
    fn from(val: Vec<u8>) -> Self {
        BencodeNode::Str(Bytes::from(val))
    }
}

impl From<Bytes> for BencodeNode {
    fn from(val: Bytes) -> Self {
        BencodeNode::Str(val)
    }
}

impl From<Vec<BencodeNode>> for BencodeNode {
    fn from(items: Vec<BencodeNode>) -> Self {
        BencodeNode::List(items)
    }
}

impl From<HashMap<Bytes, BencodeNode>> for BencodeNode {
    fn from(map: HashMap<Bytes, BencodeNode>) -> Self {
        BencodeNode::Dict(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BencodeNode {
        // {"k1": "v1", "k2": [1, 2], "k03": 3, "k4": {"k5": 5}}
        BencodeNode::dict([
            ("k1", BencodeNode::from("v1")),
            ("k2", BencodeNode::List(vec![BencodeNode::Int(1), BencodeNode::Int(2)])),
            ("k03", BencodeNode::Int(3)),
            ("k4", BencodeNode::dict([("k5", BencodeNode::Int(5))])),
        ])
    }

    #[test]
    fn test_node_kind() {
        assert_eq!(NodeKind::Int, BencodeNode::Int(1).kind());
        assert_eq!(NodeKind::Str, BencodeNode::str("a").kind());
        assert_eq!(NodeKind::List, BencodeNode::List(vec![]).kind());
        assert_eq!(NodeKind::Dict, sample().kind());
    }

    #[test]
    fn test_scalar_accessors() {
        let int = BencodeNode::Int(19);
        assert_eq!(Some(19), int.as_int());
        assert_eq!(None, int.as_str());
        assert_eq!(None, int.len());

        let s = BencodeNode::str(b"ab");
        assert_eq!(Some(b"ab".as_slice()), s.as_str());
        assert_eq!(Some("ab"), s.as_utf8());
        assert_eq!(None, s.as_int());

        let raw = BencodeNode::from(vec![0xffu8, 0xfe]);
        assert_eq!(None, raw.as_utf8());
        assert_eq!(Some([0xffu8, 0xfe].as_slice()), raw.as_str());
    }

    #[test]
    fn test_list_item() {
        let node = BencodeNode::List(vec![BencodeNode::Int(19), "ab".into()]);
        assert_eq!(Some(2), node.len());
        assert_eq!(Some(19), node.list_item_as_int(0));
        assert_eq!(Some(b"ab".as_slice()), node.list_item_as_str(1));
        assert_eq!(None, node.list_item_as_int(1));
        assert!(node.list_item(2).is_none());
    }

    #[test]
    fn test_dict_find() {
        let node = sample();
        assert_eq!(Some(4), node.len());
        assert_eq!(Some(b"v1".as_slice()), node.dict_find_as_str(b"k1"));
        assert_eq!(Some(3), node.dict_find_as_int(b"k03"));
        assert_eq!(2, node.dict_find_as_list(b"k2").unwrap().len());

        let k4 = node.dict_find_as_dict(b"k4").unwrap();
        assert_eq!(Some(5), k4.get(b"k5".as_slice()).and_then(BencodeNode::as_int));

        assert!(node.dict_find(b"missing").is_none());
        assert!(node.dict_find_as_int(b"k1").is_none());
        assert!(BencodeNode::Int(1).dict_find(b"k1").is_none());
    }

    #[test]
    fn test_dict_duplicate_keys_last_wins() {
        let node = BencodeNode::dict([("a", BencodeNode::Int(1)), ("a", BencodeNode::Int(2))]);
        assert_eq!(Some(1), node.len());
        assert_eq!(Some(2), node.dict_find_as_int(b"a"));
    }
}
