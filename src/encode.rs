use bytes::{BufMut, Bytes, BytesMut};
use log::trace;

use crate::BencodeNode;

const INT_START: u8 = b'i';
const LIST_START: u8 = b'l';
const DICT_START: u8 = b'd';
const END: u8 = b'e';
const COLON: u8 = b':';

/// Appends canonical encodings to an owned buffer.
///
/// Values passed to consecutive `encode` calls are concatenated with no
/// separator, which `Decoder::decode_all` reads back one by one.
///
/// ```
/// use ez_bencode::{BencodeNode, Encoder};
///
/// let mut enc = Encoder::new();
/// enc.encode(&BencodeNode::Int(23));
/// enc.encode(&BencodeNode::str("test"));
/// assert_eq!(b"i23e4:test", enc.as_bytes());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    buffer: BytesMut,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    pub fn encode(&mut self, node: &BencodeNode) {
        let start = self.buffer.len();
        encode_node(&mut self.buffer, node);
        trace!("encoded {:?} value into {} bytes", node.kind(), self.buffer.len() - start);
    }

    /// Everything encoded so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }
}

/// Encodes a single value in one shot.
pub fn encode_to_bytes(node: &BencodeNode) -> Bytes {
    let mut enc = Encoder::new();
    enc.encode(node);
    enc.into_bytes()
}

fn encode_node<B: BufMut>(buf: &mut B, node: &BencodeNode) {
    match node {
        BencodeNode::Int(val) => encode_int(buf, *val),
        BencodeNode::Str(val) => encode_str(buf, val),
        BencodeNode::List(items) => {
            buf.put_u8(LIST_START);
            for item in items {
                encode_node(buf, item);
            }
            buf.put_u8(END);
        }
        BencodeNode::Dict(map) => {
            // canonical form: keys in raw byte order
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

            buf.put_u8(DICT_START);
            for (key, val) in entries {
                encode_str(buf, key);
                encode_node(buf, val);
            }
            buf.put_u8(END);
        }
    }
}

fn encode_int<B: BufMut>(buf: &mut B, val: i64) {
    buf.put_u8(INT_START);
    buf.put_slice(val.to_string().as_bytes());
    buf.put_u8(END);
}

fn encode_str<B: BufMut>(buf: &mut B, val: &[u8]) {
    buf.put_slice(val.len().to_string().as_bytes());
    buf.put_u8(COLON);
    buf.put_slice(val);
}
