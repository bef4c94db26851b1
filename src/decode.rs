mod commons;
mod dict;
mod int;
mod list;
mod string;
mod utils;

use bytes::Bytes;
use log::{debug, trace};

pub use commons::limits::{DEFAULT_DEPTH_LIMIT, DEFAULT_TOKEN_LIMIT};

use commons::tokens;

use crate::{BdecodeError, BdecodeResult, BencodeNode, PartialDecode};

/// Recursive-descent bencode decoder over a resident buffer.
///
/// The decoder reads one top-level value per `decode_one` call, so several
/// encodings written back-to-back can be read in turn. It never mutates the
/// buffer; decoded strings are slices of it.
///
/// ```
/// use ez_bencode::{BencodeNode, Decoder};
///
/// let mut decoder = Decoder::new("i23e4:testi123e");
/// assert_eq!(BencodeNode::Int(23), decoder.decode_one().unwrap());
/// assert_eq!(4, decoder.position());
///
/// let rest = decoder.decode_all().unwrap();
/// assert_eq!(vec![BencodeNode::str("test"), BencodeNode::Int(123)], rest);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder {
    /// 存放解析前字符串的 buffer
    buffer: Bytes,

    /// 当前解析到的位置
    pos: usize,

    /// set once a top-level value ends exactly at the end of the buffer
    exhausted: bool,

    depth_limit: usize,
    token_limit: usize,

    /// items read by the current `decode_one` call
    token_count: usize,
}

impl Decoder {
    pub fn new(buffer: impl Into<Bytes>) -> Self {
        Self::with_limits(buffer, None, None)
    }

    /// Creates a decoder with custom limits; `None` keeps the default.
    ///
    /// `depth_limit` bounds how deeply lists and dicts may nest, and
    /// `token_limit` bounds how many items a single `decode_one` call may read.
    pub fn with_limits(
        buffer: impl Into<Bytes>,
        depth_limit: Option<usize>,
        token_limit: Option<usize>,
    ) -> Self {
        Self {
            buffer: buffer.into(),
            pos: 0,
            exhausted: false,
            depth_limit: depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT),
            token_limit: token_limit.unwrap_or(DEFAULT_TOKEN_LIMIT),
            token_count: 0,
        }
    }

    /// Current cursor offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether a previous `decode_one` consumed the buffer to its end.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Parses exactly one value at the cursor and advances past it.
    ///
    /// Fails if the bytes are malformed or if the buffer was already consumed
    /// by an earlier call. A failed call leaves the cursor where it started.
    pub fn decode_one(&mut self) -> BdecodeResult<BencodeNode> {
        if self.exhausted {
            return Err(BdecodeError::Exhausted(self.pos));
        }

        let start = self.pos;
        self.token_count = 0;

        match self.next_node(0) {
            Ok(node) => {
                if self.pos >= self.buffer.len() {
                    self.exhausted = true;
                }
                trace!("decoded {:?} value in bytes {}..{}", node.kind(), start, self.pos);
                Ok(node)
            }
            Err(err) => {
                debug!("bencode value at position {} is malformed: {}", start, err);
                self.pos = start;
                Err(err)
            }
        }
    }

    /// Parses values until the cursor reaches the end of the buffer.
    ///
    /// At least one value is attempted, so an empty buffer is an error. On
    /// failure the values decoded so far are returned inside the error.
    pub fn decode_all(&mut self) -> Result<Vec<BencodeNode>, PartialDecode> {
        let mut nodes = Vec::new();

        loop {
            match self.decode_one() {
                Ok(node) => nodes.push(node),
                Err(source) => {
                    return Err(PartialDecode {
                        decoded: nodes,
                        source,
                    })
                }
            }

            if self.pos >= self.buffer.len() {
                break;
            }
        }

        Ok(nodes)
    }

    /// Dispatches on the type prefix at the cursor without consuming it.
    fn next_node(&mut self, depth: usize) -> BdecodeResult<BencodeNode> {
        self.count_token()?;

        match self.peek()? {
            tokens::INT => self.next_int().map(BencodeNode::Int),
            b'0'..=b'9' => self.next_str().map(BencodeNode::Str),
            tokens::LIST => self.next_list(depth),
            tokens::DICT => self.next_dict(depth),
            t => Err(BdecodeError::WrongPrefix {
                found: t as char,
                position: self.pos,
            }),
        }
    }

    /// The byte at the cursor; running off the end is an error, never a panic.
    fn peek(&self) -> BdecodeResult<u8> {
        self.buffer
            .get(self.pos)
            .copied()
            .ok_or(BdecodeError::UnexpectedEof(self.pos))
    }

    /// Consumes `prefix` at the cursor.
    fn expect(&mut self, prefix: u8) -> BdecodeResult<()> {
        let t = self.peek()?;
        if t != prefix {
            return Err(BdecodeError::WrongPrefix {
                found: t as char,
                position: self.pos,
            });
        }

        self.pos += 1;
        Ok(())
    }

    fn count_token(&mut self) -> BdecodeResult<()> {
        self.token_count += 1;
        if self.token_count > self.token_limit {
            return Err(BdecodeError::LimitExceeded(self.token_limit));
        }

        Ok(())
    }

    /// Checks that a container opened `depth` containers deep is allowed.
    fn check_depth(&self, depth: usize) -> BdecodeResult<()> {
        if depth >= self.depth_limit {
            return Err(BdecodeError::DepthExceeded(self.depth_limit));
        }

        Ok(())
    }
}
