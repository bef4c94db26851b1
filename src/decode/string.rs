use bytes::Bytes;

use crate::BdecodeError;

use super::{commons::tokens, utils::parse_uint, BdecodeResult, Decoder};

impl Decoder {
    /// Reads `<length>:<bytes>` at the cursor.
    ///
    /// The result is a slice of the decoder's buffer, not a copy.
    pub(super) fn next_str(&mut self) -> BdecodeResult<Bytes> {
        let str_start = self.pos;
        let t = self.peek()?;
        if !t.is_ascii_digit() {
            return Err(BdecodeError::WrongPrefix {
                found: t as char,
                position: str_start,
            });
        }

        // eg: "10:abcdefghij2:kl"
        //      ^ ^
        //      | colon(2)
        //      str_start(0)
        let (colon, len) = parse_uint(&self.buffer, str_start, tokens::COLON)?;
        if colon == self.buffer.len() {
            return Err(BdecodeError::MissingTerminator {
                terminator: tokens::COLON as char,
                position: str_start,
            });
        }

        // 截取 ':' 后的 buffer size
        let available = self.buffer.len() - colon - 1;
        let len = usize::try_from(len)
            .ok()
            .filter(|len| *len <= available)
            .ok_or(BdecodeError::LengthExceedsBuffer {
                declared: len,
                available,
                position: str_start,
            })?;

        let start = colon + 1;
        self.pos = start + len;
        Ok(self.buffer.slice(start..self.pos))
    }
}
