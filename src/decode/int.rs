use super::{commons::tokens, utils::{check_integer, parse_int}, BdecodeResult, Decoder};

impl Decoder {
    /// Reads `i<digits>e` at the cursor.
    pub(super) fn next_int(&mut self) -> BdecodeResult<i64> {
        self.expect(tokens::INT)?;

        let start = self.pos;
        let end = check_integer(&self.buffer, start)?;
        let val = parse_int(&self.buffer[start..end], start)?;

        // skip 'e'
        self.pos = end + 1;
        Ok(val)
    }
}
