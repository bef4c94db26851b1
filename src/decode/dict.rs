use std::collections::HashMap;

use crate::BencodeNode;

use super::{commons::tokens, BdecodeResult, Decoder};

impl Decoder {
    /// Reads `d<key><value>...e` at the cursor.
    ///
    /// Keys are taken in whatever order the input has them. A repeated key
    /// overwrites the value read before it.
    pub(super) fn next_dict(&mut self, depth: usize) -> BdecodeResult<BencodeNode> {
        self.check_depth(depth)?;
        self.expect(tokens::DICT)?;

        let mut map = HashMap::new();
        while self.peek()? != tokens::END {
            self.count_token()?;
            let key = self.next_str()?;
            let val = self.next_node(depth + 1)?;
            map.insert(key, val);
        }

        // skip 'e'
        self.pos += 1;
        Ok(BencodeNode::Dict(map))
    }
}
