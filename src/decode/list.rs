use crate::BencodeNode;

use super::{commons::tokens, BdecodeResult, Decoder};

impl Decoder {
    /// Reads `l<items>e` at the cursor. `depth` counts the enclosing containers.
    pub(super) fn next_list(&mut self, depth: usize) -> BdecodeResult<BencodeNode> {
        self.check_depth(depth)?;
        self.expect(tokens::LIST)?;

        let mut items = Vec::new();
        while self.peek()? != tokens::END {
            items.push(self.next_node(depth + 1)?);
        }

        // skip 'e'
        self.pos += 1;
        Ok(BencodeNode::List(items))
    }
}
