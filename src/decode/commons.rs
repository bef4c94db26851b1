/// 阈值常量
pub mod limits {
    /// 解析时 dict 和 list 的最大嵌套深度限制。
    pub const DEFAULT_DEPTH_LIMIT: usize = 100;

    /// 单次 `decode_one` 解析出的 item (包括 dict 的 key) 的最大数量。
    pub const DEFAULT_TOKEN_LIMIT: usize = 1_000_000;
}

/// Type prefixes and terminators of the wire format.
pub mod tokens {
    pub const INT: u8 = b'i';
    pub const LIST: u8 = b'l';
    pub const DICT: u8 = b'd';
    pub const END: u8 = b'e';
    pub const COLON: u8 = b':';
}
