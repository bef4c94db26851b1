use crate::{BdecodeError, BdecodeResult};

use super::commons::tokens;

/// 检查字符串是否为整数
///
/// `start` is the first byte after the `i`. Only digits and a single leading
/// `-` may appear before the `e`. Returns the position of the `e`.
pub(crate) fn check_integer(buffer: &[u8], start: usize) -> BdecodeResult<usize> {
    let mut pos = start;

    loop {
        let Some(&t) = buffer.get(pos) else {
            return Err(BdecodeError::MissingTerminator {
                terminator: tokens::END as char,
                position: start.saturating_sub(1),
            });
        };

        if t == tokens::END {
            return Ok(pos);
        }

        let leading_minus = t == b'-' && pos == start;
        if !t.is_ascii_digit() && !leading_minus {
            return Err(BdecodeError::InvalidDigit(pos));
        }

        pos += 1;
    }
}

/// 解析 buffer 中的无符号整数, 当遇到 delimiter 字符时停止解析
///
/// Returns the position of the delimiter, or `buffer.len()` if the buffer
/// ends first, together with the parsed value.
pub(crate) fn parse_uint(buffer: &[u8], start: usize, delimiter: u8) -> BdecodeResult<(usize, u64)> {
    let end = buffer.len();
    let mut pos = start;
    let mut val: u64 = 0;

    while pos < end && buffer[pos] != delimiter {
        let t = buffer[pos];

        if !t.is_ascii_digit() {
            return Err(BdecodeError::InvalidDigit(pos));
        }

        let digit = u64::from(t - b'0');
        val = val
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| overflow(&buffer[start..=pos], start))?;

        pos += 1;
    }

    Ok((pos, val))
}

/// Parses the span between `i` and `e` as a signed base-10 integer.
///
/// `-0` is accepted and yields `0`; leading zeros are accepted as well.
pub(crate) fn parse_int(digits: &[u8], position: usize) -> BdecodeResult<i64> {
    let (negative, magnitude) = match digits.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, digits),
    };

    if magnitude.is_empty() {
        return Err(BdecodeError::InvalidInteger(
            String::from_utf8_lossy(digits).into_owned(),
            position,
        ));
    }

    let mut val: i64 = 0;
    for (offset, &t) in magnitude.iter().enumerate() {
        if !t.is_ascii_digit() {
            let offset = offset + usize::from(negative);
            return Err(BdecodeError::InvalidDigit(position + offset));
        }

        let digit = i64::from(t - b'0');
        // accumulate toward the sign so that i64::MIN is reachable
        val = val
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) })
            .ok_or_else(|| overflow(digits, position))?;
    }

    Ok(val)
}

fn overflow(digits: &[u8], position: usize) -> BdecodeError {
    BdecodeError::Overflow(String::from_utf8_lossy(digits).into_owned(), position)
}
