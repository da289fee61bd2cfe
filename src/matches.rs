//! Byte classification tables and separator scanning.

/// Generate a `const fn` predicate backed by a 256 entries lookup table.
///
/// The table is computed once at compile time from the given expression.
macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

byte_map! {
    /// token   = 1*tchar
    /// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
    ///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
    ///         / DIGIT / ALPHA
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        matches!(
            byte,
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
            | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
        || byte.is_ascii_alphanumeric()
    }
}

// ===== CRLF =====

const BLOCK: usize = size_of::<usize>();
const MSB: usize = usize::from_ne_bytes([0b1000_0000; BLOCK]);
const LSB: usize = usize::from_ne_bytes([0b0000_0001; BLOCK]);
const CR: usize = usize::from_ne_bytes([b'\r'; BLOCK]);

/// Returns the index of the first `\r\n` in `bytes`.
///
/// A lone `\r` or `\n` is not a separator. Blocks of `usize` width without any `\r` are skipped
/// in one step.
pub fn find_crlf(bytes: &[u8]) -> Option<usize> {
    let mut offset = 0;
    let mut state = bytes;

    while let Some((chunk, rest)) = state.split_first_chunk::<BLOCK>() {
        // zero byte wherever the block holds '\r'
        let block = usize::from_ne_bytes(*chunk) ^ CR;

        if block.wrapping_sub(LSB) & !block & MSB != 0 {
            if let Some(nth) = scan_cr(bytes, offset, chunk) {
                return Some(nth);
            }
        }

        offset += BLOCK;
        state = rest;
    }

    scan_cr(bytes, offset, state)
}

/// Scan `window`, located at `offset` of `bytes`, for a `\r` followed by `\n`.
///
/// The `\n` may lie past the end of `window`.
#[inline]
fn scan_cr(bytes: &[u8], offset: usize, window: &[u8]) -> Option<usize> {
    window
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'\r')
        .map(|(nth, _)| offset + nth)
        .find(|at| bytes.get(at + 1) == Some(&b'\n'))
}
