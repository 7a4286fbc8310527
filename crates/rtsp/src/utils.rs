//! Small helpers shared by the codec modules.

/// Returns `Err($error)` from the enclosing function unless `$predicate` holds.
///
/// The decoder reads as a sequence of checks on the bytes it just consumed; each failed check
/// ends the decode with the matching [`ParseError`](crate::protocol::ParseError) variant.
///
/// ```ignore
/// ensure!(byte == b'\n', ParseError::malformed_line_ending(byte));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
