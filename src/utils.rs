use crate::error::Int256Error;

/// Strips one leading sign character and reports whether it was `-`.
///
/// `allow_plus` is false for the hex form, which only takes `-`.
#[inline]
pub(crate) fn split_sign(src: &str, allow_plus: bool) -> Result<(bool, &str), Int256Error> {
    let (neg, rest) = match src.as_bytes().first() {
        Some(b'-') => (true, &src[1..]),
        Some(b'+') if allow_plus => (false, &src[1..]),
        _ => return Ok((false, src)),
    };
    if matches!(rest.as_bytes().first(), Some(b'+' | b'-')) {
        return Err(Int256Error::MultipleSign);
    }

    Ok((neg, rest))
}

/// True for `0x`, `0X`, `-0x` and `-0X` prefixed text.
#[inline]
pub(crate) fn has_hex_prefix(src: &str) -> bool {
    let digits = src.strip_prefix('-').unwrap_or(src);
    digits.starts_with("0x") || digits.starts_with("0X")
}
