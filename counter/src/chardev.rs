//! ASCII contract of the external read/write interface.
//!
//! The wire format mirrors a classic character device. Reads return the
//! decimal count terminated by a newline, writes accept an unsigned
//! integer literal in C notation: `0x` prefixed hexadecimal, leading zero
//! octal, decimal otherwise. The transport carrying these bytes lives in
//! the embedding, only the data contract is settled here.

use core::fmt::Write;

use heapless::String;

use crate::log;
use crate::store::Store;

/// Rejected request. The caller's input was malformed or its buffer too
/// small, counting state is left untouched.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidArgument;

/// Longest rendering of a count, "4294967295" plus the newline.
pub const RENDERED_MAX: usize = 11;

/// Serves a read request against `buf` at stream position `pos`.
///
/// The count is rendered as a decimal string with a trailing newline. A
/// request at a nonzero position yields zero bytes, so a line oriented
/// reader observes an end of stream after the first chunk instead of a
/// repeating value.
///
/// # Errors
///
/// Fails with `InvalidArgument` when `buf` cannot hold the whole
/// rendering, even at a nonzero position. The value is never truncated.
pub fn read<H>(store: &Store<H>, buf: &mut [u8], pos: usize) -> Result<usize, InvalidArgument> {
    let rendered = render(store.count());

    if buf.len() < rendered.len() {
        return Err(InvalidArgument);
    }
    if pos != 0 {
        return Ok(0);
    }

    buf[..rendered.len()].copy_from_slice(rendered.as_bytes());
    Ok(rendered.len())
}

/// Executes a write request carrying an ASCII integer literal.
///
/// On success the count is overwritten and the whole input is reported as
/// consumed. The committed level and a possibly pending window are left
/// alone, so an operator resync cannot fabricate or swallow an impulse.
///
/// # Errors
///
/// Fails with `InvalidArgument` on any malformed literal, including
/// overflow past `u32::MAX`, leaving the count unchanged.
pub fn write<H>(store: &mut Store<H>, bytes: &[u8]) -> Result<usize, InvalidArgument> {
    let value = match parse(bytes) {
        Ok(value) => value,
        Err(error) => {
            log::warn!("Rejecting malformed count overwrite");
            return Err(error);
        }
    };

    store.set_count(value);
    Ok(bytes.len())
}

fn render(count: u32) -> String<RENDERED_MAX> {
    let mut rendered = String::new();
    // The buffer fits the longest possible rendering.
    let _ = writeln!(&mut rendered, "{}", count);
    rendered
}

/// Parses an unsigned integer literal in C notation.
///
/// A single trailing newline and a leading plus sign are tolerated. The
/// prefix picks the base: `0x` or `0X` is hexadecimal, a leading zero
/// followed by more digits is octal, anything else is decimal.
fn parse(bytes: &[u8]) -> Result<u32, InvalidArgument> {
    let mut literal = bytes;
    if let [head @ .., b'\n'] = literal {
        literal = head;
    }
    if let [b'+', tail @ ..] = literal {
        literal = tail;
    }

    let (radix, digits) = match literal {
        [b'0', b'x' | b'X', digits @ ..] => (16, digits),
        [b'0', digits @ ..] if !digits.is_empty() => (8, digits),
        _ => (10, literal),
    };

    if digits.is_empty() {
        return Err(InvalidArgument);
    }

    let mut value: u32 = 0;
    for byte in digits {
        let digit = char::from(*byte).to_digit(radix).ok_or(InvalidArgument)?;
        value = value
            .checked_mul(radix)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(InvalidArgument)?;
    }

    Ok(value)
}
