//! Variable length integer encodings used on the hash path of both source
//! trees.
//!
//! Unsigned integers use base-128 little-endian groups with the high bit
//! set on every byte but the last. Signed integers are zig-zag mapped onto
//! unsigned ones first. Any change here breaks proof verification against
//! roots produced by the source trees, so the byte layout is pinned by the
//! tests below.

/// The maximum number of bytes a 64-bit varint can occupy.
pub const MAX_VARINT_LEN: usize = 10;

/// Appends the uvarint encoding of `n` to `buf`.
pub fn put_uvarint(buf: &mut Vec<u8>, mut n: u64) {
    while n >= 0x80 {
        buf.push((n as u8) | 0x80);
        n >>= 7;
    }
    buf.push(n as u8);
}

/// Appends the zig-zag varint encoding of `n` to `buf`.
pub fn put_varint_signed(buf: &mut Vec<u8>, n: i64) {
    put_uvarint(buf, zigzag(n))
}

/// Appends `bz` prefixed with its uvarint encoded length.
pub fn put_length_prefixed(buf: &mut Vec<u8>, bz: &[u8]) {
    put_uvarint(buf, bz.len() as u64);
    buf.extend_from_slice(bz);
}

/// Encodes `n` as a minimal uvarint.
pub fn encode_uvarint(n: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    put_uvarint(&mut buf, n);
    buf
}

/// Encodes `n` with the zig-zag signed varint scheme.
pub fn encode_varint_signed(n: i64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    put_varint_signed(&mut buf, n);
    buf
}

/// Returns `encode_uvarint(bz.len()) ++ bz`.
pub fn encode_length_prefixed(bz: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN + bz.len());
    put_length_prefixed(&mut buf, bz);
    buf
}

/// Decodes a uvarint from the front of `bz`, returning the value and the
/// number of bytes consumed. Returns `None` for truncated input or values
/// which overflow 64 bits.
pub fn decode_uvarint(bz: &[u8]) -> Option<(u64, usize)> {
    let mut x: u64 = 0;
    for (i, b) in bz.iter().enumerate().take(MAX_VARINT_LEN) {
        if i == MAX_VARINT_LEN - 1 && *b > 1 {
            return None;
        }
        x |= ((b & 0x7f) as u64) << (7 * i);
        if b & 0x80 == 0 {
            return Some((x, i + 1));
        }
    }
    None
}

/// Decodes a zig-zag signed varint from the front of `bz`.
pub fn decode_varint_signed(bz: &[u8]) -> Option<(i64, usize)> {
    decode_uvarint(bz).map(|(u, n)| (unzigzag(u), n))
}

fn zigzag(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

fn unzigzag(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;
    use hex_literal::hex;

    use crate::varint::*;

    #[test]
    fn test_uvarint_vectors() {
        assert_eq!(vec![0x00], encode_uvarint(0));
        assert_eq!(vec![0x01], encode_uvarint(1));
        assert_eq!(vec![0x7f], encode_uvarint(127));
        assert_eq!(vec![0x80, 0x01], encode_uvarint(128));
        assert_eq!(vec![0xac, 0x02], encode_uvarint(300));
        assert_eq!(vec![0xff, 0xff, 0x03], encode_uvarint(65535));
        assert_eq!(hex!("ffffffffffffffffff01").to_vec(), encode_uvarint(u64::MAX));
    }

    #[test]
    fn test_signed_vectors() {
        assert_eq!(vec![0x00], encode_varint_signed(0));
        assert_eq!(vec![0x01], encode_varint_signed(-1));
        assert_eq!(vec![0x02], encode_varint_signed(1));
        assert_eq!(vec![0x03], encode_varint_signed(-2));
        assert_eq!(vec![0x80, 0x01], encode_varint_signed(64));
        assert_eq!(vec![0x7f], encode_varint_signed(-64));
        assert_eq!(hex!("feffffffffffffffff01").to_vec(), encode_varint_signed(i64::MAX));
        assert_eq!(hex!("ffffffffffffffffff01").to_vec(), encode_varint_signed(i64::MIN));
        // int8 fields are widened before encoding
        assert_eq!(vec![0xfe, 0x01], encode_varint_signed(i8::MAX as i64));
    }

    #[test]
    fn test_length_prefixed() {
        assert_eq!(vec![0x00], encode_length_prefixed(&[]));
        assert_eq!(vec![0x03, 0xaa, 0xbb, 0xcc], encode_length_prefixed(&[0xaa, 0xbb, 0xcc]));

        let long = vec![7u8; 200];
        let encoded = encode_length_prefixed(&long);
        assert_eq!(&[0xc8, 0x01], &encoded[..2]);
        assert_eq!(&long[..], &encoded[2..]);
    }

    #[test]
    fn test_put_appends() {
        let mut buf = vec![0xee];
        put_varint_signed(&mut buf, 3);
        put_length_prefixed(&mut buf, b"ab");
        assert_eq!(vec![0xee, 0x06, 0x02, b'a', b'b'], buf);
    }

    #[test]
    fn test_decode() {
        assert_eq!(Some((300, 2)), decode_uvarint(&[0xac, 0x02, 0xff]));
        assert_eq!(Some((u64::MAX, 10)), decode_uvarint(&hex!("ffffffffffffffffff01")));
        assert_eq!(Some((-64, 1)), decode_varint_signed(&[0x7f]));
        assert_eq!(Some((i64::MIN, 10)), decode_varint_signed(&encode_varint_signed(i64::MIN)));
        assert_eq!(None, decode_uvarint(&[]));
        assert_eq!(None, decode_uvarint(&[0x80, 0x80]));
        assert_eq!(None, decode_uvarint(&hex!("ffffffffffffffffff02")));
    }
}
