//! Fixed-width element encoding.
//!
//! A [`Converter`] turns elements into byte records and back. The one
//! load-bearing rule is that every record has the same width: the element
//! store is addressed as `slot * record_size()`, which is only correct when
//! the width never varies. [`CompactedArray::new`](crate::CompactedArray::new)
//! asserts this for every marshalled record.
//!
//! Integer converters encode little-endian. [`ByteArrayConverter`] passes
//! `N`-byte records through untouched for callers that do their own framing.

/// Encode/decode capability for one element type, at a fixed record width.
pub trait Converter {
    /// The element type this converter handles.
    type Item;

    /// The width in bytes of every encoded record. Must be constant across
    /// all values of [`Self::Item`].
    fn record_size(&self) -> usize;

    /// Encode `value` into exactly [`record_size`](Self::record_size) bytes.
    fn marshal(&self, value: &Self::Item) -> Vec<u8>;

    /// Decode one record from the front of `buf`, returning the number of
    /// bytes consumed and the value.
    ///
    /// # Panics
    ///
    /// May panic if `buf` holds fewer than `record_size()` bytes. The
    /// compacted array never hands a converter a short buffer.
    fn unmarshal(&self, buf: &[u8]) -> (usize, Self::Item);
}

macro_rules! int_converter {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Converter for $name {
            type Item = $ty;

            #[inline]
            fn record_size(&self) -> usize {
                std::mem::size_of::<$ty>()
            }

            #[inline]
            fn marshal(&self, value: &$ty) -> Vec<u8> {
                value.to_le_bytes().to_vec()
            }

            #[inline]
            fn unmarshal(&self, buf: &[u8]) -> (usize, $ty) {
                let n = std::mem::size_of::<$ty>();
                let value = <$ty>::from_le_bytes(buf[..n].try_into().unwrap());
                (n, value)
            }
        }
    };
}

int_converter!(
    /// Little-endian `u16` records, 2 bytes each.
    U16Converter,
    u16
);
int_converter!(
    /// Little-endian `u32` records, 4 bytes each.
    U32Converter,
    u32
);
int_converter!(
    /// Little-endian `u64` records, 8 bytes each.
    U64Converter,
    u64
);

/// Identity converter for opaque `N`-byte records.
///
/// The record width is fixed by the const parameter, so the constant-width
/// contract holds by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayConverter<const N: usize>;

impl<const N: usize> Converter for ByteArrayConverter<N> {
    type Item = [u8; N];

    #[inline]
    fn record_size(&self) -> usize {
        N
    }

    #[inline]
    fn marshal(&self, value: &[u8; N]) -> Vec<u8> {
        value.to_vec()
    }

    #[inline]
    fn unmarshal(&self, buf: &[u8]) -> (usize, [u8; N]) {
        (N, buf[..N].try_into().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_round_trip() {
        let c = U32Converter;
        assert_eq!(c.record_size(), 4);
        let bytes = c.marshal(&0xDEAD_BEEF);
        assert_eq!(bytes.len(), 4);
        let (n, v) = c.unmarshal(&bytes);
        assert_eq!(n, 4);
        assert_eq!(v, 0xDEAD_BEEF);
    }

    #[test]
    fn test_unmarshal_reads_only_one_record() {
        let c = U16Converter;
        let mut bytes = c.marshal(&0x1234);
        bytes.extend_from_slice(&c.marshal(&0x5678));
        let (n, v) = c.unmarshal(&bytes);
        assert_eq!(n, 2);
        assert_eq!(v, 0x1234);
        let (_, v2) = c.unmarshal(&bytes[n..]);
        assert_eq!(v2, 0x5678);
    }

    #[test]
    fn test_byte_array_identity() {
        let c = ByteArrayConverter::<3>;
        assert_eq!(c.record_size(), 3);
        let (n, v) = c.unmarshal(&[7, 8, 9, 10]);
        assert_eq!(n, 3);
        assert_eq!(v, [7, 8, 9]);
    }
}
