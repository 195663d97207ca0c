//! Little-endian byte array with bitwise operators and bit shifts.
//!
//! Index 0 holds the least significant byte. Values are kept canonical
//! (no trailing zero bytes), so zero is the empty array.

use std::cmp::Ordering;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl, ShlAssign, Shr,
    ShrAssign,
};

use num_traits::{NumCast, PrimInt, Unsigned};

use crate::magnitude;

/// Canonical little-endian byte sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteArray {
    bytes: Vec<u8>,
}

impl ByteArray {
    /// Create a byte array from little-endian bytes, stripping high zero bytes.
    #[must_use]
    pub fn new(mut bytes: Vec<u8>) -> Self {
        magnitude::normalize(&mut bytes);
        Self { bytes }
    }

    /// The canonical bytes, least significant first.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of significant bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of significant bits.
    #[must_use]
    pub fn bits(&self) -> u64 {
        magnitude::bits(&self.bytes)
    }

    /// Numeric comparison.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        magnitude::cmp(&self.bytes, &other.bytes)
    }

    /// Read the low bytes into an unsigned primitive, truncating the rest.
    #[must_use]
    pub fn as_uint<T: PrimInt + Unsigned>(&self) -> T {
        let width = std::mem::size_of::<T>();
        self.bytes
            .iter()
            .take(width)
            .enumerate()
            .fold(T::zero(), |acc, (i, &byte)| {
                acc | (<T as NumCast>::from(byte).unwrap_or_else(T::zero) << (i * 8))
            })
    }

    fn normalize(&mut self) {
        magnitude::normalize(&mut self.bytes);
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteArray {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for ByteArray {
            fn from(value: $t) -> Self {
                Self::new(value.to_le_bytes().to_vec())
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl PartialOrd for ByteArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteArray {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl BitAndAssign<&ByteArray> for ByteArray {
    fn bitand_assign(&mut self, rhs: &ByteArray) {
        self.bytes.truncate(rhs.bytes.len());
        for (byte, &other) in self.bytes.iter_mut().zip(&rhs.bytes) {
            *byte &= other;
        }
        self.normalize();
    }
}

impl BitOrAssign<&ByteArray> for ByteArray {
    fn bitor_assign(&mut self, rhs: &ByteArray) {
        if self.bytes.len() < rhs.bytes.len() {
            self.bytes.resize(rhs.bytes.len(), 0);
        }
        for (byte, &other) in self.bytes.iter_mut().zip(&rhs.bytes) {
            *byte |= other;
        }
    }
}

impl BitXorAssign<&ByteArray> for ByteArray {
    fn bitxor_assign(&mut self, rhs: &ByteArray) {
        if self.bytes.len() < rhs.bytes.len() {
            self.bytes.resize(rhs.bytes.len(), 0);
        }
        for (byte, &other) in self.bytes.iter_mut().zip(&rhs.bytes) {
            *byte ^= other;
        }
        self.normalize();
    }
}

macro_rules! forward_bitop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $assign_trait<ByteArray> for ByteArray {
            fn $assign_method(&mut self, rhs: ByteArray) {
                $assign_trait::$assign_method(self, &rhs);
            }
        }

        impl $trait<&ByteArray> for ByteArray {
            type Output = ByteArray;
            fn $method(mut self, rhs: &ByteArray) -> ByteArray {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $trait<ByteArray> for ByteArray {
            type Output = ByteArray;
            fn $method(mut self, rhs: ByteArray) -> ByteArray {
                $assign_trait::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $trait<&ByteArray> for &ByteArray {
            type Output = ByteArray;
            fn $method(self, rhs: &ByteArray) -> ByteArray {
                let mut out = self.clone();
                $assign_trait::$assign_method(&mut out, rhs);
                out
            }
        }
    };
}

forward_bitop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_bitop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_bitop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl ShlAssign<usize> for ByteArray {
    #[allow(clippy::cast_possible_truncation)]
    fn shl_assign(&mut self, amount: usize) {
        if self.bytes.is_empty() {
            return;
        }
        let byte_shift = amount / 8;
        let bit_shift = (amount % 8) as u32;

        if bit_shift != 0 {
            let mut carry = 0u8;
            for byte in &mut self.bytes {
                let next = *byte >> (8 - bit_shift);
                *byte = (*byte << bit_shift) | carry;
                carry = next;
            }
            if carry != 0 {
                self.bytes.push(carry);
            }
        }
        if byte_shift != 0 {
            self.bytes
                .splice(0..0, std::iter::repeat(0).take(byte_shift));
        }
    }
}

impl ShrAssign<usize> for ByteArray {
    #[allow(clippy::cast_possible_truncation)]
    fn shr_assign(&mut self, amount: usize) {
        let byte_shift = amount / 8;
        let bit_shift = (amount % 8) as u32;

        if byte_shift >= self.bytes.len() {
            self.bytes.clear();
            return;
        }
        self.bytes.drain(..byte_shift);

        if bit_shift != 0 {
            let mut carry = 0u8;
            for byte in self.bytes.iter_mut().rev() {
                let next = *byte << (8 - bit_shift);
                *byte = (*byte >> bit_shift) | carry;
                carry = next;
            }
            self.normalize();
        }
    }
}

impl Shl<usize> for ByteArray {
    type Output = ByteArray;
    fn shl(mut self, amount: usize) -> ByteArray {
        self <<= amount;
        self
    }
}

impl Shl<usize> for &ByteArray {
    type Output = ByteArray;
    fn shl(self, amount: usize) -> ByteArray {
        self.clone() << amount
    }
}

impl Shr<usize> for ByteArray {
    type Output = ByteArray;
    fn shr(mut self, amount: usize) -> ByteArray {
        self >>= amount;
        self
    }
}

impl Shr<usize> for &ByteArray {
    type Output = ByteArray;
    fn shr(self, amount: usize) -> ByteArray {
        self.clone() >> amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from64(value: u64) -> ByteArray {
        ByteArray::from(value)
    }

    #[test]
    fn initialize_from_vec() {
        let ba = ByteArray::new(vec![0x1f, 0x2f, 0x3f, 0x4f]);
        assert_eq!(ba.as_uint::<u64>(), 0x4f3f_2f1f);
    }

    #[test]
    fn initialize_from_u64() {
        let ba = from64(0x4f3f_2f1f);
        assert_eq!(ba.len(), 4);
        assert_eq!(ba.as_uint::<u64>(), 0x4f3f_2f1f);
    }

    #[test]
    fn high_zero_bytes_are_stripped() {
        let ba = ByteArray::new(vec![1, 0, 0]);
        assert_eq!(ba.as_bytes(), &[1]);
        assert!(ByteArray::new(vec![0, 0]).is_empty());
    }

    #[test]
    fn as_uint_truncates() {
        let ba = from64(0x1122_3344_5566_7788);
        assert_eq!(ba.as_uint::<u16>(), 0x7788);
        assert_eq!(ba.as_uint::<u8>(), 0x88);
    }

    #[test]
    fn and_operator() {
        let mut ba = from64(0xffff_ff0f);
        ba &= from64(0x001f_003f);
        assert_eq!(ba.as_uint::<u64>(), 0x001f_000f);
    }

    #[test]
    fn or_operator() {
        let mut ba = from64(0x30);
        ba |= from64(0x001f_003f);
        assert_eq!(ba.as_uint::<u64>(), 0x001f_003f);
    }

    #[test]
    fn xor_operator() {
        let mut ba = from64(0x30);
        ba ^= from64(0x001f_003f);
        assert_eq!(ba.as_uint::<u64>(), 0x001f_000f);
    }

    #[test]
    fn xor_self_is_empty() {
        let ba = from64(0xdead_beef);
        assert!((&ba ^ &ba).is_empty());
    }

    #[test]
    fn shift_left() {
        assert_eq!((from64(0x0102_0304) << 16).as_uint::<u64>(), 0x0102_0304_0000);
        assert_eq!((from64(0x0102_0304) << 4).as_uint::<u64>(), 0x1020_3040);
        assert_eq!((from64(0xffff) << 15).as_uint::<u64>(), 0xffff << 15);
        assert_eq!(
            (from64(0xa_e847_2818) << 15).as_uint::<u64>(),
            0xa_e847_2818 << 15
        );
        assert_eq!((from64(0x1020_3040) << 4).as_uint::<u64>(), 0x1_0203_0400);
        assert_eq!(
            (from64(0xa_e847_2818) << 3).as_uint::<u64>(),
            0xa_e847_2818 << 3
        );
    }

    #[test]
    fn shift_right() {
        assert_eq!((from64(0x0102_0304) >> 16).as_uint::<u64>(), 0x0102);
        assert_eq!((from64(0x0102_0304) >> 4).as_uint::<u64>(), 0x10_2030);
        assert_eq!((from64(0xffff) >> 15).as_uint::<u64>(), 1);
        assert_eq!(
            (from64(0xa_e847_2818) >> 15).as_uint::<u64>(),
            0xa_e847_2818 >> 15
        );
        assert_eq!((from64(0x1020_3040) >> 4).as_uint::<u64>(), 0x102_0304);
        assert_eq!(
            (from64(0xa_e847_2818) >> 3).as_uint::<u64>(),
            0xa_e847_2818 >> 3
        );
    }

    #[test]
    fn shift_right_past_end() {
        assert!((from64(0xffff) >> 16).is_empty());
        assert!((from64(0xffff) >> 200).is_empty());
    }

    #[test]
    fn shift_empty() {
        assert!((ByteArray::default() << 9).is_empty());
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(from64(0x0100) > from64(0xff));
        assert!(from64(0x0201) > from64(0x0102));
        assert_eq!(from64(7).cmp(&from64(7)), Ordering::Equal);
    }
}
