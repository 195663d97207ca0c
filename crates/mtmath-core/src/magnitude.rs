//! Unsigned limb arithmetic on little-endian byte magnitudes.
//!
//! A magnitude is a `[u8]` whose index 0 is the least significant limb.
//! Unless noted otherwise, inputs are expected to be canonical (no trailing
//! zero limbs) and outputs are canonical.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::constants::MIN_PARALLEL_CHUNK;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Add with carry: a + b + carry -> (sum, `new_carry`)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn add_with_carry(a: u8, b: u8, carry: u8) -> (u8, u8) {
    let sum = u16::from(a) + u16::from(b) + u16::from(carry);
    (sum as u8, (sum >> 8) as u8)
}

/// Subtract with borrow: a - b - borrow -> (diff, `new_borrow`)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sub_with_borrow(a: u8, b: u8, borrow: u8) -> (u8, u8) {
    let diff = i16::from(a) - i16::from(b) - i16::from(borrow);
    if diff < 0 {
        ((diff + 256) as u8, 1)
    } else {
        (diff as u8, 0)
    }
}

/// Multiply: a * b -> (low, high)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_wide(a: u8, b: u8) -> (u8, u8) {
    let prod = u16::from(a) * u16::from(b);
    (prod as u8, (prod >> 8) as u8)
}

/// Strip trailing zero limbs.
pub fn normalize(limbs: &mut Vec<u8>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Numeric comparison of two canonical magnitudes.
#[must_use]
pub fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Number of significant bits.
#[must_use]
pub fn bits(a: &[u8]) -> u64 {
    match a.last() {
        None => 0,
        Some(&top) => (a.len() as u64 - 1) * 8 + u64::from(8 - top.leading_zeros()),
    }
}

/// a + b
#[must_use]
pub fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &limb) in long.iter().enumerate() {
        let (sum, c) = add_with_carry(limb, short.get(i).copied().unwrap_or(0), carry);
        out.push(sum);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// a - b, where a >= b.
#[must_use]
pub fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude underflow");
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &limb) in a.iter().enumerate() {
        let (diff, br) = sub_with_borrow(limb, b.get(i).copied().unwrap_or(0), borrow);
        out.push(diff);
        borrow = br;
    }
    normalize(&mut out);
    out
}

/// Schoolbook product a * b. Inputs need not be canonical.
#[must_use]
pub fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u8; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u8;
        for (j, &y) in b.iter().enumerate() {
            let (low, high) = mul_wide(x, y);
            let (sum, c1) = add_with_carry(out[i + j], low, carry);
            out[i + j] = sum;
            // x*y + out + carry < 2^16, so the high limb cannot overflow.
            carry = high + c1;
        }
        add_at(&mut out, &[carry], i + b.len());
    }
    normalize(&mut out);
    out
}

/// Product that fans row chunks of `a` out on the rayon pool once both
/// operands reach `threshold` bytes. Partial products are summed in chunk
/// order, so the result does not depend on scheduling.
#[must_use]
pub fn mul_auto(a: &[u8], b: &[u8], threshold: usize) -> Vec<u8> {
    if threshold == 0 || a.len() < threshold || b.len() < threshold {
        return mul(a, b);
    }
    let chunk_len = a
        .len()
        .div_ceil(rayon::current_num_threads())
        .max(MIN_PARALLEL_CHUNK);
    tracing::trace!(
        left_bytes = a.len(),
        right_bytes = b.len(),
        chunk_len,
        "parallel multiplication"
    );

    let partials: Vec<Vec<u8>> = a.par_chunks(chunk_len).map(|chunk| mul(chunk, b)).collect();

    let mut out = vec![0u8; a.len() + b.len() + 1];
    for (index, partial) in partials.iter().enumerate() {
        add_at(&mut out, partial, index * chunk_len);
    }
    normalize(&mut out);
    out
}

/// acc[offset..] += value, propagating the carry.
fn add_at(acc: &mut [u8], value: &[u8], offset: usize) {
    let mut carry = 0;
    for (i, &limb) in value.iter().enumerate() {
        let (sum, c) = add_with_carry(acc[offset + i], limb, carry);
        acc[offset + i] = sum;
        carry = c;
    }
    let mut k = offset + value.len();
    while carry != 0 {
        let (sum, c) = add_with_carry(acc[k], 0, carry);
        acc[k] = sum;
        carry = c;
        k += 1;
    }
}

/// Divide by a small non-zero divisor, returning (quotient, remainder).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn div_rem_small(a: &[u8], divisor: u32) -> (Vec<u8>, u32) {
    debug_assert!(divisor != 0, "division by zero");
    let divisor = u64::from(divisor);
    let mut quotient = vec![0u8; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = (rem << 8) | u64::from(a[i]);
        quotient[i] = (cur / divisor) as u8;
        rem = cur % divisor;
    }
    normalize(&mut quotient);
    (quotient, rem as u32)
}

/// a = a * mul + add, for small factors.
#[allow(clippy::cast_possible_truncation)]
pub fn mul_add_small(a: &mut Vec<u8>, mul: u32, add: u32) {
    let mut carry = u64::from(add);
    for limb in a.iter_mut() {
        let t = u64::from(*limb) * u64::from(mul) + carry;
        *limb = t as u8;
        carry = t >> 8;
    }
    while carry != 0 {
        a.push(carry as u8);
        carry >>= 8;
    }
    normalize(a);
}

/// Long division (Knuth, TAOCP vol. 2, algorithm D) on byte limbs.
///
/// Returns (quotient, remainder). `divisor` must be non-zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn div_rem(dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, Vec<u8>) {
    debug_assert!(!divisor.is_empty(), "division by zero");
    if cmp(dividend, divisor) == Ordering::Less {
        return (Vec::new(), dividend.to_vec());
    }
    if divisor.len() == 1 {
        let (q, r) = div_rem_small(dividend, u32::from(divisor[0]));
        let r = if r == 0 { Vec::new() } else { vec![r as u8] };
        return (q, r);
    }

    let n = divisor.len();
    let m = dividend.len() - n;

    // D1: scale so the top divisor limb has its high bit set.
    let shift = divisor[n - 1].leading_zeros();
    let mut v = shl_limbs(divisor, shift);
    v.truncate(n);
    let mut u = shl_limbs(dividend, shift);

    let v_top = u32::from(v[n - 1]);
    let v_next = u32::from(v[n - 2]);
    let mut q = vec![0u8; m + 1];

    for j in (0..=m).rev() {
        // D3: estimate the quotient limb.
        let num = (u32::from(u[j + n]) << 8) | u32::from(u[j + n - 1]);
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat >= 256 || qhat * v_next > ((rhat << 8) | u32::from(u[j + n - 2])) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= 256 {
                break;
            }
        }

        // D4: multiply and subtract.
        let mut borrow = 0i32;
        let mut carry = 0u32;
        for i in 0..n {
            let p = qhat * u32::from(v[i]) + carry;
            carry = p >> 8;
            let t = i32::from(u[i + j]) - borrow - (p & 0xff) as i32;
            u[i + j] = t as u8;
            borrow = i32::from(t < 0);
        }
        let t = i32::from(u[j + n]) - borrow - carry as i32;
        u[j + n] = t as u8;

        // D5/D6: the estimate was one too large; add the divisor back.
        if t < 0 {
            qhat -= 1;
            let mut c = 0;
            for i in 0..n {
                let (sum, next) = add_with_carry(u[i + j], v[i], c);
                u[i + j] = sum;
                c = next;
            }
            u[j + n] = u[j + n].wrapping_add(c);
        }
        q[j] = qhat as u8;
    }

    // D8: unscale the remainder.
    normalize(&mut q);
    let mut r = shr_limbs(&u[..n], shift);
    normalize(&mut r);
    (q, r)
}

/// Shift left by fewer than 8 bits. The result is one limb longer than `a`.
fn shl_limbs(a: &[u8], shift: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u8;
    for &limb in a {
        out.push((limb << shift) | carry);
        carry = if shift == 0 { 0 } else { limb >> (8 - shift) };
    }
    out.push(carry);
    out
}

/// Shift right by fewer than 8 bits. The result has the same length as `a`.
fn shr_limbs(a: &[u8], shift: u32) -> Vec<u8> {
    if shift == 0 {
        return a.to_vec();
    }
    (0..a.len())
        .map(|i| {
            let high = a.get(i + 1).copied().unwrap_or(0);
            (a[i] >> shift) | (high << (8 - shift))
        })
        .collect()
}

/// Largest power of `radix` that fits in a `u32`, with its exponent.
#[must_use]
pub fn radix_chunk(radix: u32) -> (u32, usize) {
    let mut power = u64::from(radix);
    let mut digits = 1;
    while power * u64::from(radix) <= u64::from(u32::MAX) {
        power *= u64::from(radix);
        digits += 1;
    }
    #[allow(clippy::cast_possible_truncation)]
    (power as u32, digits)
}

/// Build a magnitude from ASCII digits already validated for `radix`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_radix_digits(digits: &[u8], radix: u32) -> Vec<u8> {
    let (chunk_power, chunk_len) = radix_chunk(radix);
    let mut out = Vec::with_capacity(digits.len() / 2 + 1);
    for chunk in digits.chunks(chunk_len) {
        let value = chunk.iter().fold(0u32, |acc, &c| {
            acc * radix + char::from(c).to_digit(radix).unwrap_or(0)
        });
        let factor = if chunk.len() == chunk_len {
            chunk_power
        } else {
            radix.pow(chunk.len() as u32)
        };
        mul_add_small(&mut out, factor, value);
    }
    out
}

/// Render a magnitude as lowercase ASCII digits in `radix` (no sign, no prefix).
#[must_use]
pub fn to_radix_digits(a: &[u8], radix: u32) -> String {
    if a.is_empty() {
        return "0".to_string();
    }
    let (chunk_power, chunk_len) = radix_chunk(radix);
    let mut reversed = Vec::with_capacity(a.len() * 3);
    let mut cur = a.to_vec();
    while !cur.is_empty() {
        let (q, mut rem) = div_rem_small(&cur, chunk_power);
        cur = q;
        for _ in 0..chunk_len {
            if cur.is_empty() && rem == 0 {
                break;
            }
            reversed.push(DIGITS[(rem % radix) as usize]);
            rem /= radix;
        }
    }
    reversed.iter().rev().map(|&c| char::from(c)).collect()
}
