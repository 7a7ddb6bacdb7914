//! Sign-magnitude arbitrary-precision integer on top of [`DigitStorage`].
//!
//! The magnitude is kept in canonical form: no most-significant zero words,
//! and zero is the empty magnitude with a positive sign. Every operation
//! re-establishes canonical form before returning.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use std::str::FromStr;

use crate::cache::{MAX_CACHED, SMALL_NEG, SMALL_POS};
use crate::digit_storage::{Digit, DigitStorage, DoubleDigit, DIGIT_BITS};
use crate::error::{DivisionByZeroError, ParseBigIntegerError};

pub(crate) const ZERO: BigInteger = BigInteger {
    digits: DigitStorage::EMPTY,
    negative: false,
};

/// Arbitrary-precision signed integer.
///
/// Values behave like immutable-by-copy numbers: cloning is O(1) because the
/// magnitude buffer is shared, and the first mutation of either copy makes a
/// private buffer.
#[derive(Debug, Clone)]
pub struct BigInteger {
    digits: DigitStorage,
    negative: bool,
}

// Canonical-form helpers.
impl BigInteger {
    /// Drops most-significant zero words; zero loses its sign.
    fn trim(&mut self) {
        while self.digits.as_slice().last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.negative = false;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    pub fn abs(&self) -> BigInteger {
        let mut res = self.clone();
        res.negative = false;
        res
    }

    pub(crate) fn from_single_word(word: Digit, negative: bool) -> BigInteger {
        let mut res = BigInteger {
            digits: DigitStorage::from_words(vec![word]),
            negative,
        };
        res.trim();
        res
    }
}

// Construction from machine integers.
impl BigInteger {
    fn value_of(val: u64, negative: bool) -> BigInteger {
        if val == 0 {
            return ZERO;
        }
        if val <= MAX_CACHED as u64 {
            let cached = if negative {
                &SMALL_NEG[val as usize]
            } else {
                &SMALL_POS[val as usize]
            };
            return cached.clone();
        }
        let low = val as Digit;
        let high = (val >> DIGIT_BITS) as Digit;
        let words = if high == 0 { vec![low] } else { vec![low, high] };
        BigInteger {
            digits: DigitStorage::from_words(words),
            negative,
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t: ty),*) => {
    $(
    impl From<$t> for BigInteger {
        fn from(val: $t) -> Self {
            BigInteger::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_from_signed {
    ($($t: ty),*) => {
    $(
    impl From<$t> for BigInteger {
        fn from(val: $t) -> Self {
            BigInteger::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}

impl_from_unsigned!(u8, u16, u32, usize, u64);
impl_from_signed!(i8, i16, i32, isize, i64);

impl Default for BigInteger {
    fn default() -> BigInteger {
        ZERO
    }
}

// Parsing: radix 10, optional leading '-', then one or more ASCII digits.
impl FromStr for BigInteger {
    type Err = ParseBigIntegerError;

    fn from_str(s: &str) -> Result<BigInteger, ParseBigIntegerError> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(ParseBigIntegerError::empty());
        }
        let mut value = ZERO;
        for c in body.chars() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| ParseBigIntegerError::invalid_digit(c))?;
            value.mul_word(10);
            value.add_word(digit as Digit, 0);
        }
        if negative {
            value.negate();
        }
        Ok(value)
    }
}

// Word-level magnitude primitives. All of these ignore the sign and keep the
// magnitude canonical on exit.
impl BigInteger {
    /// magnitude += word << (32 * shift)
    fn add_word(&mut self, word: Digit, shift: usize) {
        while shift >= self.digits.len() {
            self.digits.push(0);
        }
        let mut carry = word as DoubleDigit;
        let mut i = shift;
        while i < self.digits.len() && carry > 0 {
            let cur = self.digits[i] as DoubleDigit + carry;
            self.digits[i] = cur as Digit;
            carry = cur >> DIGIT_BITS;
            i += 1;
        }
        if carry > 0 {
            self.digits.push(carry as Digit);
        }
        self.trim();
    }

    /// magnitude -= word << (32 * shift). The magnitude must be large enough;
    /// borrow underflow is a contract violation.
    fn sub_word(&mut self, word: Digit, shift: usize) {
        while shift >= self.digits.len() {
            self.digits.push(0);
        }
        let mut borrow = word as DoubleDigit;
        let mut i = shift;
        while i < self.digits.len() && borrow > 0 {
            let cur = self.digits[i] as DoubleDigit;
            if cur < borrow {
                self.digits[i] = (cur + (1u64 << DIGIT_BITS) - borrow) as Digit;
                borrow = 1;
            } else {
                self.digits[i] = (cur - borrow) as Digit;
                borrow = 0;
            }
            i += 1;
        }
        assert!(borrow == 0, "unsigned subtraction underflow");
        self.trim();
    }

    /// magnitude += |rhs|
    fn add_unsigned(&mut self, rhs: &BigInteger) {
        while self.digits.len() < rhs.digits.len() {
            self.digits.push(0);
        }
        let mut carry: DoubleDigit = 0;
        for i in 0..self.digits.len() {
            let addend = if i < rhs.digits.len() {
                rhs.digits[i] as DoubleDigit
            } else {
                0
            };
            let cur = self.digits[i] as DoubleDigit + addend + carry;
            self.digits[i] = cur as Digit;
            carry = cur >> DIGIT_BITS;
        }
        if carry > 0 {
            self.digits.push(carry as Digit);
        }
        self.trim();
    }

    /// magnitude -= |rhs|. Requires |self| >= |rhs|; anything else is a
    /// contract violation, not a recoverable error.
    fn sub_unsigned(&mut self, rhs: &BigInteger) {
        assert!(
            rhs.digits.len() <= self.digits.len(),
            "unsigned subtraction underflow"
        );
        let mut borrow: DoubleDigit = 0;
        for i in 0..self.digits.len() {
            let sub = borrow
                + if i < rhs.digits.len() {
                    rhs.digits[i] as DoubleDigit
                } else {
                    0
                };
            let cur = self.digits[i] as DoubleDigit;
            if cur < sub {
                self.digits[i] = (cur + (1u64 << DIGIT_BITS) - sub) as Digit;
                borrow = 1;
            } else {
                self.digits[i] = (cur - sub) as Digit;
                borrow = 0;
            }
        }
        assert!(borrow == 0, "unsigned subtraction underflow");
        self.trim();
    }

    /// magnitude *= word
    fn mul_word(&mut self, word: Digit) {
        let mut carry: DoubleDigit = 0;
        for i in 0..self.digits.len() {
            let cur = self.digits[i] as DoubleDigit * word as DoubleDigit + carry;
            self.digits[i] = cur as Digit;
            carry = cur >> DIGIT_BITS;
        }
        if carry > 0 {
            self.digits.push(carry as Digit);
        }
        self.trim();
    }

    /// magnitude /= word, returning the remainder.
    fn div_mod_word(&mut self, word: Digit) -> Digit {
        let mut rem: DoubleDigit = 0;
        for i in (0..self.digits.len()).rev() {
            let cur = (rem << DIGIT_BITS) + self.digits[i] as DoubleDigit;
            self.digits[i] = (cur / word as DoubleDigit) as Digit;
            rem = cur % word as DoubleDigit;
        }
        self.trim();
        rem as Digit
    }

    fn shift_left_by_words(&mut self, count: usize) {
        if self.is_zero() {
            return;
        }
        for _ in 0..count {
            self.digits.insert(0, 0);
        }
    }

    /// Returns true when a nonzero word was discarded.
    fn shift_right_by_words(&mut self, count: usize) -> bool {
        let mut lost = false;
        if count >= self.digits.len() {
            lost = !self.is_zero();
            self.digits.clear();
        } else {
            for _ in 0..count {
                lost |= self.digits[0] != 0;
                self.digits.remove(0);
            }
        }
        self.trim();
        lost
    }

    /// Positive value formed from the words digits[from..to].
    fn slice_words(&self, from: usize, to: usize) -> BigInteger {
        let mut res = ZERO;
        for i in from..to {
            res.digits.push(self.digits[i]);
        }
        res.trim();
        res
    }
}

// Comparison: sign first, then magnitude length, then words from the most
// significant end, with the direction flipped for negative operands.
impl BigInteger {
    fn cmp_magnitude(&self, other: &BigInteger) -> Ordering {
        let a = self.digits.as_slice();
        let b = other.digits.as_slice();
        if a.len() != b.len() {
            return a.len().cmp(&b.len());
        }
        for i in (0..a.len()).rev() {
            if a[i] != b[i] {
                return a[i].cmp(&b[i]);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.digits == other.digits
    }
}

impl Eq for BigInteger {}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (negative, _) => {
                let by_magnitude = self.cmp_magnitude(other);
                if negative {
                    by_magnitude.reverse()
                } else {
                    by_magnitude
                }
            }
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Addition and subtraction. Mixed signs reduce to unsigned subtraction of
// absolute values; the larger magnitude picks the result sign.
impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        if self.negative == rhs.negative {
            self.add_unsigned(rhs);
            return;
        }
        match self.cmp_magnitude(rhs) {
            Ordering::Less => {
                let mut larger = rhs.clone();
                larger.sub_unsigned(self);
                *self = larger;
            }
            Ordering::Equal => *self = ZERO,
            Ordering::Greater => self.sub_unsigned(rhs),
        }
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        if self.negative != rhs.negative {
            self.add_unsigned(rhs);
            return;
        }
        match self.cmp_magnitude(rhs) {
            Ordering::Less => {
                let mut larger = rhs.clone();
                larger.sub_unsigned(self);
                larger.negate();
                *self = larger;
            }
            Ordering::Equal => *self = ZERO,
            Ordering::Greater => self.sub_unsigned(rhs),
        }
    }
}

// Schoolbook multiplication: O(n * m) word products into a scratch buffer of
// n + m + 1 words, which the storage then adopts. Sign is the xor of signs.
impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        let n = self.digits.len();
        let m = rhs.digits.len();
        let mut scratch = vec![0 as Digit; n + m + 1];
        for i in 0..n {
            let xi = self.digits[i] as DoubleDigit;
            let mut carry: DoubleDigit = 0;
            let mut j = 0;
            while j < m || carry > 0 {
                let yj = if j < m { rhs.digits[j] as DoubleDigit } else { 0 };
                let cur = scratch[i + j] as DoubleDigit + xi * yj + carry;
                scratch[i + j] = cur as Digit;
                carry = cur >> DIGIT_BITS;
                j += 1;
            }
        }
        self.digits = DigitStorage::from_words(scratch);
        if rhs.negative {
            self.negate();
        }
        self.trim();
    }
}

// Division: truncating quotient; the remainder is always derived as
// dividend - divisor * quotient, so its sign follows the dividend.
impl BigInteger {
    /// Truncating quotient and remainder in one call. This is the
    /// recoverable-error path; the `/` and `%` operators panic on a zero
    /// divisor instead.
    pub fn div_rem(
        &self,
        rhs: &BigInteger,
    ) -> Result<(BigInteger, BigInteger), DivisionByZeroError> {
        if rhs.is_zero() {
            return Err(DivisionByZeroError);
        }
        let quotient = self.divide_nonzero(rhs);
        let mut remainder = self.clone();
        remainder -= &(rhs * &quotient);
        Ok((quotient, remainder))
    }

    fn divide_nonzero(&self, rhs: &BigInteger) -> BigInteger {
        debug_assert!(!rhs.is_zero());
        if self.is_zero() {
            return ZERO;
        }
        if self.negative != rhs.negative {
            let mut quotient = self.abs().divide_nonzero(&rhs.abs());
            quotient.negate();
            return quotient;
        }
        let mut u = self.abs();
        let v = rhs.abs();
        if v.digits.len() == 1 {
            u.div_mod_word(v.digits[0]);
            return u;
        }
        if u < v {
            return ZERO;
        }
        u.divide_long(v)
    }

    /// Normalized long division for a multi-word divisor. Both operands are
    /// non-negative and self >= v on entry.
    ///
    /// Both operands are scaled by floor(2^32 / (v_high + 1)) so the
    /// divisor's leading word is large; the quotient is unchanged because
    /// both sides scale identically. Each step estimates one quotient word
    /// from the top words of the running remainder, clamps it to the maximum
    /// word, and corrects downward by resubtracting the divisor.
    fn divide_long(mut self, mut v: BigInteger) -> BigInteger {
        let v_high_word = v.digits[v.digits.len() - 1] as DoubleDigit;
        let normalization = ((1u64 << DIGIT_BITS) / (v_high_word + 1)) as Digit;
        self.mul_word(normalization);
        v.mul_word(normalization);

        let quotient_len = self.digits.len() - v.digits.len() + 1;
        let mut quotient = DigitStorage::with_len(quotient_len);
        let mut remainder = self.slice_words(quotient_len, self.digits.len());
        let v_high = v.digits[v.digits.len() - 1] as DoubleDigit;

        for dig in (0..quotient_len).rev() {
            remainder.shift_left_by_words(1);
            remainder.add_word(self.digits[dig], 0);

            let rem_len = remainder.digits.len();
            let mut rem_high: DoubleDigit = if remainder.is_zero() {
                0
            } else {
                remainder.digits[rem_len - 1] as DoubleDigit
            };
            if rem_len > v.digits.len() {
                rem_high = (rem_high << DIGIT_BITS) + remainder.digits[rem_len - 2] as DoubleDigit;
            }

            let mut qhat = (rem_high / v_high).min(Digit::MAX as DoubleDigit);
            let mut trial = v.clone();
            trial.mul_word(qhat as Digit);
            let mut corrections = 0;
            while remainder < trial {
                qhat -= 1;
                trial -= &v;
                corrections += 1;
            }
            // With the normalization above the estimate overshoots by at
            // most two (Knuth vol. 2, 4.3.1).
            debug_assert!(corrections <= 2);
            quotient[dig] = qhat as Digit;
            remainder -= &trial;
        }

        let mut res = BigInteger {
            digits: quotient,
            negative: false,
        };
        res.trim();
        res
    }
}

impl DivAssign<&BigInteger> for BigInteger {
    fn div_assign(&mut self, rhs: &BigInteger) {
        if rhs.is_zero() {
            panic!("attempt to divide by zero");
        }
        *self = self.divide_nonzero(rhs);
    }
}

impl RemAssign<&BigInteger> for BigInteger {
    fn rem_assign(&mut self, rhs: &BigInteger) {
        if rhs.is_zero() {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        let quotient = self.divide_nonzero(rhs);
        *self -= &(rhs * &quotient);
    }
}

// Increment and decrement: single-unit add/sub against the magnitude, so no
// full operand is constructed.
impl BigInteger {
    pub fn increment(&mut self) {
        if self.negative {
            self.sub_word(1, 0);
        } else {
            self.add_word(1, 0);
        }
    }

    pub fn decrement(&mut self) {
        if self.is_zero() {
            self.digits.push(1);
            self.negative = true;
        } else if self.negative {
            self.add_word(1, 0);
        } else {
            self.sub_word(1, 0);
        }
    }
}

// Bitwise operators work in the two's-complement domain. Both operands are
// encoded at a common width of max(len, len) + 1 words, which sign-extends
// the shorter one, so AND/OR/XOR all agree with primitive-integer results.
impl BigInteger {
    fn to_twos_complement(&self, width: usize) -> Vec<Digit> {
        debug_assert!(width > self.digits.len());
        let mut words = vec![0 as Digit; width];
        words[..self.digits.len()].copy_from_slice(self.digits.as_slice());
        if self.negative {
            for w in words.iter_mut() {
                *w = !*w;
            }
            add_one_in_place(&mut words);
        }
        words
    }

    fn from_twos_complement(mut words: Vec<Digit>) -> BigInteger {
        let negative = words
            .last()
            .map_or(false, |w| w >> (DIGIT_BITS - 1) != 0);
        if negative {
            for w in words.iter_mut() {
                *w = !*w;
            }
            add_one_in_place(&mut words);
        }
        let mut res = BigInteger {
            digits: DigitStorage::from_words(words),
            negative,
        };
        res.trim();
        res
    }

    fn bitwise(&self, rhs: &BigInteger, op: impl Fn(Digit, Digit) -> Digit) -> BigInteger {
        let width = self.digits.len().max(rhs.digits.len()) + 1;
        let a = self.to_twos_complement(width);
        let b = rhs.to_twos_complement(width);
        let words = a.iter().zip(&b).map(|(x, y)| op(*x, *y)).collect();
        BigInteger::from_twos_complement(words)
    }
}

fn add_one_in_place(words: &mut [Digit]) {
    for w in words.iter_mut() {
        let (sum, overflow) = w.overflowing_add(1);
        *w = sum;
        if !overflow {
            break;
        }
    }
}

impl BitAndAssign<&BigInteger> for BigInteger {
    fn bitand_assign(&mut self, rhs: &BigInteger) {
        *self = self.bitwise(rhs, |a, b| a & b);
    }
}

impl BitOrAssign<&BigInteger> for BigInteger {
    fn bitor_assign(&mut self, rhs: &BigInteger) {
        *self = self.bitwise(rhs, |a, b| a | b);
    }
}

impl BitXorAssign<&BigInteger> for BigInteger {
    fn bitxor_assign(&mut self, rhs: &BigInteger) {
        *self = self.bitwise(rhs, |a, b| a ^ b);
    }
}

// Shifts: whole words via insert/remove at the low end, the residual bits one
// at a time as multiply/divide by two. A negative count delegates to the
// opposite direction and that delegation is the only action taken.
impl BigInteger {
    fn shift_left(&mut self, bits: usize) {
        self.shift_left_by_words(bits / DIGIT_BITS);
        for _ in 0..(bits % DIGIT_BITS) {
            self.mul_word(2);
        }
        self.trim();
    }

    /// Arithmetic (floor) right shift: the result is decremented once when
    /// the value is negative and nonzero bits were shifted out, so that
    /// x >> k == floor(x / 2^k).
    fn shift_right(&mut self, bits: usize) {
        let was_negative = self.negative;
        let mut lost = self.shift_right_by_words(bits / DIGIT_BITS);
        for _ in 0..(bits % DIGIT_BITS) {
            lost |= self.div_mod_word(2) != 0;
        }
        self.trim();
        if was_negative && lost {
            self.decrement();
        }
    }
}

impl ShlAssign<i32> for BigInteger {
    fn shl_assign(&mut self, bits: i32) {
        if bits < 0 {
            self.shift_right(bits.unsigned_abs() as usize);
        } else {
            self.shift_left(bits as usize);
        }
    }
}

impl ShrAssign<i32> for BigInteger {
    fn shr_assign(&mut self, bits: i32) {
        if bits < 0 {
            self.shift_left(bits.unsigned_abs() as usize);
        } else {
            self.shift_right(bits as usize);
        }
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    /// !x == -x - 1, the two's-complement identity.
    fn not(self) -> BigInteger {
        let mut res = -self;
        res.decrement();
        res
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        !self.clone()
    }
}

// The assign impls above are the primitives; everything else forwards to
// them, cloning the left operand when it is borrowed (O(1) thanks to the
// shared storage).
macro_rules! forward_binop {
    ($op_trait: ident, $op: ident, $assign_trait: ident, $assign: ident) => {
        impl $assign_trait<BigInteger> for BigInteger {
            fn $assign(&mut self, rhs: BigInteger) {
                self.$assign(&rhs);
            }
        }

        impl $op_trait<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $op(mut self, rhs: BigInteger) -> BigInteger {
                self.$assign(&rhs);
                self
            }
        }

        impl $op_trait<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $op(mut self, rhs: &BigInteger) -> BigInteger {
                self.$assign(rhs);
                self
            }
        }

        impl $op_trait<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $op(self, rhs: BigInteger) -> BigInteger {
                let mut res = self.clone();
                res.$assign(&rhs);
                res
            }
        }

        impl $op_trait<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $op(self, rhs: &BigInteger) -> BigInteger {
                let mut res = self.clone();
                res.$assign(rhs);
                res
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

macro_rules! forward_shift {
    ($op_trait: ident, $op: ident, $assign: ident) => {
        impl $op_trait<i32> for BigInteger {
            type Output = BigInteger;

            fn $op(mut self, bits: i32) -> BigInteger {
                self.$assign(bits);
                self
            }
        }

        impl $op_trait<i32> for &BigInteger {
            type Output = BigInteger;

            fn $op(self, bits: i32) -> BigInteger {
                let mut res = self.clone();
                res.$assign(bits);
                res
            }
        }
    };
}

forward_shift!(Shl, shl, shl_assign);
forward_shift!(Shr, shr, shr_assign);

// Decimal rendering: divide the magnitude by ten, least significant digit
// first, then reverse.
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut magnitude = self.clone();
        let mut reversed = String::new();
        while !magnitude.is_zero() {
            let digit = magnitude.div_mod_word(10);
            reversed.push(char::from(b'0' + digit as u8));
        }
        if self.negative {
            reversed.push('-');
        }
        f.write_str(&reversed.chars().rev().collect::<String>())
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_from_machine_integers() {
    assert_eq!(BigInteger::from(0u8).to_string(), "0");
    assert_eq!(BigInteger::from(12i8).to_string(), "12");
    assert_eq!(BigInteger::from(-100i16).to_string(), "-100");
    assert_eq!(BigInteger::from(u32::MAX).to_string(), "4294967295");
    assert_eq!(BigInteger::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInteger::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInteger::from(-1isize), BigInteger::from(-1i64));
}

#[test]
fn test_parse_and_render_round_trip() {
    for s in [
        "0",
        "7",
        "-7",
        "4294967296",
        "-4294967296",
        "123456789012345678901234567890",
        "-999999999999999999999",
    ] {
        assert_eq!(big(s).to_string(), s);
    }
    // leading zeros are accepted but not preserved
    assert_eq!(big("007").to_string(), "7");
    assert_eq!(big("-0").to_string(), "0");
}

#[test]
fn test_parse_errors() {
    assert!("".parse::<BigInteger>().is_err());
    assert!("-".parse::<BigInteger>().is_err());
    assert!("12a3".parse::<BigInteger>().is_err());
    assert!("+5".parse::<BigInteger>().is_err());
    assert!("1 2".parse::<BigInteger>().is_err());
    assert!("--5".parse::<BigInteger>().is_err());
}

#[test]
fn test_add_sub_signs() {
    assert_eq!(big("5") + big("7"), big("12"));
    assert_eq!(big("-5") + big("-7"), big("-12"));
    assert_eq!(big("5") + big("-7"), big("-2"));
    assert_eq!(big("-5") + big("7"), big("2"));
    assert_eq!(big("7") - big("5"), big("2"));
    assert_eq!(big("5") - big("7"), big("-2"));
    assert_eq!(big("-5") - big("-7"), big("2"));
    assert_eq!(big("5") - big("-7"), big("12"));
    assert_eq!(big("5") + big("-5"), big("0"));
    assert_eq!(
        BigInteger::from(0u32) - big("999999999999999999999"),
        big("-999999999999999999999")
    );
}

#[test]
fn test_add_carry_across_words() {
    let x = big("4294967295"); // u32::MAX
    assert_eq!(&x + &BigInteger::from(1u32), big("4294967296"));
    let y = big("18446744073709551615"); // u64::MAX
    assert_eq!(&y + &BigInteger::from(1u32), big("18446744073709551616"));
    assert_eq!(big("18446744073709551616") - BigInteger::from(1u32), y);
}

#[test]
fn test_mul() {
    assert_eq!(big("0") * big("12345"), big("0"));
    assert_eq!(big("-3") * big("4"), big("-12"));
    assert_eq!(big("-3") * big("-4"), big("12"));
    assert_eq!(
        big("123456789012345678901234567890") * big("2"),
        big("246913578024691357802469135780")
    );
    assert_eq!(
        big("10000000000000000") * big("30000000000000000"),
        big("300000000000000000000000000000000")
    );
}

#[test]
fn test_div_truncates_toward_zero() {
    assert_eq!(big("7") / big("2"), big("3"));
    assert_eq!(big("7") % big("2"), big("1"));
    assert_eq!(big("-7") / big("2"), big("-3"));
    assert_eq!(big("-7") % big("2"), big("-1"));
    assert_eq!(big("7") / big("-2"), big("-3"));
    assert_eq!(big("7") % big("-2"), big("1"));
    assert_eq!(big("-7") / big("-2"), big("3"));
    assert_eq!(big("-7") % big("-2"), big("-1"));
    assert_eq!(big("-5") % big("3"), big("-2"));
}

#[test]
fn test_div_single_word() {
    let (q, r) = big("1000000000000000000000")
        .div_rem(&big("3"))
        .unwrap();
    assert_eq!(q, big("333333333333333333333"));
    assert_eq!(r, big("1"));
    assert_eq!(
        big("10000000000000000000000000000000000") / big("1000"),
        big("10000000000000000000000000000000")
    );
}

#[test]
fn test_div_long() {
    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let q = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, q);
    let (quotient, remainder) = a.div_rem(&b).unwrap();
    assert_eq!(quotient, q);
    assert_eq!(&b * &quotient + &remainder, a);
    assert!(remainder >= big("0"));
    assert!(remainder < b);
}

#[test]
fn test_mod_long() {
    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(a % b, r);
}

#[test]
fn test_div_identity_holds() {
    let dividends = ["123456789012345678901234567890", "-98765432109876543210", "5", "0"];
    let divisors = ["97", "-4294967296", "18446744073709551629", "-3"];
    for a in dividends {
        for b in divisors {
            let (a, b) = (big(a), big(b));
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&q * &b + &r, a, "a = {}, b = {}", a, b);
            assert!(r.abs() < b.abs());
        }
    }
}

#[test]
fn test_div_by_zero() {
    assert_eq!(big("5").div_rem(&big("0")), Err(crate::DivisionByZeroError));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn test_div_operator_by_zero_panics() {
    let _ = big("5") / big("0");
}

#[test]
fn test_increment_decrement() {
    let mut x = big("0");
    x.decrement();
    assert_eq!(x, big("-1"));
    x.increment();
    assert_eq!(x, big("0"));
    x.increment();
    assert_eq!(x, big("1"));

    let mut y = big("4294967296");
    y.decrement();
    assert_eq!(y, big("4294967295"));

    let mut z = big("-4294967295");
    z.decrement();
    assert_eq!(z, big("-4294967296"));
}

#[test]
fn test_shift_left_matches_multiplication() {
    assert_eq!(big("1") << 100, big("1267650600228229401496703205376"));
    assert_eq!(big("5") << 0, big("5"));
    assert_eq!(big("-3") << 33, big("-25769803776"));
    assert_eq!(big("0") << 500, big("0"));
}

#[test]
fn test_shift_right_is_floor() {
    assert_eq!(big("7") >> 1, big("3"));
    assert_eq!(big("-7") >> 1, big("-4"));
    assert_eq!(big("-4") >> 1, big("-2"));
    assert_eq!(big("-1") >> 100, big("-1"));
    assert_eq!(big("1") >> 100, big("0"));
    assert_eq!(big("-1267650600228229401496703205377") >> 100, big("-2"));
}

#[test]
fn test_negative_shift_counts_delegate() {
    assert_eq!(big("5") << -1, big("2"));
    assert_eq!(big("5") >> -3, big("40"));
}

#[test]
fn test_bitwise_against_primitives() {
    let pairs: [(i64, i64); 6] = [
        (0x5a5a, 0x0ff0),
        (-2, 0x1_0000_0005),
        (-1, 12345),
        (-6_000_000_000, 123),
        (7, -3),
        (-7, -3),
    ];
    for (a, b) in pairs {
        let (x, y) = (BigInteger::from(a), BigInteger::from(b));
        assert_eq!(&x & &y, BigInteger::from(a & b), "{} & {}", a, b);
        assert_eq!(&x | &y, BigInteger::from(a | b), "{} | {}", a, b);
        assert_eq!(&x ^ &y, BigInteger::from(a ^ b), "{} ^ {}", a, b);
    }
}

#[test]
fn test_bitwise_not() {
    assert_eq!(!big("0"), big("-1"));
    assert_eq!(!big("-1"), big("0"));
    assert_eq!(!big("5"), big("-6"));
    assert_eq!(!!big("123456789012345678901234567890"), big("123456789012345678901234567890"));
}

#[test]
fn test_ordering() {
    let mut values: Vec<BigInteger> = [
        "5", "-5", "0", "4294967296", "-4294967296", "1", "-1", "4294967295",
    ]
    .iter()
    .map(|s| big(s))
    .collect();
    values.sort();
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        rendered,
        ["-4294967296", "-5", "-1", "0", "1", "5", "4294967295", "4294967296"]
    );
    assert!(big("-10") < big("-9"));
    assert!(big("-4294967296") < big("-4294967295"));
    assert!(big("0") == BigInteger::default());
}

#[test]
fn test_copy_independence() {
    let x = big("123456789012345678901234567890");
    let mut y = x.clone();
    y += &BigInteger::from(1u32);
    assert_eq!(x, big("123456789012345678901234567890"));
    assert_eq!(y, big("123456789012345678901234567891"));
}

#[test]
fn test_neg_and_abs() {
    assert_eq!(-big("5"), big("-5"));
    assert_eq!(-big("-5"), big("5"));
    assert_eq!(-big("0"), big("0"));
    assert_eq!(big("-5").abs(), big("5"));
    assert!(!(-big("0")).is_negative());
}
