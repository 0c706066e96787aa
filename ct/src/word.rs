use core::ops::{BitAnd, BitOr, BitXor, Not};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

/// A masked boolean: either all-zero bits (`false`) or all-one bits (`true`).
///
/// Every logical combinator here is a bitwise operation so that no branch
/// is introduced by combining several secret conditions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SecretBool(u64);

impl SecretBool {
    /// The `false` mask (all bits zero).
    pub const FALSE: Self = Self(0);
    /// The `true` mask (all bits one).
    pub const TRUE: Self = Self(u64::MAX);

    /// Builds a mask from a `0`/`1` bit, in constant time.
    #[inline]
    pub const fn from_bit(bit: u64) -> Self {
        // Splat bit 0 across all 64 bits without branching: negate the
        // low bit so `0 -> 0x00.. ` and `1 -> 0xff..`.
        Self((bit & 1).wrapping_neg())
    }

    /// Returns the inner mask word (0 or `u64::MAX`).
    #[inline]
    pub const fn mask(self) -> u64 {
        self.0
    }

    /// Returns `true`/`false` — for use in non-secret-dependent control
    /// flow only (tests, assertions, registry code).
    #[inline]
    pub fn unwrap_vartime(self) -> bool {
        self.0 == u64::MAX
    }
}

impl Not for SecretBool {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl BitAnd for SecretBool {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for SecretBool {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for SecretBool {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl core::ops::BitAndAssign for SecretBool {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl core::ops::BitOrAssign for SecretBool {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<Choice> for SecretBool {
    #[inline]
    fn from(choice: Choice) -> Self {
        Self::from_bit(choice.unwrap_u8() as u64)
    }
}

impl From<SecretBool> for Choice {
    #[inline]
    fn from(b: SecretBool) -> Self {
        Choice::from((b.0 & 1) as u8)
    }
}

/// Generates a saturated secret-word type over the given unsigned primitive,
/// using `$wide` (double its bit width) as the carry-propagation
/// intermediate for `adc`/`sbb`/`mac` — the "double-width software
/// emulation" the big-integer layer above is built from.
macro_rules! define_secret_word {
    ($name:ident, $uint:ty, $wide:ty, $bits:expr, $bytes:expr) => {
        #[doc = concat!("A `", stringify!($bits), "`-bit machine word treated as secret: no operation here branches or indexes on its value.")]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name($uint);

        impl $name {
            /// Word width in bits.
            pub const BITS: u32 = $bits;
            /// The zero word.
            pub const ZERO: Self = Self(0);
            /// The one word.
            pub const ONE: Self = Self(1);
            /// The all-ones word.
            pub const MAX: Self = Self(<$uint>::MAX);

            /// Wraps a raw word as a secret word.
            #[inline]
            pub const fn new(v: $uint) -> Self {
                Self(v)
            }

            /// Unwraps the raw word. Use only where the value is no longer secret
            /// (serialization boundaries, registry constants).
            #[inline]
            pub const fn to_raw(self) -> $uint {
                self.0
            }

            /// `self == other`, constant time.
            #[inline]
            pub const fn ct_eq(self, other: Self) -> SecretBool {
                Self(self.0 ^ other.0).ct_is_zero()
            }

            /// `self == 0`, constant time: `x | (-x)` has its top bit set
            /// for every nonzero `x` and clear only for `x == 0`.
            #[inline]
            pub const fn ct_is_zero(self) -> SecretBool {
                let nz = self.0 | self.0.wrapping_neg();
                SecretBool::from_bit(1 ^ (nz >> (Self::BITS - 1) & 1) as u64)
            }

            /// `self != 0`, constant time.
            #[inline]
            pub const fn ct_is_nonzero(self) -> SecretBool {
                let nz = self.0 | self.0.wrapping_neg();
                SecretBool::from_bit((nz >> (Self::BITS - 1) & 1) as u64)
            }

            /// `self < other` (unsigned), constant time via widened
            /// subtraction: the borrow bit of `self - other` over a
            /// double-width intermediate is exactly the less-than predicate.
            #[inline]
            pub const fn ct_lt(self, other: Self) -> SecretBool {
                let diff = (self.0 as $wide).wrapping_sub(other.0 as $wide);
                let borrow = (diff >> (2 * Self::BITS - 1)) & 1;
                SecretBool::from_bit(borrow as u64)
            }

            /// `self <= other`, constant time.
            #[inline]
            pub const fn ct_le(self, other: Self) -> SecretBool {
                let lt = self.ct_lt(other);
                let eq = self.ct_eq(other);
                SecretBool(lt.0 | eq.0)
            }

            /// Constant-time select: returns `a` if `mask` is all-ones,
            /// `b` if `mask` is all-zero.
            #[inline]
            pub const fn ct_select(mask: SecretBool, a: Self, b: Self) -> Self {
                Self(b.0 ^ ((mask.mask() as $uint) & (a.0 ^ b.0)))
            }

            /// Overwrites `*self` with `src` iff `mask` is all-ones.
            #[inline]
            pub fn ct_copy(&mut self, mask: SecretBool, src: Self) {
                *self = Self::ct_select(mask, src, *self);
            }

            /// Constant-time conditional swap of `a` and `b`.
            #[inline]
            pub fn ct_swap(mask: SecretBool, a: &mut Self, b: &mut Self) {
                let t = Self::ct_select(mask, *b, *a);
                *b = Self::ct_select(mask, *a, *b);
                *a = t;
            }

            /// Add-with-carry: `self + other + carry_in`, returning `(sum, carry_out)`.
            /// `carry_in`/`carry_out` are `0` or `1` words.
            #[inline]
            pub const fn adc(self, other: Self, carry: Self) -> (Self, Self) {
                let ret = (self.0 as $wide) + (other.0 as $wide) + (carry.0 as $wide);
                (Self(ret as $uint), Self((ret >> Self::BITS) as $uint))
            }

            /// Sub-with-borrow: `self - other - borrow_in`, returning
            /// `(difference, borrow_out)`. `borrow_out` is `0` or `1`.
            #[inline]
            pub const fn sbb(self, other: Self, borrow: Self) -> (Self, Self) {
                let ret = (self.0 as $wide)
                    .wrapping_sub((other.0 as $wide) + (borrow.0 & 1) as $wide);
                let borrow_out = (ret >> (2 * Self::BITS - 1)) & 1;
                (Self(ret as $uint), Self(borrow_out as $uint))
            }

            /// Wrapping multiplication truncated to the low word — used to
            /// compute the Montgomery reduction factor `m`, where only
            /// `m mod 2^BITS` is needed.
            #[inline]
            pub const fn wrapping_mul(self, other: Self) -> Self {
                Self(self.0.wrapping_mul(other.0))
            }

            /// Multiply-accumulate-with-carry: `self + a*b + carry`, returning
            /// `(low, high)` such that `low + high*2^BITS == self + a*b + carry`.
            #[inline]
            pub const fn mac(self, a: Self, b: Self, carry: Self) -> (Self, Self) {
                let ret =
                    (self.0 as $wide) + (a.0 as $wide) * (b.0 as $wide) + (carry.0 as $wide);
                (Self(ret as $uint), Self((ret >> Self::BITS) as $uint))
            }

            /// `self >> 1`, shifting `bit_in` into the top bit.
            #[inline]
            pub const fn shr1(self, bit_in: Self) -> Self {
                Self((self.0 >> 1) | (bit_in.0 << (Self::BITS - 1)))
            }

            /// `self << 1`, returning `(result, bit_out)` where `bit_out`
            /// is the `0`/`1` bit shifted off the top.
            #[inline]
            pub const fn shl1(self) -> (Self, Self) {
                let bit_out = self.0 >> (Self::BITS - 1);
                (Self(self.0 << 1), Self(bit_out))
            }

            /// Whether the least-significant bit is set.
            #[inline]
            pub const fn is_odd(self) -> SecretBool {
                SecretBool::from_bit((self.0 & 1) as u64)
            }

            /// Big-endian byte decode.
            #[inline]
            pub fn from_be_bytes(bytes: [u8; $bytes]) -> Self {
                Self(<$uint>::from_be_bytes(bytes))
            }

            /// Little-endian byte decode.
            #[inline]
            pub fn from_le_bytes(bytes: [u8; $bytes]) -> Self {
                Self(<$uint>::from_le_bytes(bytes))
            }

            /// Big-endian byte encode.
            #[inline]
            pub fn to_be_bytes(self) -> [u8; $bytes] {
                self.0.to_be_bytes()
            }

            /// Little-endian byte encode.
            #[inline]
            pub fn to_le_bytes(self) -> [u8; $bytes] {
                self.0.to_le_bytes()
            }
        }

        impl BitXor for $name {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl BitAnd for $name {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl BitOr for $name {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl Not for $name {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl ConstantTimeEq for $name {
            #[inline]
            fn ct_eq(&self, other: &Self) -> Choice {
                Choice::from($name::ct_eq(*self, *other))
            }
        }

        impl ConstantTimeGreater for $name {
            #[inline]
            fn ct_gt(&self, other: &Self) -> Choice {
                Choice::from($name::ct_lt(*other, *self))
            }
        }

        impl ConstantTimeLess for $name {
            #[inline]
            fn ct_lt(&self, other: &Self) -> Choice {
                Choice::from($name::ct_lt(*self, *other))
            }
        }

        impl ConditionallySelectable for $name {
            #[inline]
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                $name::ct_select(SecretBool::from(choice), *b, *a)
            }
        }
    };
}

define_secret_word!(SecretWord32, u32, u64, 32, 4);
define_secret_word!(SecretWord64, u64, u128, 64, 8);

/// The native secret word type for this target: `u64` on 64-bit platforms,
/// `u32` on 32-bit ones. Curve/field code is generic over either via the
/// layers above, but most constants in this workspace are given in terms
/// of the 64-bit backend, which is the "portable" backend selected by
/// default (see the crate-level docs on backend selection).
#[cfg(target_pointer_width = "64")]
pub type SecretWord = SecretWord64;

/// The native secret word type for this target (32-bit platforms).
#[cfg(not(target_pointer_width = "64"))]
pub type SecretWord = SecretWord32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_and_lt() {
        let a = SecretWord64::new(5);
        let b = SecretWord64::new(9);
        assert!(a.ct_eq(a).unwrap_vartime());
        assert!(!a.ct_eq(b).unwrap_vartime());
        assert!(a.ct_lt(b).unwrap_vartime());
        assert!(!b.ct_lt(a).unwrap_vartime());
        assert!(a.ct_le(a).unwrap_vartime());
    }

    #[test]
    fn select_and_swap() {
        let a = SecretWord64::new(11);
        let b = SecretWord64::new(22);
        assert_eq!(SecretWord64::ct_select(SecretBool::TRUE, a, b), a);
        assert_eq!(SecretWord64::ct_select(SecretBool::FALSE, a, b), b);

        let (mut x, mut y) = (a, b);
        SecretWord64::ct_swap(SecretBool::TRUE, &mut x, &mut y);
        assert_eq!((x, y), (b, a));
    }

    #[test]
    fn carry_chain() {
        let (sum, carry) = SecretWord64::MAX.adc(SecretWord64::ONE, SecretWord64::ZERO);
        assert_eq!(sum, SecretWord64::ZERO);
        assert_eq!(carry, SecretWord64::ONE);

        let (diff, borrow) = SecretWord64::ZERO.sbb(SecretWord64::ONE, SecretWord64::ZERO);
        assert_eq!(diff, SecretWord64::MAX);
        assert_eq!(borrow, SecretWord64::ONE);
    }

    #[test]
    fn mac_widens() {
        let (lo, hi) = SecretWord64::ZERO.mac(SecretWord64::MAX, SecretWord64::MAX, SecretWord64::ZERO);
        // MAX*MAX == 2^128 - 2^65 + 1
        assert_eq!(lo, SecretWord64::ONE);
        assert_eq!(hi, SecretWord64::new(u64::MAX - 1));
    }
}
