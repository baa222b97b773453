use std::fmt;

/// Arithmetic a value domain must supply for Cantor normal form encoding.
///
/// The domain is totally ordered and well-founded. Every operation is total:
/// division by zero yields zero and the remainder modulo zero is the dividend,
/// following the ordinal convention.
pub trait ValueArithmetic: Clone + Ord + fmt::Debug {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Returns `true` for the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// `self * rhs`.
    fn mul(&self, rhs: &Self) -> Self;

    /// `self ^ exponent`, with `0 ^ 0 = 1`.
    fn opow(&self, exponent: &Self) -> Self;

    /// `self + rhs`, or `None` if the sum does not fit the domain.
    fn checked_add(&self, rhs: &Self) -> Option<Self>;

    /// `self * rhs`, or `None` if the product does not fit the domain.
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;

    /// `self ^ exponent`, or `None` if the power does not fit the domain.
    fn checked_opow(&self, exponent: &Self) -> Option<Self>;

    /// Quotient of Euclidean division; `self / 0 = 0`.
    fn div(&self, divisor: &Self) -> Self;

    /// Remainder of Euclidean division; `self mod 0 = self`.
    fn rem(&self, divisor: &Self) -> Self;

    /// Greatest `e` with `base ^ e <= value`.
    ///
    /// Defined as zero when `value` is zero or `base <= 1`.
    fn log(base: &Self, value: &Self) -> Self;
}

macro_rules! primitive_arithmetic {
    ($($t:ty),* $(,)?) => {
        $(
            impl ValueArithmetic for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn add(&self, rhs: &Self) -> Self {
                    self + rhs
                }

                fn mul(&self, rhs: &Self) -> Self {
                    self * rhs
                }

                fn opow(&self, exponent: &Self) -> Self {
                    // Exponents past u32::MAX only stay representable for bases 0 and 1.
                    let exponent = u32::try_from(*exponent).unwrap_or(u32::MAX);
                    self.pow(exponent)
                }

                fn checked_add(&self, rhs: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *rhs)
                }

                fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                    <$t>::checked_mul(*self, *rhs)
                }

                fn checked_opow(&self, exponent: &Self) -> Option<Self> {
                    match u32::try_from(*exponent) {
                        Ok(exponent) => <$t>::checked_pow(*self, exponent),
                        Err(_) if *self <= 1 => Some(self.opow(exponent)),
                        Err(_) => None,
                    }
                }

                fn div(&self, divisor: &Self) -> Self {
                    self.checked_div(*divisor).unwrap_or(0)
                }

                fn rem(&self, divisor: &Self) -> Self {
                    self.checked_rem(*divisor).unwrap_or(*self)
                }

                fn log(base: &Self, value: &Self) -> Self {
                    if *value == 0 || *base <= 1 {
                        return 0;
                    }
                    value.ilog(*base) as $t
                }
            }
        )*
    };
}

primitive_arithmetic!(u8, u16, u32, u64, u128, usize);

/// Widest [`BigUint`](num_bigint::BigUint) result, in bits, that the checked
/// operations produce.
#[cfg(feature = "bigint")]
pub const MAX_BIGINT_BITS: u64 = 1 << 24;

#[cfg(feature = "bigint")]
mod bigint {
    use num_bigint::BigUint;
    use num_traits::{One, ToPrimitive, Zero};

    use super::{ValueArithmetic, MAX_BIGINT_BITS};

    fn within_limit(value: BigUint) -> Option<BigUint> {
        (value.bits() <= MAX_BIGINT_BITS).then_some(value)
    }

    impl ValueArithmetic for BigUint {
        fn zero() -> Self {
            Zero::zero()
        }

        fn one() -> Self {
            One::one()
        }

        fn is_zero(&self) -> bool {
            Zero::is_zero(self)
        }

        fn add(&self, rhs: &Self) -> Self {
            self + rhs
        }

        fn mul(&self, rhs: &Self) -> Self {
            self * rhs
        }

        fn opow(&self, exponent: &Self) -> Self {
            if Zero::is_zero(self) {
                return if Zero::is_zero(exponent) {
                    One::one()
                } else {
                    Zero::zero()
                };
            }
            if One::is_one(self) {
                return One::one();
            }
            // Square-and-multiply over the exponent bits, least significant first.
            let digits = exponent.to_u64_digits();
            let mut result: BigUint = One::one();
            let mut square = self.clone();
            let bits = exponent.bits();
            for i in 0..bits {
                let digit = digits[(i / 64) as usize];
                if (digit >> (i % 64)) & 1 == 1 {
                    result *= &square;
                }
                if i + 1 < bits {
                    square = &square * &square;
                }
            }
            result
        }

        fn checked_add(&self, rhs: &Self) -> Option<Self> {
            within_limit(self + rhs)
        }

        fn checked_mul(&self, rhs: &Self) -> Option<Self> {
            if Zero::is_zero(self) || Zero::is_zero(rhs) {
                return Some(Zero::zero());
            }
            // A product is at least `bits(a) + bits(b) - 1` bits wide.
            if self.bits() + rhs.bits() - 1 > MAX_BIGINT_BITS {
                return None;
            }
            within_limit(self * rhs)
        }

        fn checked_opow(&self, exponent: &Self) -> Option<Self> {
            if Zero::is_zero(self) || One::is_one(self) {
                return Some(self.opow(exponent));
            }
            // base^e is at least `e * (bits(base) - 1) + 1` bits wide.
            let exponent_bits = exponent.to_u64()?;
            let lower = exponent_bits.checked_mul(self.bits() - 1)?.checked_add(1)?;
            if lower > MAX_BIGINT_BITS {
                return None;
            }
            within_limit(self.opow(exponent))
        }

        fn div(&self, divisor: &Self) -> Self {
            if Zero::is_zero(divisor) {
                return Zero::zero();
            }
            self / divisor
        }

        fn rem(&self, divisor: &Self) -> Self {
            if Zero::is_zero(divisor) {
                return self.clone();
            }
            self % divisor
        }

        fn log(base: &Self, value: &Self) -> Self {
            if Zero::is_zero(value) || *base <= <BigUint as One>::one() {
                return Zero::zero();
            }
            // powers[i] = base^(2^i), kept while it still fits under value.
            let mut powers = vec![base.clone()];
            while let Some(last) = powers.last() {
                if last > value {
                    powers.pop();
                    break;
                }
                let square = last * last;
                powers.push(square);
            }
            // Binary lifting: take each power, largest first, if it still fits.
            let mut exponent = 0u64;
            let mut acc: BigUint = One::one();
            for (i, power) in powers.iter().enumerate().rev() {
                let candidate = &acc * power;
                if &candidate <= value {
                    acc = candidate;
                    exponent += 1 << i;
                }
            }
            BigUint::from(exponent)
        }
    }
}
