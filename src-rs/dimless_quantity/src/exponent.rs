use std::{fmt, ops, str::FromStr};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// An exact rational exponent.
///
/// Exponents appear both in the dimensions of quantities (`length^2`) and in
/// the products forming nondimensional groups (`L^(-1/2)`).
///
/// # Examples
///
/// ```rust
/// use dimless_quantity::Exponent;
///
/// let half = Exponent::new(1, 2);
/// assert_eq!(half.to_string(), "1/2");
/// assert_eq!((half.clone() + half).to_string(), "1");
/// assert_eq!("-0.25".parse::<Exponent>(), Ok(Exponent::new(-1, 4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Exponent(BigRational);

impl Exponent {
    /// Creates the exponent `numer / denom`, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero. Use [`Exponent::checked_new`] for a
    /// fallible version.
    #[must_use]
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// Creates the exponent `numer / denom`, or `None` if `denom` is zero.
    #[must_use]
    pub fn checked_new(numer: i64, denom: i64) -> Option<Self> {
        (denom != 0).then(|| Self::new(numer, denom))
    }

    /// The exponent `0`
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// The exponent `1`
    #[must_use]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Returns whether the exponent is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns whether the exponent is one
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Returns whether the exponent is strictly negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns whether the exponent is a whole number
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns the absolute value of the exponent
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the reduced numerator
    #[must_use]
    pub const fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Returns the reduced, always positive, denominator
    #[must_use]
    pub const fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns the underlying rational
    #[must_use]
    pub const fn as_rational(&self) -> &BigRational {
        &self.0
    }
}

impl Default for Exponent {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigRational> for Exponent {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<Exponent> for BigRational {
    fn from(value: Exponent) -> Self {
        value.0
    }
}

impl From<i32> for Exponent {
    fn from(value: i32) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }
}

impl From<i64> for Exponent {
    fn from(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }
}

impl From<&Exponent> for Exponent {
    fn from(value: &Exponent) -> Self {
        value.clone()
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

/// Error returned when parsing an [`Exponent`] from text fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExponentError {
    input: String,
}

impl ParseExponentError {
    /// Returns the text that failed to parse
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseExponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid exponent `{}`", self.input)
    }
}

impl std::error::Error for ParseExponentError {}

impl FromStr for Exponent {
    type Err = ParseExponentError;

    /// Parses integers (`-2`), fractions (`1/2`) and decimals (`0.25`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseExponentError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some((numer, denom)) = trimmed.split_once('/') {
            let numer = parse_integer(numer.trim()).ok_or_else(error)?;
            let denom = parse_integer(denom.trim()).ok_or_else(error)?;
            if denom.is_zero() {
                return Err(error());
            }
            return Ok(Self(BigRational::new(numer, denom)));
        }

        if let Some((whole, fraction)) = trimmed.split_once('.') {
            let is_negative = whole.starts_with('-');
            let whole_digits = whole.trim_start_matches(['+', '-']);
            let sign_len = whole.len() - whole_digits.len();
            let valid = sign_len <= 1
                && !(whole_digits.is_empty() && fraction.is_empty())
                && whole_digits.chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c.is_ascii_digit());
            if !valid {
                return Err(error());
            }

            let digits = format!("{whole_digits}{fraction}");
            let magnitude = BigInt::from_str(&digits).map_err(|_| error())?;
            let scale = num_traits::pow(BigInt::from(10), fraction.len());
            let value = BigRational::new(magnitude, scale);
            return Ok(Self(if is_negative { -value } else { value }));
        }

        parse_integer(trimmed)
            .map(|value| Self(BigRational::from_integer(value)))
            .ok_or_else(error)
    }
}

fn parse_integer(s: &str) -> Option<BigInt> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    BigInt::from_str(s.strip_prefix('+').unwrap_or(s)).ok()
}

impl ops::Neg for Exponent {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl ops::Neg for &Exponent {
    type Output = Exponent;

    fn neg(self) -> Self::Output {
        Exponent(-&self.0)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl ops::$trait for Exponent {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl ops::$trait<&Exponent> for &Exponent {
            type Output = Exponent;

            fn $method(self, rhs: &Exponent) -> Self::Output {
                Exponent(ops::$trait::$method(&self.0, &rhs.0))
            }
        }

        impl ops::$assign_trait<&Exponent> for Exponent {
            fn $assign_method(&mut self, rhs: &Exponent) {
                ops::$assign_trait::$assign_method(&mut self.0, &rhs.0);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);

impl ops::Div for Exponent {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Exponent {
    /// Generates small exponents such as `-3`, `1/2` or `5/4`
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let numer = u.int_in_range(-6..=6)?;
        let denom = u.int_in_range(1..=4)?;
        Ok(Self::new(numer, denom))
    }
}
