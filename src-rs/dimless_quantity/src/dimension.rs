use std::{fmt, ops};

use indexmap::IndexMap;

use crate::Exponent;

/// A sparse map of dimension names and their exponents.
///
/// Dimension names are open-ended (`mass`, `L`, `currency`, ...). A name that
/// is absent has exponent zero, and zero exponents are never stored, so two
/// dimensions are equal exactly when every name has the same exponent.
///
/// For example, an acceleration is
/// `Dimension::from_iter([("length", 1), ("time", -2)])`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimension(IndexMap<String, Exponent>);

impl Dimension {
    /// Creates the dimension of a dimensionless quantity.
    #[must_use]
    pub fn dimensionless() -> Self {
        Self(IndexMap::new())
    }

    /// Checks if all exponents are zero.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of the given dimension, zero if absent.
    #[must_use]
    pub fn exponent(&self, name: &str) -> Exponent {
        self.0.get(name).cloned().unwrap_or_default()
    }

    /// Returns whether the given dimension has a nonzero exponent.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the names of the dimensions with nonzero exponents, in
    /// insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the dimensions and their exponents, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Exponent)> {
        self.0.iter().map(|(name, exponent)| (name.as_str(), exponent))
    }

    /// Returns the number of dimensions with nonzero exponents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no dimension has a nonzero exponent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds `exponent` to the exponent of `name`, removing the entry if the
    /// result is zero.
    pub fn add_exponent(&mut self, name: &str, exponent: &Exponent) {
        if exponent.is_zero() {
            return;
        }

        let sum = match self.0.get(name) {
            Some(existing) => existing + exponent,
            None => exponent.clone(),
        };

        if sum.is_zero() {
            self.0.shift_remove(name);
        } else {
            self.0.insert(name.to_string(), sum);
        }
    }

    /// Raises the dimension to the power of the given exponent.
    #[must_use]
    pub fn pow(&self, exponent: &Exponent) -> Self {
        if exponent.is_zero() {
            return Self::dimensionless();
        }

        Self(
            self.0
                .iter()
                .map(|(name, value)| (name.clone(), value * exponent))
                .collect(),
        )
    }
}

impl<S, E> FromIterator<(S, E)> for Dimension
where
    S: AsRef<str>,
    E: Into<Exponent>,
{
    /// Collects `(name, exponent)` pairs, summing repeated names and
    /// dropping zero exponents.
    fn from_iter<I: IntoIterator<Item = (S, E)>>(iter: I) -> Self {
        let mut dimension = Self::dimensionless();
        for (name, exponent) in iter {
            dimension.add_exponent(name.as_ref(), &exponent.into());
        }
        dimension
    }
}

impl ops::Mul<&Dimension> for &Dimension {
    type Output = Dimension;

    /// Multiplies two dimensions by adding their exponents.
    ///
    /// For example, `(length/time) * (time) = (length)`
    fn mul(self, rhs: &Dimension) -> Self::Output {
        let mut result = self.clone();
        for (name, exponent) in &rhs.0 {
            result.add_exponent(name, exponent);
        }
        result
    }
}

impl ops::Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl ops::Div<&Dimension> for &Dimension {
    type Output = Dimension;

    /// Divides two dimensions by subtracting their exponents.
    fn div(self, rhs: &Dimension) -> Self::Output {
        let mut result = self.clone();
        for (name, exponent) in &rhs.0 {
            result.add_exponent(name, &-exponent);
        }
        result
    }
}

impl ops::Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl fmt::Display for Dimension {
    /// Formats the dimension as `length*time**(-2)`, or `1` if dimensionless
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        for (index, (name, exponent)) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "*")?;
            }
            write!(f, "{name}")?;
            if exponent.is_one() {
                continue;
            }
            if exponent.is_integer() && !exponent.is_negative() {
                write!(f, "**{exponent}")?;
            } else {
                write!(f, "**({exponent})")?;
            }
        }

        Ok(())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Dimension {
    /// Generates dimensions over the names `M`, `L`, `T` and `K`
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use arbitrary::Arbitrary as _;

        const NAMES: [&str; 4] = ["M", "L", "T", "K"];

        let mut dimension = Self::dimensionless();
        for name in NAMES {
            if u.arbitrary()? {
                dimension.add_exponent(name, &Exponent::arbitrary(u)?);
            }
        }
        Ok(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acceleration() -> Dimension {
        Dimension::from_iter([("length", 1), ("time", -2)])
    }

    #[test]
    fn from_iter_drops_zero_exponents() {
        let dimension = Dimension::from_iter([("length", 1), ("mass", 0)]);

        assert_eq!(dimension.len(), 1);
        assert!(!dimension.contains("mass"));
        assert_eq!(dimension.exponent("mass"), Exponent::zero());
    }

    #[test]
    fn from_iter_sums_repeated_names() {
        let dimension = Dimension::from_iter([("length", 1), ("time", -1), ("length", -1)]);

        assert_eq!(dimension, Dimension::from_iter([("time", -1)]));
    }

    #[test]
    fn equality_ignores_order() {
        let forward = Dimension::from_iter([("length", 1), ("time", -2)]);
        let backward = Dimension::from_iter([("time", -2), ("length", 1)]);

        assert_eq!(forward, backward);
    }

    #[test]
    fn mul_adds_exponents() {
        let time_squared = Dimension::from_iter([("time", 2)]);

        let length = &acceleration() * &time_squared;

        assert_eq!(length, Dimension::from_iter([("length", 1)]));
        assert_eq!(length.names().collect::<Vec<_>>(), vec!["length"]);
    }

    #[test]
    fn div_subtracts_exponents() {
        let result = acceleration() / acceleration();

        assert!(result.is_dimensionless());
    }

    #[test]
    fn pow_scales_exponents() {
        let result = acceleration().pow(&Exponent::new(1, 2));

        assert_eq!(result.exponent("length"), Exponent::new(1, 2));
        assert_eq!(result.exponent("time"), Exponent::from(-1));
        assert!(acceleration().pow(&Exponent::zero()).is_dimensionless());
    }

    #[test]
    fn display() {
        assert_eq!(acceleration().to_string(), "length*time**(-2)");
        assert_eq!(Dimension::dimensionless().to_string(), "1");
        assert_eq!(
            Dimension::from_iter([("L", Exponent::new(3, 2)), ("M", Exponent::from(2))])
                .to_string(),
            "L**(3/2)*M**2"
        );
    }
}
