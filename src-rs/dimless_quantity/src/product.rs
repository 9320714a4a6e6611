use std::{fmt, ops};

use crate::{Dimension, Exponent, Quantity};

/// A product of quantities raised to rational exponents.
///
/// Factors keep the order in which they were first multiplied in, which is
/// also the order used for display. Multiplying in a quantity that is already
/// present adds to its exponent, and factors whose exponent becomes zero are
/// removed.
///
/// # Examples
///
/// ```rust
/// use dimless_quantity::{Dimension, Exponent, Product, Quantity};
///
/// let a = Quantity::new("a", Dimension::from_iter([("A", 2), ("B", -1)])).expect("valid");
/// let b = Quantity::new("b", Dimension::from_iter([("A", 1)])).expect("valid");
/// let c = Quantity::new("c", Dimension::from_iter([("A", -2), ("B", 2)])).expect("valid");
///
/// let group = Product::from_factors([
///     (a, Exponent::one()),
///     (b, Exponent::from(-1)),
///     (c, Exponent::new(1, 2)),
/// ]);
///
/// assert_eq!(group.to_string(), "a*c**(1/2)/b");
/// assert!(group.is_dimensionless());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    factors: Vec<(Quantity, Exponent)>,
}

impl Product {
    /// Creates the empty product, `1`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            factors: Vec::new(),
        }
    }

    /// Creates a product from `(quantity, exponent)` factors
    pub fn from_factors(factors: impl IntoIterator<Item = (Quantity, Exponent)>) -> Self {
        let mut product = Self::new();
        for (quantity, exponent) in factors {
            product.mul_factor(quantity, &exponent);
        }
        product
    }

    /// Multiplies the product by `quantity ** exponent`
    ///
    /// Quantities are identified by name.
    pub fn mul_factor(&mut self, quantity: Quantity, exponent: &Exponent) {
        if exponent.is_zero() {
            return;
        }

        let existing = self
            .factors
            .iter()
            .position(|(factor, _)| factor.name() == quantity.name());

        match existing {
            Some(index) => {
                self.factors[index].1 += exponent;
                if self.factors[index].1.is_zero() {
                    self.factors.remove(index);
                }
            }
            None => self.factors.push((quantity, exponent.clone())),
        }
    }

    /// Returns the factors of the product in order
    #[must_use]
    pub fn factors(&self) -> &[(Quantity, Exponent)] {
        &self.factors
    }

    /// Returns the quantities of the product in order
    pub fn quantities(&self) -> impl Iterator<Item = &Quantity> {
        self.factors.iter().map(|(quantity, _)| quantity)
    }

    /// Returns the exponent of the named quantity, zero if absent
    #[must_use]
    pub fn exponent(&self, name: &str) -> Exponent {
        self.factors
            .iter()
            .find(|(quantity, _)| quantity.name() == name)
            .map(|(_, exponent)| exponent.clone())
            .unwrap_or_default()
    }

    /// Returns whether the product has no factors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Computes the aggregate dimension of the product
    ///
    /// Each dimension exponent is the sum of exponent times quantity
    /// dimension over all factors.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.factors
            .iter()
            .fold(Dimension::dimensionless(), |acc, (quantity, exponent)| {
                &acc * &quantity.dimension().pow(exponent)
            })
    }

    /// Returns whether the aggregate dimension is zero in every dimension
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.dimension().is_dimensionless()
    }

    /// Raises the product to a power
    #[must_use]
    pub fn pow(&self, exponent: &Exponent) -> Self {
        Self::from_factors(
            self.factors
                .iter()
                .map(|(quantity, value)| (quantity.clone(), value * exponent)),
        )
    }
}

impl ops::Mul for Product {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        for (quantity, exponent) in rhs.factors {
            self.mul_factor(quantity, &exponent);
        }
        self
    }
}

impl ops::Div for Product {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self::Output {
        for (quantity, exponent) in rhs.factors {
            self.mul_factor(quantity, &-exponent);
        }
        self
    }
}

/// Writes `name`, `name**2` or `name**(1/2)` for a positive exponent
fn fmt_factor(f: &mut fmt::Formatter<'_>, quantity: &Quantity, exponent: &Exponent) -> fmt::Result {
    write!(f, "{quantity}")?;
    if exponent.is_one() {
        Ok(())
    } else if exponent.is_integer() {
        write!(f, "**{exponent}")
    } else {
        write!(f, "**({exponent})")
    }
}

fn fmt_factors<'a>(
    f: &mut fmt::Formatter<'_>,
    factors: impl Iterator<Item = (&'a Quantity, Exponent)>,
) -> fmt::Result {
    for (index, (quantity, exponent)) in factors.enumerate() {
        if index > 0 {
            write!(f, "*")?;
        }
        fmt_factor(f, quantity, &exponent)?;
    }
    Ok(())
}

impl fmt::Display for Product {
    /// Formats the product as `a*c**(1/2)/b`
    ///
    /// Factors with negative exponents form the denominator, which is
    /// parenthesized when it has more than one factor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = || {
            self.factors
                .iter()
                .filter(|(_, exponent)| !exponent.is_negative())
                .map(|(quantity, exponent)| (quantity, exponent.clone()))
        };
        let denominator = || {
            self.factors
                .iter()
                .filter(|(_, exponent)| exponent.is_negative())
                .map(|(quantity, exponent)| (quantity, exponent.abs()))
        };

        let numerator_len = numerator().count();
        let denominator_len = denominator().count();

        if numerator_len == 0 {
            write!(f, "1")?;
        } else {
            fmt_factors(f, numerator())?;
        }

        match denominator_len {
            0 => Ok(()),
            1 => {
                write!(f, "/")?;
                fmt_factors(f, denominator())
            }
            _ => {
                write!(f, "/(")?;
                fmt_factors(f, denominator())?;
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(name: &str, dimension: &[(&str, i32)]) -> Quantity {
        Quantity::new(name, dimension.iter().copied().collect()).expect("should be valid")
    }

    #[test]
    fn empty_product_is_one() {
        let product = Product::new();

        assert!(product.is_empty());
        assert!(product.is_dimensionless());
        assert_eq!(product.to_string(), "1");
    }

    #[test]
    fn repeated_factors_merge() {
        let b = quantity("b", &[("A", 1)]);

        let product = Product::from_factors([
            (b.clone(), Exponent::from(2)),
            (b, Exponent::from(-1)),
        ]);

        assert_eq!(product.factors().len(), 1);
        assert_eq!(product.exponent("b"), Exponent::one());
    }

    #[test]
    fn cancelling_factors_are_removed() {
        let b = quantity("b", &[("A", 1)]);

        let product = b.pow(2) / b.pow(2);

        assert!(product.is_empty());
    }

    #[test]
    fn zero_exponents_are_omitted() {
        let b = quantity("b", &[("A", 1)]);
        let c = quantity("c", &[("B", 1)]);

        let product = Product::from_factors([(b, Exponent::zero()), (c, Exponent::one())]);

        assert_eq!(product.to_string(), "c");
    }

    #[test]
    fn dimension_sums_weighted_exponents() {
        let velocity = quantity("v", &[("L", 1), ("T", -1)]);
        let time = quantity("t", &[("T", 1)]);

        let product = velocity.pow(2) * time.pow(1);

        assert_eq!(
            product.dimension(),
            Dimension::from_iter([("L", 2), ("T", -1)])
        );
    }

    #[test]
    fn display_with_compound_denominator() {
        let b = quantity("b", &[("A", 1)]);
        let c = quantity("c", &[("A", -2), ("B", 2)]);
        let d = quantity("d", &[("B", 2)]);

        let product = d.pow(1) * b.pow(-2) * c.pow(-1);

        assert_eq!(product.to_string(), "d/(b**2*c)");
        assert!(product.is_dimensionless());
    }

    #[test]
    fn display_with_empty_numerator() {
        let c = quantity("c", &[("A", 1)]);

        assert_eq!(c.pow(-5).to_string(), "1/c**5");
    }

    #[test]
    fn pow_scales_exponents() {
        let b = quantity("b", &[("A", 1)]);
        let c = quantity("c", &[("B", 1)]);

        let product = (b.pow(2) * c.pow(-1)).pow(&Exponent::new(1, 2));

        assert_eq!(product.to_string(), "b/c**(1/2)");
    }
}
