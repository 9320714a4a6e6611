/// Configuration for the declaration parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether exponents may be written as decimals (`^0.5`)
    ///
    /// Fractions (`^(1/2)`) and integers are always accepted.
    pub allow_decimal_exponents: bool,
}

impl Config {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_decimal_exponents: true,
        }
    }

    /// Returns a configuration that rejects decimal exponents.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_decimal_exponents: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
