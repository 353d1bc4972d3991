use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use bigdecimal::{BigDecimal, One, Zero};

use super::component::Component;
use crate::errors::{Result, VecCalcError};

/// Exact-decimal 3D vector
///
/// Components are arbitrary-precision decimals. Construction always parses
/// text into an exact value, so arithmetic and equality never pass through
/// a binary floating approximation - values round-trip through the text
/// store across sessions without drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    i: BigDecimal,
    j: BigDecimal,
    k: BigDecimal,
}

impl Vector {
    /// Create a vector from already-exact components
    pub fn new(i: BigDecimal, j: BigDecimal, k: BigDecimal) -> Self {
        Self { i, j, k }
    }

    /// Parse per-component text into an exact vector
    ///
    /// Each token is parsed independently.
    ///
    /// # Errors
    /// Returns `ParseError` naming the first token that is not a valid
    /// decimal literal.
    pub fn parse(i: &str, j: &str, k: &str) -> Result<Self> {
        Ok(Self::new(
            parse_component(i)?,
            parse_component(j)?,
            parse_component(k)?,
        ))
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::zero(), BigDecimal::zero())
    }

    /// The unit vector along the first component
    pub fn unit_i() -> Self {
        Self::new(BigDecimal::one(), BigDecimal::zero(), BigDecimal::zero())
    }

    /// The unit vector along the second component
    pub fn unit_j() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::one(), BigDecimal::zero())
    }

    /// The unit vector along the third component
    pub fn unit_k() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::zero(), BigDecimal::one())
    }

    /// Read a component by its resolved identifier
    pub fn component(&self, component: Component) -> &BigDecimal {
        match component {
            Component::First => &self.i,
            Component::Second => &self.j,
            Component::Third => &self.k,
        }
    }

    /// Replace a component by its resolved identifier
    pub fn set_component(&mut self, component: Component, value: BigDecimal) {
        match component {
            Component::First => self.i = value,
            Component::Second => self.j = value,
            Component::Third => self.k = value,
        }
    }

    /// Dot product of two vectors
    pub fn dot(&self, other: &Vector) -> BigDecimal {
        &self.i * &other.i + &self.j * &other.j + &self.k * &other.k
    }

    /// Euclidean length
    ///
    /// The square sum is never negative, so the root is always defined.
    pub fn magnitude(&self) -> BigDecimal {
        self.dot(self).sqrt().unwrap_or_else(BigDecimal::zero)
    }

    /// Canonical text encoding: components separated by single spaces with
    /// a trailing space, used verbatim in the persisted file
    pub fn to_storable(&self) -> String {
        self.to_string()
    }
}

fn parse_component(token: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(token).map_err(|_| VecCalcError::ParseError {
        token: token.to_string(),
    })
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.i, self.j, self.k)
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        Vector::new(
            &self.i + &other.i,
            &self.j + &other.j,
            &self.k + &other.k,
        )
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, other: &Vector) -> Vector {
        Vector::new(
            &self.i - &other.i,
            &self.j - &other.j,
            &self.k - &other.k,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_exact_components() {
        let v = Vector::parse("1", "2.5", "-3").unwrap();
        assert_eq!(v.component(Component::First).to_string(), "1");
        assert_eq!(v.component(Component::Second).to_string(), "2.5");
        assert_eq!(v.component(Component::Third).to_string(), "-3");
    }

    #[test]
    fn test_parse_rejects_bad_decimal() {
        let result = Vector::parse("1", "not-a-number", "3");
        match result {
            Err(VecCalcError::ParseError { token }) => assert_eq!(token, "not-a-number"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_add_is_exact() {
        // The classic binary-float trap: 0.1 + 0.2
        let a = Vector::parse("0.1", "0", "0").unwrap();
        let b = Vector::parse("0.2", "0", "0").unwrap();
        let sum = &a + &b;
        assert_eq!(sum, Vector::parse("0.3", "0", "0").unwrap());
    }

    #[test]
    fn test_sub_is_componentwise() {
        let a = Vector::parse("5", "7", "9").unwrap();
        let b = Vector::parse("1", "2", "3").unwrap();
        assert_eq!(&a - &b, Vector::parse("4", "5", "6").unwrap());
    }

    #[test]
    fn test_dot_product() {
        let a = Vector::parse("1", "2", "3").unwrap();
        let b = Vector::parse("4", "5", "6").unwrap();
        assert_eq!(a.dot(&b), BigDecimal::from(32));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector::parse("3", "4", "0").unwrap();
        assert_eq!(v.magnitude(), BigDecimal::from(5));
    }

    #[test]
    fn test_equality_is_numeric_not_textual() {
        let a = Vector::parse("1.0", "2", "3.000").unwrap();
        let b = Vector::parse("1.00", "2.0", "3").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_storable_has_trailing_space() {
        let v = Vector::parse("1", "2", "3").unwrap();
        assert_eq!(v.to_storable(), "1 2 3 ");
    }

    #[test]
    fn test_set_component_replaces_one_slot() {
        let mut v = Vector::zero();
        v.set_component(Component::Second, "7.5".parse().unwrap());
        assert_eq!(v, Vector::parse("0", "7.5", "0").unwrap());
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Vector::unit_i(), Vector::parse("1", "0", "0").unwrap());
        assert_eq!(Vector::unit_j(), Vector::parse("0", "1", "0").unwrap());
        assert_eq!(Vector::unit_k(), Vector::parse("0", "0", "1").unwrap());
    }

    proptest! {
        #[test]
        fn prop_storable_round_trips(
            i in "-?[0-9]{1,6}(\\.[0-9]{1,4})?",
            j in "-?[0-9]{1,6}(\\.[0-9]{1,4})?",
            k in "-?[0-9]{1,6}(\\.[0-9]{1,4})?",
        ) {
            let v = Vector::parse(&i, &j, &k).unwrap();
            let storable = v.to_storable();
            let tokens: Vec<&str> = storable.split_whitespace().collect();
            prop_assert_eq!(tokens.len(), 3);
            let reparsed = Vector::parse(tokens[0], tokens[1], tokens[2]).unwrap();
            prop_assert_eq!(reparsed, v);
        }
    }
}
