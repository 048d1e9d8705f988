//! Exact fractions over arbitrary-precision integers
//!
//! Every [`Rational`] is kept in lowest terms with a strictly positive denominator, so equality,
//! hashing, ordering and display can all work on the stored pair directly.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use lazy_static::lazy_static;
use malachite::{Integer, Natural};
use malachite::base::num::arithmetic::traits::{Gcd, UnsignedAbs};
use malachite::base::num::basic::traits::{One, Zero};
use crate::errors::CalcErr;

lazy_static! {
	pub static ref ZERO: Rational = Rational::from(Integer::ZERO);
	pub static ref ONE: Rational = Rational::from(Integer::ONE);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
	n: Integer,
	///always > 0
	d: Integer
}

impl Rational {
	/// Builds `n/d` in lowest terms, sign moved onto the numerator.
	///
	/// Any signs are accepted, a zero denominator is rejected before anything else happens.
	pub fn new(n: Integer, d: Integer) -> Result<Self, CalcErr> {
		if d == 0 {
			return Err(CalcErr::DivByZero);
		}
		Ok(Self::reduce(n, d))
	}

	///`d` must be nonzero
	fn reduce(n: Integer, d: Integer) -> Self {
		let (mut n, mut d) = if d < 0 {(-n, -d)} else {(n, d)};
		let g: Natural = (&n).unsigned_abs().gcd((&d).unsigned_abs());	//gcd(0, d) == d, so zero becomes 0/1
		if g != 1u8 {
			let g = Integer::from(g);
			n /= &g;
			d /= &g;
		}
		Self {n, d}
	}

	///shorthand for machine-sized pairs
	pub fn from_pair(n: i64, d: i64) -> Result<Self, CalcErr> {
		Self::new(Integer::from(n), Integer::from(d))
	}

	#[inline(always)] pub fn numer(&self) -> &Integer {&self.n}

	#[inline(always)] pub fn denom(&self) -> &Integer {&self.d}

	#[inline(always)] pub fn is_zero(&self) -> bool {self.n == 0}

	#[inline(always)] pub fn is_integer(&self) -> bool {self.d == 1u8}

	/// Quotient `self / rhs`, fails if `rhs` is zero.
	pub fn checked_div(&self, rhs: &Self) -> Result<Self, CalcErr> {
		Self::new(&self.n * &rhs.d, &self.d * &rhs.n)
	}

	/// Interprets the value as a stack position or count.
	pub fn to_index(&self) -> Result<usize, CalcErr> {
		if !self.is_integer() || self.n < 0 {
			return Err(CalcErr::BadCount(self.to_string()));
		}
		usize::try_from(&self.n).map_err(|_| CalcErr::BadCount(self.to_string()))
	}
}

///integral value, already reduced
impl From<Integer> for Rational {
	fn from(n: Integer) -> Self {
		Self {n, d: Integer::ONE}
	}
}

impl From<i64> for Rational {
	fn from(n: i64) -> Self {
		Self::from(Integer::from(n))
	}
}

impl From<usize> for Rational {
	fn from(n: usize) -> Self {
		Self::from(Integer::from(n))
	}
}

///`-?[0-9]+` only, no `+` sign
fn parse_int(s: &str, whole: &str) -> Result<Integer, CalcErr> {
	let s = s.trim();
	let digits = s.strip_prefix('-').unwrap_or(s);
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return Err(CalcErr::Format(whole.into()));
	}
	Integer::from_str(s).map_err(|_| CalcErr::Format(whole.into()))
}

/// Accepts `N` or `N/D` where each part is an optionally negative run of decimal digits,
/// whitespace around either part is ignored.
impl FromStr for Rational {
	type Err = CalcErr;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.split_once('/') {
			None => Ok(Self::from(parse_int(s, s)?)),
			Some((ns, ds)) => Self::new(parse_int(ns, s)?, parse_int(ds, s)?)
		}
	}
}

impl Display for Rational {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_integer() {
			write!(f, "{}", self.n)
		}
		else {
			write!(f, "{}/{}", self.n, self.d)
		}
	}
}

impl Ord for Rational {
	///cross-multiplication, valid because both denominators are positive
	fn cmp(&self, other: &Self) -> Ordering {
		(&self.n * &other.d).cmp(&(&other.n * &self.d))
	}
}
impl PartialOrd for Rational {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Neg for Rational {
	type Output = Rational;
	fn neg(self) -> Rational {
		Self {n: -self.n, d: self.d}
	}
}
impl Neg for &Rational {
	type Output = Rational;
	fn neg(self) -> Rational {
		Rational {n: -&self.n, d: self.d.clone()}
	}
}

/// Infallible operator over a common denominator, for owned and borrowed operands
macro_rules! binop {
	($tr:ident, $name:ident, $a:ident, $b:ident, $n:expr, $d:expr) => {
		impl $tr<&Rational> for &Rational {
			type Output = Rational;
			fn $name(self, rhs: &Rational) -> Rational {
				let ($a, $b) = (self, rhs);
				Rational::reduce($n, $d)	//product of positive denominators
			}
		}
		impl $tr for Rational {
			type Output = Rational;
			#[inline(always)] fn $name(self, rhs: Rational) -> Rational {
				(&self).$name(&rhs)
			}
		}
	}
}

binop!(Add, add, a, b, &a.n * &b.d + &b.n * &a.d, &a.d * &b.d);
binop!(Sub, sub, a, b, &a.n * &b.d - &b.n * &a.d, &a.d * &b.d);
binop!(Mul, mul, a, b, &a.n * &b.n, &a.d * &b.d);

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn r(n: i64, d: i64) -> Rational {
		Rational::from_pair(n, d).unwrap()
	}

	#[test]
	fn reduces_and_normalizes_sign() {
		let x = r(2, 4);
		assert_eq!((x.numer(), x.denom()), (&Integer::from(1), &Integer::from(2)));
		let y = r(3, -6);
		assert_eq!((y.numer(), y.denom()), (&Integer::from(-1), &Integer::from(2)));
		let z = r(-4, -8);
		assert_eq!(z, r(1, 2));
		assert_eq!(r(0, -5), *ZERO);
		assert_eq!(r(0, -5).denom(), &Integer::from(1));
		assert_eq!(r(-7, -7), *ONE);
	}

	#[test]
	fn zero_denominator() {
		assert_eq!(Rational::from_pair(1, 0), Err(CalcErr::DivByZero));
		assert_eq!(Rational::from_pair(0, 0), Err(CalcErr::DivByZero));
	}

	#[test]
	fn arithmetic() {
		assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
		assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
		assert_eq!(r(1, 3) - r(1, 2), r(-1, 6));
		assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
		assert_eq!(r(2, 3).checked_div(&r(4, 9)), Ok(r(3, 2)));
		assert_eq!(r(1, 2).checked_div(&r(-1, 4)), Ok(r(-2, 1)));
		assert_eq!(-r(3, 7), r(-3, 7));
	}

	#[test]
	fn divide_by_zero() {
		assert_eq!(r(5, 1).checked_div(&ZERO), Err(CalcErr::DivByZero));
		assert_eq!(ZERO.checked_div(&ZERO), Err(CalcErr::DivByZero));
	}

	#[test]
	fn display() {
		assert_eq!(r(2, 4).to_string(), "1/2");
		assert_eq!(r(3, 1).to_string(), "3");
		assert_eq!(r(6, -4).to_string(), "-3/2");
		assert_eq!(ZERO.to_string(), "0");
	}

	#[test]
	fn parse() {
		assert_eq!("42".parse::<Rational>(), Ok(r(42, 1)));
		assert_eq!("-6/8".parse::<Rational>(), Ok(r(-3, 4)));
		assert_eq!(" 1 / -2 ".parse::<Rational>(), Ok(r(-1, 2)));
		assert_eq!("3/0".parse::<Rational>(), Err(CalcErr::DivByZero));
		assert_eq!("1.5".parse::<Rational>(), Err(CalcErr::Format("1.5".into())));
		assert_eq!("x/2".parse::<Rational>(), Err(CalcErr::Format("x/2".into())));
		assert_eq!("1/2/3".parse::<Rational>(), Err(CalcErr::Format("1/2/3".into())));
		assert!("".parse::<Rational>().is_err());
		assert_eq!("+3".parse::<Rational>(), Err(CalcErr::Format("+3".into())));
		assert_eq!("1/+2".parse::<Rational>(), Err(CalcErr::Format("1/+2".into())));
		assert_eq!("-".parse::<Rational>(), Err(CalcErr::Format("-".into())));
		assert_eq!("--4".parse::<Rational>(), Err(CalcErr::Format("--4".into())));
		assert_eq!("- 4".parse::<Rational>(), Err(CalcErr::Format("- 4".into())));
	}

	#[test]
	fn huge_values_stay_exact() {
		let big: Rational = "123456789012345678901234567890/987654321098765432109876543210".parse().unwrap();
		assert_eq!(big.to_string(), "13717421/109739369");
		let sq = &big * &big;
		assert_eq!(sq.checked_div(&big), Ok(big.clone()));
		assert_eq!(&sq - &sq, *ZERO);
	}

	#[test]
	fn ordering() {
		assert!(r(1, 3) < r(1, 2));
		assert!(r(-1, 2) < r(-1, 3));
		assert!(r(7, 1) > r(13, 2));
		assert_eq!(r(2, 6).cmp(&r(1, 3)), Ordering::Equal);
	}

	#[test]
	fn index_conversion() {
		assert_eq!(r(3, 1).to_index(), Ok(3));
		assert_eq!(ZERO.to_index(), Ok(0));
		assert_eq!(r(-1, 1).to_index(), Err(CalcErr::BadCount("-1".into())));
		assert_eq!(r(1, 2).to_index(), Err(CalcErr::BadCount("1/2".into())));
	}

	proptest! {
		#[test]
		fn construction_invariants(n in any::<i64>(), d in any::<i64>().prop_filter("nonzero", |d| *d != 0)) {
			let x = r(n, d);
			prop_assert!(*x.denom() > 0);
			let g: Natural = x.numer().unsigned_abs().gcd(x.denom().unsigned_abs());
			prop_assert!(g == 1u8);
			//same ratio: n * d' == n' * d
			prop_assert_eq!(Integer::from(n) * x.denom(), x.numer() * Integer::from(d));
		}

		#[test]
		fn display_round_trip(n in any::<i64>(), d in 1i64..=i64::MAX) {
			let x = r(n, d);
			prop_assert_eq!(x.to_string().parse::<Rational>(), Ok(x));
		}

		#[test]
		fn order_agrees_with_difference(a in any::<i32>(), b in 1i32.., c in any::<i32>(), e in 1i32..) {
			let (x, y) = (r(a.into(), b.into()), r(c.into(), e.into()));
			let diff = &x - &y;
			prop_assert_eq!(x.cmp(&y), diff.cmp(&ZERO));
			prop_assert_eq!(x == y, diff.is_zero());
		}
	}
}
