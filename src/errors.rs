//! Error taxonomy shared by every layer of the calculator

use std::fmt::{Display, Formatter};
use malachite::Integer;
use crate::stack::MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcErr {
	///fraction with zero denominator
	DivByZero,
	///token that is neither a command nor a number
	Format(String),
	///operands needed, operands present
	EmptyStack(usize, usize),
	///direct access past the end
	Index(usize),
	///stack count that isn't a usable index, or reaches past the depth limit
	BadCount(String),
	NegativeRegister(Integer),
	Storage(String),
}
impl Display for CalcErr {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::DivByZero => {write!(f, "division by zero")}
			Self::Format(s) => {write!(f, "invalid number format: \"{s}\"")}
			Self::EmptyStack(n, h) => {
				write!(f, "stack too small: {n} value{} needed, {h} present", if *n == 1 {""} else {"s"})
			}
			Self::Index(i) => {write!(f, "stack level out of range: {i}")}
			Self::BadCount(s) => {write!(f, "count must be a non-negative integer addressing at most {MAX_DEPTH} levels, got {s}")}
			Self::NegativeRegister(r) => {write!(f, "negative register number: {r}")}
			Self::Storage(s) => {write!(f, "register storage failed: {s}")}
		}
	}
}
impl std::error::Error for CalcErr {}

impl From<std::io::Error> for CalcErr {
	fn from(e: std::io::Error) -> Self {
		Self::Storage(e.to_string())
	}
}
