//! Operand stack addressed by position, 0 is the top
//!
//! The shuffling commands never fail on a short stack: they pad the bottom with zeros until the
//! addressed position exists, then proceed. Only direct access ([`Stack::get`]) and removal
//! ([`Stack::pop`], [`Stack::drop`]) report a missing element. Counted shuffles refuse positions
//! past [`MAX_DEPTH`] without touching the stack.

use std::collections::VecDeque;
use log::trace;
use crate::errors::CalcErr;
use crate::rational::{Rational, ZERO};

/// Deepest stack a counted command may address or build
pub const MAX_DEPTH: usize = 1 << 20;

///target size for a count, `None` when it overflowed
fn depth(target: Option<usize>, count: usize) -> Result<usize, CalcErr> {
	match target {
		Some(t) if t <= MAX_DEPTH => Ok(t),
		_ => Err(CalcErr::BadCount(count.to_string()))
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack(VecDeque<Rational>);

impl Stack {
	pub fn new() -> Self {
		Self::default()
	}

	#[inline(always)] pub fn size(&self) -> usize {self.0.len()}

	#[inline(always)] pub fn is_empty(&self) -> bool {self.0.is_empty()}

	#[inline(always)] pub fn push(&mut self, r: Rational) {
		self.0.push_front(r);
	}

	pub fn pop(&mut self) -> Result<Rational, CalcErr> {
		self.0.pop_front().ok_or(CalcErr::EmptyStack(1, 0))
	}

	pub fn get(&self, pos: usize) -> Result<&Rational, CalcErr> {
		self.0.get(pos).ok_or(CalcErr::Index(pos))
	}

	/// Errors unless at least `n` values are present, for commands that consume operands
	pub fn require(&self, n: usize) -> Result<(), CalcErr> {
		if self.size() < n {Err(CalcErr::EmptyStack(n, self.size()))} else {Ok(())}
	}

	///pad the bottom with zeros up to `n` values
	fn extend(&mut self, n: usize) {
		if n > self.size() {
			trace!("extending stack from {} to {n}", self.size());
			self.0.resize(n, ZERO.clone());
		}
	}

	/// Copies the top, no effect on an empty stack.
	pub fn dup(&mut self) {
		if let Some(r) = self.0.front() {
			self.0.push_front(r.clone());
		}
	}

	/// Copies the top `n` values as a block, keeping their order.
	///
	/// `10 11 12 13 14` with `n = 3` becomes `10 11 12 10 11 12 13 14`.
	pub fn dupn(&mut self, n: usize) -> Result<(), CalcErr> {
		self.extend(depth(Some(n), n)?);
		for _ in 0..n {
			let r = self.0[n - 1].clone();	//each push moves the next source value into n-1
			self.0.push_front(r);
		}
		Ok(())
	}

	/// Copies position `n` onto the top.
	///
	/// `10 11 12 13 14` with `n = 3` becomes `13 10 11 12 13 14`.
	pub fn pick(&mut self, n: usize) -> Result<(), CalcErr> {
		self.extend(depth(n.checked_add(1), n)?);
		let r = self.0[n].clone();
		self.0.push_front(r);
		Ok(())
	}

	/// Moves position `dist` to the top, the values above it sink by one.
	///
	/// `10 11 12 13 14` with `dist = 3` becomes `13 10 11 12 14`.
	pub fn roll_up(&mut self, dist: usize) -> Result<(), CalcErr> {
		self.extend(depth(dist.checked_add(1), dist)?);
		if let Some(r) = self.0.remove(dist) {
			self.0.push_front(r);
		}
		Ok(())
	}

	/// Moves the top to position `dist`, the values above it rise by one.
	///
	/// `10 11 12 13 14` with `dist = 3` becomes `11 12 13 10 14`.
	pub fn roll_down(&mut self, dist: usize) -> Result<(), CalcErr> {
		self.extend(depth(dist.checked_add(1), dist)?);
		if let Some(r) = self.0.pop_front() {
			self.0.insert(dist, r);
		}
		Ok(())
	}

	pub fn drop(&mut self) -> Result<(), CalcErr> {
		self.pop().map(|_| ())
	}

	///exchange 0 and 1
	pub fn swap(&mut self) {
		self.extend(2);
		self.0.swap(0, 1);
	}

	///exchange 0 and 2
	pub fn rotate(&mut self) {
		self.extend(3);
		self.0.swap(0, 2);
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}

	/// `(level, value)` from the bottom up to the top
	pub fn levels(&self) -> impl Iterator<Item = (usize, &Rational)> {
		self.0.iter().enumerate().rev()
	}

	/// One `"<level>: <value>"` line per value, bottom first.
	pub fn render(&self) -> String {
		let mut res = String::new();
		for (lvl, r) in self.levels() {
			res += &format!("{lvl:2}: {r}\n");
		}
		res
	}
}

impl FromIterator<Rational> for Stack {
	///values given top first
	fn from_iter<T: IntoIterator<Item = Rational>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}
