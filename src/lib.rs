//! Core parsing and primary API
//!
//! A line of input is split into words. Command words act on the [`State`], every other word must
//! be a number literal (`N` or `N/D`) and gets pushed.

pub mod rational;

pub mod stack;

pub mod regs;

pub mod cmds;

pub mod errors;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use crate::errors::CalcErr;
use crate::regs::{MemStore, Storage};
use crate::stack::Stack;

lazy_static! {
	static ref RE_NUM: Regex = Regex::new(r"^-?[0-9]+(\s*/\s*-?[0-9]+)?$").unwrap();
}

/// Everything one session owns, never shared between sessions
pub struct State {
	///operand stack
	pub stk: Stack,
	///register backend
	pub regs: Box<dyn Storage>
}
impl Default for State {
	///empty stack, registers in memory
	fn default() -> Self {
		Self::with_regs(Box::new(MemStore::new()))
	}
}
impl State {
	pub fn with_regs(regs: Box<dyn Storage>) -> Self {
		Self {stk: Stack::new(), regs}
	}
}

/// Executes one line of words, left to right.
///
/// The first failing word stops the line. It leaves no trace on the stack, words before it keep
/// their effects and words after it are not executed.
pub fn exec(st: &mut State, line: &str) -> Result<(), CalcErr> {
	for word in line.split_whitespace() {
		debug!("word {word:?}, depth {}", st.stk.size());
		if let Some(cmd) = cmds::CMDS.get(word) {
			cmd(st)?;
		}
		else if RE_NUM.is_match(word) {
			st.stk.push(word.parse()?);
		}
		else {
			return Err(CalcErr::Format(word.into()));
		}
	}
	Ok(())
}
