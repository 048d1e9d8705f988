//! Command words, each one a function of the whole session state
//!
//! Every command checks everything it can before touching the stack, so a failing word leaves the
//! stack exactly as it found it.

use malachite::Integer;
use crate::errors::CalcErr;
use crate::rational::Rational;
use crate::stack::Stack;
use crate::State;

///Command acting on the session
pub(crate) type Cmd = fn(&mut State) -> Result<(), CalcErr>;
macro_rules! cmd {
	($name:ident, $s:ident, $block:block) => {
		pub(crate) fn $name($s: &mut State) -> Result<(), CalcErr> $block
	}
}

/// Word lookup, anything missing here must be a number
pub(crate) static CMDS: phf::Map<&'static str, Cmd> = phf::phf_map! {
	"+" => add as Cmd,
	"-" => sub as Cmd,
	"*" => mul as Cmd,
	"/" => div as Cmd,
	"dup" => dup as Cmd,
	"dupn" => dupn as Cmd,
	"pick" => pick as Cmd,
	"roll" => roll as Cmd,
	"rolld" => rolld as Cmd,
	"drop" => drop as Cmd,
	"swap" => swap as Cmd,
	"rot" => rot as Cmd,
	"clear" => clear as Cmd,
	"depth" => depth as Cmd,
	"sto" => sto as Cmd,
	"rcl" => rcl as Cmd,
	"regs" => regs as Cmd,
};

/// `a f b` with `a` at level 1 and `b` at level 0, both replaced by the result
fn dyadic(st: &mut State, f: fn(&Rational, &Rational) -> Result<Rational, CalcErr>) -> Result<(), CalcErr> {
	st.stk.require(2)?;
	let res = f(st.stk.get(1)?, st.stk.get(0)?)?;
	st.stk.pop()?;
	st.stk.pop()?;
	st.stk.push(res);
	Ok(())
}

/// Pops a count from the top and hands it to `f`, the count goes back if `f` refuses it
fn counted(st: &mut State, f: fn(&mut Stack, usize) -> Result<(), CalcErr>) -> Result<(), CalcErr> {
	st.stk.require(1)?;
	let n = st.stk.get(0)?.to_index()?;
	let c = st.stk.pop()?;
	f(&mut st.stk, n).inspect_err(|_| st.stk.push(c))
}

///register number from a stack value, sign is checked by the store
fn reg_num(r: &Rational) -> Result<Integer, CalcErr> {
	if r.is_integer() {Ok(r.numer().clone())} else {Err(CalcErr::BadCount(r.to_string()))}
}

cmd!(add, st, {dyadic(st, |a, b| Ok(a + b))});
cmd!(sub, st, {dyadic(st, |a, b| Ok(a - b))});
cmd!(mul, st, {dyadic(st, |a, b| Ok(a * b))});
cmd!(div, st, {dyadic(st, Rational::checked_div)});

cmd!(dup, st, {st.stk.dup(); Ok(())});
cmd!(dupn, st, {counted(st, Stack::dupn)});
cmd!(pick, st, {counted(st, Stack::pick)});
cmd!(roll, st, {counted(st, Stack::roll_up)});
cmd!(rolld, st, {counted(st, Stack::roll_down)});
cmd!(drop, st, {st.stk.drop()});
cmd!(swap, st, {st.stk.swap(); Ok(())});
cmd!(rot, st, {st.stk.rotate(); Ok(())});
cmd!(clear, st, {st.stk.clear(); Ok(())});
cmd!(depth, st, {
	let n = st.stk.size();
	st.stk.push(n.into());
	Ok(())
});

cmd!(sto, st, {	//value at 1, register at 0
	st.stk.require(2)?;
	let ri = reg_num(st.stk.get(0)?)?;
	st.regs.store(st.stk.get(1)?, &ri)?;
	st.stk.pop()?;
	st.stk.pop()?;
	Ok(())
});
cmd!(rcl, st, {
	st.stk.require(1)?;
	let ri = reg_num(st.stk.get(0)?)?;
	let r = st.regs.recall(&ri)?;
	st.stk.pop()?;
	st.stk.push(r);
	Ok(())
});
cmd!(regs, st, {
	let n = st.regs.register_count()?;
	st.stk.push(n.into());
	Ok(())
});
