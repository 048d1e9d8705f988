//! Numbered registers for storing values outside the stack
//!
//! Two interchangeable backends behind [`Storage`]: a map held in memory and a directory with one
//! `<n>.crg` file per register. Neither one ever initializes a register on recall.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use log::{debug, warn};
use malachite::{Integer, Natural};
use crate::errors::CalcErr;
use crate::rational::{Rational, ZERO};

/// File extension of register files in a [`DiskStore`]
pub const REG_EXT: &str = "crg";

pub trait Storage {
	/// Puts `r` into register `ri`, replacing any previous value.
	fn store(&mut self, r: &Rational, ri: &Integer) -> Result<(), CalcErr>;

	/// Value of register `ri`, or zero if it was never stored to.
	fn recall(&self, ri: &Integer) -> Result<Rational, CalcErr>;

	/// Number of registers that hold a value.
	fn register_count(&self) -> Result<usize, CalcErr>;
}

///checked conversion of a register number
fn reg_num(ri: &Integer) -> Result<Natural, CalcErr> {
	Natural::try_from(ri).map_err(|_| CalcErr::NegativeRegister(ri.clone()))
}

///`<n>.crg` with `n` a register number
fn is_reg_file(p: &Path) -> bool {
	p.extension().is_some_and(|x| x == REG_EXT)
		&& p.file_stem().and_then(|s| s.to_str()).is_some_and(|s| Natural::from_str(s).is_ok())
}

#[derive(Debug, Default)]
pub struct MemStore(BTreeMap<Natural, Rational>);

impl MemStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Storage for MemStore {
	fn store(&mut self, r: &Rational, ri: &Integer) -> Result<(), CalcErr> {
		self.0.insert(reg_num(ri)?, r.clone());
		Ok(())
	}

	fn recall(&self, ri: &Integer) -> Result<Rational, CalcErr> {
		Ok(self.0.get(&reg_num(ri)?).cloned().unwrap_or_else(|| ZERO.clone()))
	}

	fn register_count(&self) -> Result<usize, CalcErr> {
		Ok(self.0.len())
	}
}

/// Registers as text files in one directory, each holding the display form of its value.
#[derive(Debug, Clone)]
pub struct DiskStore {
	dir: PathBuf
}

impl DiskStore {
	/// Uses `dir`, creating it if missing.
	pub fn open(dir: impl AsRef<Path>) -> Result<Self, CalcErr> {
		let dir = dir.as_ref().to_path_buf();
		fs::create_dir_all(&dir)?;
		debug!("register directory: {}", dir.display());
		Ok(Self {dir})
	}

	fn path(&self, n: &Natural) -> PathBuf {
		self.dir.join(format!("{n}.{REG_EXT}"))
	}
}

impl Storage for DiskStore {
	fn store(&mut self, r: &Rational, ri: &Integer) -> Result<(), CalcErr> {
		let p = self.path(&reg_num(ri)?);
		fs::write(&p, format!("{r}\n")).map_err(|e| {
			warn!("can't write {}: {e}", p.display());
			CalcErr::Storage(format!("{}: {e}", p.display()))
		})
	}

	fn recall(&self, ri: &Integer) -> Result<Rational, CalcErr> {
		let p = self.path(&reg_num(ri)?);
		match fs::read_to_string(&p) {
			Ok(s) => s.trim().parse().map_err(|e| {
				warn!("corrupt register file {}: {e}", p.display());
				CalcErr::Storage(format!("{}: {e}", p.display()))
			}),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(ZERO.clone()),
			Err(e) => {
				warn!("can't read {}: {e}", p.display());
				Err(CalcErr::Storage(format!("{}: {e}", p.display())))
			}
		}
	}

	fn register_count(&self) -> Result<usize, CalcErr> {
		let mut count = 0;
		for ent in fs::read_dir(&self.dir)? {
			let p = ent?.path();
			if p.is_file() && is_reg_file(&p) {
				count += 1;
			}
		}
		Ok(count)
	}
}
