//! Executable CLI wrapper

use std::io::{BufRead, Write, stdin, stdout};
use std::path::PathBuf;
use clacky::{State, exec};
use clacky::regs::{DiskStore, MemStore, Storage};
use log::info;

const HELPMSG: &str = "\
clacky - exact rational RPN calculator

Usage: clacky [options]

Options:
  -h, --help          Print this help message
  -e, --expr <LINE>   Execute LINE, may be repeated; prints the stack and exits unless -i is given
  -i, --inter         Enter the interactive loop after any expressions
  --prompt <TEXT>     Interactive prompt (default: \"> \")
  --regs <DIR>        Keep registers as files in DIR instead of memory

Words: numbers (N or N/D), + - * / dup dupn pick roll rolld drop swap rot clear depth sto rcl regs
Type quit to leave. Set RUST_LOG=debug to trace execution.";

struct Opts {
	exprs: Vec<String>,
	inter: bool,
	prompt: String,
	regs: Option<PathBuf>
}

fn parse() -> Result<Opts, String> {
	let mut args = pico_args::Arguments::from_env();

	if args.contains(["-h", "--help"]) {
		println!("{HELPMSG}");
		std::process::exit(0);
	}

	let mut exprs = Vec::new();
	while let Some(e) = args.opt_value_from_str::<_, String>(["-e", "--expr"]).map_err(|e| e.to_string())? {
		exprs.push(e);
	}
	let inter = args.contains(["-i", "--inter"]) || exprs.is_empty();
	let prompt = args.opt_value_from_str::<_, String>("--prompt").map_err(|e| e.to_string())?.unwrap_or_else(|| "> ".into());
	let regs = args.opt_value_from_str::<_, PathBuf>("--regs").map_err(|e| e.to_string())?;

	let rest = args.finish();
	if !rest.is_empty() {
		return Err(format!("unrecognized arguments: {rest:?}, use -h for help"));
	}

	Ok(Opts {exprs, inter, prompt, regs})
}

///report and carry on, nothing is fatal
fn run(st: &mut State, line: &str) {
	if let Err(e) = exec(st, line) {
		println!("! {e}");
	}
}

fn main() {
	env_logger::init();

	let opts = match parse() {
		Ok(o) => o,
		Err(e) => {
			eprintln!("! {e}");
			std::process::exit(1);
		}
	};

	let regs: Box<dyn Storage> = match &opts.regs {
		Some(dir) => match DiskStore::open(dir) {
			Ok(ds) => Box::new(ds),
			Err(e) => {
				eprintln!("! {e}");
				std::process::exit(1);
			}
		},
		None => Box::new(MemStore::new())
	};
	let mut st = State::with_regs(regs);

	for e in &opts.exprs {
		run(&mut st, e);
	}

	if !opts.inter {
		print!("{}", st.stk.render());
		return;
	}

	info!("entering interactive mode");
	let mut lines = stdin().lock().lines();
	loop {
		print!("{}{}", st.stk.render(), opts.prompt);
		if let Err(e) = stdout().flush() {
			eprintln!("! can't write output: {e}");
			break;
		}
		match lines.next() {
			Some(Ok(line)) if line.trim() == "quit" => break,
			Some(Ok(line)) => run(&mut st, &line),
			Some(Err(e)) => {
				eprintln!("! can't read input: {e}");
				break;
			}
			None => break
		}
	}
}
