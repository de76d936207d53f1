//! The three example functions, each run under one adapter

use std::cell::RefCell;
use std::io::{self, Write};

use wrapkit::{
    args, delayer, named, Args, CachePolicy, CacheStats, Cacher, Callable, DelayConfig, Debugger,
    Value,
};

/// `a_sum(a, b, c, d) = (a + b, c + d)`
fn a_sum() -> impl Callable<Error = wrapkit::Error> {
    named("a_sum", |args: &Args| {
        let ab = args.require(0)?.add(args.require(1)?)?;
        let cd = args.require_named("c")?.add(args.require_named("d")?)?;
        Ok(Value::Tuple(vec![ab, cd]))
    })
}

/// Call `a_sum(0, 1, c=1, d=2)` under the debugger
pub fn debugged_sum() -> wrapkit::Result<Value> {
    debugged_sum_to(io::stdout())
}

fn debugged_sum_to<W: Write>(out: W) -> wrapkit::Result<Value> {
    Debugger::with_writer(a_sum(), out).call(&args![0, 1; c = 1, d = 2])
}

/// Wrap `another_sum` with the given delay, then call `another_sum(0, 1)`
pub fn delayed_sum(config: DelayConfig) -> wrapkit::Result<Value> {
    let another_sum = delayer(config).wrap(named("another_sum", |args: &Args| {
        args.require(0)?.add(args.require(1)?)
    }));
    another_sum.call(&args![0, 1])
}

/// Call the memoized `usual_sum` with `(0, 1)`, `(2, 1)`, `(0, 1)`, `(2, 1)`
pub fn cached_sum(policy: CachePolicy) -> wrapkit::Result<CacheStats> {
    cached_sum_to(policy, io::stdout())
}

fn cached_sum_to<W: Write>(policy: CachePolicy, out: W) -> wrapkit::Result<CacheStats> {
    let out = RefCell::new(out);
    let usual_sum = Cacher::with_policy(
        named("usual_sum", |args: &Args| {
            let (a, b) = (args.require(0)?, args.require(1)?);
            // best effort
            let _ = writeln!(out.borrow_mut(), "Computing {} + {}", a, b);
            a.add(b)
        }),
        policy,
    );

    for call in [args![0, 1], args![2, 1], args![0, 1], args![2, 1]] {
        usual_sum.call(&call)?;
    }

    Ok(usual_sum.stats())
}
