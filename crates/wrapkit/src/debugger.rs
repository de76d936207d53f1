//! Logging adapter: prints each call and its result

use std::io::{self, Stdout, Write};

use parking_lot::Mutex;
use tracing::warn;

use crate::args::Args;
use crate::callable::Callable;
use crate::value::Value;

/// Wrapper that writes `name(signature) = result` for every successful call
pub struct Debugger<F, W = Stdout> {
    inner: F,
    out: Mutex<W>,
}

impl<F: Callable> Debugger<F> {
    /// Wrap `inner`, writing to stdout
    pub fn new(inner: F) -> Self {
        Self::with_writer(inner, io::stdout())
    }
}

impl<F: Callable, W: Write> Debugger<F, W> {
    /// Wrap `inner`, writing to `out`
    pub fn with_writer(inner: F, out: W) -> Self {
        Self {
            inner,
            out: Mutex::new(out),
        }
    }

    /// The wrapped function
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Consume the wrapper and return the output sink
    pub fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

impl<F: Callable, W: Write> Callable for Debugger<F, W> {
    type Error = F::Error;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn call(&self, args: &Args) -> Result<Value, F::Error> {
        let signature = args.signature();
        let result = self.inner.call(args)?;

        let line = format!("{}({}) = {}", self.name(), signature, render_result(&result));
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{}", line) {
            warn!("Failed to write debug line for {}: {}", self.name(), e);
        }

        Ok(result)
    }
}

/// Tuples render as the list of their element reprs, e.g. `['1', '3']`
fn render_result(result: &Value) -> String {
    match result.as_tuple() {
        Some(items) => {
            let reprs = items.iter().map(|item| Value::Str(item.repr())).collect();
            Value::List(reprs).repr()
        }
        None => result.repr(),
    }
}

/// Shorthand for [`Debugger::new`]
pub fn debugger<F: Callable>(inner: F) -> Debugger<F> {
    Debugger::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::named;
    use crate::error::Error;

    fn a_sum() -> impl Callable<Error = Error> {
        named("a_sum", |args: &Args| {
            let ab = args.require(0)?.add(args.require(1)?)?;
            let cd = args.require_named("c")?.add(args.require_named("d")?)?;
            Ok(Value::Tuple(vec![ab, cd]))
        })
    }

    fn output(wrapped: Debugger<impl Callable, Vec<u8>>) -> String {
        String::from_utf8(wrapped.into_writer()).unwrap()
    }

    #[test]
    fn test_debugger_tuple_line() {
        let wrapped = Debugger::with_writer(a_sum(), Vec::new());
        let result = wrapped.call(&Args::new().arg(0).arg(1).kwarg("c", 1).kwarg("d", 2));

        assert_eq!(result, Ok(Value::Tuple(vec![Value::Int(1), Value::Int(3)])));
        assert_eq!(output(wrapped), "a_sum(0, 1, c=1, d=2) = ['1', '3']\n");
    }

    #[test]
    fn test_debugger_scalar_line() {
        let greet = named("greet", |args: &Args| {
            Value::from("hi ").add(args.require(0)?)
        });
        let wrapped = Debugger::with_writer(greet, Vec::new());
        wrapped.call(&Args::new().arg("bob")).unwrap();

        assert_eq!(output(wrapped), "greet('bob') = 'hi bob'\n");
    }

    #[test]
    fn test_debugger_returns_result_unchanged() {
        let f = named("f", |args: &Args| {
            Ok::<_, Error>(Value::List(vec![
                args.require(0)?.clone(),
                args.require(1)?.clone(),
                args.require_named("c")?.clone(),
            ]))
        });
        let call = Args::new().arg(1).arg(2).kwarg("c", 3);
        let expected = f.call(&call);

        let wrapped = Debugger::with_writer(f, Vec::new());
        assert_eq!(wrapped.call(&call), expected);
    }

    #[test]
    fn test_debugger_propagates_failure() {
        let wrapped = Debugger::with_writer(a_sum(), Vec::new());
        let result = wrapped.call(&Args::new().arg(0).arg(1));

        assert_eq!(result, Err(Error::MissingArgument("c".to_string())));
        assert_eq!(output(wrapped), "");
    }

    #[test]
    fn test_debugger_one_line_per_call() {
        let wrapped = Debugger::with_writer(a_sum(), Vec::new());
        let call = Args::new().arg(0).arg(1).kwarg("c", 1).kwarg("d", 2);
        wrapped.call(&call).unwrap();
        wrapped.call(&call).unwrap();

        assert_eq!(output(wrapped).lines().count(), 2);
    }

    #[test]
    fn test_debugger_keeps_name() {
        let wrapped = Debugger::with_writer(a_sum(), Vec::new());
        assert_eq!(wrapped.name(), "a_sum");
        assert_eq!(wrapped.inner().name(), "a_sum");
    }
}
