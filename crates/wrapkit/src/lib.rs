//! # wrapkit
//!
//! Function adapters that keep the calling convention of what they wrap.
//!
//! ## Adapters
//! - **Debugger**: prints `name(signature) = result` for every call
//! - **Delayer**: sleeps once when a function is wrapped, then passes calls through
//! - **Cacher**: memoizes results by call signature (unbounded unless an LRU bound is set)
//!
//! ## Calling convention
//! Functions take [`Args`] (positional values plus ordered keywords) and
//! return `Result<Value, E>`. The call-signature key is built from the
//! arguments' reprs: `0, 1, c=1, d=2`.
//!
//! ```
//! use wrapkit::{args, cacher, named, Args, Callable, Error, Value};
//!
//! let usual_sum = cacher(named("usual_sum", |a: &Args| {
//!     a.require(0)?.add(a.require(1)?)
//! }));
//!
//! assert_eq!(usual_sum.call(&args![0, 1]), Ok::<_, Error>(Value::Int(1)));
//! assert_eq!(usual_sum.call(&args![0, 1]), Ok(Value::Int(1)));
//! assert_eq!(usual_sum.stats().hits, 1);
//! ```

#![warn(missing_docs)]

mod args;
mod cacher;
mod callable;
mod debugger;
mod delayer;
mod error;
mod lru;
mod stats;
mod value;

pub use args::Args;
pub use cacher::{cacher, CachePolicy, Cacher};
pub use callable::{named, Callable, NamedFn};
pub use debugger::{debugger, Debugger};
pub use delayer::{delayer, DelayConfig, Delayed, Delayer};
pub use error::{Error, Result};
pub use stats::CacheStats;
pub use value::Value;
