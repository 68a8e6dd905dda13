//! Declare the command line arguments a program accepts, parse an argument
//! vector against them, and read back validated values.
//!
//! ```
//! use arguments::{Arg, Arguments};
//!
//! let args = Arguments::new()
//!     .input(["prog", "--out", "a.txt", "-v", "src"])
//!     .arg(Arg::positional("path").required())?
//!     .arg(Arg::named("--out"))?
//!     .arg(Arg::character_flag("-v"))?;
//!
//! assert!(args.is_valid().is_ok());
//! assert_eq!(args.value("path")?, Some("src"));
//! assert_eq!(args.value("--out")?, Some("a.txt"));
//! assert!(args.flag("-v")?);
//! # Ok::<(), arguments::Error>(())
//! ```
//!
//! Problems in the declarations are programmer errors and come back as
//! [`Error`]. Problems in the input never do: they are collected as messages
//! in [`Parsed`] and the caller decides what to do with them.

use std::{cell::OnceCell, fmt, str::FromStr};

macro_rules! format_err {
    ($($tt:tt)*) => {
        $crate::Error { msg: format!($($tt)*) }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

mod decl;
mod help;
mod parse;
mod registry;
pub mod shorthand;

pub use crate::{
    decl::{Addressing, Arg, ArgKind, FlagArg, Takes, Validation, ValueArg, ValueSpec},
    parse::Parsed,
    registry::Registry,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub struct Error {
    msg: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.msg, f)
    }
}

impl std::error::Error for Error {}

/// What an argument received: a string for value arguments, a boolean for
/// flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Flag(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(it) => Some(it.as_str()),
            Value::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(it) => Some(*it),
            Value::Str(_) => None,
        }
    }
}

static ABSENT_FLAG: Value = Value::Flag(false);

/// A set of declarations together with the argument vector they are checked
/// against.
///
/// The outcome of parsing the stored input is computed on first use and kept
/// until the input or the declarations change.
#[derive(Debug, Default)]
pub struct Arguments {
    registry: Registry,
    input: Vec<String>,
    parsed: OnceCell<Parsed>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the process argument vector as input. Arguments that are not
    /// valid unicode are converted lossily.
    pub fn from_env() -> Self {
        let input = std::env::args_os().map(|it| it.to_string_lossy().into_owned());
        Self::new().input(input)
    }

    /// Sets the argument vector. Index 0 is the program invocation and is
    /// never parsed.
    pub fn input<I, S>(mut self, input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_input(input);
        self
    }

    pub fn set_input<I, S>(&mut self, input: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input = input.into_iter().map(Into::into).collect();
        self.parsed = OnceCell::new();
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> Result<Self> {
        self.register(arg)?;
        Ok(self)
    }

    /// Declares an argument with the shorthand syntax, see [`shorthand`].
    pub fn shorthand(self, text: &str) -> Result<Self> {
        self.arg(shorthand::parse(text)?)
    }

    pub fn register(&mut self, arg: impl Into<Arg>) -> Result<()> {
        self.registry.register(arg.into())?;
        self.parsed = OnceCell::new();
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn program(&self) -> Option<&str> {
        self.input.first().map(String::as_str)
    }

    /// Parses `raw` against the current declarations without touching the
    /// cached outcome of the stored input.
    pub fn parse<S: AsRef<str>>(&self, raw: &[S]) -> Parsed {
        parse::parse(&self.registry, raw)
    }

    pub fn parsed(&self) -> &Parsed {
        self.parsed.get_or_init(|| parse::parse(&self.registry, &self.input))
    }

    pub fn is_valid(&self) -> Result<(), &[String]> {
        self.parsed().is_valid()
    }

    /// Looks up what `id` received.
    ///
    /// Flags that were not given read as `Value::Flag(false)`, value
    /// arguments that were not given as `None`.
    pub fn get(&self, id: &str) -> Result<Option<&Value>> {
        if let Some(value) = self.parsed().values().get(id) {
            return Ok(Some(value));
        }
        match self.registry.lookup(id) {
            None => bail!("id \"{id}\" not a known argument"),
            Some(arg) if arg.is_flag() => Ok(Some(&ABSENT_FLAG)),
            Some(_) => Ok(None),
        }
    }

    pub fn flag(&self, id: &str) -> Result<bool> {
        match self.get(id)? {
            Some(Value::Flag(it)) => Ok(*it),
            _ => bail!("argument {id} is not a flag"),
        }
    }

    pub fn value(&self, id: &str) -> Result<Option<&str>> {
        match self.get(id)? {
            None => Ok(None),
            Some(Value::Str(it)) => Ok(Some(it.as_str())),
            Some(Value::Flag(_)) => bail!("argument {id} is a flag and has no value"),
        }
    }

    pub fn value_from_str<T: FromStr>(&self, id: &str) -> Result<Option<T>>
    where
        T::Err: fmt::Display,
    {
        match self.value(id)? {
            None => Ok(None),
            Some(str) => {
                str.parse::<T>().map(Some).map_err(|err| format_err!("Can't parse `{id}`, {err}"))
            }
        }
    }

    pub fn help(&self) -> String {
        help::render(self)
    }

    /// Prints the help text to stderr and exits the process when the stored
    /// input is invalid.
    pub fn parse_or_exit(self) -> Self {
        if self.is_valid().is_err() {
            eprintln!("\n{}\n", self.help());
            std::process::exit(2)
        }
        self
    }
}
