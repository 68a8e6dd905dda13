use std::fmt;

use crate::Result;

/// Whether an argument is a boolean switch or consumes a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Takes {
    Flag,
    Value,
}

/// How an argument is recognized in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// By position, `path`.
    Positioned,
    /// By a `--name` token.
    Named,
    /// By a `-x` token.
    Character,
}

/// Result of running a validator over a provided value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid,
    InvalidWithMessage(String),
}

impl From<bool> for Validation {
    fn from(valid: bool) -> Self {
        if valid {
            Validation::Valid
        } else {
            Validation::Invalid
        }
    }
}

impl From<String> for Validation {
    fn from(msg: String) -> Self {
        Validation::InvalidWithMessage(msg)
    }
}

impl From<&str> for Validation {
    fn from(msg: &str) -> Self {
        Validation::InvalidWithMessage(msg.to_string())
    }
}

impl From<Result<(), String>> for Validation {
    fn from(res: Result<(), String>) -> Self {
        match res {
            Ok(()) => Validation::Valid,
            Err(msg) => Validation::InvalidWithMessage(msg),
        }
    }
}

type Validator = Box<dyn Fn(&str) -> Validation>;

/// The part of a declaration only value arguments have.
#[derive(Default)]
pub struct ValueSpec {
    required: bool,
    validator: Option<Validator>,
}

impl ValueSpec {
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn check(&self, value: &str) -> Validation {
        match &self.validator {
            Some(f) => f(value),
            None => Validation::Valid,
        }
    }
}

impl fmt::Debug for ValueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueSpec")
            .field("required", &self.required)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub enum ArgKind {
    PositionedValue(ValueSpec),
    NamedValue(ValueSpec),
    NamedFlag,
    CharacterValue(ValueSpec),
    CharacterFlag,
}

impl ArgKind {
    pub fn from_markers(takes: Takes, addressing: Addressing) -> Option<ArgKind> {
        let res = match (takes, addressing) {
            (Takes::Value, Addressing::Positioned) => {
                ArgKind::PositionedValue(ValueSpec::default())
            }
            (Takes::Value, Addressing::Named) => ArgKind::NamedValue(ValueSpec::default()),
            (Takes::Value, Addressing::Character) => {
                ArgKind::CharacterValue(ValueSpec::default())
            }
            (Takes::Flag, Addressing::Named) => ArgKind::NamedFlag,
            (Takes::Flag, Addressing::Character) => ArgKind::CharacterFlag,
            (Takes::Flag, Addressing::Positioned) => return None,
        };
        Some(res)
    }

    pub fn takes(&self) -> Takes {
        match self {
            ArgKind::NamedFlag | ArgKind::CharacterFlag => Takes::Flag,
            _ => Takes::Value,
        }
    }

    pub fn addressing(&self) -> Addressing {
        match self {
            ArgKind::PositionedValue(_) => Addressing::Positioned,
            ArgKind::NamedValue(_) | ArgKind::NamedFlag => Addressing::Named,
            ArgKind::CharacterValue(_) | ArgKind::CharacterFlag => Addressing::Character,
        }
    }
}

/// A declared argument.
///
/// The id is what appears on the command line for named and character
/// arguments (`--out`, `-v`) and an arbitrary name for positioned ones.
#[derive(Debug)]
pub struct Arg {
    id: String,
    description: String,
    hide_in_example: bool,
    kind: ArgKind,
}

impl Arg {
    fn with_kind(id: impl Into<String>, kind: ArgKind) -> Arg {
        Arg { id: id.into(), description: String::new(), hide_in_example: false, kind }
    }

    pub fn positional(id: impl Into<String>) -> ValueArg {
        ValueArg(Arg::with_kind(id, ArgKind::PositionedValue(ValueSpec::default())))
    }

    pub fn named(id: impl Into<String>) -> ValueArg {
        ValueArg(Arg::with_kind(id, ArgKind::NamedValue(ValueSpec::default())))
    }

    pub fn character(id: impl Into<String>) -> ValueArg {
        ValueArg(Arg::with_kind(id, ArgKind::CharacterValue(ValueSpec::default())))
    }

    pub fn named_flag(id: impl Into<String>) -> FlagArg {
        FlagArg(Arg::with_kind(id, ArgKind::NamedFlag))
    }

    pub fn character_flag(id: impl Into<String>) -> FlagArg {
        FlagArg(Arg::with_kind(id, ArgKind::CharacterFlag))
    }

    /// Builds a declaration from its two kind markers. Positioned flags do
    /// not exist.
    pub fn from_markers(
        id: impl Into<String>,
        takes: Takes,
        addressing: Addressing,
    ) -> Result<Arg> {
        let id = id.into();
        match ArgKind::from_markers(takes, addressing) {
            Some(kind) => Ok(Arg::with_kind(id, kind)),
            None => bail!("{id} can not be a positioned flag"),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hide_in_example(&self) -> bool {
        self.hide_in_example
    }

    pub fn kind(&self) -> &ArgKind {
        &self.kind
    }

    pub fn addressing(&self) -> Addressing {
        self.kind.addressing()
    }

    pub fn is_flag(&self) -> bool {
        self.kind.takes() == Takes::Flag
    }

    pub fn value_spec(&self) -> Option<&ValueSpec> {
        match &self.kind {
            ArgKind::PositionedValue(spec)
            | ArgKind::NamedValue(spec)
            | ArgKind::CharacterValue(spec) => Some(spec),
            ArgKind::NamedFlag | ArgKind::CharacterFlag => None,
        }
    }

    fn value_spec_mut(&mut self) -> Option<&mut ValueSpec> {
        match &mut self.kind {
            ArgKind::PositionedValue(spec)
            | ArgKind::NamedValue(spec)
            | ArgKind::CharacterValue(spec) => Some(spec),
            ArgKind::NamedFlag | ArgKind::CharacterFlag => None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.value_spec().map_or(false, ValueSpec::is_required)
    }

    /// Runs the validator, if any. Flags are always valid.
    pub fn check(&self, value: &str) -> Validation {
        self.value_spec().map_or(Validation::Valid, |spec| spec.check(value))
    }
}

/// Builder for positioned, named and character value arguments.
#[derive(Debug)]
pub struct ValueArg(Arg);

impl ValueArg {
    pub fn required(self) -> ValueArg {
        self.set_required(true)
    }

    pub fn set_required(mut self, required: bool) -> ValueArg {
        if let Some(spec) = self.0.value_spec_mut() {
            spec.required = required;
        }
        self
    }

    /// Sets the check run over the provided value. The closure may return
    /// `bool`, an error message, or `Result<(), String>`.
    pub fn validator<F, R>(mut self, f: F) -> ValueArg
    where
        F: Fn(&str) -> R + 'static,
        R: Into<Validation>,
    {
        if let Some(spec) = self.0.value_spec_mut() {
            spec.validator = Some(Box::new(move |value: &str| -> Validation { f(value).into() }));
        }
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> ValueArg {
        self.0.description = description.into();
        self
    }

    pub fn hide_in_example(mut self) -> ValueArg {
        self.0.hide_in_example = true;
        self
    }
}

impl From<ValueArg> for Arg {
    fn from(builder: ValueArg) -> Arg {
        builder.0
    }
}

/// Builder for named and character flags.
#[derive(Debug)]
pub struct FlagArg(Arg);

impl FlagArg {
    pub fn description(mut self, description: impl Into<String>) -> FlagArg {
        self.0.description = description.into();
        self
    }

    pub fn hide_in_example(mut self) -> FlagArg {
        self.0.hide_in_example = true;
        self
    }
}

impl From<FlagArg> for Arg {
    fn from(builder: FlagArg) -> Arg {
        builder.0
    }
}
