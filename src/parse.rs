use indexmap::IndexMap;

use crate::{Addressing, Arg, Registry, Validation, Value};

/// Outcome of parsing one argument vector: what each argument received and
/// every problem found with the input, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    values: IndexMap<String, Value>,
    errors: Vec<String>,
}

impl Parsed {
    /// Ids that received something, in the order they received it.
    /// Positioned arguments come after everything given by name.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> Result<(), &[String]> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(&self.errors)
        }
    }
}

enum Token<'a> {
    Named(&'a str),
    Character(&'a str),
    Positional(&'a str),
}

struct Parser<'a> {
    rargs: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    fn new<S: AsRef<str>>(raw: &'a [S]) -> Self {
        let mut rargs = raw.iter().skip(1).map(|it| it.as_ref()).collect::<Vec<_>>();
        rargs.reverse();
        Self { rargs }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.rargs.pop()
    }

    fn pop_token(&mut self) -> Option<Token<'a>> {
        let arg = self.next()?;
        let token = if arg.starts_with("--") {
            Token::Named(arg)
        } else if arg.starts_with('-') {
            Token::Character(arg)
        } else {
            Token::Positional(arg)
        };
        Some(token)
    }

    /// Takes the value for `flag`. A `--` token is not a value: it is
    /// consumed and reported.
    fn next_value(&mut self, flag: &str) -> Result<Option<&'a str>, String> {
        match self.next() {
            Some(arg) if arg.starts_with("--") => {
                Err(format!("value expected for argument {flag}"))
            }
            Some(arg) => Ok(Some(arg)),
            None => Ok(None),
        }
    }
}

pub(crate) fn parse<S: AsRef<str>>(registry: &Registry, raw: &[S]) -> Parsed {
    let mut res = Parsed::default();
    let mut p = Parser::new(raw);
    let mut positional = Vec::new();

    while let Some(token) = p.pop_token() {
        let (flag, addressing) = match token {
            Token::Named(flag) => (flag, Addressing::Named),
            Token::Character(flag) => (flag, Addressing::Character),
            Token::Positional(value) => {
                positional.push(value);
                continue;
            }
        };
        let arg = match registry.lookup_as(flag, addressing) {
            Some(arg) => arg,
            None => {
                res.errors.push(format!("argument {flag} is unknown and not accepted"));
                continue;
            }
        };
        if arg.is_flag() {
            res.values.insert(arg.id().to_string(), Value::Flag(true));
            continue;
        }
        match p.next_value(flag) {
            Ok(Some(value)) => {
                res.values.insert(arg.id().to_string(), Value::Str(value.to_string()));
            }
            Ok(None) => res.errors.push(format!("value expected for argument {flag}")),
            Err(err) => res.errors.push(err),
        }
    }

    assign_positional(registry, positional, &mut res);
    validate(registry, &mut res);

    tracing::debug!(
        tokens = raw.len().saturating_sub(1),
        declarations = registry.len(),
        errors = res.errors.len(),
        "parsed arguments"
    );
    res
}

/// Pairs positional values with positioned declarations.
///
/// Surplus values are errors. When values are short, optional slots are
/// given up from the back until the counts match; required slots never are.
fn assign_positional(registry: &Registry, mut values: Vec<&str>, res: &mut Parsed) {
    let mut slots = registry.positional_ids().collect::<Vec<_>>();

    if values.len() > slots.len() {
        for value in &values[slots.len()..] {
            res.errors.push(format!("argument \"{value}\" not expected nor accepted"));
        }
        values.truncate(slots.len());
    }

    let mut i = slots.len();
    while slots.len() > values.len() && i > 0 {
        i -= 1;
        let optional = registry.lookup(slots[i]).map_or(false, |arg| !arg.is_required());
        if optional {
            tracing::trace!(id = slots[i], "leaving optional positioned argument empty");
            slots.remove(i);
        }
    }

    for (id, value) in slots.into_iter().zip(values) {
        res.values.insert(id.to_string(), Value::Str(value.to_string()));
    }
}

fn validate(registry: &Registry, res: &mut Parsed) {
    for (id, value) in &res.values {
        let (arg, value) = match (registry.lookup(id), value) {
            (Some(arg), Value::Str(value)) => (arg, value),
            _ => continue,
        };
        match arg.check(value) {
            Validation::Valid => (),
            Validation::Invalid => {
                res.errors.push(format!("\"{value}\" for argument {id} is invalid"))
            }
            Validation::InvalidWithMessage(msg) => res.errors.push(msg),
        }
    }

    let missing = registry
        .iter()
        .filter(|arg| arg.is_required() && !res.values.contains_key(arg.id()))
        .map(Arg::id);
    for id in missing {
        res.errors.push(format!("argument {id} is required"));
    }
}
