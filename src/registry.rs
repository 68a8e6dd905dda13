use indexmap::IndexMap;

use crate::{Addressing, Arg, Result};

/// Declared arguments by id, in declaration order.
///
/// The order is significant: positioned arguments receive values in the
/// order they were declared, and help lists arguments the same way.
#[derive(Debug, Default)]
pub struct Registry {
    args: IndexMap<String, Arg>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, arg: Arg) -> Result<()> {
        if self.args.contains_key(arg.id()) {
            bail!("arg id \"{}\" is already used", arg.id())
        }
        check_id(&arg)?;
        tracing::trace!(id = arg.id(), kind = ?arg.kind(), "registered argument");
        self.args.insert(arg.id().to_string(), arg);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Option<&Arg> {
        self.args.get(id)
    }

    /// Looks `token` up, accepting only arguments addressed the given way.
    pub fn lookup_as(&self, token: &str, addressing: Addressing) -> Option<&Arg> {
        self.lookup(token).filter(|arg| arg.addressing() == addressing)
    }

    pub fn positional_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().filter(|arg| arg.addressing() == Addressing::Positioned).map(Arg::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arg> + '_ {
        self.args.values()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

fn check_id(arg: &Arg) -> Result<()> {
    let id = arg.id();
    match arg.addressing() {
        Addressing::Named if !id.starts_with("--") => {
            bail!("{id} is a named argument and must have an id starting with \"--\"")
        }
        Addressing::Character if !id.starts_with('-') || id.starts_with("--") => {
            bail!("{id} is a character argument and must have an id starting with a single \"-\"")
        }
        Addressing::Positioned if id.starts_with('-') => {
            bail!("{id} is a positioned argument and must not have an id starting with \"-\"")
        }
        _ => Ok(()),
    }
}
