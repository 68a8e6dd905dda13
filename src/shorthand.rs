//! One-line declarations.
//!
//! `"<id> [FLAG] [REQUIRED] [HIDE_IN_EXAMPLE] [description...]"`. The prefix
//! of the id picks how the argument is addressed (`--name`, `-n`, or a plain
//! positional name), `FLAG` makes it a switch, and whatever follows the
//! options is the description.
//!
//! ```
//! let arg = arguments::shorthand::parse("--out REQUIRED where to write")?;
//! assert_eq!(arg.id(), "--out");
//! assert!(arg.is_required());
//! assert_eq!(arg.description(), "where to write");
//! # Ok::<(), arguments::Error>(())
//! ```

use crate::{Addressing, Arg, Result, Validation};

#[derive(Default)]
struct Options {
    flag: bool,
    required: bool,
    hide_in_example: bool,
}

pub fn parse(text: &str) -> Result<Arg> {
    build(text, None::<fn(&str) -> Validation>)
}

/// Like [`parse`], with a validator for the value.
pub fn parse_with<F, R>(text: &str, validator: F) -> Result<Arg>
where
    F: Fn(&str) -> R + 'static,
    R: Into<Validation>,
{
    build(text, Some(validator))
}

fn build<F, R>(text: &str, validator: Option<F>) -> Result<Arg>
where
    F: Fn(&str) -> R + 'static,
    R: Into<Validation>,
{
    let mut pieces = text.split(' ');
    let id = pieces.next().unwrap_or_default();
    if id.is_empty() {
        bail!("shorthand arg must contain an id")
    }

    let mut opts = Options::default();
    let mut description = Vec::new();
    for piece in pieces.by_ref() {
        match piece {
            "FLAG" => opts.flag = true,
            "REQUIRED" => opts.required = true,
            "HIDE_IN_EXAMPLE" => opts.hide_in_example = true,
            _ => {
                description.push(piece);
                break;
            }
        }
    }
    description.extend(pieces);
    let description = description.join(" ");

    let addressing = if id.starts_with("--") {
        Addressing::Named
    } else if id.starts_with('-') {
        Addressing::Character
    } else {
        Addressing::Positioned
    };

    if opts.flag {
        if addressing == Addressing::Positioned {
            bail!("shorthand arg {id}: FLAG can not be used with a positioned argument")
        }
        if opts.required {
            bail!("shorthand arg {id}: REQUIRED can not be used with FLAG")
        }
        if validator.is_some() {
            bail!("shorthand arg {id}: a validator can not be used with FLAG")
        }
        let arg = match addressing {
            Addressing::Named => Arg::named_flag(id),
            _ => Arg::character_flag(id),
        };
        let arg = arg.description(description);
        let arg = if opts.hide_in_example { arg.hide_in_example() } else { arg };
        return Ok(arg.into());
    }

    let arg = match addressing {
        Addressing::Named => Arg::named(id),
        Addressing::Character => Arg::character(id),
        Addressing::Positioned => Arg::positional(id),
    };
    let mut arg = arg.description(description).set_required(opts.required);
    if opts.hide_in_example {
        arg = arg.hide_in_example();
    }
    if let Some(f) = validator {
        arg = arg.validator(f);
    }
    Ok(arg.into())
}
