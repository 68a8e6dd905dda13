use std::fmt::Write;

use crate::{Addressing, Arguments};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

pub(crate) fn render(args: &Arguments) -> String {
    let mut buf = String::new();

    let errors = args.parsed().errors();
    for error in errors {
        w!(buf, "{}\n", error);
    }
    if !errors.is_empty() {
        blank_line(&mut buf);
    }

    usage(&mut buf, args);

    let registry = args.registry();
    if !registry.is_empty() {
        w!(buf, "\n");
        let width = 4 + registry.iter().map(|arg| arg.id().len()).max().unwrap_or(0);
        for arg in registry.iter() {
            let required = if arg.is_required() { "(required) " } else { "" };
            let line = format!("{:width$}{}{}", arg.id(), required, arg.description());
            w!(buf, "\n    {}", line.trim_end());
        }
    }

    buf
}

/// The one-line example invocation: `prog <path> [--out ___] [-v]`.
fn usage(buf: &mut String, args: &Arguments) {
    let mut words = Vec::new();
    words.extend(args.program().map(str::to_string));
    for arg in args.registry().iter().filter(|arg| !arg.hide_in_example()) {
        let optional = !arg.is_required();
        let expects_value = !arg.is_flag() && arg.addressing() != Addressing::Positioned;
        let (l, r) = if optional { ("[", "]") } else { ("", "") };
        let value = if expects_value { " ___" } else { "" };
        words.push(format!("{}{}{}{}", l, arg.id(), value, r));
    }
    w!(buf, "{}", words.join(" "));
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
