fn main() {
    let args = arguments::Arguments::from_env()
        .shorthand("path REQUIRED file or directory to remove")
        .and_then(|it| it.shorthand("-r FLAG remove directories and their contents"));
    let args = match args {
        Ok(args) => args.parse_or_exit(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1)
        }
    };

    println!(
        "removing {}{}",
        args.value("path").ok().flatten().unwrap_or_default(),
        if args.flag("-r").unwrap_or(false) { " recursively" } else { "" },
    )
}
