use arguments::{Arg, Arguments};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    let args = match declare() {
        Ok(args) => args.parse_or_exit(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1)
        }
    };

    let name = args.value("name").ok().flatten().unwrap_or("world");
    let bang = if args.flag("-e").unwrap_or(false) { "❣️" } else { "!" };
    let times = args.value_from_str::<usize>("--times").ok().flatten().unwrap_or(1);
    for _ in 0..times {
        println!("Hello {}{}", name, bang);
    }
}

fn declare() -> arguments::Result<Arguments> {
    Arguments::from_env()
        .arg(Arg::positional("name").required().description("who to greet"))?
        .arg(
            Arg::named("--times")
                .validator(|value: &str| value.parse::<usize>().is_ok())
                .description("how many greetings"),
        )?
        .arg(Arg::character_flag("-e").description("use an emoji"))
}
