// Demo runner: parses its own arguments against a fixed option table and
// prints what each sink collected.
//
//   argot-demo -vq -o out.txt --name=alice --def=X input.txt
//
// prints one "<option> <value>" line per collected value, in table order,
// then one "arg <value>" line per non-option argument.

use argot::{Parser, Registry};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_values<T: std::fmt::Display>(option: &str, values: &[T]) {
    for v in values {
        println!("{} {}", option, v);
    }
}

#[derive(Default)]
struct Collected {
    v: Vec<bool>,
    verbose: Vec<bool>,
    q: Vec<bool>,
    o: Vec<String>,
    name: Vec<String>,
    define: Vec<String>,
}

fn parse_args(c: &mut Collected) -> argot::Result<Vec<String>> {
    let mut registry = Registry::new();
    registry.register_bool("v", &mut c.v)?;
    registry.register_bool("verbose", &mut c.verbose)?;
    registry.register_bool("q", &mut c.q)?;
    registry.register_string("o", &mut c.o)?;
    registry.register_string("name", &mut c.name)?;
    registry.register_string("define", &mut c.define)?;

    let mut parser = Parser::new(&mut registry);
    parser.parse_env()?;
    Ok(parser.non_option_args().to_vec())
}

fn main() {
    init_tracing();

    let mut c = Collected::default();
    let rest = match parse_args(&mut c) {
        Ok(rest) => rest,
        Err(e) => {
            eprintln!("argot-demo: {}", e);
            std::process::exit(1);
        }
    };

    print_values("-v", &c.v);
    print_values("--verbose", &c.verbose);
    print_values("-q", &c.q);
    print_values("-o", &c.o);
    print_values("--name", &c.name);
    print_values("--define", &c.define);
    print_values("arg", &rest);
}
