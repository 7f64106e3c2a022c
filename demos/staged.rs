use optspec::{Destination, OptionParser};
use std::env;
use std::process;

fn main() {
    let mut verbose: i64 = 0;
    let mut config: String = String::default();

    let tokens: Vec<String> = env::args().skip(1).collect();

    // Global options may appear anywhere; everything else is left for the sub-command.
    let rest: Vec<String> = {
        let mut globals = OptionParser::direct(vec![
            ("v|verbose+", Destination::counter(&mut verbose)),
            ("c|config=s", Destination::scalar(&mut config)),
        ])
        .expect("Invalid global option specs");

        if let Err(error) = globals.process_some(&tokens) {
            eprintln!("Parse error: {error}");
            process::exit(1);
        }

        globals.args().to_vec()
    };

    let (command, rest) = match rest.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => {
            eprintln!("usage: staged [-v] [-c CONFIG] (add|remove) ...");
            process::exit(1);
        }
    };

    let specs: &[&str] = match command {
        "add" => &["f|force", "t|tag=s@"],
        "remove" => &["r|recursive", "d|depth=i"],
        _ => {
            eprintln!("Unknown command '{command}'.");
            process::exit(1);
        }
    };

    let mut parser = OptionParser::new(specs).expect("Invalid command option specs");

    if let Err(error) = parser.process_all(rest) {
        eprintln!("Parse error: {error}");
        process::exit(1);
    }

    println!("verbose: {verbose}");
    println!("config: {config}");
    println!("command: {command}");

    for (name, value) in parser.results().expect("dictionary mode keeps results").iter() {
        println!("{name}: {value}");
    }

    println!("args: {:?}", parser.args());
}
