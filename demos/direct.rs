use optspec::{Destination, OptionParser, Value};
use std::collections::HashMap;
use std::env;
use std::process;

fn main() {
    let mut verbose: i64 = 0;
    let mut name: String = String::default();
    let mut scale: f64 = 1.0;
    let mut items: Vec<f32> = Vec::default();
    let mut labels: HashMap<String, String> = HashMap::default();
    let mut help = false;

    let tokens: Vec<String> = env::args().skip(1).collect();
    let args: Vec<String> = {
        let mut parser = OptionParser::direct(vec![
            ("v|verbose+", Destination::counter(&mut verbose)),
            ("n|name=s", Destination::scalar(&mut name)),
            ("scale=f", Destination::scalar(&mut scale)),
            ("x|item=f@", Destination::list(&mut items)),
            ("l|label=s%", Destination::map(&mut labels)),
            ("h|help", Destination::action(|| help = true)),
            (
                "trace=s",
                Destination::named(|option, value: Value| {
                    println!("--{option} called with '{value}'.")
                }),
            ),
        ])
        .expect("Invalid option specs");

        if let Err(error) = parser.process_all(&tokens) {
            eprintln!("Parse error: {error}");
            process::exit(1);
        }

        parser.args().to_vec()
    };

    if help {
        println!("usage: direct [-v] [-n NAME] [--scale F] [-x F ...] [-l KEY=VALUE ...] [ARG ...]");
        return;
    }

    let total: f32 = items.iter().sum();
    println!("verbose: {verbose}");
    println!("name: {name}");
    println!("scaled total: {}", total as f64 * scale);

    let mut labels: Vec<(String, String)> = labels.into_iter().collect();
    labels.sort();

    for (key, value) in labels {
        println!("label {key}: {value}");
    }

    println!("args: {args:?}");
}
