use optspec::OptionParser;
use std::env;
use std::process;

fn main() {
    let mut parser = OptionParser::new([
        "v|verbose+",
        "b|bool",
        "s|string=s",
        "i|int=i",
        "f|float=f",
        "S|string-list=s@",
        "I|int-list=i@",
        "stropt=s%",
        "intopt=i%",
    ])
    .expect("Invalid option specs");

    let tokens: Vec<String> = env::args().skip(1).collect();

    if let Err(error) = parser.process_all(&tokens) {
        eprintln!("Parse error: {error}");
        process::exit(1);
    }

    let results = parser.results().expect("dictionary mode keeps results");

    for (name, value) in results.iter() {
        println!("{name}: {value}");
    }

    println!("args: {:?}", parser.args());
}
