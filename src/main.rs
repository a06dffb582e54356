use cryptoquip::decrypt::Decrypter;
use cryptoquip::prelude::*;
use std::env;

fn main() {
    match inner_main() {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(2);
        }
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
    }
}

fn inner_main() -> Result<bool> {
    let matches = clap::Command::new("cryptoquip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode a monoalphabetic substitution cipher against a word list")
        .arg(
            clap::Arg::new("dict")
                .short('d')
                .long("dict")
                .value_name("FILE")
                .takes_value(true)
                .required(true)
                .help("Word list, one word per line. Gzip is handled transparently."),
        )
        .arg(
            clap::Arg::new("ciphertext")
                .value_name("TEXT")
                .takes_value(true)
                .help("Ciphertext to decode. '-' or absent reads stdin."),
        )
        .get_matches();

    let mut decrypter = Decrypter::new();
    decrypter.load(matches.value_of("dict").unwrap())?;

    let ciphertext = match matches.value_of("ciphertext") {
        Some(text) if text != "-" => text.to_string(),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if ciphertext.trim().is_empty() {
        return err!("no ciphertext given");
    }

    let solutions = decrypter.crack(&ciphertext);
    if solutions.is_empty() {
        eprintln!("no solutions");
        return Ok(false);
    }
    for solution in &solutions {
        println!("{}", solution);
    }
    Ok(true)
}
