use cantor_canonical::{cnf, compute_cnf_digest, BigUint};

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(base), Some(value)) = (args.next(), args.next()) else {
        eprintln!("usage: expand <base> <value>");
        std::process::exit(2);
    };
    let parse = |raw: &str| -> BigUint {
        raw.parse().unwrap_or_else(|err| {
            eprintln!("invalid number '{}': {}", raw, err);
            std::process::exit(2);
        })
    };
    let form = cnf(&parse(&base), &parse(&value));

    match compute_cnf_digest(&form) {
        Ok(digest) => {
            println!("{}", form);
            println!("{}", digest);
        }
        Err(err) => {
            eprintln!("digest failed: {}", err);
            std::process::exit(1);
        }
    }
}
