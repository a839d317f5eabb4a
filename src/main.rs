use std::process;

fn main() {
    if let Err(err) = splitcheck::run() {
        eprintln!("{}", err);
        process::exit(err.exit_code());
    }
}
