use std::process::ExitCode;

use clap::Parser;

use number_sprites::{generate_sprites, Args};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match generate_sprites(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
