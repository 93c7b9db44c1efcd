extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate serde_derive;

mod cli;
mod common;
mod config;
mod schedule;
mod source;
mod update;
mod urllog;

fn main() -> anyhow::Result<()> {
    cli::main()
}
