#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]

use std::error::Error;

use tasklist::cli::cli;

fn main() -> Result<(), Box<dyn Error>> {
  cli()
}
