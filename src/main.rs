use anyhow::Result;
use fretfinder::repl;

fn main() -> Result<()> {
    repl::start()
}
