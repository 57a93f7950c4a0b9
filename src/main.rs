use std::io::Read;

use anyhow::{Context, Result};

use lamcalc::{eval, parser};

fn main() -> Result<()> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read the program from stdin")?;
    let program = parser::parse(&source)?;
    let stdout = std::io::stdout();
    eval::run(program, &mut stdout.lock()).context("Failed to write the reduction output")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use lamcalc::{eval, parser};

    #[test]
    fn parses_and_reduces_end_to_end() {
        let program = parser::parse("`\\0 y trailing").unwrap();
        let mut out = Vec::new();
        eval::run(program, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "`\\0 y \ny \n");
    }
}
