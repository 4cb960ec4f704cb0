//! Interactive workload selection.
//!
//! Generic over [`BufRead`] / [`Write`] so the binary passes stdin/stdout and
//! tests pass byte buffers.

#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::bench::Workload;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a choice was made")]
    Eof,
}

pub type PromptResult<T> = Result<T, PromptError>;

const MENU: &str = "
============================================================
DSQL ELASTICACHE PERFORMANCE DEMO
============================================================

Please choose your execution type:

1. SIMPLE EXECUTION
   - Tests basic query: SELECT * FROM users1
   - Automatically sets up users1 table
   - Quick demo, minimal setup required

2. COMPLEX EXECUTION
   - Tests complex query with joins and aggregations
   - Requires users and orders tables
   - Demonstrates real-world caching benefits
";

fn read_trimmed<R: BufRead>(input: &mut R) -> PromptResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }
    Ok(line.trim().to_string())
}

/// Shows the menu and asks until the answer is `1` or `2`.
pub fn prompt_workload<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> PromptResult<Workload> {
    writeln!(output, "{MENU}")?;

    loop {
        write!(output, "Enter your choice (1 or 2): ")?;
        output.flush()?;

        match read_trimmed(input)?.as_str() {
            "1" => {
                writeln!(output, "\n[SELECTED] Simple execution")?;
                return Ok(Workload::Simple);
            }
            "2" => {
                writeln!(output, "\n[SELECTED] Complex execution")?;
                return Ok(Workload::Complex);
            }
            _ => writeln!(output, "[ERROR] Invalid choice. Please enter 1 or 2.")?,
        }
    }
}

/// Asks a yes/no question. Anything other than `y` is a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> PromptResult<bool> {
    write!(output, "\n{question} (y/n): ")?;
    output.flush()?;

    Ok(read_trimmed(input)?.eq_ignore_ascii_case("y"))
}
