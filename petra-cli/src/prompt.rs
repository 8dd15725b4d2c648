//! Line-oriented input helpers
//!
//! Each prompt re-asks until the typed input parses and passes the given
//! check. Parse and range validation live here; the libraries never see
//! malformed input.

use std::io::{self, BufRead, Write};

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt for an integer in `[1, max]`, re-prompting on bad input.
pub fn prompt_index(prompt: &str, max: usize) -> io::Result<usize> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            Ok(_) => println!("Please pick a number between 1 and {}.", max),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Prompt for a non-negative amount, re-prompting on bad input.
pub fn prompt_amount(prompt: &str) -> io::Result<f64> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<f64>() {
            Ok(v) if v >= 0.0 => return Ok(v),
            Ok(_) => println!("The amount cannot be negative."),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Prompt for an arbitrary coefficient, re-prompting on bad input.
pub fn prompt_coefficient(prompt: &str) -> io::Result<f64> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}
