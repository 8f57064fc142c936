//! Interactive read-eval-print loop
//!
//! Reads a line at a time, trims it, and either evaluates it or handles it as
//! a command. The loop continues after both results and errors; it terminates
//! on `quit` / `exit` / `q` (case-insensitive) or end of input.

use calc_parser::calculate;
use std::io::{self, BufRead, Write};

/// Run the interactive loop on stdin/stdout until quit or end of input
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    run_loop(&mut stdin.lock(), &mut io::stdout())
}

/// Loop body, generic over the streams so tests can drive it directly
fn run_loop<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "calc interactive mode")?;
    writeln!(output, "Supported operators: + - * / % ( ) with BODMAS precedence")?;
    writeln!(output, "Enter 'quit' or 'exit' to stop")?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input: terminate gracefully, same as an explicit quit
            writeln!(output)?;
            writeln!(output, "Goodbye!")?;
            return Ok(());
        }

        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        if is_quit_command(expression) {
            writeln!(output, "Goodbye!")?;
            return Ok(());
        }

        match calculate(expression) {
            Ok(result) => writeln!(output, "Result: {}", result)?,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
}

fn is_quit_command(input: &str) -> bool {
    matches!(
        input.to_ascii_lowercase().as_str(),
        "quit" | "exit" | "q"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the loop with scripted input and capture the output
    fn run_script(script: &str) -> String {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run_loop(&mut input, &mut output).expect("repl loop failed");
        String::from_utf8(output).expect("repl output was not utf-8")
    }

    #[test]
    fn test_evaluates_and_loops() {
        let output = run_script("2 + 3\n10 / 4\nquit\n");
        assert!(output.contains("Result: 5"));
        assert!(output.contains("Result: 2"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_continues_after_error() {
        let output = run_script("5 / 0\n1 + 1\nquit\n");
        assert!(output.contains("Error: Division by zero is not allowed"));
        assert!(output.contains("Result: 2"));
    }

    #[test]
    fn test_quit_commands_case_insensitive() {
        for command in ["quit", "exit", "q", "QUIT", "Exit", "Q"] {
            assert!(is_quit_command(command), "command: {}", command);
        }
        assert!(!is_quit_command("quit now"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let output = run_script("\n   \n2 * 2\nq\n");
        assert!(output.contains("Result: 4"));
        // Blank lines produce no Result or Error lines
        assert_eq!(output.matches("Result:").count(), 1);
        assert_eq!(output.matches("Error:").count(), 0);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let output = run_script("1 + 2\n");
        assert!(output.contains("Result: 3"));
        assert!(output.contains("Goodbye!"));
    }
}
