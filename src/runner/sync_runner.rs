use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::{write_balances, Result};
use crate::{csv_utils::read_csv, dto::Operation, Ledger};

/// Replays the operations in the given input file and writes the resulting
/// balances to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing operations
/// * `writer` - Where to write the account balances (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let ledger = Ledger::new();

    for (row, operation) in read_csv::<Operation, _>(input_path)?.enumerate() {
        // CSV parsing errors are critical - propagate them
        let operation = operation?;
        // Rejected operations are skipped
        if let Err(err) = ledger.apply(operation) {
            debug!(row, error = %err, "skipping rejected operation");
        }
    }

    write_balances(&ledger, writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_input() -> Result<()> {
        let mut output = Vec::new();
        run("data/example_ops.csv", &mut output)?;

        let expected = "id,balance
1,70
2,1.5
";
        assert_eq!(String::from_utf8(output)?, expected);
        Ok(())
    }

    #[test]
    fn test_malformed_input_is_fatal() -> Result<()> {
        let path = std::env::temp_dir()
            .join(format!("bankomat_sync_malformed_{}.csv", std::process::id()));
        std::fs::write(&path, "op,id,amount\ncreate,1,\ndeposit,one,5\n")?;

        let mut output = Vec::new();
        assert!(run(&path, &mut output).is_err());
        assert!(output.is_empty());

        std::fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_missing_input_file() {
        let mut output = Vec::new();
        assert!(run("data/does_not_exist.csv", &mut output).is_err());
    }
}
