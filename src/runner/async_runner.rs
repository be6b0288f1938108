use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::{dto::Operation, Ledger};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::debug;

use super::{write_balances, Result};

const BUFFER_SIZE: usize = 1024;

/// Outcome counts of a replay into a shared ledger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub applied: usize,
    pub rejected: usize,
}

/// Replays the operations in the given input file asynchronously and writes
/// the resulting balances to the provided writer.
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let ledger = Arc::new(Ledger::new());
    seed(Arc::clone(&ledger), input_path).await?;

    write_balances(&ledger, writer)?;
    Ok(())
}

/// Replays the operations in the given input file into an existing ledger.
/// Spawns two tasks:
/// * CSV reader - streams operations from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - receives operations from the channel and applies them until the channel is closed.
///
/// Operations are applied one at a time in file order. Rejected operations are
/// counted and skipped; a malformed row stops the replay with an error, leaving
/// the rows before it applied.
pub async fn seed<P>(ledger: Arc<Ledger>, input_path: P) -> Result<SeedReport>
where
    P: AsRef<Path>,
{
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_operations(input_path, tx));
    let processor_handle = tokio::spawn(process_operations(ledger, rx));

    // Let the processor drain what was read before propagating reader errors
    let read_result = reader_handle.await?;
    let report = processor_handle.await?;
    read_result?;

    Ok(report)
}

/// Reads and deserializes operations from a CSV file.
/// Returns them through the provided channel.
async fn read_operations(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Operation>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Operation>();
    while let Some(result) = records.next().await {
        // CSV parsing errors are critical - propagate them
        let operation = result?;
        if tx.send(operation).await.is_err() {
            // Receiver dropped, exit gracefully
            break;
        }
    }
    Ok(())
}

/// Applies operations received through the channel until the reader closes it.
async fn process_operations(ledger: Arc<Ledger>, mut rx: mpsc::Receiver<Operation>) -> SeedReport {
    let mut report = SeedReport::default();
    while let Some(operation) = rx.recv().await {
        match ledger.apply(operation) {
            Ok(()) => report.applied += 1,
            Err(err) => {
                debug!(error = %err, "skipping rejected operation");
                report.rejected += 1;
            }
        }
    }
    report
}
