//! Records command - prints the filtered patient list as JSON

use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::domain::patient::{PatientRecord, RecordFilter, StatusFilter};
use crate::infrastructure::patient::InMemoryPatientRecordRepository;
use crate::infrastructure::services::RecordService;

/// Arguments for the records command
#[derive(Args, Clone, Default)]
pub struct RecordsArgs {
    /// Case-insensitive match on patient ID or name
    #[arg(long, default_value = "")]
    pub query: String,

    /// `all`, `Benign`, `Moderate Risk` or `High Risk`
    #[arg(long, default_value = "all")]
    pub status: String,
}

#[derive(Debug, Serialize)]
struct RecordsOutput {
    total: usize,
    total_records: usize,
    records: Vec<PatientRecord>,
}

/// Print the matching seeded records to stdout
pub async fn run(args: RecordsArgs) -> anyhow::Result<()> {
    let output = search(&args).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn search(args: &RecordsArgs) -> anyhow::Result<RecordsOutput> {
    let status: StatusFilter = args.status.parse().map_err(anyhow::Error::msg)?;
    let filter = RecordFilter::new(args.query.clone(), status);

    let service = RecordService::new(Arc::new(InMemoryPatientRecordRepository::seeded()));
    let search = service.search(&filter).await?;

    Ok(RecordsOutput {
        total: search.records.len(),
        total_records: search.total_records,
        records: search.records,
    })
}
