use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, LargeStringArray, StringArray,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{Column, ConsumptionDataset, RegionRecord};

/// Household spend on alcohol and tobacco by UK region.
const EMBEDDED_TABLE: &str = "\
Region, Alcohol, Tobacco
North, 6.47, 4.03
Yorkshire, 6.13, 3.76
Northeast, 6.19, 3.77
East Midlands, 4.89, 3.34
West Midlands, 5.63, 3.47
East Anglia, 4.52, 2.92
Southeast, 5.89, 3.20
Southwest, 4.79, 2.71
Wales, 5.27, 3.53
Scotland, 6.08, 4.51
Northern Ireland, 4.02, 4.56
";

const REGION_HEADER: &str = "Region";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the built-in regional table.
pub fn embedded_dataset() -> Result<ConsumptionDataset> {
    let dataset = read_csv(EMBEDDED_TABLE.as_bytes()).context("parsing embedded table")?;
    info!("loaded {} regions from embedded table", dataset.len());
    Ok(dataset)
}

/// Load a consumption table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – `Region, Alcohol, Tobacco` header, one region per line
/// * `.json`    – `[{ "Region": "...", "Alcohol": 6.47, "Tobacco": 4.03 }, ...]`
/// * `.parquet` – `Region` string column, `Alcohol` / `Tobacco` float columns
pub fn load_file(path: &Path) -> Result<ConsumptionDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    if dataset.is_empty() {
        bail!("{}: dataset contains no rows", path.display());
    }
    info!("loaded {} regions from {}", dataset.len(), path.display());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<ConsumptionDataset> {
    let file = File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Fields are trimmed, so `North, 6.47, 4.03` and `North,6.47,4.03` parse alike.
fn read_csv<R: Read>(input: R) -> Result<ConsumptionDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in [REGION_HEADER, Column::Alcohol.header(), Column::Tobacco.header()] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }
    debug!("CSV headers: {:?}", headers);

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RegionRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(ConsumptionDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Region": "North", "Alcohol": 6.47, "Tobacco": 4.03 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<ConsumptionDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<RegionRecord> =
        serde_json::from_str(&text).context("parsing JSON records")?;
    debug!("JSON: {} records", records.len());
    Ok(ConsumptionDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas, Polars or [`write_parquet`].
///
/// Expected schema:
/// - `Region`: Utf8 or LargeUtf8
/// - `Alcohol`, `Tobacco`: Float64 or Float32
///
/// Extra columns are ignored. Nulls are rejected.
fn load_parquet(path: &Path) -> Result<ConsumptionDataset> {
    let file = File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        debug!("parquet batch: {} rows", batch.num_rows());

        let regions = named_column(&batch, REGION_HEADER)?;
        let alcohol = named_column(&batch, Column::Alcohol.header())?;
        let tobacco = named_column(&batch, Column::Tobacco.header())?;

        for row in 0..batch.num_rows() {
            let region = extract_string(regions, row)
                .with_context(|| format!("Row {row}: failed to read '{REGION_HEADER}'"))?;
            let alcohol = extract_f64(alcohol, row)
                .with_context(|| format!("Row {row}: failed to read 'Alcohol'"))?;
            let tobacco = extract_f64(tobacco, row)
                .with_context(|| format!("Row {row}: failed to read 'Tobacco'"))?;
            records.push(RegionRecord {
                region,
                alcohol,
                tobacco,
            });
        }
    }

    Ok(ConsumptionDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn named_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema_ref()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .context("expected LargeStringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::Utf8View => Ok(col.as_string_view().value(row).to_string()),
        other => bail!("Expected string column, got {other:?}"),
    }
}

fn extract_f64(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.value(row) as f64)
    } else {
        bail!("Expected Float64 or Float32 column, got {:?}", col.data_type())
    }
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

/// Write the dataset as a single Parquet record batch.
pub fn write_parquet(dataset: &ConsumptionDataset, path: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new(REGION_HEADER, DataType::Utf8, false),
        Field::new(Column::Alcohol.header(), DataType::Float64, false),
        Field::new(Column::Tobacco.header(), DataType::Float64, false),
    ]));

    let regions = StringArray::from(dataset.regions().collect::<Vec<_>>());
    let alcohol = Float64Array::from(dataset.alcohol());
    let tobacco = Float64Array::from(dataset.tobacco());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(regions), Arc::new(alcohol), Arc::new(tobacco)],
    )
    .context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;

    info!("wrote {} regions to {}", dataset.len(), path.display());
    Ok(())
}
