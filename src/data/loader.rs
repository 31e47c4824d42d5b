use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::SchemaError;
use super::model::{
    LaunchDataset, LaunchRecord, OutcomeClass, RawLaunchRow, COL_BOOSTER, COL_CLASS,
    COL_PAYLOAD, COL_SITE,
};

const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; the four launch columns, others ignored
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – string site/booster columns, numeric payload/class columns
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(SchemaError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::debug!(
        "Parsed {} launches from {} ({} sites)",
        dataset.len(),
        path.display(),
        dataset.sites.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(SchemaError::MissingColumn(col).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawLaunchRow> = serde_json::from_str(&text).context("parsing JSON")?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record(i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        // Row numbers continue across batches.
        let offset = records.len();
        append_batch(&batch, offset, &mut records)?;
    }

    Ok(LaunchDataset::from_records(records))
}

fn append_batch(batch: &RecordBatch, offset: usize, out: &mut Vec<LaunchRecord>) -> Result<()> {
    let site_col = column(batch, COL_SITE)?;
    let payload_col = column(batch, COL_PAYLOAD)?;
    let class_col = column(batch, COL_CLASS)?;
    let booster_col = column(batch, COL_BOOSTER)?;

    for row in 0..batch.num_rows() {
        let row_no = offset + row;
        let class = extract_f64(class_col, row, row_no, COL_CLASS)?;
        out.push(LaunchRecord {
            site: extract_string(site_col, row, row_no, COL_SITE)?,
            payload_mass_kg: extract_f64(payload_col, row, row_no, COL_PAYLOAD)?,
            outcome: OutcomeClass::from_value(row_no, class)?,
            booster_category: extract_string(booster_col, row, row_no, COL_BOOSTER)?,
        });
    }
    Ok(())
}

// -- Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a Arc<dyn Array>, SchemaError> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| SchemaError::MissingColumn(name))?;
    Ok(batch.column(idx))
}

fn extract_string(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    column: &'static str,
) -> Result<String, SchemaError> {
    if col.is_null(row) {
        return Err(SchemaError::NullValue { row: row_no, column });
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => Err(unsupported(column, other)),
    }
}

fn extract_f64(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    column: &'static str,
) -> Result<f64, SchemaError> {
    if col.is_null(row) {
        return Err(SchemaError::NullValue { row: row_no, column });
    }
    let any = col.as_any();
    let value = match col.data_type() {
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map(|a| f64::from(a.value(row))),
        DataType::Int64 => any.downcast_ref::<Int64Array>().map(|a| a.value(row) as f64),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| f64::from(a.value(row))),
        DataType::Float64 => any.downcast_ref::<Float64Array>().map(|a| a.value(row)),
        // Numbers stored as text, e.g. a CSV converted without type inference.
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .and_then(|a| a.value(row).trim().parse::<f64>().ok()),
        _ => None,
    };
    value.ok_or_else(|| unsupported(column, col.data_type()))
}

fn unsupported(column: &'static str, data_type: &DataType) -> SchemaError {
    SchemaError::UnsupportedType {
        column,
        data_type: format!("{data_type:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("launch-dash-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_with_extra_columns_loads() {
        let path = temp_file(
            "extra.csv",
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
             1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n\
             2,VAFB SLC-4E,1,9600.0,F9 FT B1036.1,FT\n\
             3,CCAFS LC-40,1,2296.0,F9 B4 B1039.1,B4\n",
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.payload_bounds, Some((0.0, 9600.0)));
        assert_eq!(ds.records[1].outcome, OutcomeClass::Success);
        assert_eq!(ds.records[2].booster_category, "B4");
    }

    #[test]
    fn csv_missing_column_is_a_schema_error() {
        let path = temp_file("missing.csv", "Launch Site,class,Payload Mass (kg)\nA,1,500\n");
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::MissingColumn(COL_BOOSTER))
        );
    }

    #[test]
    fn csv_invalid_class_is_rejected() {
        let path = temp_file(
            "badclass.csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1,500,FT\nA,3,600,FT\n",
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::InvalidClass { row: 1, value: 3.0 })
        );
    }

    #[test]
    fn json_records_load() {
        let path = temp_file(
            "records.json",
            r#"[
                {"Launch Site": "A", "Payload Mass (kg)": 500, "class": 1, "Booster Version Category": "FT"},
                {"Launch Site": "B", "Payload Mass (kg)": 800.5, "class": 0, "Booster Version Category": "B5", "Flight Number": 2}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].payload_mass_kg, 800.5);
        assert_eq!(ds.records[1].outcome, OutcomeClass::Failure);
    }

    #[test]
    fn parquet_with_integer_columns_loads() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Int64, false),
            Field::new(COL_CLASS, DataType::Int32, false),
            Field::new(COL_BOOSTER, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A", "B"])),
                Arc::new(Int64Array::from(vec![500, 1500])),
                Arc::new(Int32Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["FT", "v1.1"])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!("launch-dash-{}-t.parquet", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.payload_bounds, Some((500.0, 1500.0)));
        assert_eq!(ds.records[0].outcome, OutcomeClass::Success);
        assert_eq!(ds.records[1].booster_category, "v1.1");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::UnsupportedExtension("xlsx".into()))
        );
    }
}
