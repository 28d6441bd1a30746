use crate::core::engine::ConfigEngine;
use crate::core::{Pipeline, Storage};
use crate::domain::model::{
    BatchRecord, BatchResult, BatchRow, BatchSummary, GeneratedFile, RawFields, RowFailure,
};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;
use zip::write::{FileOptions, ZipWriter};

pub const ZIP_FILE_NAME: &str = "olt_configs.zip";

/// CSV 批次：每列一筆開通資料，每筆輸出一個設定檔
pub struct BatchPipeline<S: Storage> {
    pub(crate) storage: S,
    pub(crate) engine: ConfigEngine,
    pub(crate) input: PathBuf,
    pub(crate) zip: bool,
    pub(crate) today: NaiveDate,
}

impl<S: Storage> BatchPipeline<S> {
    pub fn new(storage: S, engine: ConfigEngine, input: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            engine,
            input: input.into(),
            zip: false,
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_zip(mut self, zip: bool) -> Self {
        self.zip = zip;
        self
    }

    /// 整批使用同一天的日期作為預設密碼
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn file_name(row: usize, raw: &RawFields) -> String {
        let serial: String = raw
            .serial_number
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{:03}-{}-{}.txt", row, raw.brand.key(), serial)
    }

    fn build_zip(files: &[GeneratedFile]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        for file in files {
            zip.start_file::<_, ()>(file.file_name.as_str(), FileOptions::default())?;
            zip.write_all(file.text.as_bytes())?;
        }

        // 完成並取回底層 Vec<u8>
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl<S: Storage> Pipeline for BatchPipeline<S> {
    fn extract(&self) -> Result<Vec<BatchRecord>> {
        tracing::debug!("Reading batch input from: {}", self.input.display());
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.input)?;

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<BatchRow>().enumerate() {
            let row_number = index + 1;
            match row {
                Ok(row) => records.push(BatchRecord {
                    row: row_number,
                    fields: Ok(RawFields::from(row)),
                }),
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => records.push(BatchRecord {
                    row: row_number,
                    fields: Err(e.to_string()),
                }),
            }
        }

        Ok(records)
    }

    fn transform(&self, records: Vec<BatchRecord>) -> Result<BatchResult> {
        let mut generated = Vec::new();
        let mut failures = Vec::new();

        for record in records {
            let raw = match record.fields {
                Ok(raw) => raw,
                Err(message) => {
                    failures.push(RowFailure {
                        row: record.row,
                        message,
                    });
                    continue;
                }
            };

            match self.engine.render(&raw, self.today) {
                Ok(config) => generated.push(GeneratedFile {
                    row: record.row,
                    file_name: Self::file_name(record.row, &raw),
                    text: config.text,
                }),
                Err(e) => failures.push(RowFailure {
                    row: record.row,
                    message: e.to_string(),
                }),
            }
        }

        Ok(BatchResult {
            generated,
            failures,
        })
    }

    fn load(&self, result: BatchResult) -> Result<BatchSummary> {
        let output_path = if self.zip {
            tracing::debug!(
                "Creating ZIP file with {} files",
                result.generated.len()
            );
            let zip_data = Self::build_zip(&result.generated)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(ZIP_FILE_NAME, &zip_data)?;
            self.storage.location(ZIP_FILE_NAME)
        } else {
            for file in &result.generated {
                self.storage.write_file(&file.file_name, file.text.as_bytes())?;
            }
            self.storage.location("")
        };

        Ok(BatchSummary {
            output_path,
            generated: result.generated.len(),
            failed: result.failures.len(),
            failures: result.failures,
        })
    }
}
