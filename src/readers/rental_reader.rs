use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::error::Result;
use crate::models::RawRecord;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;

/// Reads raw rental observations from a headered CSV file.
///
/// The reader leaves the timestamp unparsed; calendar parsing and feature
/// derivation belong to the `FeatureDeriver`.
pub struct RentalReader {
    use_mmap: bool,
}

impl RentalReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    /// Memory-map the file instead of streaming it through a buffer.
    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    pub fn read_records(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let records = if self.use_mmap {
            self.read_records_mmap(path)?
        } else {
            self.read_records_buffered(path)?
        };

        debug!(path = %path.display(), records = records.len(), "read raw rental records");
        Ok(records)
    }

    fn read_records_buffered(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.collect_records(csv::Reader::from_reader(reader))
    }

    fn read_records_mmap(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        self.collect_records(csv::Reader::from_reader(&mmap[..]))
    }

    fn collect_records<R: std::io::Read>(&self, mut reader: csv::Reader<R>) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: RawRecord = row?;
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for RentalReader {
    fn default() -> Self {
        Self::new()
    }
}
