use std::collections::HashSet;
use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use pagesim::PageId;

// Textbook trace used to show Belady's anomaly
#[allow(dead_code)]
pub const BELADY_TRACE: [PageId; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

// Opening of the classic OS textbook reference string
#[allow(dead_code)]
pub const TEXTBOOK_TRACE: [PageId; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

// Write trace contents into a temporary file
#[allow(dead_code)]
pub fn create_trace_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

// Generate a reproducible random trace
#[allow(dead_code)]
pub fn random_trace(seed: u64, len: usize, num_pages: PageId) -> Vec<PageId> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..num_pages)).collect()
}

#[allow(dead_code)]
pub fn distinct_pages(trace: &[PageId]) -> usize {
    trace.iter().collect::<HashSet<_>>().len()
}
