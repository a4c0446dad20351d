// Reference trace loading
//
// Input format: `num_pages num_frames num_requests` followed by exactly
// `num_requests` page ids, all separated by arbitrary whitespace.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::common::types::PageId;
use crate::trace::error::{Result, TraceError};

/// Options applied while validating a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceOptions {
    /// Reject page ids outside `[0, num_pages)`
    pub strict_pages: bool,
}

/// A fully loaded reference trace and its frame configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Declared page count, only used for optional range validation
    pub num_pages: usize,
    pub num_frames: usize,
    pub requests: Vec<PageId>,
}

impl Trace {
    pub fn new(num_pages: usize, num_frames: usize, requests: Vec<PageId>) -> Result<Self> {
        let trace = Self { num_pages, num_frames, requests };
        trace.validate(TraceOptions::default())?;
        Ok(trace)
    }

    pub fn from_file(path: impl AsRef<Path>, options: TraceOptions) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_with(&content, options)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with(content, TraceOptions::default())
    }

    pub fn parse_with(content: &str, options: TraceOptions) -> Result<Self> {
        let mut tokens = content.split_whitespace().enumerate();

        let num_pages = next_header(&mut tokens, "number of pages")?;
        let num_frames = next_header(&mut tokens, "number of frames")?;
        let num_requests = next_header(&mut tokens, "number of requests")?;

        // The declared count is untrusted until the tokens are actually there
        let mut requests = Vec::new();
        for (position, token) in tokens.by_ref().take(num_requests) {
            requests.push(parse_token::<PageId>(position, token)?);
        }

        if requests.len() < num_requests {
            return Err(TraceError::Truncated {
                expected: num_requests,
                found: requests.len(),
            });
        }

        let trailing = tokens.count();
        if trailing > 0 {
            warn!("Ignoring {} tokens after the last declared request", trailing);
        }

        let trace = Self { num_pages, num_frames, requests };
        trace.validate(options)?;

        debug!(
            "Loaded trace: {} pages, {} frames, {} requests",
            trace.num_pages,
            trace.num_frames,
            trace.requests.len()
        );
        Ok(trace)
    }

    pub fn validate(&self, options: TraceOptions) -> Result<()> {
        if self.num_frames == 0 {
            return Err(TraceError::NoFrames);
        }

        if options.strict_pages {
            if let Some((index, &page)) = self
                .requests
                .iter()
                .enumerate()
                .find(|(_, page)| **page as usize >= self.num_pages)
            {
                return Err(TraceError::PageOutOfRange {
                    index,
                    page,
                    num_pages: self.num_pages,
                });
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

fn next_header<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    field: &'static str,
) -> Result<usize> {
    let (position, token) = tokens.next().ok_or(TraceError::MissingHeader(field))?;
    parse_token(position, token)
}

fn parse_token<T: std::str::FromStr>(position: usize, token: &str) -> Result<T> {
    token.parse().map_err(|_| TraceError::InvalidToken {
        position,
        token: token.to_string(),
    })
}
