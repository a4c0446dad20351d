pub mod writer;

pub use writer::{write_json_report, write_reports, write_text_report, ReportFormat};
