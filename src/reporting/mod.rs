pub mod events;
pub mod assembler;
pub mod formatter;
pub mod sink;

pub use events::ReportEvent;
pub use assembler::{collect_findings, generate_report_data, generate_report_data_with_events};
pub use formatter::{render_report, ReportSummary};
pub use sink::ReportSink;
