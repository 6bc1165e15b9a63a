/// Progress notifications emitted while the report is assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    ImagesDiscovered {
        count: usize,
    },
    ImageStarted {
        /// 1-based position of the image in the stream.
        index: usize,
        total: usize,
        repo_name: String,
        digest: String,
    },
    ImageCompleted {
        /// Reportable findings contributed by this image.
        findings: usize,
    },
}
