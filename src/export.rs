//! Export orchestration and outcome notification
//!
//! One export attempt produces exactly one outcome through the sink,
//! success or failure, so the shell can surface it however it likes
//! (toast, dialog, log line).

use tracing::{error, info};

use crate::domain::CardRecord;
use crate::engine::{ExportArtifact, ExportError, ExportFormat, ExportRenderer, ExportScale};

/// What the shell is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRequest {
    Raster {
        format: ExportFormat,
        scale: ExportScale,
    },
    Document,
}

/// Terminal outcome of one export attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Succeeded { filename: String },
    Failed { reason: String },
}

/// Receives the outcome of each export attempt
pub trait ExportSink {
    fn notify(&self, outcome: &ExportOutcome);
}

/// Sink that reports outcomes through `tracing`
pub struct LogSink;

impl ExportSink for LogSink {
    fn notify(&self, outcome: &ExportOutcome) {
        match outcome {
            ExportOutcome::Succeeded { filename } => {
                info!(filename = %filename, "Export succeeded");
            }
            ExportOutcome::Failed { reason } => {
                error!(reason = %reason, "Export failed");
            }
        }
    }
}

/// Run one export and notify the sink exactly once.
///
/// Failures are terminal: nothing is retried and no partial artifact is
/// handed out.
pub async fn run_export(
    renderer: &ExportRenderer,
    card: &CardRecord,
    request: ExportRequest,
    sink: &dyn ExportSink,
) -> Result<ExportArtifact, ExportError> {
    let result = match request {
        ExportRequest::Raster { format, scale } => {
            renderer.render_to_image(card, format, scale).await
        }
        ExportRequest::Document => renderer.render_to_document(card).await,
    };

    match &result {
        Ok(artifact) => sink.notify(&ExportOutcome::Succeeded {
            filename: artifact.filename.clone(),
        }),
        Err(err) => sink.notify(&ExportOutcome::Failed {
            reason: err.to_string(),
        }),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::path::Path;

    struct RecordingSink {
        outcomes: Mutex<Vec<ExportOutcome>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            RecordingSink {
                outcomes: Mutex::new(Vec::new()),
            }
        }
    }

    impl ExportSink for RecordingSink {
        fn notify(&self, outcome: &ExportOutcome) {
            self.outcomes.lock().push(outcome.clone());
        }
    }

    fn test_renderer() -> ExportRenderer {
        ExportRenderer::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"))
    }

    #[tokio::test]
    async fn test_failure_notifies_exactly_once() {
        let sink = RecordingSink::new();
        let card = CardRecord::default();
        let result = run_export(
            &test_renderer(),
            &card,
            ExportRequest::Raster {
                format: ExportFormat::Png,
                scale: ExportScale::X1,
            },
            &sink,
        )
        .await;

        assert!(result.is_err());
        let outcomes = sink.outcomes.lock();
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], ExportOutcome::Failed { .. }));
    }

    #[tokio::test]
    async fn test_success_carries_filename_hint() {
        use crate::domain::ImageSource;
        use bytes::Bytes;
        use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
        use std::io::Cursor;

        let img = RgbaImage::from_pixel(16, 16, Rgba([5, 5, 5, 255]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, ImageOutputFormat::Png)
            .unwrap();

        let mut card = CardRecord::default();
        card.name = "Tester".to_string();
        card.image = Some(ImageSource::Memory(Bytes::from(buffer.into_inner())));

        let sink = RecordingSink::new();
        let artifact = run_export(
            &test_renderer(),
            &card,
            ExportRequest::Raster {
                format: ExportFormat::Png,
                scale: ExportScale::X1,
            },
            &sink,
        )
        .await
        .unwrap();

        let outcomes = sink.outcomes.lock();
        assert_eq!(
            outcomes[0],
            ExportOutcome::Succeeded {
                filename: artifact.filename.clone()
            }
        );
        assert_eq!(artifact.filename, "Tester_1x.png");
    }
}
