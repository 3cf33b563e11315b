//! Export - render without decorations, encode and hand to a sink.

use super::CollageCanvas;
use crate::constants::EXPORT_SLOW_MS;
use crate::error::CollageResult;
use crate::export::{ArtifactSink, ExportArtifact, encode_png_data_uri, export_file_name};
use crate::perf::measure_and_log;
use crate::profile_scope;
use chrono::{DateTime, Local, TimeZone};
use image::RgbaImage;
use tracing::{error, info};

impl CollageCanvas {
    /// Export the canvas as PNG stamped with the current local time.
    pub fn export(&mut self, sink: &mut dyn ArtifactSink) -> CollageResult<ExportArtifact> {
        self.export_at(&Local::now(), sink)
    }

    /// Export with an explicit timestamp for the filename.
    pub fn export_at<Tz: TimeZone>(
        &mut self,
        at: &DateTime<Tz>,
        sink: &mut dyn ArtifactSink,
    ) -> CollageResult<ExportArtifact> {
        profile_scope!("export");

        let artifact = measure_and_log("export", EXPORT_SLOW_MS, || -> CollageResult<_> {
            let frame = self.render_for_export()?;
            Ok(ExportArtifact {
                file_name: export_file_name(at),
                data_uri: encode_png_data_uri(&frame)?,
            })
        })
        .inspect_err(|e| error!(error = %e, "Export failed"))?;

        sink.save(&artifact)?;
        info!(file_name = %artifact.file_name, "Canvas exported");
        Ok(artifact)
    }

    /// Render one frame with the export flag set. The flag is cleared on
    /// every path out.
    pub fn render_for_export(&mut self) -> CollageResult<RgbaImage> {
        self.exporting = true;
        let frame = self.render();
        self.exporting = false;
        frame
    }
}
