//! Display capability
//!
//! The pipeline hands its final cloud to a [`PointSink`]. Windowing and
//! rendering belong to the sink implementation; nothing is returned.

use crate::error::CoreResult;
use crate::normalize::NormalizedCloud;

/// Consumer of normalized point clouds
pub trait PointSink {
    /// Display (or otherwise consume) the cloud. Blocks until done.
    fn show(&mut self, cloud: &NormalizedCloud) -> CoreResult<()>;
}

impl<S: PointSink + ?Sized> PointSink for &mut S {
    fn show(&mut self, cloud: &NormalizedCloud) -> CoreResult<()> {
        (**self).show(cloud)
    }
}

/// Keeps a copy of every cloud it is shown
#[derive(Debug, Default)]
pub struct RecordingSink {
    shown: Vec<NormalizedCloud>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently shown cloud
    pub fn last(&self) -> Option<&NormalizedCloud> {
        self.shown.last()
    }

    pub fn shown(&self) -> &[NormalizedCloud] {
        &self.shown
    }
}

impl PointSink for RecordingSink {
    fn show(&mut self, cloud: &NormalizedCloud) -> CoreResult<()> {
        self.shown.push(cloud.clone());
        Ok(())
    }
}

/// Logs a one-line description of the cloud instead of drawing it
#[derive(Debug, Default)]
pub struct LogSink;

impl PointSink for LogSink {
    fn show(&mut self, cloud: &NormalizedCloud) -> CoreResult<()> {
        match cloud.bounds() {
            Some((min, max)) => tracing::info!(
                points = cloud.len(),
                min = ?[min.x, min.y, min.z],
                max = ?[max.x, max.y, max.z],
                color = ?cloud.color.map(|c| c.to_hex()),
                "Normalized cloud ready"
            ),
            None => tracing::info!("Normalized cloud is empty"),
        }
        Ok(())
    }
}
