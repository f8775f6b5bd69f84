use std::sync::Arc;
use std::time::{Duration, Instant};

use error_diffusion::{
    grayscale, threshold, DitherOptions, Ditherer, Filter, GrayImage, Mode, RgbaImage,
};
use tokio::task::JoinSet;

use crate::error::{ConfigError, RenderError};
use crate::models::{ExportMode, RunConfig};

/// Dithered outputs of one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutput {
    pub name: String,
    /// Present when the export mode includes monochrome
    pub mono: Option<GrayImage>,
    /// Present when the export mode includes color
    pub color: Option<RgbaImage>,
}

/// Everything one render produced
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub grayscale: Option<GrayImage>,
    pub threshold: Option<GrayImage>,
    /// One entry per resolved filter, in configuration order
    pub outputs: Vec<FilterOutput>,
    pub elapsed: Duration,
}

impl RenderReport {
    /// Find a filter's outputs by display name (case-insensitive)
    pub fn output(&self, name: &str) -> Option<&FilterOutput> {
        self.outputs
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }
}

/// Runs every configured filter over a source image.
///
/// Filters are resolved once at construction. Each render fans out one
/// blocking task per filter; the tasks share the source and its luma
/// read-only and own their accumulators and outputs.
#[derive(Debug, Clone)]
pub struct RenderService {
    filters: Vec<Filter>,
    options: DitherOptions,
    export: ExportMode,
    emit_grayscale: bool,
    emit_threshold: bool,
}

impl RenderService {
    pub fn new(config: &RunConfig) -> Result<Self, ConfigError> {
        let filters = config.resolve_filters()?;
        let options = config.dither_options()?;

        tracing::info!(
            filters = filters.len(),
            multiplier = options.multiplier,
            export = ?config.export,
            "Render service ready"
        );

        Ok(Self {
            filters,
            options,
            export: config.export,
            emit_grayscale: config.grayscale,
            emit_threshold: config.threshold,
        })
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn export(&self) -> ExportMode {
        self.export
    }

    /// Dither `source` with every filter.
    ///
    /// Uses spawn_blocking so the diffusion loops never stall the async
    /// runtime. The first failing filter aborts the render.
    pub async fn render(&self, source: RgbaImage) -> Result<RenderReport, RenderError> {
        let started = Instant::now();
        let source = Arc::new(source);
        let luma = Arc::new(grayscale(&source));

        tracing::info!(
            width = source.width(),
            height = source.height(),
            filters = self.filters.len(),
            "Starting render"
        );

        let mut tasks = JoinSet::new();
        for (index, filter) in self.filters.iter().cloned().enumerate() {
            let source = Arc::clone(&source);
            let luma = Arc::clone(&luma);
            let options = self.options;
            let export = self.export;
            tasks.spawn_blocking(move || {
                (index, run_filter(filter, options, export, &source, &luma))
            });
        }

        let mut slots: Vec<Option<FilterOutput>> = vec![None; self.filters.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| RenderError::Task(e.to_string()))?;
            slots[index] = Some(result?);
        }
        let outputs: Vec<FilterOutput> = slots.into_iter().flatten().collect();

        let threshold_image = self.emit_threshold.then(|| threshold(&luma));
        let grayscale_image = if self.emit_grayscale {
            Some(Arc::try_unwrap(luma).unwrap_or_else(|shared| (*shared).clone()))
        } else {
            None
        };

        let elapsed = started.elapsed();
        tracing::info!(
            outputs = outputs.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Render complete"
        );

        Ok(RenderReport {
            grayscale: grayscale_image,
            threshold: threshold_image,
            outputs,
            elapsed,
        })
    }
}

fn run_filter(
    filter: Filter,
    options: DitherOptions,
    export: ExportMode,
    source: &RgbaImage,
    luma: &GrayImage,
) -> Result<FilterOutput, RenderError> {
    let started = Instant::now();
    let name = filter.name().to_string();
    let ditherer = Ditherer::new(filter).options(options);

    let fail = |mode: Mode| {
        let filter = name.clone();
        move |source| RenderError::Dither {
            filter,
            mode,
            source,
        }
    };

    let mono = if export.includes(Mode::Monochrome) {
        Some(ditherer.monochrome(luma).map_err(fail(Mode::Monochrome))?)
    } else {
        None
    };
    let color = if export.includes(Mode::Color) {
        Some(ditherer.color(source).map_err(fail(Mode::Color))?)
    } else {
        None
    };

    tracing::debug!(
        filter = %name,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Filter finished"
    );

    Ok(FilterOutput { name, mono, color })
}
