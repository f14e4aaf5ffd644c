use tracing::{info, instrument, warn};

use crate::hyperspectral::{
    common::error::Result,
    cube::{rotate_cube_270, BandTable, HyperspectralCube},
    envi::{EnviReader, RasterReader},
    loader::{
        config::LoadConfig,
        layout::{locate_raster, DatasetLayout},
        timing::{PipelineTimings, Timer},
    },
    metadata::AcquisitionMetadata,
    rgb::{PngImageReader, RgbImageReader},
};

/// Loads a capture with the default ENVI and PNG readers.
pub fn load_cube(config: &LoadConfig) -> Result<HyperspectralCube> {
    CubeLoader::new(config.clone()).load()
}

pub struct CubeLoader<R: RasterReader, I: RgbImageReader> {
    raster_reader: R,
    image_reader: I,
    config: LoadConfig,
}

impl CubeLoader<EnviReader, PngImageReader> {
    pub fn new(config: LoadConfig) -> Self {
        Self {
            raster_reader: EnviReader,
            image_reader: PngImageReader,
            config,
        }
    }
}

impl<R: RasterReader, I: RgbImageReader> CubeLoader<R, I> {
    pub fn with_custom(raster_reader: R, image_reader: I, config: LoadConfig) -> Self {
        Self {
            raster_reader,
            image_reader,
            config,
        }
    }

    pub fn load(&self) -> Result<HyperspectralCube> {
        self.load_with_timings().map(|(cube, _)| cube)
    }

    #[instrument(skip(self), fields(dataset = %self.config.dataset))]
    pub fn load_with_timings(&self) -> Result<(HyperspectralCube, PipelineTimings)> {
        let layout = DatasetLayout::new(&self.config.root, &self.config.dataset);
        let mut timings = PipelineTimings::new();

        info!(dir = %layout.dataset_dir().display(), "Loading dataset");

        let raster_path = {
            let _span = tracing::info_span!("locate_raster").entered();
            let timer = Timer::start("locate_raster");
            let path = locate_raster(&layout.results_dir())?;
            timings.record(timer);
            path
        };

        let raster = {
            let _span = tracing::info_span!("read_raster", path = %raster_path.display()).entered();
            let timer = Timer::start("read_raster");
            let raster = self.raster_reader.open(&raster_path)?;
            timings.record(timer);
            raster
        };

        let data = if self.config.rotate {
            let _span = tracing::info_span!("rotate").entered();
            let timer = Timer::start("rotate");
            let rotated = rotate_cube_270(raster.bands.view());
            timings.record(timer);
            rotated
        } else {
            raster.bands
        };

        let bands = BandTable::from_metadata(&raster.metadata);
        if bands.len() != data.dim().0 {
            warn!(
                "Band table has {} wavelengths for {} raster bands",
                bands.len(),
                data.dim().0
            );
        }

        let (scene, preview) = {
            let _span = tracing::info_span!("read_rgb").entered();
            let timer = Timer::start("read_rgb");
            let scene = self.image_reader.read_rgb(&layout.scene_path())?;
            let preview = self.image_reader.read_rgb(&layout.preview_path())?;
            timings.record(timer);
            (scene, preview)
        };

        let metadata = {
            let _span = tracing::info_span!("read_metadata").entered();
            let timer = Timer::start("read_metadata");
            let metadata =
                AcquisitionMetadata::read(&layout.metadata_path(), &self.config.metadata_fields)?;
            timings.record(timer);
            metadata
        };

        let mut cube = HyperspectralCube::new(raster_path, data, bands, scene, preview, metadata);

        if let Some(region) = self.config.reference_region {
            let _span = tracing::info_span!("white_reference").entered();
            let timer = Timer::start("white_reference");
            cube.compute_white_reference(region)?;
            timings.record(timer);
        }

        let (bands, rows, columns) = cube.shape();
        info!(
            bands,
            rows,
            columns,
            acquired_at = %cube.metadata().acquired_at,
            "Dataset loaded"
        );
        timings.log_summary();

        Ok((cube, timings))
    }
}
