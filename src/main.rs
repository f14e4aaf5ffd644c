use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, bail};
use hsi_cube_rs::hyperspectral::{
    DEFAULT_DISPLAY_CEILING, LoadConfig, PreviewPanels, ReferenceRegion, TiffBandWriter,
    TiffCompression, load_cube,
};
use hsi_cube_rs::logger;

use tracing::info;

/// White tile position in the demo captures.
const DEMO_REGION: ReferenceRegion = ReferenceRegion { x1: 121, x2: 196, y1: 175, y2: 254 };

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(root), Some(dataset)) = (args.next(), args.next()) else {
        bail!("usage: hsi_cube_rs <root> <dataset>");
    };

    info!("Starting hsi_cube_rs...");

    let config = LoadConfig::builder()
        .root(root)
        .dataset(dataset)
        .reference_region(Some(DEMO_REGION))
        .build();

    let cube = load_cube(&config).context("loading dataset")?;

    let (bands, rows, columns) = cube.shape();
    info!("Cube: {} bands, {}x{}", bands, columns, rows);
    info!(
        "Acquired {} at ({:.5}, {:.5}), integration time {}",
        cube.metadata().acquired_at,
        cube.metadata().latitude,
        cube.metadata().longitude,
        cube.metadata().integration_time
    );

    let band = bands.div_ceil(2);
    let panels = PreviewPanels::compose(&cube, band, &[columns / 4, columns / 2], DEFAULT_DISPLAY_CEILING)
        .context("composing preview")?;
    info!("Preview band {} at {:.2}", panels.band, panels.wavelength);

    let mut output = BufWriter::new(File::create("preview_band.tiff").context("creating preview_band.tiff")?);
    panels
        .export_band(&TiffBandWriter, &mut output, TiffCompression::Deflate)
        .context("writing preview_band.tiff")?;
    output.flush()?;
    info!("Preview written to preview_band.tiff");

    Ok(())
}
