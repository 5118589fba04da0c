use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use argh::FromArgs;
use bc1_encode::{blocks_byte_size, AlphaStatistics, Bc1Encoder, EncodeMode};
use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};
use image::ImageReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;

use crate::error::CompressorError;

#[derive(FromArgs, Debug)]
/// Compresses an image into a BC1 DDS file.
struct Args {
    /// input image (png, bmp or tga)
    #[argh(positional)]
    input: PathBuf,

    /// output DDS file, defaults to the input path with a .dds extension
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// encode every block on the main thread
    #[argh(switch)]
    sequential: bool,

    /// mark the texture as sRGB encoded
    #[argh(switch)]
    srgb: bool,

    /// number of worker threads for parallel encoding
    #[argh(option)]
    threads: Option<usize>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Args = argh::from_env();

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CompressorError> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let start = Instant::now();

    let image = ImageReader::open(&args.input)?.decode()?.to_rgba8();
    let width = image.width();
    let height = image.height();

    info!(
        width,
        height,
        "Image read took: {:.3} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let mode = if args.sequential {
        EncodeMode::Sequential
    } else {
        EncodeMode::Parallel
    };

    let statistics = AlphaStatistics::new();
    let mut block_data = vec![0u8; blocks_byte_size(width, height)];

    let start = Instant::now();

    Bc1Encoder::new(mode)
        .with_observer(&statistics)
        .encode(&mut block_data, image.as_raw(), width, height)?;

    info!(
        ?mode,
        "Compression took: {:.3} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    info!(
        opaque = statistics.opaque(),
        punch_through = statistics.punch_through(),
        translucent = statistics.translucent(),
        "Encoded {} blocks",
        statistics.total()
    );

    if statistics.translucent() > 0 {
        warn!(
            "{} blocks contain partial alpha that BC1 can't represent, their alpha was dropped",
            statistics.translucent()
        );
    }

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("dds"));

    let start = Instant::now();

    write_dds_file(&output, width, height, args.srgb, block_data)?;

    info!(
        path = %output.display(),
        "DDS output to disk took: {:.3} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}

fn write_dds_file(
    path: &Path,
    width: u32,
    height: u32,
    srgb: bool,
    block_data: Vec<u8>,
) -> Result<(), CompressorError> {
    let format = if srgb {
        DxgiFormat::BC1_UNorm_sRGB
    } else {
        DxgiFormat::BC1_UNorm
    };

    let mut dds = Dds::new_dxgi(NewDxgiParams {
        height,
        width,
        depth: None,
        format,
        mipmap_levels: Some(1),
        array_layers: None,
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Straight,
    })?;

    dds.data = block_data;

    let mut file = BufWriter::new(File::create(path)?);
    dds.write(&mut file)?;
    file.flush()?;

    Ok(())
}
