use std::io;

use bc1_encode::EncodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressorError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("can't decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("can't write DDS file: {0}")]
    Dds(#[from] ddsfile::Error),
    #[error("can't build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
