#[derive(Debug, Clone)]
pub struct PsnrResult {
    pub overall_psnr: f64,
    pub overall_mse: f64,
    pub max_error: [u8; 3],
}

/// Calculates quality metrics over the RGB channels. Both buffers must be RGBA data.
pub fn calculate_image_metrics(
    original: &[u8],
    decoded: &[u8],
    width: u32,
    height: u32,
) -> PsnrResult {
    if original.len() != decoded.len() {
        panic!("Image buffers must have same length");
    }
    if original.len() != (width * height * 4) as usize {
        panic!("Buffer size doesn't match dimensions");
    }

    let mut channel_mse = [0.0; 3];
    let mut max_error = [0u8; 3];
    let pixel_count = (width * height) as f64;

    for (orig, dec) in original.chunks_exact(4).zip(decoded.chunks_exact(4)) {
        for channel in 0..3 {
            let error = orig[channel].abs_diff(dec[channel]);
            let diff = error as f64 / 255.0;
            channel_mse[channel] += diff * diff;
            max_error[channel] = max_error[channel].max(error);
        }
    }

    channel_mse.iter_mut().for_each(|mse| *mse /= pixel_count);

    let overall_mse = channel_mse.iter().sum::<f64>() / 3.0;
    let overall_psnr = if overall_mse == 0.0 {
        f64::INFINITY
    } else {
        20.0 * (1.0 / overall_mse.sqrt()).log10()
    };

    PsnrResult {
        overall_psnr,
        overall_mse,
        max_error,
    }
}
