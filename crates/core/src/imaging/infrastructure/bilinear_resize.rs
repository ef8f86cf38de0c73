use fast_image_resize as fr;
use image::RgbImage;

use crate::shared::error::MaskError;

/// Resize an RGB image with plain bilinear interpolation.
///
/// Each output pixel blends only the 2x2 source pixels around its centre,
/// whatever the scale factor. No anti-aliasing kernel widening on
/// downscale, so results line up with OpenCV's `INTER_LINEAR`.
pub fn resize_bilinear(
    src: &RgbImage,
    width: u32,
    height: u32,
    stage: &'static str,
) -> Result<RgbImage, MaskError> {
    let src_view = fr::images::ImageRef::new(
        src.width(),
        src.height(),
        src.as_raw(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| MaskError::inference(stage, e))?;
    let mut dst = fr::images::Image::new(width, height, fr::PixelType::U8x3);

    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Interpolation(fr::FilterType::Bilinear));
    fr::Resizer::new()
        .resize(&src_view, &mut dst, Some(&options))
        .map_err(|e| MaskError::inference(stage, e))?;

    RgbImage::from_raw(width, height, dst.buffer().to_vec())
        .ok_or_else(|| MaskError::inference(stage, "resized buffer has wrong length"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[u8]) -> RgbImage {
        let data = values.iter().flat_map(|&v| [v, v, v]).collect();
        RgbImage::from_raw(values.len() as u32, 1, data).unwrap()
    }

    fn reds(img: &RgbImage) -> Vec<u8> {
        img.pixels().map(|p| p.0[0]).collect()
    }

    #[test]
    fn test_halving_samples_neighbours_only() {
        let out = resize_bilinear(&row(&[0, 0, 255, 255]), 2, 1, "test").unwrap();
        assert_eq!(reds(&out), vec![0, 255]);
    }

    #[test]
    fn test_same_size_is_identity() {
        let src = row(&[3, 50, 200, 7]);
        let out = resize_bilinear(&src, 4, 1, "test").unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let src = RgbImage::from_pixel(37, 23, image::Rgb([10, 20, 30]));
        let out = resize_bilinear(&src, 224, 224, "test").unwrap();
        assert_eq!(out.dimensions(), (224, 224));
        assert!(out.pixels().all(|p| p.0 == [10, 20, 30]));
    }
}
