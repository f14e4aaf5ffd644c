//! Spatial rotation of band images
//!
//! Rotations follow the counter-clockwise convention: rotating an (H, W)
//! image by 270 degrees yields a (W, H) image with
//! `out[i][j] = in[H - 1 - j][i]`.

use ndarray::{s, Array2, Array3, ArrayView2, ArrayView3};

/// Rotates every band of a (band, row, column) cube by 270 degrees.
pub fn rotate_cube_270(cube: ArrayView3<f32>) -> Array3<f32> {
    cube.permuted_axes([0, 2, 1])
        .slice_move(s![.., .., ..;-1])
        .as_standard_layout()
        .into_owned()
}

pub fn rotate_image_270<T: Clone>(image: ArrayView2<T>) -> Array2<T> {
    image.reversed_axes().slice_move(s![.., ..;-1]).as_standard_layout().into_owned()
}

/// Inverse of [`rotate_image_270`].
pub fn rotate_image_90<T: Clone>(image: ArrayView2<T>) -> Array2<T> {
    image.reversed_axes().slice_move(s![..;-1, ..]).as_standard_layout().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array};

    #[test]
    fn test_rotate_270_small() {
        let image = array![[1, 2, 3], [4, 5, 6]];
        let rotated = rotate_image_270(image.view());

        assert_eq!(rotated, array![[4, 1], [5, 2], [6, 3]]);
    }

    #[test]
    fn test_rotate_90_small() {
        let image = array![[1, 2, 3], [4, 5, 6]];
        let rotated = rotate_image_90(image.view());

        assert_eq!(rotated, array![[3, 6], [2, 5], [1, 4]]);
    }

    #[test]
    fn test_270_then_90_round_trip() {
        let image = Array::from_shape_fn((5, 7), |(r, c)| (r * 7 + c) as f32);
        let restored = rotate_image_90(rotate_image_270(image.view()).view());

        assert_eq!(restored, image);
    }

    #[test]
    fn test_rotate_cube_matches_per_band_rotation() {
        let cube = Array::from_shape_fn((3, 4, 6), |(b, r, c)| (b * 100 + r * 10 + c) as f32);
        let rotated = rotate_cube_270(cube.view());

        assert_eq!(rotated.dim(), (3, 6, 4));
        for b in 0..3 {
            let expected = rotate_image_270(cube.index_axis(ndarray::Axis(0), b));
            assert_eq!(rotated.index_axis(ndarray::Axis(0), b), expected);
        }
    }
}
