use std::fs;

use pixelwire::{PixelImage, Resolution};

/// Write a binary PGM (P5) by hand and read it back through the external
/// image-reading path.
#[test]
fn from_file_reads_grayscale_pgm() {
    let samples: Vec<u8> = vec![0, 64, 128, 192, 255, 100];
    let mut pgm = b"P5\n3 2\n255\n".to_vec();
    pgm.extend_from_slice(&samples);

    let path = std::env::temp_dir().join("pixelwire_from_file_test.pgm");
    fs::write(&path, &pgm).unwrap();

    let image = PixelImage::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(image.resolution(), Resolution::new(3, 2));
    let expected: Vec<u16> = samples.iter().map(|&v| u16::from(v)).collect();
    assert_eq!(image.samples(), &expected[..]);
}

#[test]
fn from_file_surfaces_missing_file_as_error() {
    let path = std::env::temp_dir().join("pixelwire_does_not_exist.pgm");
    assert!(PixelImage::from_file(&path).is_err());
}
