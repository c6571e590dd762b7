use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageBuffer, Rgb};
use tempfile::tempdir;
use tiff::encoder::{TiffEncoder, colortype};

use super::{DefaultImageLoader, ImageLoader, IoError, read_image_meta};
use crate::model::AxisKind;

fn write_pages(path: &Path, pages: usize, width: u32, height: u32) {
    let file = File::create(path).expect("create tiff");
    let mut encoder = TiffEncoder::new(BufWriter::new(file)).expect("encoder");
    let data = vec![0_u8; (width * height) as usize];
    for _ in 0..pages {
        encoder
            .write_image::<colortype::Gray8>(width, height, &data)
            .expect("write page");
    }
}

#[test]
fn raster_images_are_two_dimensional() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("field.png");
    ImageBuffer::<Rgb<u8>, Vec<u8>>::new(6, 4)
        .save(&path)
        .expect("save png");

    let meta = read_image_meta(&path).expect("read png");
    assert_eq!(meta.shape(), vec![6, 4]);
    assert_eq!(
        meta.axis_types(),
        vec![AxisKind::DirectionLon, AxisKind::DirectionLat]
    );
    assert_eq!(meta.title.as_deref(), Some("field.png"));
}

#[test]
fn tiff_pages_become_spectral_channels() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cube.tiff");
    write_pages(&path, 3, 5, 2);

    let meta = read_image_meta(&path).expect("read tiff");
    assert_eq!(meta.shape(), vec![5, 2, 3]);
    assert_eq!(meta.frame_count(AxisKind::Spectral), 3);
}

#[test]
fn header_files_describe_cubes() {
    let dir = tempdir().expect("tempdir");
    let json = dir.path().join("cube.json");
    std::fs::write(
        &json,
        r#"{"dims":[{"axis":"directionLon","size":64},{"axis":"directionLat","size":64},{"axis":"stokes","size":4}],"title":"M42"}"#,
    )
    .expect("write json");
    let yaml = dir.path().join("cube.yaml");
    std::fs::write(
        &yaml,
        "dims:\n  - axis: directionLon\n    size: 8\n  - axis: directionLat\n    size: 8\n  - axis: spectral\n    size: 20\n",
    )
    .expect("write yaml");

    let meta = read_image_meta(&json).expect("json header");
    assert_eq!(meta.frame_count(AxisKind::Stokes), 4);
    assert_eq!(meta.title.as_deref(), Some("M42"));
    assert_eq!(meta.source.as_deref(), Some(json.as_path()));

    let meta = DefaultImageLoader.load(&yaml).expect("yaml header");
    assert_eq!(meta.frame_count(AxisKind::Spectral), 20);
}

#[test]
fn invalid_or_unknown_files_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let flat = dir.path().join("flat.json");
    std::fs::write(&flat, r#"{"dims":[{"axis":"directionLon","size":4}]}"#).expect("write");
    assert!(matches!(read_image_meta(&flat), Err(IoError::Core(_))));

    let fits = dir.path().join("cube.fits");
    std::fs::write(&fits, b"SIMPLE").expect("write");
    assert!(matches!(
        read_image_meta(&fits),
        Err(IoError::UnsupportedFormat(_))
    ));
    assert!(!DefaultImageLoader.supports(&fits));
    assert!(DefaultImageLoader.supports(Path::new("a.TIF")));
    assert!(read_image_meta(dir.path().join("missing.png")).is_err());
}
