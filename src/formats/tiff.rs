use std::fs::File;
use std::path::Path;

use crate::model::{AxisKind, Dim, ImageMeta};
use tiff::decoder::Decoder;

use super::util::meta_for_dims;
use super::{IoError, Result};

/// Shape of a TIFF; every extra page is one spectral channel.
pub(crate) fn read_tiff_meta(path: &Path) -> Result<ImageMeta> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let mut pages = 1_usize;

    while decoder.more_images() {
        decoder.next_image()?;
        let (other_width, other_height) = decoder.dimensions()?;
        if other_width != width || other_height != height {
            return Err(IoError::UnsupportedLayout(
                "TIFF pages must have identical dimensions".into(),
            ));
        }
        pages += 1;
    }

    let mut dims = vec![
        Dim::new(AxisKind::DirectionLon, width as usize),
        Dim::new(AxisKind::DirectionLat, height as usize),
    ];
    if pages > 1 {
        dims.push(Dim::new(AxisKind::Spectral, pages));
    }
    Ok(meta_for_dims(path, dims))
}
