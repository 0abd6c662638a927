mod raster;

pub use raster::RasterImageReader;
