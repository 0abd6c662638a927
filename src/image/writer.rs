mod raster;

pub use raster::RasterImageWriter;
