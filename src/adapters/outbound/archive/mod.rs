/// Archive adapters for reading jar (zip) entry directories
mod zip_reader;

pub use zip_reader::ZipArchiveReader;
