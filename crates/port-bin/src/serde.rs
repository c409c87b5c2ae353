use std::path::Path;

use port_ppm::PpmHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:   &'a Path,
    header: &'a PpmHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, header: &'a PpmHeader) -> Metadata<'a> {
        Metadata { file, header }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 2)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("metadata", &self.header)?;

        state.end()
    }
}
