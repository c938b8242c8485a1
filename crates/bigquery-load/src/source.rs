use crate::private::Sealed;
use crate::resources::job::load::{JobConfigurationLoad, SourceFormat};

/// Something a load job can read from.
pub trait Source: Sealed {
    /// Fills in the source side of `conf`.
    fn customize_load_source(&self, conf: &mut JobConfigurationLoad);
}

/// A set of Cloud Storage objects to load, by `gs://bucket/object` uri. Uris may contain a
/// single '*' wildcard.
#[derive(Debug, Clone, PartialEq)]
pub struct GcsReference {
    uris: Vec<Box<str>>,
    /// Defaults to CSV, autodetecting the schema.
    pub source_format: SourceFormat,
    /// Whether values not present in the table schema are ignored rather than treated as
    /// bad records.
    pub ignore_unknown_values: bool,
}

impl GcsReference {
    pub fn new<I>(uris: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Box<str>>,
    {
        Self {
            uris: uris.into_iter().map(Into::into).collect(),
            source_format: SourceFormat::default(),
            ignore_unknown_values: false,
        }
    }

    pub fn with_format(mut self, source_format: SourceFormat) -> Self {
        self.source_format = source_format;
        self
    }

    #[inline]
    pub fn uris(&self) -> &[Box<str>] {
        &self.uris
    }
}

impl Sealed for GcsReference {}

impl Source for GcsReference {
    fn customize_load_source(&self, conf: &mut JobConfigurationLoad) {
        conf.source_uris = self.uris.clone();
        conf.source_format = self.source_format.clone();
        conf.ignore_unknown_values = self.ignore_unknown_values;

        debug!(message = "set load job source", uris = self.uris.len());
    }
}

impl<T: Source + ?Sized> Source for &T {
    #[inline]
    fn customize_load_source(&self, conf: &mut JobConfigurationLoad) {
        T::customize_load_source(self, conf)
    }
}
