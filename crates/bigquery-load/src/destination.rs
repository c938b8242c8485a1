use crate::Table;
use crate::private::Sealed;
use crate::resources::job::load::JobConfigurationLoad;

/// Something a load job can write into.
///
/// Sealed, [`Table`] is the only destination.
pub trait Destination: Sealed {
    /// Points `conf` at this destination, overwriting the destination table and both
    /// dispositions with the current values from `self`.
    fn customize_load_destination(&self, conf: &mut JobConfigurationLoad);
}

impl Sealed for Table {}

impl Destination for Table {
    #[inline]
    fn customize_load_destination(&self, conf: &mut JobConfigurationLoad) {
        self.customize_load(conf)
    }
}

impl<T: Destination + ?Sized> Destination for &T {
    #[inline]
    fn customize_load_destination(&self, conf: &mut JobConfigurationLoad) {
        T::customize_load_destination(self, conf)
    }
}
