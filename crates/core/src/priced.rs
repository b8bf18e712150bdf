//! Price key shared by the catalog and the sort routines.

/// Anything that can be ordered by a floating-point price.
///
/// Sorting only ever looks at this key; ties between equal prices carry no
/// other ordering information.
pub trait Priced {
    fn price(&self) -> f64;
}

impl Priced for f64 {
    fn price(&self) -> f64 {
        *self
    }
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price(&self) -> f64 {
        (**self).price()
    }
}
