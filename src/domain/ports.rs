use crate::domain::model::Element;

/// Read-only lookup of elements by their chemical symbol.
///
/// Matching is exact and case-sensitive. A missing symbol is `None`, never an error.
pub trait ElementRepository: Send + Sync {
    fn find_by_symbol(&self, symbol: &str) -> Option<&Element>;
}

impl<R: ElementRepository + ?Sized> ElementRepository for &R {
    fn find_by_symbol(&self, symbol: &str) -> Option<&Element> {
        (**self).find_by_symbol(symbol)
    }
}
