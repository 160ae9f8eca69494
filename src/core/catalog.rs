use crate::core::{Element, ElementRepository};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::OnceLock;

static CATALOG: OnceLock<ElementCatalog> = OnceLock::new();

/// (atomic number, symbol, weight mantissa, weight scale, name, isotope mass numbers)
type ElementRow = (u32, &'static str, i64, u32, &'static str, &'static [u32]);

// Weights are mantissa/scale pairs so the decimal value is exact.
const STANDARD_ELEMENTS: [ElementRow; 10] = [
    (1, "H", 100794, 5, "Hydrogen", &[1, 2, 3]),
    (2, "He", 4002602, 6, "Helium", &[3, 4]),
    (3, "Li", 6941, 3, "Lithium", &[6, 7]),
    (4, "Be", 9012182, 6, "Beryllium", &[9]),
    (5, "B", 10811, 3, "Boron", &[10, 11]),
    (6, "C", 120107, 4, "Carbon", &[12, 13, 14]),
    (7, "N", 140067, 4, "Nitrogen", &[14, 15]),
    (8, "O", 159994, 4, "Oxygen", &[16, 17, 18]),
    (9, "F", 189984032, 7, "Fluorine", &[19]),
    (10, "Ne", 201797, 4, "Neon", &[20, 21, 22]),
];

/// Immutable collection of chemical elements keyed by symbol.
#[derive(Debug, Clone)]
pub struct ElementCatalog {
    elements: HashMap<String, Element>,
    order: Vec<String>,
}

impl ElementCatalog {
    /// Builds the catalog of hydrogen through neon with their natural isotopes.
    pub fn standard() -> Self {
        let mut elements = HashMap::with_capacity(STANDARD_ELEMENTS.len());
        let mut order = Vec::with_capacity(STANDARD_ELEMENTS.len());

        for (atomic_number, symbol, mantissa, scale, name, mass_numbers) in STANDARD_ELEMENTS {
            let element = Element::new(atomic_number, symbol, Decimal::new(mantissa, scale), name)
                .with_isotopes(mass_numbers);
            order.push(element.symbol.clone());
            elements.insert(element.symbol.clone(), element);
        }

        Self { elements, order }
    }

    /// Process-wide catalog, built on first access and never mutated afterwards.
    pub fn global() -> &'static ElementCatalog {
        CATALOG.get_or_init(|| {
            let catalog = Self::standard();
            tracing::debug!("Element catalog initialised with {} elements", catalog.len());
            catalog
        })
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.elements.get(symbol)
    }

    /// Elements in atomic-number order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.order.iter().filter_map(|symbol| self.elements.get(symbol))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementRepository for ElementCatalog {
    fn find_by_symbol(&self, symbol: &str) -> Option<&Element> {
        ElementCatalog::find_by_symbol(self, symbol)
    }
}
