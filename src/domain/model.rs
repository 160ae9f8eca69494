use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// A pure substance whose atoms all carry the same number of protons.
///
/// Atomic number, symbol, weight and name are each unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    #[serde(serialize_with = "serialize_decimal_number")]
    pub atomic_weight: Decimal,
    pub name: String,
    pub isotopes: Vec<Isotope>,
}

/// A variant of an element identified by its mass number (protons + neutrons).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Isotope {
    pub mass_number: u32,
    pub name: String,
}

impl Element {
    pub fn new(atomic_number: u32, symbol: &str, atomic_weight: Decimal, name: &str) -> Self {
        Self {
            atomic_number,
            symbol: symbol.to_string(),
            atomic_weight,
            name: name.to_string(),
            isotopes: Vec::new(),
        }
    }

    /// Appends an isotope named `<Name>-<massNumber>`.
    ///
    /// A mass number already recorded for this element is ignored.
    pub fn add_isotope(&mut self, mass_number: u32) {
        if self.isotope(mass_number).is_some() {
            tracing::warn!(
                "Duplicate isotope {} ignored for {}",
                mass_number,
                self.symbol
            );
            return;
        }

        self.isotopes.push(Isotope {
            mass_number,
            name: format!("{}-{}", self.name, mass_number),
        });
    }

    pub fn with_isotopes(mut self, mass_numbers: &[u32]) -> Self {
        for &mass_number in mass_numbers {
            self.add_isotope(mass_number);
        }
        self
    }

    pub fn isotope(&self, mass_number: u32) -> Option<&Isotope> {
        self.isotopes.iter().find(|i| i.mass_number == mass_number)
    }

    pub fn mass_numbers(&self) -> Vec<u32> {
        self.isotopes.iter().map(|i| i.mass_number).collect()
    }
}

// Emit the weight as a JSON number carrying the literal digits, not a quoted string.
fn serialize_decimal_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number: serde_json::Number = value
        .normalize()
        .to_string()
        .parse()
        .map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nitrogen() -> Element {
        Element::new(7, "N", Decimal::new(140067, 4), "Nitrogen").with_isotopes(&[14, 15])
    }

    #[test]
    fn test_isotope_names_are_derived_from_element() {
        let element = nitrogen();
        assert_eq!(element.isotope(14).unwrap().name, "Nitrogen-14");
        assert_eq!(element.isotope(15).unwrap().name, "Nitrogen-15");
        assert!(element.isotope(16).is_none());
    }

    #[test]
    fn test_duplicate_mass_number_is_ignored() {
        let mut element = nitrogen();
        element.add_isotope(14);
        assert_eq!(element.mass_numbers(), vec![14, 15]);
    }

    #[test]
    fn test_new_element_has_empty_isotope_list() {
        let element = Element::new(4, "Be", Decimal::new(9012182, 6), "Beryllium");
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["isotopes"], serde_json::json!([]));
    }

    #[test]
    fn test_serializes_camel_case_with_numeric_weight() {
        let json = serde_json::to_string(&nitrogen()).unwrap();
        assert!(json.contains("\"atomicNumber\":7"));
        assert!(json.contains("\"atomicWeight\":14.0067"));
        assert!(json.contains("{\"massNumber\":14,\"name\":\"Nitrogen-14\"}"));
    }
}
