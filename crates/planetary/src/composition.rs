//! Layered planetary composition
//!
//! Each layer is a map of mass fractions summing to 1. The tables are fixed
//! per planet kind so results stay comparable across formation strategies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Species tracked in layer compositions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Iron,
    Nickel,
    Silicon,
    Oxygen,
    Magnesium,
    Aluminium,
    Hydrogen,
    Helium,
    /// Undifferentiated rock
    Rock,
    Other,
}

/// Mass fractions of one layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer(BTreeMap<Element, f64>);

impl Layer {
    pub fn from_fractions(fractions: &[(Element, f64)]) -> Self {
        Self(fractions.iter().copied().collect())
    }

    /// Fraction of `element`, zero if absent
    pub fn fraction(&self, element: Element) -> f64 {
        self.0.get(&element).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Whether the fractions sum to 1 within `tolerance`
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total() - 1.0).abs() <= tolerance
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Element, &f64)> {
        self.0.iter()
    }
}

/// Core, mantle and crust of a differentiated body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layers {
    pub core: Layer,
    pub mantle: Layer,
    pub crust: Layer,
}

impl Layers {
    pub fn all(&self) -> [&Layer; 3] {
        [&self.core, &self.mantle, &self.crust]
    }
}

/// Bulk composition, tagged by planet kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Composition {
    Rocky(Layers),
    GasGiant(Layers),
}

impl Composition {
    /// Earth-like differentiated rocky body: iron-nickel core, silicate
    /// mantle and an oxygen-rich crust.
    pub fn rocky() -> Self {
        use Element::*;
        Composition::Rocky(Layers {
            core: Layer::from_fractions(&[(Iron, 0.85), (Nickel, 0.15)]),
            mantle: Layer::from_fractions(&[
                (Silicon, 0.4),
                (Oxygen, 0.4),
                (Magnesium, 0.15),
                (Other, 0.05),
            ]),
            crust: Layer::from_fractions(&[
                (Silicon, 0.3),
                (Oxygen, 0.5),
                (Aluminium, 0.08),
                (Iron, 0.05),
                (Other, 0.07),
            ]),
        })
    }

    /// Jupiter-like giant: a mixed rock/metal core under a deep
    /// hydrogen-helium envelope.
    pub fn gas_giant() -> Self {
        use Element::*;
        let envelope = Layer::from_fractions(&[(Hydrogen, 0.75), (Helium, 0.25)]);
        Composition::GasGiant(Layers {
            core: Layer::from_fractions(&[(Iron, 0.3), (Silicon, 0.3), (Nickel, 0.2), (Rock, 0.2)]),
            mantle: envelope.clone(),
            crust: envelope,
        })
    }

    pub fn layers(&self) -> &Layers {
        match self {
            Composition::Rocky(layers) | Composition::GasGiant(layers) => layers,
        }
    }

    pub fn is_gas_giant(&self) -> bool {
        matches!(self, Composition::GasGiant(_))
    }

    /// Whether iron dominates the core, which is required for a rocky dynamo
    pub fn has_iron_core(&self) -> bool {
        self.layers().core.fraction(Element::Iron) > 0.5
    }
}
