//! Symbol registry: the six fixed mandalas.
//!
//! Each element has exactly one mandala. Shadow has its own, kept apart from
//! the elemental table since it is not keyed by [`Element`].

use serde::Serialize;

use crate::types::Element;

/// A fixed symbol record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mandala {
    /// Human-readable name
    pub label: &'static str,
    /// Color associated with the mandala
    pub color: &'static str,
    /// Display glyph
    pub symbol: &'static str,
}

/// Elemental mandalas, in [`Element::all`] order.
pub static MANDALAS: [Mandala; 5] = [
    Mandala {
        label: "Fire",
        color: "Red",
        symbol: "🔥",
    },
    Mandala {
        label: "Water",
        color: "Blue",
        symbol: "💧",
    },
    Mandala {
        label: "Air",
        color: "Yellow",
        symbol: "🌬️",
    },
    Mandala {
        label: "Earth",
        color: "Green",
        symbol: "🌱",
    },
    Mandala {
        label: "Ether",
        color: "White",
        symbol: "💡",
    },
];

/// The mandala of everything not yet acknowledged.
pub static SHADOW_MANDALA: Mandala = Mandala {
    label: "Shadow",
    color: "Black",
    symbol: "🌑",
};

/// Look up the mandala for an element.
pub fn mandala_for(element: Element) -> &'static Mandala {
    match element {
        Element::Fire => &MANDALAS[0],
        Element::Water => &MANDALAS[1],
        Element::Air => &MANDALAS[2],
        Element::Earth => &MANDALAS[3],
        Element::Ether => &MANDALAS[4],
    }
}
