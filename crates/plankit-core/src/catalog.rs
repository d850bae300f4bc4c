//! Built-in furniture catalog.
//!
//! The catalog is an external collaborator from the editor core's
//! perspective: it only supplies templates, and placing one is a pure
//! function of the template (see `PlacedObject::from_template`).
//! Dimensions are footprint width × height plus vertical depth, in
//! centimeters.

/// A placeable furniture template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub color: &'static str,
}

/// A named group of templates shown together in a catalog panel.
#[derive(Debug, Clone, Copy)]
pub struct CatalogCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [CatalogItem],
}

const LIVING: &[CatalogItem] = &[
    CatalogItem { name: "Sofa", width: 200.0, height: 90.0, depth: 85.0, color: "#7a7a7a" },
    CatalogItem { name: "Armchair", width: 80.0, height: 80.0, depth: 75.0, color: "#7a7a7a" },
    CatalogItem { name: "Coffee table", width: 120.0, height: 60.0, depth: 45.0, color: "#cfcfcf" },
    CatalogItem { name: "TV stand", width: 160.0, height: 45.0, depth: 40.0, color: "#7a7a7a" },
];

const BEDROOM: &[CatalogItem] = &[
    CatalogItem { name: "Bed 160", width: 200.0, height: 170.0, depth: 45.0, color: "#8B7355" },
    CatalogItem { name: "Bed 140", width: 200.0, height: 150.0, depth: 45.0, color: "#8B7355" },
    CatalogItem { name: "Nightstand", width: 50.0, height: 45.0, depth: 45.0, color: "#cfcfcf" },
    CatalogItem { name: "Wardrobe", width: 200.0, height: 60.0, depth: 220.0, color: "#A0522D" },
];

const KITCHEN: &[CatalogItem] = &[
    CatalogItem { name: "Stove", width: 60.0, height: 60.0, depth: 85.0, color: "#333333" },
    CatalogItem { name: "Fridge", width: 70.0, height: 70.0, depth: 180.0, color: "#cfcfcf" },
    CatalogItem { name: "Kitchen sink", width: 60.0, height: 50.0, depth: 20.0, color: "#b0b0b0" },
    CatalogItem { name: "Dining table", width: 140.0, height: 90.0, depth: 75.0, color: "#8B7355" },
];

const BATHROOM: &[CatalogItem] = &[
    CatalogItem { name: "Bathtub", width: 170.0, height: 75.0, depth: 60.0, color: "#ffffff" },
    CatalogItem { name: "Shower cabin", width: 90.0, height: 90.0, depth: 200.0, color: "#e0e0e0" },
    CatalogItem { name: "Toilet", width: 40.0, height: 60.0, depth: 40.0, color: "#ffffff" },
    CatalogItem { name: "Washbasin", width: 55.0, height: 45.0, depth: 20.0, color: "#ffffff" },
];

const DOORS_WINDOWS: &[CatalogItem] = &[
    CatalogItem { name: "Door 80", width: 80.0, height: 10.0, depth: 210.0, color: "#FFD028" },
    CatalogItem { name: "Door 90", width: 90.0, height: 10.0, depth: 210.0, color: "#FFD028" },
    CatalogItem { name: "Window 120", width: 120.0, height: 10.0, depth: 150.0, color: "#5BA3E0" },
    CatalogItem { name: "Window 180", width: 180.0, height: 10.0, depth: 150.0, color: "#5BA3E0" },
];

/// The built-in catalog, in display order.
pub fn builtin_catalog() -> &'static [CatalogCategory] {
    &[
        CatalogCategory { id: "living", name: "Living room", items: LIVING },
        CatalogCategory { id: "bedroom", name: "Bedroom", items: BEDROOM },
        CatalogCategory { id: "kitchen", name: "Kitchen", items: KITCHEN },
        CatalogCategory { id: "bathroom", name: "Bathroom", items: BATHROOM },
        CatalogCategory { id: "doors", name: "Doors & windows", items: DOORS_WINDOWS },
    ]
}

/// Looks a template up by name across all categories.
pub fn find_item(name: &str) -> Option<&'static CatalogItem> {
    builtin_catalog()
        .iter()
        .flat_map(|c| c.items.iter())
        .find(|item| item.name == name)
}
