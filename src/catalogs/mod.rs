//! Built-in catalogs and pigment sets.
//!
//! Static reference data: two colored-pencil product lines and the base
//! pigment sets offered for mix suggestions. This is data, not logic --
//! the engine receives it as an injected [`Catalog`] and never knows where
//! it came from. User-supplied files (see [`crate::models`]) merge on top.
//!
//! Entry ids are per-brand ordinals, so the same id appears in both
//! product lines; entry identity is always the `(brand, id)` pair.

use color_match::{Catalog, CatalogEntry, Pigment, Rgb};

use crate::error::AppError;

/// (id, name, product code, hex) rows for one brand.
type BrandRows = &'static [(u32, &'static str, &'static str, &'static str)];

const PRISMACOLOR: &str = "Prismacolor";
const POLYCHROMOS: &str = "Polychromos";

#[rustfmt::skip]
const PRISMACOLOR_ROWS: BrandRows = &[
    (1,  "Indigo Blue",        "PC901", "#1C2A44"),
    (2,  "Ultramarine",        "PC902", "#1E48A0"),
    (3,  "True Blue",          "PC903", "#2D6BB4"),
    (4,  "Light Cerulean",     "PC904", "#5E9CD3"),
    (5,  "Aquamarine",         "PC905", "#2E9C8F"),
    (6,  "Copenhagen Blue",    "PC906", "#1F5C8F"),
    (7,  "Peacock Green",      "PC907", "#0E7B6C"),
    (8,  "Dark Green",         "PC908", "#1B6B4A"),
    (9,  "Grass Green",        "PC909", "#3F9C4E"),
    (10, "True Green",         "PC910", "#3BA05A"),
    (11, "Olive Green",        "PC911", "#6C7A3A"),
    (12, "Apple Green",        "PC912", "#8DC04E"),
    (13, "Spring Green",       "PC913", "#A8D46F"),
    (14, "Cream",              "PC914", "#F3E5B2"),
    (15, "Lemon Yellow",       "PC915", "#F5DE45"),
    (16, "Canary Yellow",      "PC916", "#F8D83A"),
    (17, "Sunburst Yellow",    "PC917", "#F5C33B"),
    (18, "Orange",             "PC918", "#EF7E33"),
    (19, "Pale Vermilion",     "PC921", "#E65F40"),
    (20, "Poppy Red",          "PC922", "#DC3E42"),
    (21, "Scarlet Lake",       "PC923", "#D33A3E"),
    (22, "Crimson Red",        "PC924", "#B8283C"),
    (23, "Crimson Lake",       "PC925", "#A02A3C"),
    (24, "Carmine Red",        "PC926", "#C03248"),
    (25, "Light Peach",        "PC927", "#F5C8A8"),
    (26, "Blush Pink",         "PC928", "#EE9FB2"),
    (27, "Pink",               "PC929", "#E87C9E"),
    (28, "Dark Purple",        "PC931", "#4C2C54"),
    (29, "Violet",             "PC932", "#5C4B9B"),
    (30, "Violet Blue",        "PC933", "#3A3E92"),
    (31, "Black",              "PC935", "#1E1E20"),
    (32, "Tuscan Red",         "PC937", "#7A3030"),
    (33, "White",              "PC938", "#FBFBF6"),
    (34, "Light Umber",        "PC941", "#8A6A4E"),
    (35, "Yellow Ochre",       "PC942", "#C89044"),
    (36, "Burnt Ochre",        "PC943", "#A85C3C"),
];

#[rustfmt::skip]
const POLYCHROMOS_ROWS: BrandRows = &[
    (1,  "White",                  "101", "#F8F8F2"),
    (2,  "Light Yellow Glaze",     "104", "#F7E98C"),
    (3,  "Cadmium Yellow",         "107", "#F6C63C"),
    (4,  "Cadmium Orange",         "111", "#EE7E2E"),
    (5,  "Dark Cadmium Orange",    "115", "#E5641F"),
    (6,  "Scarlet Red",            "118", "#D83A35"),
    (7,  "Pale Geranium Lake",     "121", "#D23441"),
    (8,  "Permanent Carmine",      "126", "#AE2A47"),
    (9,  "Magenta",                "133", "#B43A77"),
    (10, "Purple Violet",          "136", "#524097"),
    (11, "Delft Blue",             "141", "#2A3C7C"),
    (12, "Cobalt Blue",            "143", "#2B55A4"),
    (13, "Bluish Turquoise",       "149", "#0E7F98"),
    (14, "Helioblue",              "151", "#2D4E9C"),
    (15, "Cobalt Green",           "156", "#13826B"),
    (16, "Deep Cobalt Green",      "158", "#0F5F4A"),
    (17, "Emerald Green",          "163", "#2E9C5C"),
    (18, "Permanent Green Olive",  "167", "#5C7A38"),
    (19, "May Green",              "170", "#7FBF4D"),
    (20, "Chrome Green Opaque",    "174", "#4A6B34"),
    (21, "Van Dyck Brown",         "176", "#5A4430"),
    (22, "Raw Umber",              "180", "#826B4B"),
    (23, "Dark Naples Ochre",      "184", "#E0B35C"),
    (24, "Terracotta",             "186", "#C26744"),
    (25, "Burnt Ochre",            "187", "#B05A3E"),
    (26, "Venetian Red",           "190", "#A33E2F"),
    (27, "Black",                  "199", "#232323"),
    (28, "Cold Grey I",            "230", "#D8DAD8"),
    (29, "Cold Grey IV",           "233", "#8E9290"),
    (30, "Indanthrene Blue",       "247", "#23356B"),
];

/// (name, hex, primary) rows for one pigment set.
type PigmentRows = &'static [(&'static str, &'static str, bool)];

#[rustfmt::skip]
const OIL_PIGMENTS: PigmentRows = &[
    ("Titanium White",     "#F8F8F5", true),
    ("Ivory Black",        "#1B1B1B", true),
    ("Cadmium Red Medium", "#C4322A", true),
    ("Cadmium Yellow",     "#F2C12E", true),
    ("Ultramarine Blue",   "#2A3C8C", true),
    ("Alizarin Crimson",   "#8E2335", false),
    ("Phthalo Blue",       "#0F3A6E", false),
    ("Yellow Ochre",       "#C39044", false),
    ("Burnt Sienna",       "#8A4A2C", false),
    ("Burnt Umber",        "#5C4030", false),
    ("Sap Green",          "#4E6B2E", false),
    ("Viridian",           "#1E7258", false),
];

#[rustfmt::skip]
const PENCIL_PIGMENTS: PigmentRows = &[
    ("White",          "#FBFBF6", true),
    ("Black",          "#1E1E20", true),
    ("Crimson Red",    "#B8283C", true),
    ("Canary Yellow",  "#F8D83A", true),
    ("True Blue",      "#2D6BB4", true),
    ("Orange",         "#EF7E33", false),
    ("True Green",     "#3BA05A", false),
    ("Violet",         "#5C4B9B", false),
    ("Light Umber",    "#8A6A4E", false),
    ("Cool Grey 50%",  "#8E9290", false),
];

/// Brand names of the built-in catalogs, in load order.
pub fn brands() -> &'static [&'static str] {
    &[PRISMACOLOR, POLYCHROMOS]
}

/// Names of the built-in pigment sets.
pub fn pigment_set_names() -> &'static [&'static str] {
    &["oil", "pencil"]
}

/// All built-in entries, optionally restricted to one brand
/// (case-insensitive).
///
/// # Errors
///
/// [`AppError::UnknownBrand`] if a filter matches no built-in brand.
pub fn builtin_entries(brand_filter: Option<&str>) -> Result<Vec<CatalogEntry>, AppError> {
    if let Some(filter) = brand_filter {
        if !brands().iter().any(|b| b.eq_ignore_ascii_case(filter)) {
            return Err(AppError::UnknownBrand(filter.to_string()));
        }
    }

    let mut entries = Vec::new();
    for (brand, rows) in [(PRISMACOLOR, PRISMACOLOR_ROWS), (POLYCHROMOS, POLYCHROMOS_ROWS)] {
        if let Some(filter) = brand_filter {
            if !brand.eq_ignore_ascii_case(filter) {
                continue;
            }
        }
        for &(id, name, code, hex) in rows {
            entries.push(CatalogEntry::new(id, brand, name, code, parse_hex(hex)?));
        }
    }
    Ok(entries)
}

/// The full built-in catalog.
pub fn builtin_catalog() -> Result<Catalog, AppError> {
    Ok(Catalog::new(builtin_entries(None)?)?)
}

/// A built-in pigment set by name (case-insensitive).
///
/// # Errors
///
/// [`AppError::UnknownPigmentSet`] for anything but "oil" or "pencil".
pub fn pigment_set(name: &str) -> Result<Vec<Pigment>, AppError> {
    let rows = if name.eq_ignore_ascii_case("oil") {
        OIL_PIGMENTS
    } else if name.eq_ignore_ascii_case("pencil") {
        PENCIL_PIGMENTS
    } else {
        return Err(AppError::UnknownPigmentSet(name.to_string()));
    };

    rows.iter()
        .map(|&(name, hex, primary)| {
            let color = parse_hex(hex)?;
            Ok(if primary {
                Pigment::primary(name, color)
            } else {
                Pigment::new(name, color)
            })
        })
        .collect()
}

fn parse_hex(hex: &str) -> Result<Rgb, AppError> {
    Ok(hex.parse::<Rgb>()?)
}
