//! Beer domain model, closed enumerations, and validation.
//!
//! A beer carries two enumeration codes: a type (Ale, Lager, Malt, Stout) and
//! a style (fifteen named styles). Codes are small positive integers on the
//! wire and in storage; rendering is total, with any unknown code mapping to
//! the literal `"Unknown"`. Validation treats an unknown rendering as a
//! violation, so the rendering functions double as the validation oracle.

use serde::{Deserialize, Serialize};

const ERR_NAME_IS_REQUIRED: &str = "name is required";
const ERR_INVALID_TYPE: &str = "invalid beer type";
const ERR_INVALID_STYLE: &str = "invalid beer style";

const UNKNOWN: &str = "Unknown";

/// Beer type code.
///
/// Transparent newtype over the wire/storage code. Known codes are 1 through
/// 4; every other value renders as `"Unknown"` and fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerType(pub i32);

impl BeerType {
    pub const ALE: BeerType = BeerType(1);
    pub const LAGER: BeerType = BeerType(2);
    pub const MALT: BeerType = BeerType(3);
    pub const STOUT: BeerType = BeerType(4);

    /// Renders the type code as its display name.
    ///
    /// Total over all codes; anything outside the enumeration maps to
    /// `"Unknown"`.
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Ale",
            2 => "Lager",
            3 => "Malt",
            4 => "Stout",
            _ => UNKNOWN,
        }
    }

    /// Whether the code belongs to the closed enumeration.
    pub fn is_known(self) -> bool {
        self.name() != UNKNOWN
    }
}

impl std::fmt::Display for BeerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Beer style code.
///
/// Transparent newtype over the wire/storage code. Known codes are 1 through
/// 15; every other value renders as `"Unknown"` and fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerStyle(pub i32);

impl BeerStyle {
    pub const AMBER: BeerStyle = BeerStyle(1);
    pub const BLONDE: BeerStyle = BeerStyle(2);
    pub const BROWN: BeerStyle = BeerStyle(3);
    pub const CREAM: BeerStyle = BeerStyle(4);
    pub const DARK: BeerStyle = BeerStyle(5);
    pub const PALE: BeerStyle = BeerStyle(6);
    pub const STRONG: BeerStyle = BeerStyle(7);
    pub const WHEAT: BeerStyle = BeerStyle(8);
    pub const RED: BeerStyle = BeerStyle(9);
    pub const IPA: BeerStyle = BeerStyle(10);
    pub const LIME: BeerStyle = BeerStyle(11);
    pub const PILSNER: BeerStyle = BeerStyle(12);
    pub const GOLDEN: BeerStyle = BeerStyle(13);
    pub const FRUIT: BeerStyle = BeerStyle(14);
    pub const HONEY: BeerStyle = BeerStyle(15);

    /// Renders the style code as its display name.
    ///
    /// Total over all codes; anything outside the enumeration maps to
    /// `"Unknown"`.
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Amber",
            2 => "Blonde",
            3 => "Brown",
            4 => "Cream",
            5 => "Dark",
            6 => "Pale",
            7 => "Strong",
            8 => "Wheat",
            9 => "Red",
            10 => "IPA",
            11 => "Lime",
            12 => "Pilsner",
            13 => "Golden",
            14 => "Fruit",
            15 => "Honey",
            _ => UNKNOWN,
        }
    }

    /// Whether the code belongs to the closed enumeration.
    pub fn is_known(self) -> bool {
        self.name() != UNKNOWN
    }
}

impl std::fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Beer domain model.
///
/// An `id` of zero means the beer has not been persisted yet; the store
/// assigns the real identifier on insert. Serializes to the wire shape
/// (`type` for the Rust-side `kind` field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Beer {
    /// Store-assigned identifier; zero until persisted.
    pub id: i64,
    /// Display name, unique within the store.
    pub name: String,
    /// Beer type code.
    #[serde(rename = "type")]
    pub kind: BeerType,
    /// Beer style code.
    pub style: BeerStyle,
}

impl Beer {
    /// Converts an entity model to a beer domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Beer` - The converted beer domain model
    pub fn from_entity(entity: entity::beer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: BeerType(entity.kind),
            style: BeerStyle(entity.style),
        }
    }

    /// Validates the beer's fields, accumulating every violation.
    ///
    /// Checks are independent and do not short-circuit: an empty name, an
    /// unknown type code, and an unknown style code each contribute their own
    /// message, so a caller sees all violations at once.
    ///
    /// # Returns
    /// - `Ok(())` - No violations
    /// - `Err(messages)` - One message per failing field
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut validation_errors = Vec::new();

        if self.name.is_empty() {
            validation_errors.push(ERR_NAME_IS_REQUIRED.to_string());
        }

        if !self.kind.is_known() {
            validation_errors.push(ERR_INVALID_TYPE.to_string());
        }

        if !self.style.is_known() {
            validation_errors.push(ERR_INVALID_STYLE.to_string());
        }

        if validation_errors.is_empty() {
            Ok(())
        } else {
            Err(validation_errors)
        }
    }
}

/// Request body for creating a beer. The id is store-assigned, never supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBeerDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BeerType,
    pub style: BeerStyle,
}

/// Request body for updating a beer.
///
/// All fields are optional; omitted fields keep their current value. The
/// handler overlays this onto the stored beer before re-validating.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBeerDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<BeerType>,
    pub style: Option<BeerStyle>,
}
