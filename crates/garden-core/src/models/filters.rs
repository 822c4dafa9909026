//! Crop search and category filtering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CropInfo;

/// Coarse crop categories used by the crop browser.
///
/// Membership is a keyword heuristic on the crop name, not taxonomy data from
/// the planting calendar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    /// Every crop
    #[default]
    All,
    /// Common vegetables
    Vegetables,
    /// Culinary herbs
    Herbs,
    /// Fruits and melons
    Fruits,
}

impl CropCategory {
    /// Name keywords that place a crop in this category. Empty for `All`.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            CropCategory::All => &[],
            CropCategory::Vegetables => &[
                "Tomato", "Pepper", "Cucumber", "Lettuce", "Carrot", "Broccoli", "Cabbage",
            ],
            CropCategory::Herbs => &[
                "Basil", "Parsley", "Mint", "Cilantro", "Thyme", "Rosemary", "Dill",
            ],
            CropCategory::Fruits => &["Strawberry", "Watermelon", "Cantaloupe", "Raspberry"],
        }
    }

    /// Whether `crop` belongs to this category.
    pub fn matches(&self, crop: &CropInfo) -> bool {
        match self {
            CropCategory::All => true,
            _ => self
                .keywords()
                .iter()
                .any(|keyword| crop.name_contains(keyword)),
        }
    }

    /// Human-readable label for the category tabs.
    pub fn label(&self) -> &'static str {
        match self {
            CropCategory::All => "All Plants",
            CropCategory::Vegetables => "Vegetables",
            CropCategory::Herbs => "Herbs",
            CropCategory::Fruits => "Fruits",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::All => "all",
            CropCategory::Vegetables => "vegetables",
            CropCategory::Herbs => "herbs",
            CropCategory::Fruits => "fruits",
        }
    }
}

impl FromStr for CropCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CropCategory::All),
            "vegetables" => Ok(CropCategory::Vegetables),
            "herbs" => Ok(CropCategory::Herbs),
            "fruits" => Ok(CropCategory::Fruits),
            _ => Err(format!("Invalid crop category: {s}")),
        }
    }
}

/// Lazily filter `crops` by a case-insensitive name query and a category.
///
/// Source order is preserved. An empty query matches every named crop;
/// rows without a `Crop` name never match.
///
/// # Examples
///
/// ```rust
/// use garden_core::models::{filter_crops, CropCategory, CropInfo};
///
/// let crops = vec![CropInfo::named("Tomato"), CropInfo::named("Potato")];
/// let names: Vec<_> = filter_crops(&crops, "tom", CropCategory::All)
///     .map(|crop| crop.name.as_str())
///     .collect();
/// assert_eq!(names, ["Tomato"]);
/// ```
pub fn filter_crops<'a>(
    crops: &'a [CropInfo],
    query: &str,
    category: CropCategory,
) -> impl Iterator<Item = &'a CropInfo> + 'a {
    let query = query.to_lowercase();
    crops.iter().filter(move |crop| {
        !crop.name.is_empty()
            && crop.name.to_lowercase().contains(&query)
            && category.matches(crop)
    })
}
