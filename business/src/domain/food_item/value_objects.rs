use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Dairy,
    Meat,
    Vegetables,
    Fruits,
    Grains,
    Beverages,
    Snacks,
    Frozen,
    Canned,
    Condiments,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 11] = [
        FoodCategory::Dairy,
        FoodCategory::Meat,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Grains,
        FoodCategory::Beverages,
        FoodCategory::Snacks,
        FoodCategory::Frozen,
        FoodCategory::Canned,
        FoodCategory::Condiments,
        FoodCategory::Other,
    ];

    /// Lenient lookup used for presentation: unknown ids render as `Other`.
    pub fn from_id_or_other(id: &str) -> Self {
        id.parse().unwrap_or(FoodCategory::Other)
    }

    pub fn id(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "dairy",
            FoodCategory::Meat => "meat",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Grains => "grains",
            FoodCategory::Beverages => "beverages",
            FoodCategory::Snacks => "snacks",
            FoodCategory::Frozen => "frozen",
            FoodCategory::Canned => "canned",
            FoodCategory::Condiments => "condiments",
            FoodCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "Dairy & Eggs",
            FoodCategory::Meat => "Meat & Fish",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Fruits => "Fruits",
            FoodCategory::Grains => "Grains & Bread",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Frozen => "Frozen Foods",
            FoodCategory::Canned => "Canned Goods",
            FoodCategory::Condiments => "Condiments",
            FoodCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "🥛",
            FoodCategory::Meat => "🥩",
            FoodCategory::Vegetables => "🥬",
            FoodCategory::Fruits => "🍎",
            FoodCategory::Grains => "🍞",
            FoodCategory::Beverages => "🥤",
            FoodCategory::Snacks => "🍿",
            FoodCategory::Frozen => "🧊",
            FoodCategory::Canned => "🥫",
            FoodCategory::Condiments => "🧂",
            FoodCategory::Other => "📦",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodCategory::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| format!("Invalid food category: {}", s))
    }
}
