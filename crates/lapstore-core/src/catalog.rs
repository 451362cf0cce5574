//! Catalog vocabulary: brands, sub-brand lines, filter categories and the
//! option labels the filter panel offers for each category.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    All,
    Asus,
    Lenovo,
    Acer,
    Dell,
    Hp,
    Msi,
}

impl Brand {
    pub const ALL: [Brand; 7] = [
        Brand::All,
        Brand::Asus,
        Brand::Lenovo,
        Brand::Acer,
        Brand::Dell,
        Brand::Hp,
        Brand::Msi,
    ];

    /// Lower-case slug sent to the API and used in page paths.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Brand::All => "all",
            Brand::Asus => "asus",
            Brand::Lenovo => "lenovo",
            Brand::Acer => "acer",
            Brand::Dell => "dell",
            Brand::Hp => "hp",
            Brand::Msi => "msi",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Brand::All => "All",
            Brand::Asus => "ASUS",
            Brand::Lenovo => "Lenovo",
            Brand::Acer => "Acer",
            Brand::Dell => "DELL",
            Brand::Hp => "HP",
            Brand::Msi => "MSI",
        }
    }

    /// Sub-brand labels offered in the filter panel for this brand.
    ///
    /// For [`Brand::All`] each label carries its manufacturer prefix
    /// (`"ASUS ROG"`), which the query serializer strips again.
    #[must_use]
    pub fn sub_brands(self) -> &'static [&'static str] {
        match self {
            Brand::Asus => &["ROG", "TUF", "Zenbook", "Vivobook"],
            Brand::Lenovo => &["Legion", "LoQ", "ThinkPad", "ThinkBook", "Yoga", "IdeaPad"],
            Brand::Acer => &["Predator", "Nitro", "Swift", "Aspire"],
            Brand::Dell => &["Alienware", "G Series", "XPS", "Inspiron", "Latitude", "Precision"],
            Brand::Hp => &["OMEN", "Victus", "Spectre", "ENVY", "Pavilion", "EliteBook"],
            Brand::Msi => &["Stealth", "Katana", "Creator", "Modern"],
            Brand::All => &[
                "ASUS ROG",
                "ASUS TUF",
                "ASUS Zenbook",
                "ASUS Vivobook",
                "Lenovo Legion",
                "Lenovo LoQ",
                "Lenovo ThinkPad",
                "Lenovo ThinkBook",
                "Lenovo Yoga",
                "Lenovo IdeaPad",
                "Acer Predator",
                "Acer Nitro",
                "Acer Swift",
                "Acer Aspire",
                "Dell Alienware",
                "Dell G Series",
                "Dell XPS",
                "Dell Inspiron",
                "Dell Latitude",
                "Dell Precision",
                "HP OMEN",
                "HP Victus",
                "HP Spectre",
                "HP ENVY",
                "HP Pavilion",
                "HP EliteBook",
                "MSI Stealth",
                "MSI Katana",
                "MSI Creator",
                "MSI Modern",
            ],
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Brand {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::ALL
            .into_iter()
            .find(|b| b.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownBrand(s.to_string()))
    }
}

/// A checkbox filter group. Variant order is the order categories appear in
/// the serialized query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    UsageType,
    SubBrand,
    Cpu,
    Vga,
    RamAmount,
    StorageAmount,
    ScreenSize,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 7] = [
        FilterCategory::UsageType,
        FilterCategory::SubBrand,
        FilterCategory::Cpu,
        FilterCategory::Vga,
        FilterCategory::RamAmount,
        FilterCategory::StorageAmount,
        FilterCategory::ScreenSize,
    ];

    /// Query parameter name understood by `GET /laptops/filter`.
    #[must_use]
    pub fn api_key(self) -> &'static str {
        match self {
            FilterCategory::UsageType => "usage_type",
            FilterCategory::SubBrand => "sub_brand",
            FilterCategory::Cpu => "cpu",
            FilterCategory::Vga => "vga",
            FilterCategory::RamAmount => "ram_amount",
            FilterCategory::StorageAmount => "storage_amount",
            FilterCategory::ScreenSize => "screen_size",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            FilterCategory::UsageType => "Usage Type",
            FilterCategory::SubBrand => "Sub-brand",
            FilterCategory::Cpu => "Processor",
            FilterCategory::Vga => "Graphics Card",
            FilterCategory::RamAmount => "RAM Amount",
            FilterCategory::StorageAmount => "Storage Amount",
            FilterCategory::ScreenSize => "Screen Size",
        }
    }

    /// Option labels the filter panel offers. Sub-brand options depend on the
    /// brand being browsed.
    #[must_use]
    pub fn options(self, brand: Brand) -> &'static [&'static str] {
        match self {
            FilterCategory::UsageType => {
                &["Gaming", "Business", "Ultrabook", "Workstation", "General"]
            }
            FilterCategory::SubBrand => brand.sub_brands(),
            FilterCategory::Cpu => &[
                "AMD Ryzen 3",
                "AMD Ryzen 5",
                "AMD Ryzen 7",
                "AMD Ryzen 9",
                "Intel Core i3",
                "Intel Core i5",
                "Intel Core i7",
                "Intel Core i9",
                "Apple M1",
                "Apple M2",
                "Apple M3",
                "Apple M4",
            ],
            FilterCategory::Vga => &[
                "NVIDIA MX",
                "NVIDIA GTX",
                "NVIDIA RTX 20 Series",
                "NVIDIA RTX 30 Series",
                "NVIDIA RTX 40 Series",
                "NVIDIA Quadro",
                "AMD Radeon RX 5000M",
                "AMD Radeon RX 6000M",
                "AMD Radeon RX 7000M",
                "AMD Radeon Pro",
            ],
            FilterCategory::RamAmount => &["8 GB", "16 GB", "32 GB", "64 GB"],
            FilterCategory::StorageAmount => &["256 GB", "512 GB", "1 TB"],
            FilterCategory::ScreenSize => &["13 inch", "14 inch", "15 inch", "16 inch", "17 inch"],
        }
    }
}

impl FromStr for FilterCategory {
    type Err = CatalogError;

    /// Accepts either the camelCase UI name (`ramAmount`) or the wire key
    /// (`ram_amount`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FilterCategory::ALL
            .into_iter()
            .find(|c| {
                c.api_key() == needle || c.api_key().replace('_', "") == needle.to_lowercase()
            })
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_parses_case_insensitively() {
        assert_eq!("ASUS".parse::<Brand>(), Ok(Brand::Asus));
        assert_eq!("all".parse::<Brand>(), Ok(Brand::All));
        assert_eq!(" msi ".parse::<Brand>(), Ok(Brand::Msi));
    }

    #[test]
    fn unknown_brand_is_rejected() {
        assert_eq!(
            "razer".parse::<Brand>(),
            Err(CatalogError::UnknownBrand("razer".to_string()))
        );
    }

    #[test]
    fn all_brand_sub_brands_carry_manufacturer_prefix() {
        for label in Brand::All.sub_brands() {
            assert!(label.contains(' '), "expected prefix in {label}");
        }
        assert_eq!(Brand::All.sub_brands().len(), 30);
    }

    #[test]
    fn category_parses_ui_and_wire_names() {
        assert_eq!("ramAmount".parse::<FilterCategory>(), Ok(FilterCategory::RamAmount));
        assert_eq!("ram_amount".parse::<FilterCategory>(), Ok(FilterCategory::RamAmount));
        assert_eq!("cpu".parse::<FilterCategory>(), Ok(FilterCategory::Cpu));
        assert!("colour".parse::<FilterCategory>().is_err());
    }

    #[test]
    fn categories_sort_in_query_order() {
        let mut shuffled = vec![
            FilterCategory::ScreenSize,
            FilterCategory::Cpu,
            FilterCategory::UsageType,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                FilterCategory::UsageType,
                FilterCategory::Cpu,
                FilterCategory::ScreenSize
            ]
        );
    }

    #[test]
    fn sub_brand_options_follow_brand() {
        assert_eq!(
            FilterCategory::SubBrand.options(Brand::Msi),
            &["Stealth", "Katana", "Creator", "Modern"]
        );
    }
}
