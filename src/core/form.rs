//! # Form Model
//!
//! The raw field values exactly as typed, plus the fixed choice lists for the
//! two select fields. Nothing here interprets the values; that is the job of
//! `core::validate`.
//!
//! ```text
//! FormFields (strings)  →  validate()  →  RecommendRequest (typed)
//! ```

/// The seven form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CropYear,
    Season,
    State,
    Area,
    Fertilizer,
    Pesticide,
    AnnualRainfall,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::CropYear,
        FormField::Season,
        FormField::State,
        FormField::Area,
        FormField::Fertilizer,
        FormField::Pesticide,
        FormField::AnnualRainfall,
    ];

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::CropYear => "Crop Year",
            FormField::Season => "Season",
            FormField::State => "State",
            FormField::Area => "Area (hectares)",
            FormField::Fertilizer => "Fertilizer (kg)",
            FormField::Pesticide => "Pesticide (kg)",
            FormField::AnnualRainfall => "Annual Rainfall (mm)",
        }
    }

    /// Key used in the JSON payload.
    pub fn wire_key(self) -> &'static str {
        match self {
            FormField::CropYear => "Crop_Year",
            FormField::Season => "Season",
            FormField::State => "State",
            FormField::Area => "Area",
            FormField::Fertilizer => "Fertilizer",
            FormField::Pesticide => "Pesticide",
            FormField::AnnualRainfall => "Annual_Rainfall",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::CropYear => "e.g. 2024",
            FormField::Season | FormField::State => "←/→ to choose",
            FormField::Area => "e.g. 10.5",
            FormField::Fertilizer => "e.g. 50",
            FormField::Pesticide => "e.g. 5",
            FormField::AnnualRainfall => "optional",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::AnnualRainfall)
    }

    /// The fixed option list for select fields, `None` for free text.
    pub fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            FormField::Season => Some(SEASONS),
            FormField::State => Some(STATES),
            _ => None,
        }
    }

    pub fn next(self) -> FormField {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }
}

pub const SEASONS: &[&str] = &["Kharif", "Rabi", "Whole Year", "Summer", "Winter", "Autumn"];

pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// Raw form values as captured from the input widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub crop_year: String,
    pub season: String,
    pub state: String,
    pub area: String,
    pub fertilizer: String,
    pub pesticide: String,
    pub annual_rainfall: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CropYear => &self.crop_year,
            FormField::Season => &self.season,
            FormField::State => &self.state,
            FormField::Area => &self.area,
            FormField::Fertilizer => &self.fertilizer,
            FormField::Pesticide => &self.pesticide,
            FormField::AnnualRainfall => &self.annual_rainfall,
        }
    }

    /// Returns a copy of the form with one field replaced.
    pub fn with(&self, field: FormField, value: impl Into<String>) -> FormFields {
        let value = value.into();
        let mut next = self.clone();
        match field {
            FormField::CropYear => next.crop_year = value,
            FormField::Season => next.season = value,
            FormField::State => next.state = value,
            FormField::Area => next.area = value,
            FormField::Fertilizer => next.fertilizer = value,
            FormField::Pesticide => next.pesticide = value,
            FormField::AnnualRainfall => next.annual_rainfall = value,
        }
        next
    }
}
