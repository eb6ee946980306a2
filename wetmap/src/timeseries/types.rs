//! Time-series request types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::raster::VisParams;

/// Display name of the Landsat surface reflectance collection.
pub const LANDSAT_COLLECTION: &str = "Landsat TM-ETM-OLI Surface Reflectance";
/// First year with Landsat surface reflectance coverage.
pub const LANDSAT_START_YEAR: i32 = 1984;
/// First year with NAIP aerial coverage.
pub const NAIP_START_YEAR: i32 = 2003;

/// Errors from building or validating a time series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeSeriesError {
    /// Start year after end year.
    #[error("Invalid year range: {start}..{end}")]
    InvalidYearRange {
        /// First requested year.
        start: i32,
        /// Last requested year.
        end: i32,
    },

    /// Month window outside 1..=12 or inverted.
    #[error("Invalid month range: {start}..{end}")]
    InvalidMonthRange {
        /// First month of the seasonal window.
        start: u8,
        /// Last month of the seasonal window.
        end: u8,
    },

    /// The backing imagery service failed.
    #[error("Time series service error: {0}")]
    Service(String),
}

/// Compositing frequency of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    /// One composite per year.
    #[default]
    Year,
    /// One composite per calendar quarter.
    Quarter,
    /// One composite per month.
    Month,
}

impl Frequency {
    /// Date format for bucket labels at this frequency.
    pub fn date_format(&self) -> &'static str {
        match self {
            Frequency::Year => "YYYY",
            Frequency::Quarter => "YYYY-MM",
            Frequency::Month => "YYYY-MM",
        }
    }

    /// All frequencies, in dropdown order.
    pub const ALL: [Frequency; 3] = [Frequency::Year, Frequency::Quarter, Frequency::Month];
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Year => write!(f, "year"),
            Frequency::Quarter => write!(f, "quarter"),
            Frequency::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Frequency::Year),
            "quarter" => Ok(Frequency::Quarter),
            "month" => Ok(Frequency::Month),
            other => Err(format!("Unknown frequency: {}", other)),
        }
    }
}

/// Landsat false/true-color band combinations, in dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandCombo {
    /// Natural color.
    RedGreenBlue,
    /// Color infrared.
    NirRedGreen,
    /// Shortwave infrared composite.
    Swir2Swir1Nir,
    /// Agriculture composite.
    NirSwir1Red,
    /// Vegetation analysis composite.
    Swir2NirRed,
    /// Urban composite.
    Swir2Swir1Red,
    /// Water-penetration composite.
    Swir1NirBlue,
    /// Land/water boundary composite.
    NirSwir1Blue,
    /// Healthy-vegetation composite.
    Swir2NirGreen,
    /// Moisture composite.
    #[default]
    Swir1NirRed,
}

impl BandCombo {
    /// All combinations, in dropdown order.
    pub const ALL: [BandCombo; 10] = [
        BandCombo::RedGreenBlue,
        BandCombo::NirRedGreen,
        BandCombo::Swir2Swir1Nir,
        BandCombo::NirSwir1Red,
        BandCombo::Swir2NirRed,
        BandCombo::Swir2Swir1Red,
        BandCombo::Swir1NirBlue,
        BandCombo::NirSwir1Blue,
        BandCombo::Swir2NirGreen,
        BandCombo::Swir1NirRed,
    ];

    /// Band names in display-channel order.
    pub fn bands(&self) -> [&'static str; 3] {
        match self {
            BandCombo::RedGreenBlue => ["Red", "Green", "Blue"],
            BandCombo::NirRedGreen => ["NIR", "Red", "Green"],
            BandCombo::Swir2Swir1Nir => ["SWIR2", "SWIR1", "NIR"],
            BandCombo::NirSwir1Red => ["NIR", "SWIR1", "Red"],
            BandCombo::Swir2NirRed => ["SWIR2", "NIR", "Red"],
            BandCombo::Swir2Swir1Red => ["SWIR2", "SWIR1", "Red"],
            BandCombo::Swir1NirBlue => ["SWIR1", "NIR", "Blue"],
            BandCombo::NirSwir1Blue => ["NIR", "SWIR1", "Blue"],
            BandCombo::Swir2NirGreen => ["SWIR2", "NIR", "Green"],
            BandCombo::Swir1NirRed => ["SWIR1", "NIR", "Red"],
        }
    }

    /// Display parameters for surface reflectance in this combination.
    pub fn vis(&self) -> VisParams {
        VisParams::rgb(self.bands(), 0.0, 0.4)
    }
}

impl fmt::Display for BandCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.bands();
        write!(f, "{}/{}/{}", a, b, c)
    }
}

impl FromStr for BandCombo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BandCombo::ALL
            .iter()
            .find(|combo| combo.to_string() == s)
            .copied()
            .ok_or_else(|| format!("Unknown band combination: {}", s))
    }
}

/// NAIP aerial band selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NaipBands {
    /// Natural color.
    RedGreenBlue,
    /// Color infrared.
    #[default]
    NirRedGreen,
}

impl NaipBands {
    /// Both selections, in dropdown order.
    pub const ALL: [NaipBands; 2] = [NaipBands::RedGreenBlue, NaipBands::NirRedGreen];

    /// Whether the four-band (RGBN) product is needed.
    pub fn rgbn(&self) -> bool {
        matches!(self, NaipBands::NirRedGreen)
    }

    /// Display parameters for this selection.
    pub fn vis(&self) -> VisParams {
        match self {
            NaipBands::RedGreenBlue => VisParams::rgb(["R", "G", "B"], 0.0, 255.0),
            NaipBands::NirRedGreen => VisParams::rgb(["N", "R", "G"], 0.0, 255.0),
        }
    }
}

impl fmt::Display for NaipBands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaipBands::RedGreenBlue => write!(f, "Red/Green/Blue"),
            NaipBands::NirRedGreen => write!(f, "NIR/Red/Green"),
        }
    }
}

impl FromStr for NaipBands {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Red/Green/Blue" => Ok(NaipBands::RedGreenBlue),
            "NIR/Red/Green" => Ok(NaipBands::NirRedGreen),
            other => Err(format!("Unknown band selection: {}", other)),
        }
    }
}

/// Parameters of one time-series build.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRequest {
    /// First year of the series.
    pub start_year: i32,
    /// Last year of the series, inclusive.
    pub end_year: i32,
    /// First month of the seasonal window, 1-12.
    pub start_month: u8,
    /// Last month of the seasonal window, 1-12, inclusive.
    pub end_month: u8,
    /// Compositing frequency.
    pub frequency: Frequency,
}

impl TimeSeriesRequest {
    /// Validate and build a request.
    pub fn new(
        start_year: i32,
        end_year: i32,
        start_month: u8,
        end_month: u8,
        frequency: Frequency,
    ) -> Result<Self, TimeSeriesError> {
        if start_year > end_year {
            return Err(TimeSeriesError::InvalidYearRange {
                start: start_year,
                end: end_year,
            });
        }
        if start_month < 1 || end_month > 12 || start_month > end_month {
            return Err(TimeSeriesError::InvalidMonthRange {
                start: start_month,
                end: end_month,
            });
        }
        Ok(Self {
            start_year,
            end_year,
            start_month,
            end_month,
            frequency,
        })
    }

    /// Seasonal window start as a zero-padded "MM-01" date fragment.
    pub fn start_date(&self) -> String {
        format!("{:02}-01", self.start_month)
    }

    /// Seasonal window end as a zero-padded "MM-01" date fragment.
    pub fn end_date(&self) -> String {
        format!("{:02}-01", self.end_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_date_format() {
        assert_eq!(Frequency::Year.date_format(), "YYYY");
        assert_eq!(Frequency::Quarter.date_format(), "YYYY-MM");
        assert_eq!(Frequency::Month.date_format(), "YYYY-MM");
    }

    #[test]
    fn test_band_combo_roundtrip() {
        for combo in BandCombo::ALL {
            let parsed: BandCombo = combo.to_string().parse().unwrap();
            assert_eq!(parsed, combo);
        }
        assert!("Foo/Bar/Baz".parse::<BandCombo>().is_err());
    }

    #[test]
    fn test_default_band_combo_matches_dropdown_default() {
        assert_eq!(BandCombo::default(), BandCombo::Swir1NirRed);
        assert_eq!(BandCombo::default().to_string(), "SWIR1/NIR/Red");
    }

    #[test]
    fn test_naip_bands() {
        assert!(NaipBands::NirRedGreen.rgbn());
        assert!(!NaipBands::RedGreenBlue.rgbn());
        assert_eq!(NaipBands::NirRedGreen.vis().bands, vec!["N", "R", "G"]);
    }

    #[test]
    fn test_request_validation() {
        assert!(TimeSeriesRequest::new(1984, 2024, 5, 10, Frequency::Year).is_ok());
        assert!(matches!(
            TimeSeriesRequest::new(2024, 1984, 5, 10, Frequency::Year),
            Err(TimeSeriesError::InvalidYearRange { .. })
        ));
        assert!(matches!(
            TimeSeriesRequest::new(1984, 2024, 10, 5, Frequency::Year),
            Err(TimeSeriesError::InvalidMonthRange { .. })
        ));
        assert!(matches!(
            TimeSeriesRequest::new(1984, 2024, 0, 12, Frequency::Year),
            Err(TimeSeriesError::InvalidMonthRange { .. })
        ));
    }

    #[test]
    fn test_date_fragments_are_zero_padded() {
        let request = TimeSeriesRequest::new(1984, 2024, 5, 10, Frequency::Year).unwrap();
        assert_eq!(request.start_date(), "05-01");
        assert_eq!(request.end_date(), "10-01");
    }
}
