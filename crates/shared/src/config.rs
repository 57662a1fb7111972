//! Calculator configuration management.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Field;

/// Workspace configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DreConfig {
    /// Calculator options.
    #[serde(default)]
    pub calculator: CalculatorOptions,
    /// Overrides merged on top of the standard field defaults.
    #[serde(default)]
    pub field_defaults: BTreeMap<Field, Decimal>,
}

/// Options accepted by the calculator entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorOptions {
    /// Decimal precision hint. Carried for callers; no formula applies it.
    #[serde(default = "default_decimal")]
    pub decimal: u32,
}

const fn default_decimal() -> u32 {
    0
}

impl DreConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `DRE__*` environment variables (e.g. `DRE__CALCULATOR__DECIMAL`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("DRE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Returns the standard defaults with the configured overrides applied.
    #[must_use]
    pub fn field_defaults(&self) -> FieldDefaults {
        FieldDefaults::standard().with_overrides(&self.field_defaults)
    }
}

/// Values used for optional fields that are absent from a snapshot.
///
/// Defaults only stand in for absent fields. A field that is present but not
/// numeric stays non-numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDefaults(BTreeMap<Field, Decimal>);

impl FieldDefaults {
    /// Fields that read as zero when absent.
    pub const ZERO_DEFAULTED: [Field; 17] = [
        Field::AdmCost,
        Field::SellTeamCost,
        Field::OpCost,
        Field::Depreciation,
        Field::FinancialResult,
        Field::RevExpNoRec,
        Field::Other,
        Field::ExpIrCsll,
        Field::CustomerReceive,
        Field::Stock,
        Field::BillsPay,
        Field::CustomerReceiveYearBefore,
        Field::StockYearBefore,
        Field::BillsPayBefore,
        Field::LeverageQuotient,
        Field::TargetValue,
        Field::Cdi,
    ];

    /// Fields the indicator pass still defaults. Every other indicator
    /// operand is non-numeric when absent.
    pub const INDICATOR_DEFAULTED: [Field; 1] = [Field::Stock];

    /// The standard table: every optional cost, working-capital and leverage
    /// field defaults to zero.
    #[must_use]
    pub fn standard() -> Self {
        Self(
            Self::ZERO_DEFAULTED
                .into_iter()
                .map(|field| (field, Decimal::ZERO))
                .collect(),
        )
    }

    /// An empty table: every absent field is non-numeric.
    #[must_use]
    pub fn none() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns a copy with `overrides` replacing or extending entries.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<Field, Decimal>) -> Self {
        self.0.extend(overrides.iter().map(|(field, value)| (*field, *value)));
        self
    }

    /// Sets the default for one field.
    #[must_use]
    pub fn with(mut self, field: Field, value: Decimal) -> Self {
        self.0.insert(field, value);
        self
    }

    /// Returns a copy keeping only the entries for `fields`.
    #[must_use]
    pub fn restricted_to(&self, fields: &[Field]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(field, _)| fields.contains(*field))
                .map(|(field, value)| (*field, *value))
                .collect(),
        )
    }

    /// Returns the default for `field`, if it has one.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<Decimal> {
        self.0.get(&field).copied()
    }

    /// Number of defaulted fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field has a default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self::standard()
    }
}
