//! Return-on-investment estimator
//!
//! Raw ROI is discounted by implementation time (5% per month) and by the
//! risk level (10% per level).

use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};

pub const MAX_IMPLEMENTATION_MONTHS: u32 = 12;
pub const MIN_RISK_LEVEL: u32 = 1;
pub const MAX_RISK_LEVEL: u32 = 5;

const MONTHLY_DISCOUNT: f64 = 0.05;
const RISK_DISCOUNT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub initial_investment: f64,
    pub annual_savings: f64,
    pub implementation_months: u32,
    pub risk_level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiEstimate {
    pub raw_roi: f64,
    pub time_factor: f64,
    pub risk_factor: f64,
    pub adjusted_roi: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self::for_industry("retail")
    }
}

impl RoiInputs {
    /// Typical figures for an industry; unknown industries get the retail preset
    pub fn for_industry(industry: &str) -> Self {
        let (initial_investment, annual_savings, implementation_months, risk_level) =
            match industry {
                "finanzas" => (35_000.0, 120_000.0, 4, 3),
                "manufactura" => (40_000.0, 95_000.0, 5, 2),
                "energia" => (45_000.0, 110_000.0, 6, 3),
                "salud" => (30_000.0, 75_000.0, 4, 4),
                "agricultura" => (25_000.0, 65_000.0, 3, 2),
                _ => (20_000.0, 50_000.0, 3, 2),
            };

        Self {
            initial_investment,
            annual_savings,
            implementation_months,
            risk_level,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_investment.is_finite() || self.initial_investment <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "initial investment must be positive, got {}",
                self.initial_investment
            )));
        }
        if !self.annual_savings.is_finite() {
            return Err(AppError::InvalidInput("annual savings must be a number".to_string()));
        }
        if self.implementation_months > MAX_IMPLEMENTATION_MONTHS {
            return Err(AppError::InvalidInput(format!(
                "implementation time must be 0-{} months, got {}",
                MAX_IMPLEMENTATION_MONTHS, self.implementation_months
            )));
        }
        if !(MIN_RISK_LEVEL..=MAX_RISK_LEVEL).contains(&self.risk_level) {
            return Err(AppError::InvalidInput(format!(
                "risk level must be {}-{}, got {}",
                MIN_RISK_LEVEL, MAX_RISK_LEVEL, self.risk_level
            )));
        }
        Ok(())
    }

    pub fn estimate(&self) -> Result<RoiEstimate> {
        self.validate()?;

        let raw_roi =
            (self.annual_savings - self.initial_investment) / self.initial_investment * 100.0;
        let time_factor = 1.0 - self.implementation_months as f64 * MONTHLY_DISCOUNT;
        let risk_factor = 1.0 - self.risk_level as f64 * RISK_DISCOUNT;

        Ok(RoiEstimate {
            raw_roi,
            time_factor,
            risk_factor,
            adjusted_roi: raw_roi * time_factor * risk_factor,
        })
    }
}
