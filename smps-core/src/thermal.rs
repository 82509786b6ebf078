//! Thermal calculator
//!
//! Solves the series thermal network of a power semiconductor on a
//! heatsink for the largest heatsink-to-ambient resistance that keeps the
//! junction at its limit.
//!
//! ```text
//!  T_j ──θJC── T_c ──θCS── T_s ──θSA── T_a
//!   ▲
//!   P_loss
//!
//! θ_total,max = (T_j,max − T_a) / P
//! θSA,max     = θ_total,max − θJC − θCS
//! ```
//!
//! A negative θSA budget means no passive heatsink can hold the junction
//! below its limit. That is a valid answer, not a failure. Temperatures are
//! then walked forward from ambient with the budget floored at zero, so the
//! reported heatsink sits at ambient rather than below it.

use crate::constants::thermal::{MIN_LINKED_LOSS_W, THETA_SA_FLOOR};
use crate::math::floor_at;
use crate::power_stage::PowerResults;
use crate::traits::Calculator;

/// Loss and thermal-resistance parameters
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalInputs {
    /// Power dissipated in the device (W)
    pub total_loss: f64,
    /// Ambient temperature (°C)
    pub ambient_temp: f64,
    /// Maximum allowed junction temperature (°C)
    pub max_junction_temp: f64,
    /// Junction-to-case resistance (°C/W)
    #[cfg_attr(feature = "serde", serde(rename = "thetaJC"))]
    pub theta_jc: f64,
    /// Case-to-sink resistance, including interface material (°C/W)
    #[cfg_attr(feature = "serde", serde(rename = "thetaCS"))]
    pub theta_cs: f64,
}

impl Default for ThermalInputs {
    /// 25 °C ambient, 125 °C junction limit, a TO-220-class package
    /// (θJC = 2 °C/W) on a greased pad (θCS = 0.5 °C/W). The loss is zero
    /// until linked to a power stage.
    fn default() -> Self {
        Self {
            total_loss: 0.0,
            ambient_temp: 25.0,
            max_junction_temp: 125.0,
            theta_jc: 2.0,
            theta_cs: 0.5,
        }
    }
}

impl ThermalInputs {
    /// Same thermal stack, dissipating the power stage's losses.
    ///
    /// Zero or NaN losses are replaced by 10 mW so the budget stays finite.
    #[must_use]
    pub fn linked_to(mut self, power: &PowerResults) -> Self {
        self.total_loss = linked_loss(power.losses);
        self
    }
}

fn linked_loss(losses: f64) -> f64 {
    if losses == 0.0 || losses.is_nan() {
        MIN_LINKED_LOSS_W
    } else {
        losses
    }
}

/// Heatsink budget and resulting temperatures
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalResults {
    /// Largest heatsink-to-ambient resistance that meets the limit (°C/W);
    /// negative when no passive heatsink suffices
    #[cfg_attr(feature = "serde", serde(rename = "maxThetaSA"))]
    pub max_theta_sa: f64,
    /// Junction temperature with that heatsink (°C)
    pub junction_temp: f64,
    /// Heatsink rise above ambient (°C)
    pub temp_rise_heatsink: f64,
    /// Heatsink temperature (°C)
    pub heatsink_temp: f64,
    /// Case temperature (°C)
    pub case_temp: f64,
}

impl ThermalResults {
    /// Whether a passive heatsink can meet the junction limit.
    pub fn passive_heatsink_feasible(&self) -> bool {
        self.max_theta_sa >= 0.0
    }
}

/// Thermal-network calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThermalCalculator;

impl Calculator for ThermalCalculator {
    type Input = ThermalInputs;
    type Output = ThermalResults;

    fn compute(&self, inputs: &ThermalInputs) -> ThermalResults {
        let ThermalInputs { total_loss: p, ambient_temp, max_junction_temp, theta_jc, theta_cs } =
            *inputs;

        let total_theta_max = (max_junction_temp - ambient_temp) / p;
        let max_theta_sa = total_theta_max - theta_jc - theta_cs;
        let theta_sa = floor_at(max_theta_sa, THETA_SA_FLOOR);

        let junction_temp = ambient_temp + p * (theta_jc + theta_cs + theta_sa);
        let temp_rise_heatsink = p * theta_sa;
        let heatsink_temp = ambient_temp + temp_rise_heatsink;
        let case_temp = heatsink_temp + p * theta_cs;

        log_debug!(
            "thermal: P={}W thetaSA<={} Tj={} Ts={}",
            p, max_theta_sa, junction_temp, heatsink_temp
        );

        ThermalResults {
            max_theta_sa,
            junction_temp,
            temp_rise_heatsink,
            heatsink_temp,
            case_temp,
        }
    }
}

/// Solves the thermal network for `inputs`.
pub fn compute_thermal(inputs: &ThermalInputs) -> ThermalResults {
    ThermalCalculator.compute(inputs)
}
