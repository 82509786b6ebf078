//! Power-stage calculator
//!
//! Derives duty cycle, currents, voltage stresses and the required
//! inductance and capacitance of a converter from its electrical operating
//! point.
//!
//! ## Per-topology equations
//!
//! Each topology has its own volt-second balance and conduction pattern,
//! so each gets its own arm in [`operating_point`] rather than a shared
//! generic formula. With n = Np/Ns and η the efficiency:
//!
//! ```text
//! topology    D (before clamp)          I_L            I_in        V_sw        V_diode
//! buck        Vo/(Vi·η)                 Io             Io·D/η      Vi          Vi
//! boost       1 − Vi·η/Vo               Io/(1−D)       I_L         Vo          Vo
//! buck-boost  Vo/(Vi·η+Vo)              Io/(1−D)       I_L·D/η     Vi+Vo       Vi+Vo
//! flyback     Vo·n/(Vi·η+Vo·n)          Io·n/(1−D)     I_L·D/η     Vi+Vo·n     Vo+Vi/n
//! forward     Vo·n/(Vi·η)               Io             Io/(n·η)    2·Vi        Vo+Vi/n
//! push-pull   Vo·n/(2·Vi·η)             Io             Io/(n·η)    2·Vi        2·Vo
//! ```
//!
//! The clamped duty cycle feeds every later formula.
//!
//! ## Shared quantities
//!
//! ```text
//! ΔI    = I_L · ripple%
//! I_pk  = I_L + ΔI/2
//! I_rms = √(I_L² + ΔI²/12)             triangular ripple
//! L     = V_applied · D / (f · ΔI)
//! C_out = ΔI / (8 · f · ΔV)            buck, forward, push-pull
//! C_out = Io · D / (f · ΔV)            boost, buck-boost, flyback
//! ```
//!
//! The capacitor formulas are engineering approximations; continuous versus
//! discontinuous conduction is not detected.

use crate::constants::converter::{
    HZ_PER_KHZ, INPUT_CAPACITANCE_RATIO, MICRO_PER_UNIT, MIN_RIPPLE_VOLTAGE_V, MV_PER_V, PERCENT,
    SIZING_FLOOR, TRIANGULAR_RIPPLE_FACTOR, TRIANGULAR_RMS_DIVISOR,
};
use crate::math::{floor_at, sqrt};
use crate::topology::Topology;
use crate::traits::Calculator;

/// Electrical operating point of a converter
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerInputs {
    /// Input voltage (V)
    pub vin: f64,
    /// Output voltage (V)
    pub vout: f64,
    /// Output current (A)
    pub iout: f64,
    /// Switching frequency (kHz)
    pub fsw: f64,
    /// Inductor ripple current, peak-to-peak, as % of the inductor current
    pub ripple_current_percent: f64,
    /// Output ripple voltage, peak-to-peak, as % of the output voltage
    pub ripple_voltage_percent: f64,
    /// Expected efficiency, ratio in (0, 1]
    pub efficiency: f64,
    /// Transformer turns ratio Np/Ns; only isolated topologies read it
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub turns_ratio: Option<f64>,
}

impl Default for PowerInputs {
    /// 12 V to 5 V at 2 A, 200 kHz, 30 % current ripple, 1 % voltage ripple,
    /// 90 % efficiency and a 2:1 transformer for the isolated topologies.
    fn default() -> Self {
        Self {
            vin: 12.0,
            vout: 5.0,
            iout: 2.0,
            fsw: 200.0,
            ripple_current_percent: 30.0,
            ripple_voltage_percent: 1.0,
            efficiency: 0.9,
            turns_ratio: Some(2.0),
        }
    }
}

impl PowerInputs {
    /// Same operating point with a different turns ratio.
    #[must_use]
    pub fn with_turns_ratio(mut self, turns_ratio: f64) -> Self {
        self.turns_ratio = Some(turns_ratio);
        self
    }

    /// Turns ratio the equations use: the given value, or 1 when it is
    /// absent, zero or NaN.
    pub fn effective_turns_ratio(&self) -> f64 {
        match self.turns_ratio {
            Some(n) if n != 0.0 && !n.is_nan() => n,
            _ => 1.0,
        }
    }
}

/// Component stresses and sizing for one operating point
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerResults {
    /// Switch duty cycle, clamped to the topology's range
    pub duty_cycle: f64,
    /// Required inductance (µH); magnetizing inductance for isolated designs
    pub inductance: f64,
    /// Inductor ripple current, peak-to-peak (A)
    pub ripple_current: f64,
    /// Inductor peak current (A)
    pub peak_current: f64,
    /// Inductor RMS current (A)
    pub rms_current: f64,
    /// Average input current (A)
    pub input_current: f64,
    /// Required output capacitance (µF)
    pub output_capacitance: f64,
    /// Suggested input capacitance (µF)
    pub input_capacitance: f64,
    /// Allowed output ripple voltage, peak-to-peak (mV)
    pub output_ripple_voltage: f64,
    /// Peak voltage across the primary switch (V)
    pub switch_voltage_stress: f64,
    /// Peak reverse voltage across the rectifier (V)
    pub diode_voltage_stress: f64,
    /// Output power (W)
    pub output_power: f64,
    /// Input power (W)
    pub input_power: f64,
    /// Power lost in the converter (W)
    pub losses: f64,
    /// Turns ratio used, reported for isolated topologies only
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub turns_ratio: Option<f64>,
}

/// How the output capacitor is sized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitorModel {
    /// The inductor ripple flows into the capacitor: C = ΔI/(8·f·ΔV)
    TriangularRipple,
    /// The capacitor alone supplies the load while the switch is on:
    /// C = Io·D/(f·ΔV)
    ChargeBalance,
}

/// Topology-specific part of the power-stage solution
///
/// One row of the equation table in the module docs, evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Duty cycle after clamping
    pub duty_cycle: f64,
    /// Average inductor (or primary magnetizing) current (A)
    pub inductor_current: f64,
    /// Average input current (A)
    pub input_current: f64,
    /// Switch voltage stress (V)
    pub switch_stress: f64,
    /// Rectifier voltage stress (V)
    pub diode_stress: f64,
    /// Voltage across the inductor during the on-time (V)
    pub applied_voltage: f64,
    /// Output capacitor sizing rule
    pub capacitor: CapacitorModel,
}

/// Evaluates the topology-specific equations for `inputs`.
pub fn operating_point(topology: Topology, inputs: &PowerInputs) -> OperatingPoint {
    let PowerInputs { vin, vout, iout, efficiency: eta, .. } = *inputs;
    let n = inputs.effective_turns_ratio();
    let (min_duty, max_duty) = topology.duty_limits();
    let clamp = |d: f64| d.clamp(min_duty, max_duty);

    match topology {
        Topology::Buck => {
            let d = clamp(vout / (vin * eta));
            OperatingPoint {
                duty_cycle: d,
                inductor_current: iout,
                input_current: iout * d / eta,
                switch_stress: vin,
                diode_stress: vin,
                applied_voltage: vin - vout,
                capacitor: CapacitorModel::TriangularRipple,
            }
        }
        Topology::Boost => {
            let d = clamp(1.0 - (vin * eta) / vout);
            let il = iout / (1.0 - d);
            OperatingPoint {
                duty_cycle: d,
                inductor_current: il,
                input_current: il,
                switch_stress: vout,
                diode_stress: vout,
                applied_voltage: vin,
                capacitor: CapacitorModel::ChargeBalance,
            }
        }
        Topology::BuckBoost => {
            let d = clamp(vout / (vin * eta + vout));
            let il = iout / (1.0 - d);
            OperatingPoint {
                duty_cycle: d,
                inductor_current: il,
                input_current: il * d / eta,
                switch_stress: vin + vout,
                diode_stress: vin + vout,
                applied_voltage: vin,
                capacitor: CapacitorModel::ChargeBalance,
            }
        }
        Topology::Flyback => {
            let d = clamp((vout * n) / (vin * eta + vout * n));
            // Primary-side magnetizing current
            let il = (iout * n) / (1.0 - d);
            OperatingPoint {
                duty_cycle: d,
                inductor_current: il,
                input_current: il * d / eta,
                switch_stress: vin + vout * n,
                diode_stress: vout + vin / n,
                applied_voltage: vin,
                capacitor: CapacitorModel::ChargeBalance,
            }
        }
        Topology::Forward => {
            let d = clamp((vout * n) / (vin * eta));
            OperatingPoint {
                duty_cycle: d,
                inductor_current: iout,
                input_current: iout / (n * eta),
                // Reset winding doubles the voltage across the off switch
                switch_stress: 2.0 * vin,
                diode_stress: vout + vin / n,
                applied_voltage: vin / n - vout,
                capacitor: CapacitorModel::TriangularRipple,
            }
        }
        Topology::PushPull => {
            // Per-switch duty; the two switches alternate
            let d = clamp((vout * n) / (2.0 * vin * eta));
            OperatingPoint {
                duty_cycle: d,
                inductor_current: iout,
                input_current: iout / (n * eta),
                switch_stress: 2.0 * vin,
                diode_stress: 2.0 * vout,
                applied_voltage: vin / n - vout,
                capacitor: CapacitorModel::TriangularRipple,
            }
        }
    }
}

/// Power-stage calculator for a fixed topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerStageCalculator {
    topology: Topology,
}

impl PowerStageCalculator {
    /// Calculator for `topology`.
    pub const fn new(topology: Topology) -> Self {
        Self { topology }
    }

    /// Topology this calculator applies.
    pub const fn topology(&self) -> Topology {
        self.topology
    }
}

impl Calculator for PowerStageCalculator {
    type Input = PowerInputs;
    type Output = PowerResults;

    fn compute(&self, inputs: &PowerInputs) -> PowerResults {
        let topology = self.topology;
        let fsw_hz = inputs.fsw * HZ_PER_KHZ;
        let op = operating_point(topology, inputs);
        let d = op.duty_cycle;
        let il = op.inductor_current;

        let ripple_current = il * (inputs.ripple_current_percent / PERCENT);
        let peak_current = il + ripple_current / 2.0;
        let rms_current =
            sqrt(il * il + (ripple_current * ripple_current) / TRIANGULAR_RMS_DIVISOR);

        let inductance = (op.applied_voltage * d) / (fsw_hz * ripple_current) * MICRO_PER_UNIT;

        let ripple_voltage = inputs.vout * (inputs.ripple_voltage_percent / PERCENT);
        let sizing_ripple = ripple_voltage.max(MIN_RIPPLE_VOLTAGE_V);
        let output_capacitance = match op.capacitor {
            CapacitorModel::TriangularRipple => {
                ripple_current / (TRIANGULAR_RIPPLE_FACTOR * fsw_hz * sizing_ripple)
                    * MICRO_PER_UNIT
            }
            CapacitorModel::ChargeBalance => {
                inputs.iout * d / (fsw_hz * sizing_ripple) * MICRO_PER_UNIT
            }
        };
        let input_capacitance = output_capacitance * INPUT_CAPACITANCE_RATIO;

        let output_power = inputs.vout * inputs.iout;
        let input_power = output_power / inputs.efficiency;
        let losses = input_power - output_power;

        log_debug!(
            "{} power stage: D={} L={}uH Ipk={}A losses={}W",
            topology, d, inductance, peak_current, losses
        );

        PowerResults {
            duty_cycle: d,
            inductance: floor_at(inductance, SIZING_FLOOR),
            ripple_current,
            peak_current,
            rms_current,
            input_current: op.input_current,
            output_capacitance: floor_at(output_capacitance, SIZING_FLOOR),
            input_capacitance: floor_at(input_capacitance, SIZING_FLOOR),
            output_ripple_voltage: ripple_voltage * MV_PER_V,
            switch_voltage_stress: op.switch_stress,
            diode_voltage_stress: op.diode_stress,
            output_power,
            input_power,
            losses,
            turns_ratio: topology.is_isolated().then(|| inputs.effective_turns_ratio()),
        }
    }
}

/// Computes the power stage of `topology` at `inputs`.
pub fn compute_power_stage(topology: Topology, inputs: &PowerInputs) -> PowerResults {
    PowerStageCalculator::new(topology).compute(inputs)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn nominal() -> PowerInputs {
        PowerInputs::default()
    }

    #[test]
    fn buck_nominal_point() {
        let r = compute_power_stage(Topology::Buck, &nominal());
        let d = 5.0 / (12.0 * 0.9);

        assert_relative_eq!(r.duty_cycle, d);
        assert_relative_eq!(r.ripple_current, 0.6, max_relative = 1e-12);
        assert_relative_eq!(r.peak_current, 2.3, max_relative = 1e-12);
        assert_relative_eq!(r.rms_current, 4.03_f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(r.input_current, 2.0 * d / 0.9, max_relative = 1e-12);
        assert_relative_eq!(r.inductance, 7.0 * d / (200_000.0 * 0.6) * 1e6, max_relative = 1e-12);
        assert_relative_eq!(r.output_capacitance, 7.5, max_relative = 1e-9);
        assert_relative_eq!(r.input_capacitance, 3.75, max_relative = 1e-9);
        assert_relative_eq!(r.output_ripple_voltage, 50.0, max_relative = 1e-12);
        assert_eq!(r.switch_voltage_stress, 12.0);
        assert_eq!(r.diode_voltage_stress, 12.0);
        assert_eq!(r.turns_ratio, None);
    }

    #[test]
    fn boost_step_up() {
        let inputs = PowerInputs { vin: 5.0, vout: 12.0, ..nominal() };
        let r = compute_power_stage(Topology::Boost, &inputs);
        let d = 1.0 - 5.0 * 0.9 / 12.0;
        let il = 2.0 / (1.0 - d);

        assert_relative_eq!(r.duty_cycle, d, max_relative = 1e-12);
        assert_relative_eq!(r.input_current, il, max_relative = 1e-12);
        assert_relative_eq!(r.peak_current, il * 1.15, max_relative = 1e-12);
        assert_relative_eq!(
            r.inductance,
            5.0 * d / (200_000.0 * il * 0.3) * 1e6,
            max_relative = 1e-12
        );
        // Charge balance: Io·D/(f·ΔV), ΔV = 120 mV
        assert_relative_eq!(
            r.output_capacitance,
            2.0 * d / (200_000.0 * 0.12) * 1e6,
            max_relative = 1e-12
        );
        assert_eq!(r.switch_voltage_stress, 12.0);
        assert_eq!(r.diode_voltage_stress, 12.0);
    }

    #[test]
    fn boost_below_unity_gain_clamps_to_minimum_duty() {
        // 12 V in, 5 V out: a boost cannot step down
        let r = compute_power_stage(Topology::Boost, &nominal());
        assert_eq!(r.duty_cycle, 0.01);
        assert_relative_eq!(r.input_current, 2.0 / 0.99, max_relative = 1e-12);
    }

    #[test]
    fn buck_boost_inverting() {
        let r = compute_power_stage(Topology::BuckBoost, &nominal());
        let d = 5.0 / (12.0 * 0.9 + 5.0);
        let il = 2.0 / (1.0 - d);

        assert_relative_eq!(r.duty_cycle, d, max_relative = 1e-12);
        assert_relative_eq!(r.input_current, il * d / 0.9, max_relative = 1e-12);
        assert_relative_eq!(
            r.inductance,
            12.0 * d / (200_000.0 * il * 0.3) * 1e6,
            max_relative = 1e-12
        );
        assert_eq!(r.switch_voltage_stress, 17.0);
        assert_eq!(r.diode_voltage_stress, 17.0);
        assert_eq!(r.turns_ratio, None);
    }

    #[test]
    fn flyback_reflects_output_through_transformer() {
        let r = compute_power_stage(Topology::Flyback, &nominal());
        let d = 10.0 / (12.0 * 0.9 + 10.0);
        let il = 4.0 / (1.0 - d);

        assert_relative_eq!(r.duty_cycle, d, max_relative = 1e-12);
        assert_relative_eq!(r.peak_current, il * 1.15, max_relative = 1e-12);
        assert_relative_eq!(r.input_current, il * d / 0.9, max_relative = 1e-12);
        assert_eq!(r.switch_voltage_stress, 22.0);
        assert_eq!(r.diode_voltage_stress, 11.0);
        assert_eq!(r.turns_ratio, Some(2.0));
    }

    #[test]
    fn forward_hits_reset_ceiling() {
        // Vo·n/(Vi·η) = 10/10.8 ≈ 0.93 before clamping
        let r = compute_power_stage(Topology::Forward, &nominal());

        assert_eq!(r.duty_cycle, 0.49);
        assert_relative_eq!(r.input_current, 2.0 / (2.0 * 0.9), max_relative = 1e-12);
        assert_relative_eq!(
            r.inductance,
            (6.0 - 5.0) * 0.49 / (200_000.0 * 0.6) * 1e6,
            max_relative = 1e-12
        );
        assert_relative_eq!(r.output_capacitance, 7.5, max_relative = 1e-9);
        assert_eq!(r.switch_voltage_stress, 24.0);
        assert_eq!(r.diode_voltage_stress, 11.0);
        assert_eq!(r.turns_ratio, Some(2.0));
    }

    #[test]
    fn push_pull_splits_duty_between_switches() {
        let r = compute_power_stage(Topology::PushPull, &nominal());
        let d = 10.0 / (2.0 * 12.0 * 0.9);

        assert_relative_eq!(r.duty_cycle, d, max_relative = 1e-12);
        assert_relative_eq!(
            r.inductance,
            (6.0 - 5.0) * d / (200_000.0 * 0.6) * 1e6,
            max_relative = 1e-12
        );
        assert_eq!(r.switch_voltage_stress, 24.0);
        assert_eq!(r.diode_voltage_stress, 10.0);
    }

    #[test]
    fn missing_or_zero_turns_ratio_means_one_to_one() {
        let none = PowerInputs { turns_ratio: None, ..nominal() };
        let zero = nominal().with_turns_ratio(0.0);

        assert_eq!(none.effective_turns_ratio(), 1.0);
        assert_eq!(zero.effective_turns_ratio(), 1.0);
        assert_eq!(nominal().with_turns_ratio(f64::NAN).effective_turns_ratio(), 1.0);

        let r = compute_power_stage(Topology::Flyback, &none);
        assert_eq!(r.turns_ratio, Some(1.0));
        assert_eq!(r.switch_voltage_stress, 17.0);
    }

    #[test]
    fn buck_ignores_turns_ratio() {
        let a = compute_power_stage(Topology::Buck, &nominal().with_turns_ratio(5.0));
        let b = compute_power_stage(Topology::Buck, &nominal().with_turns_ratio(0.5));
        assert_eq!(a, b);
    }

    #[test]
    fn power_balance() {
        let r = compute_power_stage(Topology::Buck, &nominal());
        assert_eq!(r.output_power, 10.0);
        assert_relative_eq!(r.input_power, 10.0 / 0.9, max_relative = 1e-12);
        assert_relative_eq!(r.losses, 10.0 / 0.9 - 10.0, max_relative = 1e-12);
    }

    #[test]
    fn inductance_is_floored_when_applied_voltage_is_negative() {
        // vout above vin: buck volt-seconds go negative
        let inputs = PowerInputs { vin: 5.0, vout: 12.0, ..nominal() };
        let r = compute_power_stage(Topology::Buck, &inputs);
        assert_eq!(r.duty_cycle, 0.99);
        assert_eq!(r.inductance, 0.01);
    }

    #[test]
    fn zero_ripple_voltage_uses_minimum() {
        let inputs = PowerInputs { ripple_voltage_percent: 0.0, ..nominal() };
        let r = compute_power_stage(Topology::Buck, &inputs);
        assert_eq!(r.output_ripple_voltage, 0.0);
        assert_relative_eq!(
            r.output_capacitance,
            0.6 / (8.0 * 200_000.0 * 1e-3) * 1e6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn degenerate_input_propagates_instead_of_panicking() {
        let inputs = PowerInputs { vin: 0.0, vout: 0.0, ..nominal() };
        let r = compute_power_stage(Topology::Buck, &inputs);
        assert!(r.duty_cycle.is_nan());
        assert!(r.inductance.is_nan());

        let zero_ripple = PowerInputs { ripple_current_percent: 0.0, ..nominal() };
        let r = compute_power_stage(Topology::Buck, &zero_ripple);
        assert_eq!(r.inductance, f64::INFINITY);

        let zero_eta = PowerInputs { efficiency: 0.0, ..nominal() };
        let r = compute_power_stage(Topology::Buck, &zero_eta);
        assert_eq!(r.losses, f64::INFINITY);
    }

    #[test]
    fn calculator_reports_its_topology() {
        let calc = PowerStageCalculator::new(Topology::Forward);
        assert_eq!(calc.topology(), Topology::Forward);
        assert_eq!(calc.compute(&nominal()), compute_power_stage(Topology::Forward, &nominal()));
    }
}
