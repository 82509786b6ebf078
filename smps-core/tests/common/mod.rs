//! Shared fixtures for the integration tests
//!
//! Provides the reference operating points used across test files and a
//! few helpers for comparing against hand-computed values.

#![allow(dead_code)]

use smps_core::{MagneticInputs, PowerInputs, ThermalInputs, Topology};

/// Named operating point with the topology it is meant for
pub struct Scenario {
    pub name: &'static str,
    pub topology: Topology,
    pub inputs: PowerInputs,
}

/// 12 V → 5 V, 2 A buck at 200 kHz: the default form state.
pub fn buck_nominal() -> PowerInputs {
    PowerInputs {
        vin: 12.0,
        vout: 5.0,
        iout: 2.0,
        fsw: 200.0,
        ripple_current_percent: 30.0,
        ripple_voltage_percent: 1.0,
        efficiency: 0.9,
        turns_ratio: None,
    }
}

/// Core used in the magnetics walkthrough (A_e = 52 mm², l_e = 37 mm).
pub fn walkthrough_core(inductance: f64, peak_current: f64) -> MagneticInputs {
    MagneticInputs {
        inductance,
        peak_current,
        bmax: 0.3,
        ae: 52.0,
        window_area: 40.0,
        current_density: 4.0,
        core_permeability: 2500.0,
        core_length_mm: 37.0,
    }
}

/// TO-220 class device on a greased pad, 25 °C ambient.
pub fn to220_stack(total_loss: f64) -> ThermalInputs {
    ThermalInputs {
        total_loss,
        ambient_temp: 25.0,
        max_junction_temp: 125.0,
        theta_jc: 2.0,
        theta_cs: 0.5,
    }
}

/// One realistic operating point per topology.
pub fn per_topology() -> Vec<Scenario> {
    vec![
        Scenario { name: "12V to 5V buck", topology: Topology::Buck, inputs: buck_nominal() },
        Scenario {
            name: "5V to 12V boost",
            topology: Topology::Boost,
            inputs: PowerInputs { vin: 5.0, vout: 12.0, iout: 1.0, ..buck_nominal() },
        },
        Scenario {
            name: "12V to -12V buck-boost",
            topology: Topology::BuckBoost,
            inputs: PowerInputs { vin: 12.0, vout: 12.0, iout: 0.5, ..buck_nominal() },
        },
        Scenario {
            name: "48V to 12V flyback",
            topology: Topology::Flyback,
            inputs: PowerInputs {
                vin: 48.0,
                vout: 12.0,
                iout: 2.0,
                fsw: 100.0,
                turns_ratio: Some(3.0),
                ..buck_nominal()
            },
        },
        Scenario {
            name: "48V to 5V forward",
            topology: Topology::Forward,
            inputs: PowerInputs {
                vin: 48.0,
                vout: 5.0,
                iout: 5.0,
                turns_ratio: Some(4.0),
                ..buck_nominal()
            },
        },
        Scenario {
            name: "24V to 12V push-pull",
            topology: Topology::PushPull,
            inputs: PowerInputs {
                vin: 24.0,
                vout: 12.0,
                iout: 4.0,
                turns_ratio: Some(1.0),
                ..buck_nominal()
            },
        },
    ]
}

/// Relative closeness with a message that names the quantity.
pub fn assert_close(name: &str, actual: f64, expected: f64, rel_tol: f64) {
    let scale = expected.abs().max(1e-12);
    assert!(
        (actual - expected).abs() / scale <= rel_tol,
        "{name}: expected {expected}, got {actual} (tolerance {rel_tol})"
    );
}
