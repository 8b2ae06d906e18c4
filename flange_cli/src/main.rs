//! # Flange Sizing CLI
//!
//! Terminal front-end for the flange joint sizing engine: prompts for
//! the main design parameters, runs the calculation pipeline, and
//! offers a bolt-selection search over the size/count grid.

use std::io::{self, BufRead, Write};

use flange_core::calculations::{
    calculate, search, BoltSelection, DesignInput, GasketSelection, LoadingConditions, Overrides,
    Pcc1Params,
};
use flange_core::tables::{FacingSketch, Pcc1Category, ReferenceTables};
use flange_core::units::{PressureUnit, TemperatureUnit};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn main() {
    println!("Flange Joint Sizing - CLI Demo");
    println!("==============================");
    println!();

    let tables = ReferenceTables::builtin();

    let inside_diameter = prompt_f64("Shell inside diameter (mm) [300.0]: ", 300.0);
    let pressure = prompt_f64("Design pressure (MPa) [1.0]: ", 1.0);
    let temperature = prompt_f64("Design temperature (C) [150.0]: ", 150.0);
    let bolt_count = prompt_f64("Bolt count [16]: ", 16.0) as u32;
    let run_pcc1 = prompt_yes_no("Run PCC-1 check? (y/N): ", false);

    let pcc1 = if run_pcc1 {
        let mut params = Pcc1Params::from_reference(Pcc1Category::SpiralWound, &tables.pcc1);
        // Bolt bounds per common B7 practice; flange limit from SA-105
        params.sb_min_mpa = 70.0;
        params.sb_max_mpa = 2.0 * tables.bolt_materials.lookup("SA-193 B7").curve.ambient_stress();
        params.sf_max_mpa = 1.5 * tables.plate_materials.lookup("SA-105").curve.ambient_stress();
        Some(params)
    } else {
        None
    };

    let mut input = DesignInput {
        label: "CLI-Demo".to_string(),
        inside_diameter_mm: inside_diameter,
        corrosion_allowance_mm: 0.0,
        g0_mm: 10.0,
        g1_mm: 0.0,
        clearance_mm: 3.0,
        shell_gap_mm: 5.0,
        contact_width_mm: 15.0,
        inner_ring_width_mm: 0.0,
        inner_ring_present: true,
        outer_ring_width_mm: 0.0,
        outer_ring_present: true,
        pass_width_mm: 0.0,
        pass_length_mm: 0.0,
        bolt: BoltSelection {
            size_label: "3/4".to_string(),
            count: bolt_count,
            material_id: "SA-193 B7".to_string(),
        },
        gasket: GasketSelection {
            gasket_id: "Spiral-wound SS / graphite".to_string(),
            pass_gasket_id: "Compressed fiber, 3.2mm".to_string(),
            facing: FacingSketch::FlatFace,
        },
        plate_material_id: "SA-105".to_string(),
        shell_material_id: "SA-106 B".to_string(),
        loading: LoadingConditions {
            design_pressure: pressure,
            pressure_unit: PressureUnit::MPa,
            design_temperature: temperature,
            temperature_unit: TemperatureUnit::Celsius,
            joint_efficiency: 1.0,
        },
        overrides: Overrides::default(),
        hydraulic_tensioning: false,
        pcc1,
    };

    if let Err(e) = input.validate() {
        eprintln!("Invalid input: {}", e);
        std::process::exit(1);
    }

    println!();
    println!("Calculating...");
    println!();

    let result = calculate(&input, tables);

    println!(
        "BCD: {:.0} mm (methods: {:.0} / {:.0} / {:.0}, governing {:?})",
        result.geometry.bcd_mm,
        result.geometry.bcd_method1_mm,
        result.geometry.bcd_method2_mm,
        result.geometry.bcd_method3_mm,
        result.geometry.governing_method,
    );
    println!("Flange OD: {:.0} mm", result.geometry.od_mm);
    println!(
        "Pitch: {:.1} mm (bounds {:.1} - {:.1}) {}",
        result.geometry.pitch_mm,
        result.geometry.min_spacing_mm,
        result.geometry.max_spacing_mm,
        if result.geometry.pitch_ok { "OK" } else { "OUT OF BOUNDS" },
    );
    println!(
        "Gasket seating: {:.1} / {:.1} mm, G = {:.1} mm",
        result.gasket.seating_id_mm, result.gasket.seating_od_mm, result.gasket.g_mm,
    );
    println!(
        "Wm1 = {:.0} N, Wm2 = {:.0} N",
        result.bolt_load.wm1_n, result.bolt_load.wm2_n,
    );
    println!(
        "Bolt area: required {:.0} mm2, available {:.0} mm2, margin {:.0} N",
        result.bolt_load.required_area_mm2,
        result.bolt_load.available_area_mm2,
        result.bolt_load.margin_n,
    );
    if let Some(pcc1) = &result.pcc1 {
        println!(
            "PCC-1: selected bolt stress {:.1} MPa - {}",
            pcc1.sb_selected_mpa,
            if pcc1.passes { "PASS" } else { "FAIL" },
        );
    }
    println!("Overall: {}", if result.passes() { "PASS" } else { "FAIL" });

    println!();
    if prompt_yes_no("Search for optimal bolting? (Y/n): ", true) {
        let outcome = search(&mut input, false, tables);
        if outcome.found {
            println!(
                "Best bolting: {} x {} (required load {:.0} N, margin {:.0} N)",
                outcome.bolt_count, outcome.size_label, outcome.required_load_n, outcome.margin_n,
            );
        } else {
            println!("No feasible bolt size/count combination found.");
        }
    }
}
