// ABOUTME: Integration test for the process-wide engine configuration
// ABOUTME: Runs in its own binary because the global configuration loads once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::{env, ptr};

use nutrivec::config::EngineConfig;
use nutrivec::vector::{FoodNutrientValue, FoodNutrientVector};
use nutrivec::{energy_components, predicted_energy, EnergyCalculator, Nutrient, Unit};
use serial_test::serial;

const EPS: f64 = 1e-9;

const ENERGY_VARS: [&str; 5] = [
    "NUTRIVEC_ENERGY_PROTEIN_KJ_PER_G",
    "NUTRIVEC_ENERGY_FAT_KJ_PER_G",
    "NUTRIVEC_ENERGY_CARBOHYDRATE_KJ_PER_G",
    "NUTRIVEC_ENERGY_FIBRE_KJ_PER_G",
    "NUTRIVEC_ENERGY_ALCOHOL_KJ_PER_G",
];

fn grams(nutrient: Nutrient, amount: f64) -> FoodNutrientValue {
    FoodNutrientValue::new(nutrient, amount, Unit::Grams).unwrap()
}

#[test]
#[serial]
fn test_environment_overrides_reach_energy_calculations() {
    for var in ENERGY_VARS {
        env::remove_var(var);
    }
    env::set_var("NUTRIVEC_ENERGY_FIBRE_KJ_PER_G", "10");

    let config = EngineConfig::<true>::global();
    assert!((config.energy().fibre_kj_per_g - 10.0).abs() < EPS);
    assert!(ptr::eq(config, EngineConfig::<true>::global()));
    assert!((EnergyCalculator::global().factors().fibre_kj_per_g - 10.0).abs() < EPS);

    let food = FoodNutrientVector::from_values(
        [grams(Nutrient::Protein, 10.0), grams(Nutrient::Fibre, 2.0)],
        None,
    );

    let components = energy_components(&*food, Unit::Kilojoules).unwrap();
    assert!((components[&Nutrient::Fibre] - 20.0).abs() < EPS);
    assert!((predicted_energy(&*food, Unit::Kilojoules).unwrap() - 190.0).abs() < EPS);
    assert!((food.energy_proportion(Nutrient::Fibre) - 20.0 / 190.0).abs() < EPS);

    // Loaded once; later environment changes are not picked up
    env::set_var("NUTRIVEC_ENERGY_FIBRE_KJ_PER_G", "9");
    assert!((EngineConfig::<true>::global().energy().fibre_kj_per_g - 10.0).abs() < EPS);

    env::remove_var("NUTRIVEC_ENERGY_FIBRE_KJ_PER_G");
}
