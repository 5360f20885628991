/*
 * File: /main.rs
 * Created Date: Tuesday November 21st 2023
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 19th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-19		Zihan	Quick-Reduct on a seeded random decision table
 */

use std::process;
use std::time::Instant;

use log::{error, info, LevelFilter};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rough_reduct::config::Config;
use rough_reduct::{init_logger, timestamp, DecisionTable, QuickReduct, ReductError};

/// Random table whose decision depends on the first three attributes, plus
/// a little label noise
fn generate_table(config: &Config) -> Result<DecisionTable, ReductError> {
    let mut rng = StdRng::seed_from_u64(config.get_seed());
    let columns = config.get_attributes() + 1;
    let mut data = Array2::<i32>::zeros((config.get_rows(), columns));
    for mut row in data.rows_mut() {
        for attribute in 1..columns {
            row[attribute] = rng.random_range(0..config.get_values());
        }
        let informative = (1..columns.min(4)).map(|a| row[a]).sum::<i32>();
        let noise = rng.random_bool(0.02);
        row[0] = (informative % 2) ^ i32::from(noise);
    }
    DecisionTable::from_array(data)
}

fn run(config: Config) -> Result<(), ReductError> {
    let load_start = Instant::now();
    let table = generate_table(&config)?;
    info!(
        "[method: quick-reduct] [{}] Generated {} x {} table in {}ms",
        timestamp(),
        config.get_rows(),
        config.get_attributes(),
        load_start.elapsed().as_millis()
    );

    let result = QuickReduct::new(config.get_reduct().clone()).run(&table)?;
    info!("[method: quick-reduct] [{}] Done", timestamp());
    println!("{}", result.summary());
    Ok(())
}

fn main() {
    if let Err(e) = init_logger(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::new(std::env::args()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "usage: rough_reduct <rows> <attributes> <values> <seed> [measure] [deviation] [seek] [core]"
            );
            process::exit(2);
        }
    };

    if let Err(e) = run(config) {
        error!("[method: quick-reduct] [{}] {}", timestamp(), e);
        process::exit(1);
    }
}
