/**
 * File: /src/lib.rs
 * Created Date: Monday, January 22nd 2024
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 19th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-02		Zihan	Rough-set attribute reduction modules
 */
pub mod config;
pub mod error;
pub mod measure;
pub mod partition;
pub mod population;
pub mod reduct;
pub mod table;
pub mod util;

use chrono::Local;
use log::{info, LevelFilter};

pub use config::ReductConfig;
pub use error::ReductError;
pub use measure::{MeasureKind, SignificanceMeasure};
pub use partition::{partition, NestedPartition, Partition, PartitionKey, Region};
pub use reduct::{CoreStrategy, QuickReduct, Reduct, ReductResult, SearchContext, SeekStrategy};
pub use table::{Attribute, CompactedTable, DecisionTable, InstanceSource, DECISION};

/// Wall-clock prefix for run logs
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Initialise `simple_logger` at `level`. Fails if a logger is already set.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    simple_logger::SimpleLogger::new().with_level(level).init()?;
    info!("[rough_reduct] [{}] logger ready at {}", timestamp(), level);
    Ok(())
}
