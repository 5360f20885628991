/**
 * File: /src/reduct/inspect.rs
 * Created Date: Wednesday, March 11th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 11th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use log::{debug, info};

use super::{Reduct, SearchContext};
use crate::error::ReductError;
use crate::measure::SignificanceMeasure;
use crate::table::InstanceSource;

/// Drop redundant attributes from `candidate`.
///
/// Attributes are visited once, in insertion order (core first, then the
/// seeking order); an attribute goes when the reduct without it still
/// reaches the global significance. Inspecting the result again removes
/// nothing.
pub fn inspect<S, M>(ctx: &mut SearchContext<'_, S, M>, candidate: &Reduct) -> Result<Reduct, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    let mut reduct = candidate.clone();
    let snapshot: Vec<_> = candidate.iter().collect();

    for attribute in snapshot {
        let rest = reduct.without(attribute);
        let value = ctx.significance(&rest)?;
        if ctx.reaches_global(value) {
            reduct.remove(attribute);
            debug!("[inspect] {} is redundant (sig without it = {})", attribute, value);
        }
    }

    info!(
        "[inspect] {} -> {} ({} removed)",
        candidate,
        reduct,
        candidate.len() - reduct.len()
    );
    Ok(reduct)
}
