//! Parameter guide part: definitions of the 39 metrics

use crate::errors::AppResult;
use crate::types::METRIC_GUIDE;
use std::path::Path;

/// Write the parameter guide CSV listing every metric's number, label,
/// description and category.
pub fn write_guide(path: &Path) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Parameter Number", "Parameter Name", "Description", "Category"])?;
    for info in &METRIC_GUIDE {
        let number = info.number.to_string();
        writer.write_record([
            number.as_str(),
            info.label,
            info.description,
            info.category.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
