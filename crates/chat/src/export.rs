// File: crates/chat/src/export.rs
// Summary: CSV export of an extracted chart table.

use std::io::Write;

use extract_core::ChartSpec;

/// Write `label,value` rows (with a header) for `spec` to `writer`.
pub fn write_csv<W: Write>(spec: &ChartSpec, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["label", "value"])?;
    for (label, value) in spec.rows() {
        wtr.write_record([label, value.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}
