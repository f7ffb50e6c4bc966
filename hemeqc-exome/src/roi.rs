use std::io::Write;

use fxhash::FxHashSet;
use log::info;

use hemeqc_core::models::ChromKey;
use hemeqc_regions::RegionMembership;

use crate::consts::VARIANT_FIELD;
use crate::exome_data::ExomeData;
use crate::record::ExomeRecord;

impl ExomeData {
    ///
    /// Records whose key lies inside `regions`, ready for export.
    ///
    /// Chromosomes come out numbered first (numerically), then named
    /// (lexicographically); positions ascend within a chromosome. At each
    /// position records with a calling allele go first, ordered descending
    /// on (allele, filename). A record whose [`ExomeRecord::dedupe_key`] was
    /// already emitted is dropped.
    ///
    pub fn records_in_regions<R: RegionMembership>(&self, regions: &R) -> Vec<&ExomeRecord> {
        let index = self.chromosome_map();

        let mut chromosomes: Vec<&String> = index.keys().collect();
        chromosomes.sort_by_cached_key(|chr| (ChromKey::from(chr.as_str()), chr.to_string()));

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut kept = Vec::new();

        for chr in chromosomes {
            for (position, records) in &index[chr] {
                if !regions.contains(chr, *position) {
                    continue;
                }

                let mut records: Vec<&ExomeRecord> = records.iter().collect();
                records.sort_by(|a, b| export_order_key(b).cmp(&export_order_key(a)));

                for record in records {
                    if seen.insert(record.dedupe_key()) {
                        kept.push(record);
                    }
                }
            }
        }

        kept
    }

    ///
    /// Write the records inside `regions` as a table over [`ExomeData::fields`].
    /// Returns the number of data rows written.
    ///
    pub fn write_roi_table<W: Write, R: RegionMembership>(
        &self,
        writer: &mut W,
        regions: &R,
    ) -> std::io::Result<usize> {
        writeln!(writer, "{}", self.fields().join("\t"))?;

        let records = self.records_in_regions(regions);
        for record in &records {
            writeln!(writer, "{}", record.values_for(self.fields()).join("\t"))?;
        }

        info!("{} variants in ROI", records.len());
        Ok(records.len())
    }
}

fn export_order_key(record: &ExomeRecord) -> (&str, &str) {
    (
        record.get(VARIANT_FIELD).unwrap_or_default(),
        record.filename.as_str(),
    )
}
