use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap as HashMap;
use log::info;

use hemeqc_core::models::Region;
use hemeqc_core::utils::{get_dynamic_reader, read_lines_lossy};
use hemeqc_core::{HemeQcError, Result};

use crate::traits::RegionMembership;

///
/// Regions of interest grouped by chromosome and keyed by start position.
///
/// Within a chromosome only one region is kept per start position; a later
/// region with the same start replaces the earlier one.
///
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    index_maps: HashMap<String, BTreeMap<u32, Region>>,
    num_loaded: usize,
    pub path: Option<PathBuf>,
}

impl RegionIndex {
    ///
    /// Number of regions read at construction, including any later replaced
    /// by a region with the same chromosome and start.
    ///
    pub fn num_loaded(&self) -> usize {
        self.num_loaded
    }

    /// Number of regions actually held.
    pub fn len(&self) -> usize {
        self.index_maps.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index_maps.is_empty()
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.index_maps.keys().map(|k| k.as_str())
    }

    ///
    /// Regions on one chromosome in ascending start order.
    ///
    pub fn regions<'a>(&'a self, chr: &str) -> impl Iterator<Item = &'a Region> + 'a {
        self.index_maps.get(chr).into_iter().flat_map(|m| m.values())
    }

    fn insert(&mut self, region: Region) {
        self.num_loaded += 1;
        self.index_maps
            .entry(region.chr.clone())
            .or_default()
            .insert(region.start, region);
    }
}

impl RegionMembership for RegionIndex {
    ///
    /// Scan the chromosome's regions by ascending start. The scan stops at the
    /// first region starting past `position`: every later region starts
    /// further right still, so none of them can hold it.
    ///
    fn contains(&self, chr: &str, position: u32) -> bool {
        let Some(regions) = self.index_maps.get(chr) else {
            return false;
        };

        for (start, region) in regions {
            if position < *start {
                break;
            }
            if position <= region.end {
                return true;
            }
        }
        false
    }
}

impl From<Vec<Region>> for RegionIndex {
    fn from(regions: Vec<Region>) -> Self {
        let mut index = RegionIndex::default();
        for region in regions {
            index.insert(region);
        }
        index
    }
}

impl TryFrom<&Path> for RegionIndex {
    type Error = HemeQcError;

    ///
    /// Load a [RegionIndex] from a region file on disk.
    ///
    /// Any line with a non-integer start or end, or with start past end,
    /// fails the whole load.
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        let mut index = RegionIndex::default();

        for (i, line) in read_lines_lossy(reader).enumerate() {
            let line = line?;
            if let Some(region) = Region::parse_line(&line, i + 1)? {
                index.insert(region);
            }
        }

        info!("  BED file: {} regions", index.num_loaded);
        index.path = Some(value.to_owned());

        Ok(index)
    }
}

impl TryFrom<&str> for RegionIndex {
    type Error = HemeQcError;

    fn try_from(value: &str) -> Result<Self> {
        RegionIndex::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for RegionIndex {
    type Error = HemeQcError;

    fn try_from(value: PathBuf) -> Result<Self> {
        RegionIndex::try_from(value.as_path())
    }
}
