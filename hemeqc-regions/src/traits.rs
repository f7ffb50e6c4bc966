///
/// Point-in-region queries over a set of genomic regions.
///
pub trait RegionMembership {
    ///
    /// True when `position` on `chr` lies inside any region, bounds included.
    ///
    fn contains(&self, chr: &str, position: u32) -> bool;
}
