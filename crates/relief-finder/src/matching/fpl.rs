/// Federal Poverty Level lookup for household sizes 1 through 8.
///
/// The table is a policy constant supplied by the deployment, not derived
/// data; constructing it explicitly keeps per-year guideline updates and
/// synthetic test tables out of the engine code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FplTable {
    thresholds: [u32; 8],
}

impl FplTable {
    pub const fn new(thresholds: [u32; 8]) -> Self {
        Self { thresholds }
    }

    /// The 2023 HHS poverty guidelines used by the standard deployment.
    pub const fn guidelines_2023() -> Self {
        Self::new([14_580, 19_720, 24_860, 30_000, 35_140, 40_280, 45_420, 50_560])
    }

    /// Annual income baseline for a household. Sizes below 1 clamp up to 1
    /// and sizes above 8 clamp down to the size-8 value.
    pub fn lookup(&self, household_size: u32) -> u32 {
        let index = household_size.clamp(1, 8) as usize - 1;
        self.thresholds[index]
    }
}

impl Default for FplTable {
    fn default() -> Self {
        Self::guidelines_2023()
    }
}
