use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub min_count: TileCount,
    pub max_count: TileCount,
    pub scramble_interval_ms: u32,
    pub wait_ms_per_tile: u32,
}

impl GameConfig {
    pub const MIN_COUNT: TileCount = 3;
    pub const MAX_COUNT: TileCount = 7;
    pub const SCRAMBLE_INTERVAL_MS: u32 = 2000;
    pub const WAIT_MS_PER_TILE: u32 = 1000;

    pub const fn new() -> Self {
        Self {
            min_count: Self::MIN_COUNT,
            max_count: Self::MAX_COUNT,
            scramble_interval_ms: Self::SCRAMBLE_INTERVAL_MS,
            wait_ms_per_tile: Self::WAIT_MS_PER_TILE,
        }
    }

    /// Parses the submitted count, accepting only whole numbers in range.
    pub fn validate_count(&self, raw: &str) -> Result<TileCount> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GameError::NotAnInteger);
        }

        // digits only, so the only parse failure left is overflow
        let value = raw.parse::<u64>().unwrap_or(u64::MAX);
        let in_range = u64::from(self.min_count)..=u64::from(self.max_count);
        if !in_range.contains(&value) {
            return Err(GameError::OutOfRange {
                value,
                min: self.min_count,
                max: self.max_count,
            });
        }

        Ok(value as TileCount)
    }

    pub const fn wait_ms(&self, count: TileCount) -> u32 {
        (count as u32).saturating_mul(self.wait_ms_per_tile)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
