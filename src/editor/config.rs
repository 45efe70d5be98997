use serde::{Deserialize, Serialize};

/// Coercion settings shared by every editor in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Upper bound on entries of a `colors` field.
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,
    /// Clamp numeric edits into the descriptor's `[min, max]`.
    #[serde(default = "default_true")]
    pub clamp_numbers: bool,
    /// Floor numeric edits of fields whose step is exactly `1`.
    #[serde(default = "default_true")]
    pub floor_unit_steps: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_colors: default_max_colors(),
            clamp_numbers: true,
            floor_unit_steps: true,
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn with_max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    #[must_use]
    pub fn with_clamp_numbers(mut self, clamp_numbers: bool) -> Self {
        self.clamp_numbers = clamp_numbers;
        self
    }

    #[must_use]
    pub fn with_floor_unit_steps(mut self, floor_unit_steps: bool) -> Self {
        self.floor_unit_steps = floor_unit_steps;
        self
    }
}

fn default_max_colors() -> usize {
    10
}

fn default_true() -> bool {
    true
}
