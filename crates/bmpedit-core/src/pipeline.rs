//! Operation dispatch and the read → transform → write session.
//!
//! An [`Operation`] names one transform together with its parameters. It is
//! plain data: it can be deserialized from JSON such as
//! `{"op": "darken", "factor": 0.5}` and applied to any grid. A [`Session`]
//! holds the current input path and runs operations from it into an output
//! file, one at a time.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjustments::{apply_clarendon, apply_darken, apply_lighten, apply_vignette};
use crate::decode::{read_image, DecodeError};
use crate::encode::{write_image, EncodeError};
use crate::grid::PixelGrid;
use crate::tone::{apply_grayscale, apply_high_contrast, apply_posterize};
use crate::transform::{
    apply_enlarge, rotate_90_cw, rotate_quarter_turns, validate_factor, TransformError,
};

/// Errors from running an operation end to end.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Not a valid image: {path}")]
    InvalidImage { path: String },

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// One transform and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Vignette,
    Clarendon {
        factor: f64,
    },
    Grayscale,
    #[serde(rename = "rotate_90")]
    Rotate90,
    /// Clockwise quarter turns; any count, reduced modulo 4.
    RotateN {
        turns: i64,
    },
    Enlarge {
        x_scale: u32,
        y_scale: u32,
    },
    HighContrast,
    Lighten {
        factor: f64,
    },
    Darken {
        factor: f64,
    },
    Posterize,
}

impl Operation {
    /// Display name as shown in the operation menu.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Vignette => "Vignette",
            Operation::Clarendon { .. } => "Clarendon",
            Operation::Grayscale => "Grayscale",
            Operation::Rotate90 => "Rotate 90 degrees",
            Operation::RotateN { .. } => "Rotate multiple 90 degrees",
            Operation::Enlarge { .. } => "Enlarge",
            Operation::HighContrast => "High Contrast",
            Operation::Lighten { .. } => "Lighten",
            Operation::Darken { .. } => "Darken",
            Operation::Posterize => "Black, white, red, green, blue",
        }
    }

    /// Position in the operation menu, 1 through 10.
    ///
    /// Menu entry 0 changes the input image and is handled by
    /// [`Session::change_input`].
    pub fn menu_index(&self) -> u8 {
        match self {
            Operation::Vignette => 1,
            Operation::Clarendon { .. } => 2,
            Operation::Grayscale => 3,
            Operation::Rotate90 => 4,
            Operation::RotateN { .. } => 5,
            Operation::Enlarge { .. } => 6,
            Operation::HighContrast => 7,
            Operation::Lighten { .. } => 8,
            Operation::Darken { .. } => 9,
            Operation::Posterize => 10,
        }
    }

    /// Apply the operation to `grid`, producing a new grid.
    ///
    /// Fails only on parameters that cannot be applied: a non-finite factor
    /// or a zero enlarge scale.
    pub fn apply(&self, grid: &PixelGrid) -> Result<PixelGrid, TransformError> {
        let result = match *self {
            Operation::Vignette => apply_vignette(grid),
            Operation::Clarendon { factor } => apply_clarendon(grid, validate_factor(factor)?),
            Operation::Grayscale => apply_grayscale(grid),
            Operation::Rotate90 => rotate_90_cw(grid),
            Operation::RotateN { turns } => rotate_quarter_turns(grid, turns),
            Operation::Enlarge { x_scale, y_scale } => apply_enlarge(grid, x_scale, y_scale)?,
            Operation::HighContrast => apply_high_contrast(grid),
            Operation::Lighten { factor } => apply_lighten(grid, validate_factor(factor)?),
            Operation::Darken { factor } => apply_darken(grid, validate_factor(factor)?),
            Operation::Posterize => apply_posterize(grid),
        };
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The current input image, threaded through every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    input: PathBuf,
}

impl Session {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Switch to a different input image for subsequent runs.
    pub fn change_input(&mut self, input: impl Into<PathBuf>) {
        self.input = input.into();
        log::info!("input image is now {}", self.input.display());
    }

    /// Read the input image, apply `op` and write the result to `output`.
    ///
    /// The input is re-read on every run, so each operation starts from the
    /// file on disk rather than from a previous result. Nothing is written
    /// when any step fails.
    pub fn run(&self, op: &Operation, output: impl AsRef<Path>) -> Result<(), PipelineError> {
        let output = output.as_ref();
        log::info!("{op} selected: {} -> {}", self.input.display(), output.display());

        let grid = read_image(&self.input)?;
        if grid.is_empty() {
            return Err(PipelineError::InvalidImage {
                path: self.input.display().to_string(),
            });
        }

        let result = op.apply(&grid)?;
        write_image(output, &result)?;
        log::info!("{op} applied, wrote {}x{}", result.width(), result.height());
        Ok(())
    }
}
