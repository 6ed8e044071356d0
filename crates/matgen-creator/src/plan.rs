//! Fixture plans: batches of fixtures described in YAML.
//!
//! A plan names each fixture together with its category, storage order,
//! element distribution and dimensions. Generating a fixture dispatches to
//! the statically typed creator for that combination and returns a
//! [`FixtureSnapshot`], a logical row-major copy of the produced container
//! that can be compared or serialized independently of its type.
//!
//! ```yaml
//! version: 1
//! seed: 42
//! threads: 4
//! fixtures:
//!   - name: tri
//!     category: upper
//!     order: column_major
//!     element:
//!       type: float
//!       min: -1.0
//!       max: 1.0
//!     rows: 4
//! ```

use crate::creator::{CreatorError, Generator, DEFAULT_SIZE};
use crate::creators::{
    BandCreator, DenseCreator, DiagonalCreator, HermitianCreator, LowerCreator, RandomScalar,
    SparseCreator, SparseVectorCreator, StrictlyLowerCreator, StrictlyUpperCreator,
    SymmetricCreator, UniLowerCreator, UniUpperCreator, UniformCreator, UpperCreator,
    VectorCreator,
};
use crate::random;
use matgen_core::{ColumnMajor, MatrixView, RowMajor, StorageOrder, VectorView};
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for plan operations.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Error reading plan file
    #[error("Failed to read plan file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error writing JSON
    #[error("Failed to serialize snapshot: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Fixture not found in plan
    #[error("Fixture not found: {0}")]
    FixtureNotFound(String),

    /// Fixture parameters that cannot be satisfied
    #[error("Invalid fixture '{name}': {reason}")]
    InvalidFixture { name: String, reason: String },

    /// Element creator could not be constructed
    #[error("Creator error: {0}")]
    Creator(#[from] CreatorError),
}

/// Structural category of a planned fixture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Upper,
    Lower,
    UniUpper,
    UniLower,
    StrictlyUpper,
    StrictlyLower,
    Diagonal,
    Band,
    Symmetric,
    Hermitian,
    Sparse,
    Vector,
    SparseVector,
}

impl Category {
    /// Whether the category requires `rows == columns`.
    pub fn is_square(self) -> bool {
        !matches!(
            self,
            Category::General
                | Category::Band
                | Category::Sparse
                | Category::Vector
                | Category::SparseVector
        )
    }

    pub fn is_vector(self) -> bool {
        matches!(self, Category::Vector | Category::SparseVector)
    }

    pub fn is_sparse(self) -> bool {
        matches!(self, Category::Sparse | Category::SparseVector)
    }
}

/// Storage order of a planned fixture.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    RowMajor,
    ColumnMajor,
}

fn default_int_max() -> i64 {
    10
}

fn default_one() -> f64 {
    1.0
}

/// Element distribution of a planned fixture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementConfig {
    /// Uniform 64-bit integers in `[min, max]`
    Int {
        #[serde(default)]
        min: i64,
        #[serde(default = "default_int_max")]
        max: i64,
    },

    /// Uniform 64-bit floats in `[min, max]`
    Float {
        #[serde(default)]
        min: f64,
        #[serde(default = "default_one")]
        max: f64,
    },

    /// Complex numbers with independently uniform parts
    Complex {
        #[serde(default)]
        re_min: f64,
        #[serde(default = "default_one")]
        re_max: f64,
        #[serde(default)]
        im_min: f64,
        #[serde(default = "default_one")]
        im_max: f64,
    },
}

impl Default for ElementConfig {
    fn default() -> Self {
        ElementConfig::Float { min: 0.0, max: 1.0 }
    }
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

const DEFAULT_BANDWIDTH: usize = 1;

/// One fixture in a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSpec {
    /// Fixture name
    pub name: String,

    /// Structural category
    pub category: Category,

    /// Storage order
    #[serde(default)]
    pub order: Order,

    /// Element distribution
    #[serde(default)]
    pub element: ElementConfig,

    /// Number of rows (vector size for vector categories)
    #[serde(default = "default_size")]
    pub rows: usize,

    /// Number of columns; defaults to `rows`
    #[serde(default)]
    pub columns: Option<usize>,

    /// Number of sub-diagonals (band only); defaults to 1
    #[serde(default)]
    pub lower: Option<usize>,

    /// Number of super-diagonals (band only); defaults to 1
    #[serde(default)]
    pub upper: Option<usize>,

    /// Number of stored entries (sparse only); defaults to `rows`
    #[serde(default)]
    pub non_zeros: Option<usize>,
}

impl FixtureSpec {
    /// Number of columns the fixture will have.
    pub fn columns(&self) -> usize {
        if self.category.is_vector() {
            1
        } else {
            self.columns.unwrap_or(self.rows)
        }
    }

    /// Number of cells, or `None` when it does not fit in `usize`.
    pub fn capacity(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns())
    }

    /// Number of stored entries for sparse categories.
    pub fn non_zeros(&self) -> usize {
        let capacity = self.capacity().unwrap_or(usize::MAX);
        self.non_zeros.unwrap_or(self.rows.min(capacity))
    }

    /// Sub- and super-diagonal counts for the band category.
    pub fn bandwidths(&self) -> (usize, usize) {
        (
            self.lower.unwrap_or(DEFAULT_BANDWIDTH),
            self.upper.unwrap_or(DEFAULT_BANDWIDTH),
        )
    }

    fn invalid(&self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidFixture {
            name: self.name.clone(),
            reason: reason.into(),
        }
    }

    /// Check the parameters describe a constructible fixture.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.category.is_vector() && self.columns.is_some() {
            return Err(self.invalid("vectors have no column count"));
        }
        let Some(capacity) = self.capacity() else {
            let (rows, columns) = (self.rows, self.columns());
            return Err(self.invalid(format!("dimensions {rows}x{columns} overflow")));
        };
        if self.category.is_square() && self.columns() != self.rows {
            return Err(self.invalid(format!(
                "{:?} matrices must be square, got {}x{}",
                self.category,
                self.rows,
                self.columns()
            )));
        }
        if self.category.is_sparse() {
            if self.non_zeros() > capacity {
                return Err(self.invalid(format!(
                    "{} non-zero elements exceed capacity {capacity}",
                    self.non_zeros()
                )));
            }
        } else if self.non_zeros.is_some() {
            return Err(self.invalid("non_zeros only applies to sparse categories"));
        }
        if self.category != Category::Band && (self.lower.is_some() || self.upper.is_some()) {
            return Err(self.invalid("lower and upper only apply to the band category"));
        }
        Ok(())
    }

    fn generate(&self) -> Result<FixtureSnapshot, PlanError> {
        self.validate()?;
        match self.order {
            Order::RowMajor => self.generate_in::<RowMajor>(),
            Order::ColumnMajor => self.generate_in::<ColumnMajor>(),
        }
    }

    fn generate_in<SO: StorageOrder>(&self) -> Result<FixtureSnapshot, PlanError> {
        match self.element {
            ElementConfig::Int { min, max } => {
                self.generate_typed::<SO, i64>(UniformCreator::with_range(min, max)?)
            }
            ElementConfig::Float { min, max } => {
                self.generate_typed::<SO, f64>(UniformCreator::with_range(min, max)?)
            }
            ElementConfig::Complex {
                re_min,
                re_max,
                im_min,
                im_max,
            } => self.generate_typed::<SO, Complex<f64>>(UniformCreator::with_range(
                Complex::new(re_min, im_min),
                Complex::new(re_max, im_max),
            )?),
        }
    }

    fn generate_typed<SO, T>(
        &self,
        element: UniformCreator<T>,
    ) -> Result<FixtureSnapshot, PlanError>
    where
        SO: StorageOrder,
        T: RandomScalar + Into<ElementValue>,
    {
        let n = self.rows;
        let columns = self.columns();
        let cells = match self.category {
            Category::General => {
                matrix_cells(&DenseCreator::<_, SO>::with_dims(n, columns, element).generate())
            }
            Category::Upper => {
                matrix_cells(&UpperCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::Lower => {
                matrix_cells(&LowerCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::UniUpper => {
                matrix_cells(&UniUpperCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::UniLower => {
                matrix_cells(&UniLowerCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::StrictlyUpper => {
                matrix_cells(&StrictlyUpperCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::StrictlyLower => {
                matrix_cells(&StrictlyLowerCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::Diagonal => {
                matrix_cells(&DiagonalCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::Band => {
                let (lower, upper) = self.bandwidths();
                matrix_cells(
                    &BandCreator::<_, SO>::with_dims(n, columns, lower, upper, element).generate(),
                )
            }
            Category::Symmetric => {
                matrix_cells(&SymmetricCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::Hermitian => {
                matrix_cells(&HermitianCreator::<_, SO>::with_size(n, element).generate())
            }
            Category::Sparse => {
                let non_zeros = self.non_zeros();
                matrix_cells(
                    &SparseCreator::<_, SO>::with_dims(n, columns, non_zeros, element).generate(),
                )
            }
            Category::Vector => vector_cells(&VectorCreator::with_size(n, element).generate()),
            Category::SparseVector => vector_cells(
                &SparseVectorCreator::with_size(n, self.non_zeros(), element).generate(),
            ),
        };

        Ok(FixtureSnapshot {
            name: self.name.clone(),
            category: self.category,
            order: self.order,
            rows: n,
            columns,
            cells,
        })
    }
}

fn matrix_cells<M>(matrix: &M) -> Vec<ElementValue>
where
    M: MatrixView,
    M::Element: Into<ElementValue>,
{
    matrix.to_row_major_vec().into_iter().map(Into::into).collect()
}

fn vector_cells<V>(vector: &V) -> Vec<ElementValue>
where
    V: VectorView,
    V::Element: Into<ElementValue>,
{
    vector.to_vec().into_iter().map(Into::into).collect()
}

/// A single cell value of a snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ElementValue {
    Int(i64),
    Float(f64),
    Complex { re: f64, im: f64 },
}

impl ElementValue {
    pub fn is_zero(&self) -> bool {
        match *self {
            ElementValue::Int(v) => v == 0,
            ElementValue::Float(v) => v == 0.0,
            ElementValue::Complex { re, im } => re == 0.0 && im == 0.0,
        }
    }

    pub fn conj(&self) -> Self {
        match *self {
            ElementValue::Complex { re, im } => ElementValue::Complex { re, im: -im },
            other => other,
        }
    }
}

impl From<i64> for ElementValue {
    fn from(value: i64) -> Self {
        ElementValue::Int(value)
    }
}

impl From<f64> for ElementValue {
    fn from(value: f64) -> Self {
        ElementValue::Float(value)
    }
}

impl From<Complex<f64>> for ElementValue {
    fn from(value: Complex<f64>) -> Self {
        ElementValue::Complex {
            re: value.re,
            im: value.im,
        }
    }
}

/// Logical, row-major copy of a generated fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureSnapshot {
    pub name: String,
    pub category: Category,
    pub order: Order,
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<ElementValue>,
}

impl FixtureSnapshot {
    /// Cell `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<&ElementValue> {
        if i < self.rows && j < self.columns {
            self.cells.get(i * self.columns + j)
        } else {
            None
        }
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_version() -> u32 {
    1
}

/// A batch of fixtures loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturePlan {
    /// Plan version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed applied before [`FixturePlan::generate_all`]
    #[serde(default)]
    pub seed: Option<u64>,

    /// Thread bound for parallel evaluation of the fixtures
    #[serde(default)]
    pub threads: Option<usize>,

    /// Fixture definitions
    pub fixtures: Vec<FixtureSpec>,

    /// Cached fixture lookup (not serialized)
    #[serde(skip)]
    fixture_map: HashMap<String, usize>,
}

impl FixturePlan {
    /// Load a plan from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, PlanError> {
        let mut plan: FixturePlan = serde_yaml::from_str(yaml)?;
        plan.build_fixture_map();
        Ok(plan)
    }

    fn build_fixture_map(&mut self) {
        self.fixture_map = self
            .fixtures
            .iter()
            .enumerate()
            .map(|(idx, fixture)| (fixture.name.clone(), idx))
            .collect();
    }

    /// Get a fixture definition by name.
    pub fn get_fixture(&self, name: &str) -> Option<&FixtureSpec> {
        self.fixture_map
            .get(name)
            .and_then(|&idx| self.fixtures.get(idx))
    }

    /// All fixture names in plan order.
    pub fn fixture_names(&self) -> Vec<&str> {
        self.fixtures.iter().map(|f| f.name.as_str()).collect()
    }

    /// Generate one fixture from the current random stream.
    pub fn generate(&self, name: &str) -> Result<FixtureSnapshot, PlanError> {
        let fixture = self
            .get_fixture(name)
            .ok_or_else(|| PlanError::FixtureNotFound(name.to_string()))?;
        fixture.generate()
    }

    /// Apply the plan seed (if any) and generate every fixture in order.
    pub fn generate_all(&self) -> Result<Vec<FixtureSnapshot>, PlanError> {
        if let Some(seed) = self.seed {
            random::set_seed(seed);
        }
        tracing::debug!(
            fixtures = self.fixtures.len(),
            seed = random::seed(),
            "Generating fixture plan"
        );
        self.fixtures.iter().map(FixtureSpec::generate).collect()
    }
}
