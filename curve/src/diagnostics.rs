//! Classification of an unknown coordinate pair.
//!
//! Different arithmetic backends disagree on which point they call "the"
//! base point: `(1, 2)` and `(1, p - 2)` both lie on `y^2 = x^3 + 3`.
//! [`CurveDiagnostics`] reports which candidate curves a pair satisfies and
//! whether it matches a reference base point or its negation. It compares
//! coordinates only; it does not recover discrete logarithms.

use core::fmt::{self, Display, Formatter};

use crate::BaseField;

/// Coefficients tried by [`CurveDiagnostics::default`].
pub const DEFAULT_CANDIDATES: [u64; 6] = [0, 1, 2, 3, 4, 5];

/// Which point a backend treats as its G1 base point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BasePointConvention {
    /// `(1, 2)`
    #[default]
    StandardBasePoint,
    /// `(1, p - 2)`, the default of backends that ship the negated generator.
    BackendDefaultBasePoint,
}

impl BasePointConvention {
    pub fn reference_point(self) -> (BaseField, BaseField) {
        let two = BaseField::from_u64(2);
        match self {
            BasePointConvention::StandardBasePoint => (BaseField::ONE, two),
            BasePointConvention::BackendDefaultBasePoint => (BaseField::ONE, -two),
        }
    }
}

impl Display for BasePointConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BasePointConvention::StandardBasePoint => f.write_str("standard (1, 2)"),
            BasePointConvention::BackendDefaultBasePoint => f.write_str("backend default (1, p - 2)"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RelationResult {
    EqualsReference,
    IsNegationOfReference,
    NoRelationFound,
}

impl Display for RelationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            RelationResult::EqualsReference => "equals the reference point",
            RelationResult::IsNegationOfReference => "is the negation of the reference point",
            RelationResult::NoRelationFound => "no known relation to the reference point",
        };
        f.write_str(text)
    }
}

/// Outcome of [`CurveDiagnostics::diagnose`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnosis {
    pub x: BaseField,
    pub y: BaseField,
    /// Every candidate `b` with `y^2 = x^3 + b`.
    pub matching_b: Vec<u64>,
    pub convention: BasePointConvention,
    pub relation: RelationResult,
}

impl Diagnosis {
    /// True when the pair lies on the BN254 G1 curve `y^2 = x^3 + 3`.
    pub fn on_bn254(&self) -> bool {
        self.matching_b.contains(&3)
    }
}

impl Display for Diagnosis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = {}", self.x.to_decimal())?;
        writeln!(f, "y = {}", self.y.to_decimal())?;
        if self.matching_b.is_empty() {
            writeln!(f, "on curve y^2 = x^3 + b: none of the candidates")?;
        } else {
            for b in &self.matching_b {
                writeln!(f, "on curve y^2 = x^3 + {b}")?;
            }
        }
        write!(f, "reference {}: {}", self.convention, self.relation)
    }
}

/// Candidate-curve and reference-point checks for a coordinate pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveDiagnostics {
    candidates: Vec<u64>,
    convention: BasePointConvention,
}

impl Default for CurveDiagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES, BasePointConvention::StandardBasePoint)
    }
}

impl CurveDiagnostics {
    /// Duplicate candidates are dropped; order is preserved.
    pub fn new(candidates: impl IntoIterator<Item = u64>, convention: BasePointConvention) -> Self {
        let mut unique = Vec::new();
        for b in candidates {
            if !unique.contains(&b) {
                unique.push(b);
            }
        }
        CurveDiagnostics {
            candidates: unique,
            convention,
        }
    }

    pub fn with_convention(convention: BasePointConvention) -> Self {
        Self::new(DEFAULT_CANDIDATES, convention)
    }

    pub fn candidates(&self) -> &[u64] {
        &self.candidates
    }

    pub fn convention(&self) -> BasePointConvention {
        self.convention
    }

    /// All candidate `b` such that `y^2 = x^3 + b (mod p)`.
    pub fn classify_curve(&self, x: &BaseField, y: &BaseField) -> Vec<u64> {
        // y^2 - x^3 is the only b that can match
        let b = y.square() - x.square() * *x;
        self.candidates
            .iter()
            .copied()
            .filter(|&candidate| BaseField::from_u64(candidate) == b)
            .collect()
    }

    /// Compare against the reference point of the configured convention.
    pub fn check_known_relation(&self, x: &BaseField, y: &BaseField) -> RelationResult {
        let (ref_x, ref_y) = self.convention.reference_point();
        if *x != ref_x {
            RelationResult::NoRelationFound
        } else if *y == ref_y {
            RelationResult::EqualsReference
        } else if *y == -ref_y {
            RelationResult::IsNegationOfReference
        } else {
            RelationResult::NoRelationFound
        }
    }

    pub fn diagnose(&self, x: &BaseField, y: &BaseField) -> Diagnosis {
        Diagnosis {
            x: *x,
            y: *y,
            matching_b: self.classify_curve(x, y),
            convention: self.convention,
            relation: self.check_known_relation(x, y),
        }
    }
}
