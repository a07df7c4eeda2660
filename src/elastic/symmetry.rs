/* ************************************************************************ **
** This file is part of elcon, and is licensed under EITHER the MIT         **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Crystal symmetry classes and their elastic constant patterns.
//!
//! Each class maps the 36 Voigt entries of `C` onto a short vector of
//! independent parameters. The mapping is a data table, not code: an entry
//! is either zero, a signed copy of one parameter, or (for the trigonal and
//! hexagonal `C66 = (C11 - C12)/2` tie) a fixed linear combination. The
//! fitter never needs to know which class it is working with.

use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrystalSymmetry {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    TetragonalHigh,
    TetragonalLow,
    TrigonalHigh,
    TrigonalLow,
    Hexagonal,
    Cubic,
}

#[derive(Debug, Fail)]
#[fail(display = "unsupported crystal symmetry tag: {:?}", tag)]
pub struct UnsupportedSymmetryError {
    pub tag: String,
}

impl FromStr for CrystalSymmetry {
    type Err = UnsupportedSymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use self::CrystalSymmetry::*;
        match s {
            "triclinic" => Ok(Triclinic),
            "monoclinic" => Ok(Monoclinic),
            "orthorhombic" => Ok(Orthorhombic),
            "tetragonal" | "tetragonal_high" => Ok(TetragonalHigh),
            "tetragonal_low" => Ok(TetragonalLow),
            "trigonal" | "trigonal_high" => Ok(TrigonalHigh),
            "trigonal_low" => Ok(TrigonalLow),
            "hexagonal" => Ok(Hexagonal),
            "cubic" => Ok(Cubic),
            _ => Err(UnsupportedSymmetryError { tag: s.to_string() }),
        }
    }
}

//------------------------------------------------------------------

/// The constant pattern of one symmetry class.
///
/// `index[i][j]` follows the usual textbook convention: `0` marks a
/// forced zero, a positive value `k` marks `+p[k-1]`, a negative value
/// marks `-p[k-1]`. `overrides` lists the few entries that are linear
/// combinations instead.
pub struct Pattern {
    num_params: usize,
    index: [[i8; 6]; 6],
    overrides: &'static [(usize, usize, &'static [(usize, f64)])],
}

impl Pattern {
    #[inline]
    pub fn num_params(&self) -> usize
    { self.num_params }

    /// The linear combination of parameters making up `C[i][j]`,
    /// as (parameter index, coefficient) terms.
    pub fn terms(&self, i: usize, j: usize) -> Vec<(usize, f64)> {
        for &(oi, oj, terms) in self.overrides {
            if (oi, oj) == (i, j) {
                return terms.to_vec();
            }
        }
        match self.index[i][j] {
            0 => vec![],
            k if k > 0 => vec![(k as usize - 1, 1.0)],
            k => vec![((-k) as usize - 1, -1.0)],
        }
    }
}

const HEXAGONAL_C66: &[(usize, f64)] = &[(0, 0.5), (1, -0.5)];

static CUBIC: Pattern = Pattern {
    // p = [C11, C12, C44]
    num_params: 3,
    index: [
        [1, 2, 2, 0, 0, 0],
        [2, 1, 2, 0, 0, 0],
        [2, 2, 1, 0, 0, 0],
        [0, 0, 0, 3, 0, 0],
        [0, 0, 0, 0, 3, 0],
        [0, 0, 0, 0, 0, 3],
    ],
    overrides: &[],
};

static HEXAGONAL: Pattern = Pattern {
    // p = [C11, C12, C13, C33, C44]; C66 is tied to (C11 - C12)/2
    num_params: 5,
    index: [
        [1, 2, 3, 0, 0, 0],
        [2, 1, 3, 0, 0, 0],
        [3, 3, 4, 0, 0, 0],
        [0, 0, 0, 5, 0, 0],
        [0, 0, 0, 0, 5, 0],
        [0, 0, 0, 0, 0, 0],
    ],
    overrides: &[(5, 5, HEXAGONAL_C66)],
};

static TRIGONAL_HIGH: Pattern = Pattern {
    // p = [C11, C12, C13, C14, C33, C44]
    num_params: 6,
    index: [
        [1, 2, 3, 4, 0, 0],
        [2, 1, 3, -4, 0, 0],
        [3, 3, 5, 0, 0, 0],
        [4, -4, 0, 6, 0, 0],
        [0, 0, 0, 0, 6, 4],
        [0, 0, 0, 0, 4, 0],
    ],
    overrides: &[(5, 5, HEXAGONAL_C66)],
};

static TRIGONAL_LOW: Pattern = Pattern {
    // p = [C11, C12, C13, C14, C15, C33, C44]
    num_params: 7,
    index: [
        [1, 2, 3, 4, 5, 0],
        [2, 1, 3, -4, -5, 0],
        [3, 3, 6, 0, 0, 0],
        [4, -4, 0, 7, 0, -5],
        [5, -5, 0, 0, 7, 4],
        [0, 0, 0, -5, 4, 0],
    ],
    overrides: &[(5, 5, HEXAGONAL_C66)],
};

static TETRAGONAL_HIGH: Pattern = Pattern {
    // p = [C11, C12, C13, C33, C44, C66]
    num_params: 6,
    index: [
        [1, 2, 3, 0, 0, 0],
        [2, 1, 3, 0, 0, 0],
        [3, 3, 4, 0, 0, 0],
        [0, 0, 0, 5, 0, 0],
        [0, 0, 0, 0, 5, 0],
        [0, 0, 0, 0, 0, 6],
    ],
    overrides: &[],
};

static TETRAGONAL_LOW: Pattern = Pattern {
    // p = [C11, C12, C13, C16, C33, C44, C66]
    num_params: 7,
    index: [
        [1, 2, 3, 0, 0, 4],
        [2, 1, 3, 0, 0, -4],
        [3, 3, 5, 0, 0, 0],
        [0, 0, 0, 6, 0, 0],
        [0, 0, 0, 0, 6, 0],
        [4, -4, 0, 0, 0, 7],
    ],
    overrides: &[],
};

static ORTHORHOMBIC: Pattern = Pattern {
    // p = [C11, C12, C13, C22, C23, C33, C44, C55, C66]
    num_params: 9,
    index: [
        [1, 2, 3, 0, 0, 0],
        [2, 4, 5, 0, 0, 0],
        [3, 5, 6, 0, 0, 0],
        [0, 0, 0, 7, 0, 0],
        [0, 0, 0, 0, 8, 0],
        [0, 0, 0, 0, 0, 9],
    ],
    overrides: &[],
};

static MONOCLINIC: Pattern = Pattern {
    // p = [C11, C12, C13, C15, C22, C23, C25, C33, C35, C44, C46, C55, C66]
    // (diad along y; the allowed couplings are the e5 column and C46)
    num_params: 13,
    index: [
        [1, 2, 3, 0, 4, 0],
        [2, 5, 6, 0, 7, 0],
        [3, 6, 8, 0, 9, 0],
        [0, 0, 0, 10, 0, 11],
        [4, 7, 9, 0, 12, 0],
        [0, 0, 0, 11, 0, 13],
    ],
    overrides: &[],
};

static TRICLINIC: Pattern = Pattern {
    // all 21 constants, numbered along the upper triangle
    num_params: 21,
    index: [
        [1, 2, 3, 4, 5, 6],
        [2, 7, 8, 9, 10, 11],
        [3, 8, 12, 13, 14, 15],
        [4, 9, 13, 16, 17, 18],
        [5, 10, 14, 17, 19, 20],
        [6, 11, 15, 18, 20, 21],
    ],
    overrides: &[],
};

//------------------------------------------------------------------
// minimal strain sets
//
// Each row is a Voigt direction; the strain generator scales these by the
// requested amplitudes. High symmetry gets away with combined axis+shear
// patterns; the low-symmetry classes need genuinely independent directions
// to separate the cross couplings.

const E1_E4: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
const E2_E5: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 1.0, 0.0];
const E3_E6: [f64; 6] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
const E1: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
const E2: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
const E3: [f64; 6] = [0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
const E4: [f64; 6] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
const E5: [f64; 6] = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0];
const E6: [f64; 6] = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
const E3_E4: [f64; 6] = [0.0, 0.0, 1.0, 1.0, 0.0, 0.0];

impl CrystalSymmetry {
    /// Number of independent elastic constants for this class.
    #[inline]
    pub fn num_independent(self) -> usize
    { self.pattern().num_params() }

    pub fn pattern(self) -> &'static Pattern {
        use self::CrystalSymmetry::*;
        match self {
            Triclinic => &TRICLINIC,
            Monoclinic => &MONOCLINIC,
            Orthorhombic => &ORTHORHOMBIC,
            TetragonalHigh => &TETRAGONAL_HIGH,
            TetragonalLow => &TETRAGONAL_LOW,
            TrigonalHigh => &TRIGONAL_HIGH,
            TrigonalLow => &TRIGONAL_LOW,
            Hexagonal => &HEXAGONAL,
            Cubic => &CUBIC,
        }
    }

    /// The unscaled strain directions sufficient to determine every
    /// independent constant of this class by regression.
    pub fn strain_directions(self) -> &'static [[f64; 6]] {
        use self::CrystalSymmetry::*;
        match self {
            Cubic => &[E1_E4],
            Hexagonal | TrigonalHigh | TrigonalLow => &[E1, E3_E4],
            TetragonalHigh | TetragonalLow => &[E1_E4, E3_E6],
            Orthorhombic => &[E1_E4, E2_E5, E3_E6],
            Monoclinic => &[E1_E4, E2_E5, E3_E6, E5],
            Triclinic => &[E1, E2, E3, E4, E5, E6],
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    const ALL: [CrystalSymmetry; 9] = [
        CrystalSymmetry::Triclinic,
        CrystalSymmetry::Monoclinic,
        CrystalSymmetry::Orthorhombic,
        CrystalSymmetry::TetragonalHigh,
        CrystalSymmetry::TetragonalLow,
        CrystalSymmetry::TrigonalHigh,
        CrystalSymmetry::TrigonalLow,
        CrystalSymmetry::Hexagonal,
        CrystalSymmetry::Cubic,
    ];

    #[test]
    fn independent_constant_counts() {
        let expected = [21, 13, 9, 6, 7, 6, 7, 5, 3];
        for (&symmetry, &count) in ALL.iter().zip(&expected) {
            assert_eq!(symmetry.num_independent(), count, "{:?}", symmetry);
        }
    }

    #[test]
    fn patterns_are_symmetric() {
        for &symmetry in &ALL {
            let pattern = symmetry.pattern();
            for i in 0..6 {
                for j in 0..6 {
                    assert_eq!(
                        pattern.terms(i, j), pattern.terms(j, i),
                        "{:?} at ({}, {})", symmetry, i, j,
                    );
                }
            }
        }
    }

    #[test]
    fn every_parameter_appears() {
        for &symmetry in &ALL {
            let pattern = symmetry.pattern();
            let mut seen = vec![false; pattern.num_params()];
            for i in 0..6 {
                for j in 0..6 {
                    for (t, _) in pattern.terms(i, j) {
                        seen[t] = true;
                    }
                }
            }
            assert!(seen.iter().all(|&s| s), "{:?}", symmetry);
        }
    }

    #[test]
    fn parse_tags() {
        assert_eq!("cubic".parse::<CrystalSymmetry>().unwrap(), CrystalSymmetry::Cubic);
        assert_eq!(
            "tetragonal".parse::<CrystalSymmetry>().unwrap(),
            CrystalSymmetry::TetragonalHigh,
        );
        let err = "rhombic".parse::<CrystalSymmetry>().unwrap_err();
        assert_eq!(err.tag, "rhombic");
    }
}
