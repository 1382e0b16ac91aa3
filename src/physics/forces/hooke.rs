//! Pairwise Hooke spring networks

use crate::error::SimulationError;
use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector, unit_and_norm};

/// Spring constant and rest length of one ordered pair of bodies
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spring {
    pub stiffness: Scalar,
    pub rest_length: Scalar,
}

impl Spring {
    /// No spring at all
    pub const NONE: Self = Self {
        stiffness: 0.0,
        rest_length: 0.0,
    };

    pub fn new(stiffness: Scalar, rest_length: Scalar) -> Self {
        Self {
            stiffness,
            rest_length,
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.stiffness != 0.0
    }
}

/// Springs between every ordered pair of `size` bodies
///
/// Body `i` is pulled along the unit vector towards body `j` with force
/// `K_ij * (|x_j - x_i| - L0_ij)`; a compressed spring pushes it away. The
/// summed force is divided by the mass of body `i`.
///
/// The matrix does not have to be symmetric, although a physical network has
/// `K_ij == K_ji`. [`Hooke::with_spring`] and [`Hooke::connect`] set both
/// directions at once. Springs from a body to itself are rejected.
///
/// Two coincident bodies have no direction between them, so a spring between
/// them contributes nothing regardless of its rest length.
#[derive(Debug, Clone, PartialEq)]
pub struct Hooke {
    size: usize,
    springs: Vec<Spring>,
}

impl Hooke {
    /// Network of `size` bodies with no springs.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            springs: vec![Spring::NONE; size * size],
        }
    }

    /// Build from a square matrix where `rows[i][j]` acts on body `i`.
    pub fn from_matrix(rows: Vec<Vec<Spring>>) -> Result<Self, SimulationError> {
        let size = rows.len();
        let mut springs = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SimulationError::SpringMatrixShape {
                    row: i,
                    len: row.len(),
                    expected: size,
                });
            }
            if row[i].is_connected() {
                return Err(SimulationError::SelfSpring(i));
            }
            springs.extend(row);
        }

        Ok(Self { size, springs })
    }

    /// Connect `i` and `j` symmetrically, returning self for chaining.
    pub fn with_spring(mut self, i: usize, j: usize, spring: Spring) -> Self {
        self.connect(i, j, spring);
        self
    }

    pub fn connect(&mut self, i: usize, j: usize, spring: Spring) {
        self.set_spring(i, j, spring);
        self.set_spring(j, i, spring);
    }

    /// Set the spring acting on `i` because of `j` only.
    pub fn set_spring(&mut self, i: usize, j: usize, spring: Spring) {
        assert!(
            i != j || !spring.is_connected(),
            "body {i} cannot be connected to itself by a spring"
        );
        let slot = self.slot(i, j);
        self.springs[slot] = spring;
    }

    pub fn spring(&self, i: usize, j: usize) -> Spring {
        self.springs[self.slot(i, j)]
    }

    /// Number of bodies the network is sized for
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of ordered pairs with a non-zero spring constant
    pub fn connection_count(&self) -> usize {
        self.springs.iter().filter(|s| s.is_connected()).count()
    }

    pub fn acceleration(&self, bodies: &[Body], index: usize) -> Vector {
        assert_eq!(
            bodies.len(),
            self.size,
            "spring network sized for {} bodies applied to {}",
            self.size,
            bodies.len()
        );

        let body = &bodies[index];
        let origin = body.now().position;
        let row = &self.springs[index * self.size..(index + 1) * self.size];

        let force = row
            .iter()
            .zip(bodies)
            .filter(|(spring, _)| spring.is_connected())
            .fold(Vector::ZERO, |force, (spring, other)| {
                let (direction, distance) = unit_and_norm(other.now().position - origin);
                force + direction * (spring.stiffness * (distance - spring.rest_length))
            });

        force / body.mass()
    }

    fn slot(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.size && j < self.size,
            "spring ({i}, {j}) out of range for a network of {} bodies",
            self.size
        );
        i * self.size + j
    }
}
