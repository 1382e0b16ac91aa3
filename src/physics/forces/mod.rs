//! Force laws and their composition
//!
//! A [`Force`] maps the current state of every body to the acceleration of
//! one of them. Laws compose by summation ([`Force::combine`] or `+`) and can
//! be switched off for chosen bodies ([`Force::masked`]). Sums are always
//! flat: combining a sum splices its members instead of nesting it.

pub mod hooke;

pub use hooke::{Hooke, Spring};

use crate::physics::body::Body;
use crate::physics::math::Vector;
use std::fmt;
use std::ops::Add;

/// User-supplied acceleration law
///
/// Any `Fn(&[Body], usize) -> Vector` closure that is `Send + Sync`
/// implements this trait.
pub trait AccelerationField: Send + Sync {
    fn acceleration(&self, bodies: &[Body], index: usize) -> Vector;
}

impl<F> AccelerationField for F
where
    F: Fn(&[Body], usize) -> Vector + Send + Sync,
{
    fn acceleration(&self, bodies: &[Body], index: usize) -> Vector {
        self(bodies, index)
    }
}

impl fmt::Debug for dyn AccelerationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccelerationField")
    }
}

#[derive(Debug)]
pub enum Force {
    /// Sum of several laws, never containing another sum
    Sum(SumForce),
    /// A law that is zero for a set of bodies
    Masked(MaskedForce),
    /// Spring network
    Hooke(Hooke),
    /// The same force on every body, scaled by inverse mass
    Constant(Vector),
    Custom(Box<dyn AccelerationField>),
}

/// Flat list of summed laws, built by [`Force::combine`]
#[derive(Debug, Default)]
pub struct SumForce {
    members: Vec<Force>,
}

impl SumForce {
    pub fn members(&self) -> &[Force] {
        &self.members
    }
}

/// Wrapped law plus the body indices it skips, built by [`Force::masked`]
#[derive(Debug)]
pub struct MaskedForce {
    force: Box<Force>,
    excluded: Vec<usize>,
}

impl MaskedForce {
    pub fn inner(&self) -> &Force {
        &self.force
    }

    pub fn excluded(&self) -> &[usize] {
        &self.excluded
    }

    pub fn is_excluded(&self, index: usize) -> bool {
        self.excluded.contains(&index)
    }
}

impl Force {
    /// Sum of `forces`, splicing in the members of any argument that is
    /// itself a sum. An empty sum is the zero force.
    pub fn combine(forces: impl IntoIterator<Item = Force>) -> Force {
        let mut members = Vec::new();
        for force in forces {
            match force {
                Force::Sum(sum) => members.extend(sum.members),
                other => members.push(other),
            }
        }
        Force::Sum(SumForce { members })
    }

    /// `force` for every body except the `excluded` ones, which get zero
    /// without `force` being evaluated.
    pub fn masked(force: Force, excluded: impl IntoIterator<Item = usize>) -> Force {
        Force::Masked(MaskedForce {
            force: Box::new(force),
            excluded: excluded.into_iter().collect(),
        })
    }

    pub fn constant(force: Vector) -> Force {
        Force::Constant(force)
    }

    pub fn custom(field: impl AccelerationField + 'static) -> Force {
        Force::Custom(Box::new(field))
    }

    /// Members of a sum, or the force itself for a single law
    pub fn terms(&self) -> &[Force] {
        match self {
            Force::Sum(sum) => &sum.members,
            other => std::slice::from_ref(other),
        }
    }

    /// Acceleration of `bodies[index]` given the current state of all bodies.
    ///
    /// Reads only the current slot of each body's history.
    pub fn acceleration(&self, bodies: &[Body], index: usize) -> Vector {
        match self {
            Force::Sum(sum) => sum
                .members
                .iter()
                .fold(Vector::ZERO, |total, force| {
                    total + force.acceleration(bodies, index)
                }),
            Force::Masked(masked) => {
                if masked.is_excluded(index) {
                    Vector::ZERO
                } else {
                    masked.force.acceleration(bodies, index)
                }
            }
            Force::Hooke(hooke) => hooke.acceleration(bodies, index),
            Force::Constant(force) => *force / bodies[index].mass(),
            Force::Custom(field) => field.acceleration(bodies, index),
        }
    }
}

impl Add for Force {
    type Output = Force;

    fn add(self, rhs: Force) -> Force {
        Force::combine([self, rhs])
    }
}

impl From<Hooke> for Force {
    fn from(hooke: Hooke) -> Self {
        Force::Hooke(hooke)
    }
}
