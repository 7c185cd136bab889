use crate::core::models::atom::Atom;
use crate::core::models::unit::MolecularUnit;
use itertools::Itertools;
use nalgebra::{Quaternion, Rotation3, UnitQuaternion, Vector3};
use std::f64::consts::TAU;

/// Three angles, in radians, for the elementary rotation sequence of [`rotate_elementary`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementaryAngles {
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

impl ElementaryAngles {
    /// Builds angles from three uniform samples in `[0, 1)`.
    pub fn from_unit_samples(u1: f64, u2: f64, u3: f64) -> Self {
        Self {
            first: u1 * TAU,
            second: u2 * TAU,
            third: u3 * TAU,
        }
    }
}

#[inline]
pub fn distance(a: &Atom, b: &Atom) -> f64 {
    (a.position - b.position).norm()
}

#[inline]
pub fn distance_squared(a: &Atom, b: &Atom) -> f64 {
    (a.position - b.position).norm_squared()
}

/// Rotates every atom of `unit` about the origin of its frame.
///
/// Each point is rotated about the x-axis by `angles.second`, then about the
/// y-axis by `angles.first`, then about the z-axis by `angles.third`. All three
/// axes are fixed-frame axes.
pub fn rotate_elementary(unit: &MolecularUnit, angles: &ElementaryAngles) -> MolecularUnit {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angles.second);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angles.first);
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), angles.third);

    unit.map_positions(|p| {
        let p = rx * p;
        let p = ry * p;
        rz * p
    })
}

/// Converts three uniform samples in `[0, 1)` into a uniformly distributed rotation.
///
/// Uses Shoemake's subgroup algorithm.
pub fn uniform_quaternion(u1: f64, u2: f64, u3: f64) -> UnitQuaternion<f64> {
    let a = (1.0 - u1).sqrt();
    let b = u1.sqrt();
    let (s2, c2) = (TAU * u2).sin_cos();
    let (s3, c3) = (TAU * u3).sin_cos();
    UnitQuaternion::new_normalize(Quaternion::new(b * c3, a * s2, a * c2, b * s3))
}

pub fn rotate_quaternion(unit: &MolecularUnit, rotation: &UnitQuaternion<f64>) -> MolecularUnit {
    unit.map_positions(|p| rotation * p)
}

pub fn translate(unit: &MolecularUnit, offset: &Vector3<f64>) -> MolecularUnit {
    MolecularUnit::new(unit.iter().map(|atom| atom.translated(offset)).collect())
}

/// Returns every pairwise intra-unit distance, in `(i, j)` order with `i < j`.
pub fn pairwise_distances(unit: &MolecularUnit) -> Vec<f64> {
    unit.iter()
        .tuple_combinations()
        .map(|(a, b)| distance(a, b))
        .collect()
}
